use arrow_array::types::Float64Type;
use arrow_array::Float64Array;

use crate::algorithm::native::Unary;
use crate::array::GeometryArray;
use crate::scalar::Geometry;

/// Coordinate values of Point geometries.
///
/// Geometries that are not points give NaN, as does `get_z` on a point without Z.
pub trait GetCoordinate {
    type Output;

    fn get_x(&self) -> Self::Output;

    fn get_y(&self) -> Self::Output;

    fn get_z(&self) -> Self::Output;
}

fn point_xy(geom: &Geometry) -> Option<geo::Coord> {
    match geom.as_geo() {
        geo::Geometry::Point(point) => Some(point.0),
        _ => None,
    }
}

impl GetCoordinate for Geometry {
    type Output = f64;

    fn get_x(&self) -> f64 {
        point_xy(self).map_or(f64::NAN, |c| c.x)
    }

    fn get_y(&self) -> f64 {
        point_xy(self).map_or(f64::NAN, |c| c.y)
    }

    fn get_z(&self) -> f64 {
        match (point_xy(self), self.z_values()) {
            (Some(_), Some(z)) => z[0],
            _ => f64::NAN,
        }
    }
}

impl GetCoordinate for GeometryArray {
    type Output = Float64Array;

    fn get_x(&self) -> Float64Array {
        self.unary_primitive::<_, Float64Type>(|geom| geom.get_x())
    }

    fn get_y(&self) -> Float64Array {
        self.unary_primitive::<_, Float64Type>(|geom| geom.get_y())
    }

    fn get_z(&self) -> Float64Array {
        self.unary_primitive::<_, Float64Type>(|geom| geom.get_z())
    }
}
