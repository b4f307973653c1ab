use arrow_array::types::Float64Type;
use arrow_array::BooleanArray;
use geo::{CoordsIter, EuclideanDistance};

use crate::algorithm::broadcasting::{BroadcastableGeometry, BroadcastablePrimitive};
use crate::algorithm::native::binary::try_ternary;
use crate::array::GeometryArray;
use crate::error::Result;
use crate::scalar::Geometry;

/// Whether two geometries have the same type and structure, and each pair of corresponding
/// coordinates lies within `tolerance` of each other in the plane.
///
/// Unlike [`Equals`][crate::algorithm::geo::Equals] this is sensitive to vertex order and
/// starting point.
pub trait EqualsExact<Rhs = Self> {
    fn equals_exact(
        &self,
        rhs: &Rhs,
        tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
    ) -> Result<BooleanArray>;
}

pub(crate) fn equals_exact(a: &Geometry, b: &Geometry, tolerance: f64) -> bool {
    a.geom_type() == b.geom_type()
        && same_structure(a.as_geo(), b.as_geo())
        && a
            .as_geo()
            .coords_iter()
            .zip(b.as_geo().coords_iter())
            .all(|(ca, cb)| geo::Point(ca).euclidean_distance(&geo::Point(cb)) <= tolerance)
}

fn same_structure(a: &geo::Geometry, b: &geo::Geometry) -> bool {
    use geo::Geometry::*;

    let same_line = |a: &geo::LineString, b: &geo::LineString| a.0.len() == b.0.len();
    let same_polygon = |a: &geo::Polygon, b: &geo::Polygon| {
        same_line(a.exterior(), b.exterior())
            && a.interiors().len() == b.interiors().len()
            && a.interiors()
                .iter()
                .zip(b.interiors())
                .all(|(a, b)| same_line(a, b))
    };
    match (a, b) {
        (Point(_), Point(_)) => true,
        (LineString(a), LineString(b)) => same_line(a, b),
        (Polygon(a), Polygon(b)) => same_polygon(a, b),
        (MultiPoint(a), MultiPoint(b)) => a.0.len() == b.0.len(),
        (MultiLineString(a), MultiLineString(b)) => {
            a.0.len() == b.0.len() && a.iter().zip(b).all(|(a, b)| same_line(a, b))
        }
        (MultiPolygon(a), MultiPolygon(b)) => {
            a.0.len() == b.0.len() && a.iter().zip(b).all(|(a, b)| same_polygon(a, b))
        }
        (GeometryCollection(a), GeometryCollection(b)) => {
            a.0.len() == b.0.len() && a.iter().zip(b).all(|(a, b)| same_structure(a, b))
        }
        _ => false,
    }
}

fn equals_exact_impl(
    a: BroadcastableGeometry,
    b: BroadcastableGeometry,
    tolerance: BroadcastablePrimitive<Float64Type>,
) -> Result<BooleanArray> {
    let values = try_ternary(&a, &b, &tolerance, |a, b, tolerance| {
        Ok(Some(equals_exact(a, b, tolerance)))
    })?;
    Ok(BooleanArray::from(values))
}

impl EqualsExact for Geometry {
    fn equals_exact(
        &self,
        rhs: &Self,
        tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
    ) -> Result<BooleanArray> {
        equals_exact_impl(self.into(), rhs.into(), tolerance.into())
    }
}

impl EqualsExact<GeometryArray> for Geometry {
    fn equals_exact(
        &self,
        rhs: &GeometryArray,
        tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
    ) -> Result<BooleanArray> {
        equals_exact_impl(self.into(), rhs.into(), tolerance.into())
    }
}

impl EqualsExact<Geometry> for GeometryArray {
    fn equals_exact(
        &self,
        rhs: &Geometry,
        tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
    ) -> Result<BooleanArray> {
        equals_exact_impl(self.into(), rhs.into(), tolerance.into())
    }
}

impl EqualsExact for GeometryArray {
    fn equals_exact(
        &self,
        rhs: &Self,
        tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
    ) -> Result<BooleanArray> {
        equals_exact_impl(self.into(), rhs.into(), tolerance.into())
    }
}
