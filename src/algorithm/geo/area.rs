use arrow_array::types::Float64Type;
use arrow_array::Float64Array;
use geo::Area as _Area;

use crate::algorithm::native::Unary;
use crate::array::GeometryArray;
use crate::scalar::Geometry;

/// Unsigned planar area of a geometry.
///
/// Points and lines have zero area; collections sum the area of their parts.
///
/// # Examples
///
/// ```
/// use geovec::algorithm::geo::Area;
/// use geovec::scalar::Geometry;
///
/// let polygon = Geometry::polygon(&[[0., 0.], [5., 0.], [5., 6.], [0., 6.]]).unwrap();
///
/// assert_eq!(polygon.area(), 30.);
/// ```
pub trait Area {
    type Output;

    fn area(&self) -> Self::Output;
}

impl Area for Geometry {
    type Output = f64;

    fn area(&self) -> f64 {
        self.as_geo().unsigned_area()
    }
}

impl Area for GeometryArray {
    type Output = Float64Array;

    fn area(&self) -> Float64Array {
        self.unary_primitive::<_, Float64Type>(|geom| geom.area())
    }
}
