use geo::Centroid as _Centroid;

use crate::algorithm::native::Unary;
use crate::array::GeometryArray;
use crate::scalar::Geometry;

/// Calculation of the centroid.
/// The centroid is the arithmetic mean position of all points in the shape.
/// Informally, it is the point at which a cutout of the shape could be perfectly
/// balanced on the tip of a pin.
/// The geometric centroid of a convex object always lies in the object.
/// A non-convex object might have a centroid that _is outside the object itself_.
///
/// Only the highest-dimensional parts of a collection contribute. Empty geometries have no
/// centroid and give null. The result is always two-dimensional.
///
/// # Examples
///
/// ```
/// use geovec::algorithm::geo::Centroid;
/// use geovec::scalar::Geometry;
///
/// // rhombus shaped polygon
/// let polygon = Geometry::polygon(&[[-2., 1.], [1., 3.], [4., 1.], [1., -1.]]).unwrap();
///
/// assert_eq!(polygon.get_centroid(), Some(Geometry::point([1., 1.]).unwrap()));
/// ```
pub trait Centroid {
    type Output;

    fn get_centroid(&self) -> Self::Output;
}

impl Centroid for Geometry {
    type Output = Option<Geometry>;

    fn get_centroid(&self) -> Self::Output {
        if self.is_empty() {
            return None;
        }
        self.as_geo().centroid().map(Geometry::from)
    }
}

impl Centroid for GeometryArray {
    type Output = GeometryArray;

    fn get_centroid(&self) -> Self::Output {
        self.unary_geometry(|geom| geom.get_centroid())
    }
}
