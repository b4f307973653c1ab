use arrow_array::BooleanArray;

use crate::algorithm::native::Unary;
use crate::array::GeometryArray;

/// Whether each geometry has no coordinates.
///
/// See [`Geometry::is_empty`][crate::scalar::Geometry::is_empty] for a single geometry.
/// [`GeometryArray::is_empty`] is the length check on the array itself.
pub trait IsEmpty {
    fn is_empty_geoms(&self) -> BooleanArray;
}

impl IsEmpty for GeometryArray {
    fn is_empty_geoms(&self) -> BooleanArray {
        self.unary_boolean(|geom| geom.is_empty())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scalar::Geometry;
    use crate::test::geoms;

    #[test]
    fn empty_geometries() {
        let arr: GeometryArray = vec![
            geoms::point(),
            Geometry::empty_polygon(),
            Geometry::geometry_collection(&[]).unwrap(),
        ]
        .into();
        assert_eq!(
            arr.is_empty_geoms(),
            BooleanArray::from(vec![false, true, true])
        );
        assert!(!arr.is_empty());
    }
}
