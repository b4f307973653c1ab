use arrow_array::BooleanArray;

use crate::algorithm::native::Unary;
use crate::array::GeometryArray;

/// Whether each geometry carries Z coordinates.
///
/// See [`Geometry::has_z`][crate::scalar::Geometry::has_z] for a single geometry.
pub trait HasZ {
    fn has_z(&self) -> BooleanArray;
}

impl HasZ for GeometryArray {
    fn has_z(&self) -> BooleanArray {
        self.unary_boolean(|geom| geom.has_z())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geoms;

    #[test]
    fn point_and_point_z() {
        let arr: GeometryArray = vec![geoms::point(), geoms::point_z()].into();
        assert_eq!(arr.has_z(), BooleanArray::from(vec![false, true]));
    }

    #[test]
    fn collection_with_a_z_part() {
        let gc = crate::scalar::Geometry::geometry_collection(&[geoms::point(), geoms::point_z()])
            .unwrap();
        let arr = GeometryArray::new(vec![Some(gc), None]);
        assert_eq!(arr.has_z(), BooleanArray::from(vec![Some(true), None]));
    }
}
