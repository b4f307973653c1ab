use arrow_array::types::Float64Type;
use arrow_array::Float64Array;

use crate::algorithm::geo::utils::linework_length;
use crate::algorithm::native::Unary;
use crate::array::GeometryArray;
use crate::scalar::Geometry;

/// Planar length of a geometry.
///
/// Polygons report their perimeter, including interior rings. Points have zero length.
pub trait Length {
    type Output;

    fn length(&self) -> Self::Output;
}

impl Length for Geometry {
    type Output = f64;

    fn length(&self) -> f64 {
        linework_length(self.as_geo())
    }
}

impl Length for GeometryArray {
    type Output = Float64Array;

    fn length(&self) -> Float64Array {
        self.unary_primitive::<_, Float64Type>(|geom| geom.length())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geoms;
    use approx::assert_relative_eq;

    #[test]
    fn lengths() {
        let lengths = geoms::all_types().length();
        assert_relative_eq!(lengths.value(0), 0.0);
        assert_relative_eq!(lengths.value(1), 2.0);
        assert_relative_eq!(lengths.value(2), 4.0);
        assert_relative_eq!(lengths.value(3), 8.0);
        assert_relative_eq!(lengths.value(5), 5.0_f64.sqrt());
        assert_relative_eq!(lengths.value(6), 4.4);
    }

    #[test]
    fn collection_sums_parts() {
        let expected = (18.0_f64).sqrt();
        assert_relative_eq!(geoms::geometry_collection().length(), expected);
    }
}
