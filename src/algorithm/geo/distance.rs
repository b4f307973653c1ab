use arrow_array::Float64Array;
use geo::EuclideanDistance;

use crate::algorithm::broadcasting::BroadcastableGeometry;
use crate::algorithm::geo::utils::without_empty_parts;
use crate::algorithm::native::binary::binary;
use crate::array::GeometryArray;
use crate::error::Result;
use crate::scalar::Geometry;

/// Minimum planar distance between two geometries.
///
/// Intersecting geometries are at distance zero, including a point inside a polygon. The
/// distance to or from an empty geometry is NaN, and empty parts of multi geometries and
/// collections are ignored.
///
/// # Examples
///
/// ```
/// use geovec::algorithm::geo::Distance;
/// use geovec::scalar::Geometry;
///
/// let point = Geometry::point([0.0, 3.0]).unwrap();
/// let square = Geometry::rect(2.0, 2.0, 4.0, 4.0);
///
/// assert_eq!(point.distance(&square), 2.0);
/// ```
pub trait Distance<Rhs = Self> {
    type Output;

    fn distance(&self, rhs: &Rhs) -> Self::Output;
}

pub(crate) fn distance(a: &Geometry, b: &Geometry) -> f64 {
    match (without_empty_parts(a.as_geo()), without_empty_parts(b.as_geo())) {
        (Some(a), Some(b)) => a.euclidean_distance(&b),
        _ => f64::NAN,
    }
}

fn distance_impl(a: BroadcastableGeometry, b: BroadcastableGeometry) -> Result<Float64Array> {
    Ok(Float64Array::from(binary(&a, &b, distance)?))
}

impl Distance for Geometry {
    type Output = f64;

    fn distance(&self, rhs: &Self) -> f64 {
        distance(self, rhs)
    }
}

impl Distance<GeometryArray> for Geometry {
    type Output = Result<Float64Array>;

    fn distance(&self, rhs: &GeometryArray) -> Self::Output {
        distance_impl(self.into(), rhs.into())
    }
}

impl Distance<Geometry> for GeometryArray {
    type Output = Result<Float64Array>;

    fn distance(&self, rhs: &Geometry) -> Self::Output {
        distance_impl(self.into(), rhs.into())
    }
}

impl Distance for GeometryArray {
    type Output = Result<Float64Array>;

    fn distance(&self, rhs: &Self) -> Self::Output {
        distance_impl(self.into(), rhs.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geoms;
    use approx::assert_relative_eq;
    use arrow_array::Array;

    #[test]
    fn points_to_box() {
        let actual = geoms::diagonal_points().distance(&geoms::box_2_4()).unwrap();
        let sqrt2 = 2.0_f64.sqrt();
        let expected = [2.0 * sqrt2, sqrt2, 0.0, 0.0, 0.0, sqrt2];
        for (i, expected) in expected.into_iter().enumerate() {
            assert_relative_eq!(actual.value(i), expected);
        }
    }

    #[test]
    fn line_to_line() {
        let a = Geometry::line_string(&[[0.0, 0.0], [1.0, 0.0]]).unwrap();
        let b = Geometry::line_string(&[[2.0, 1.0], [2.0, 5.0]]).unwrap();
        assert_relative_eq!(a.distance(&b), 2.0_f64.sqrt());
    }

    #[test]
    fn polygon_in_hole() {
        let donut = Geometry::polygon_with_holes(
            &[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]],
            &[[[2.0, 2.0], [2.0, 8.0], [8.0, 8.0], [8.0, 2.0]]],
        )
        .unwrap();
        let point = Geometry::point([5.0, 5.0]).unwrap();
        assert_relative_eq!(donut.distance(&point), 3.0);
    }

    #[test]
    fn empty_parts_are_ignored() {
        let mls = Geometry::multi_line_string(&[
            Geometry::line_string::<[f64; 2]>(&[]).unwrap(),
            Geometry::line_string(&[[0.0, 3.0], [6.0, 3.0]]).unwrap(),
        ])
        .unwrap();
        assert_relative_eq!(mls.distance(&geoms::point()), 1.0);
    }

    #[test]
    fn long_parallel_lines() {
        let a: Vec<[f64; 2]> = (0..3000).map(|i| [i as f64, 0.0]).collect();
        let b: Vec<[f64; 2]> = (0..3000).map(|i| [i as f64, 5.0]).collect();
        let a = Geometry::line_string(&a).unwrap();
        let b = Geometry::line_string(&b).unwrap();
        assert_relative_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn empty_and_null() {
        let arr = GeometryArray::new(vec![Some(Geometry::empty_polygon()), None]);
        let actual = arr.distance(&geoms::point()).unwrap();
        assert!(actual.value(0).is_nan());
        assert!(actual.is_null(1));
    }
}
