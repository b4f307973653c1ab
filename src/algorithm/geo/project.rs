//! Linear referencing: locating points along lineal geometries.
//!
//! The parts of a MultiLineString are walked in order, as if they were joined end to end.

use arrow_array::types::Float64Type;
use arrow_array::Float64Array;
use geo::{EuclideanDistance, EuclideanLength, LineInterpolatePoint, LineLocatePoint};

use crate::algorithm::broadcasting::{BroadcastableGeometry, BroadcastablePrimitive};
use crate::algorithm::geo::utils::lineal_parts;
use crate::algorithm::native::binary::try_binary;
use crate::array::GeometryArray;
use crate::error::{GeoVecError, Result};
use crate::scalar::Geometry;

/// Non-empty parts of a lineal geometry, each with its length.
fn measured_parts(line: &Geometry) -> Result<Vec<(&geo::LineString, f64)>> {
    Ok(lineal_parts(line)?
        .into_iter()
        .filter(|part| part.0.len() > 1)
        .map(|part| (part, part.euclidean_length()))
        .collect())
}

/// Distance along `line` of the point on it closest to `point`, and the total length.
fn locate(line: &Geometry, point: &Geometry) -> Result<(f64, f64)> {
    let parts = measured_parts(line)?;
    let p = match point.as_geo() {
        geo::Geometry::Point(p) => *p,
        _ => {
            return Err(GeoVecError::IncorrectGeometryType(format!(
                "expected a Point to project, got {}",
                point.geom_type()
            )))
        }
    };

    let mut best = f64::INFINITY;
    let mut along = f64::NAN;
    let mut walked = 0.0;
    for (part, len) in parts {
        let d = p.euclidean_distance(part);
        if d < best {
            best = d;
            let fraction = part.line_locate_point(&p).unwrap_or(0.0);
            along = walked + fraction * len;
        }
        walked += len;
    }
    Ok((along, walked))
}

fn interpolate_point(line: &Geometry, distance: f64, normalized: bool) -> Result<Option<Geometry>> {
    let parts = measured_parts(line)?;
    let Some((last, _)) = parts.last() else {
        return Ok(None);
    };
    let end = last.points().last();
    let total: f64 = parts.iter().map(|(_, len)| len).sum();

    let mut target = if normalized { distance * total } else { distance };
    if target < 0.0 {
        target += total;
    }
    let target = target.clamp(0.0, total);

    let mut walked = 0.0;
    for (part, len) in &parts {
        if walked + len >= target {
            let fraction = if *len > 0.0 { (target - walked) / len } else { 0.0 };
            return Ok(part.line_interpolate_point(fraction).map(Geometry::from));
        }
        walked += len;
    }
    Ok(end.map(Geometry::from))
}

/// Distance along a lineal geometry to the point on it closest to another point.
pub trait Project<Rhs = Self> {
    type Output;

    /// The distance is measured from the start of `self`.
    ///
    /// `self` must be a LineString, LinearRing or MultiLineString and `point` a Point; an empty
    /// line gives NaN.
    fn project(&self, point: &Rhs) -> Self::Output;

    /// As [`project`][Project::project], as a fraction of the total length of `self`.
    fn project_normalized(&self, point: &Rhs) -> Self::Output;
}

fn project_impl(
    line: BroadcastableGeometry,
    point: BroadcastableGeometry,
    normalized: bool,
) -> Result<Float64Array> {
    let values = try_binary(&line, &point, |line, point| {
        let (along, total) = locate(line, point)?;
        if normalized {
            Ok(Some(if total > 0.0 { along / total } else { along }))
        } else {
            Ok(Some(along))
        }
    })?;
    Ok(Float64Array::from(values))
}

impl Project for Geometry {
    type Output = Result<f64>;

    fn project(&self, point: &Self) -> Self::Output {
        Ok(locate(self, point)?.0)
    }

    fn project_normalized(&self, point: &Self) -> Self::Output {
        let (along, total) = locate(self, point)?;
        Ok(if total > 0.0 { along / total } else { along })
    }
}

impl Project<GeometryArray> for Geometry {
    type Output = Result<Float64Array>;

    fn project(&self, point: &GeometryArray) -> Self::Output {
        project_impl(self.into(), point.into(), false)
    }

    fn project_normalized(&self, point: &GeometryArray) -> Self::Output {
        project_impl(self.into(), point.into(), true)
    }
}

impl Project<Geometry> for GeometryArray {
    type Output = Result<Float64Array>;

    fn project(&self, point: &Geometry) -> Self::Output {
        project_impl(self.into(), point.into(), false)
    }

    fn project_normalized(&self, point: &Geometry) -> Self::Output {
        project_impl(self.into(), point.into(), true)
    }
}

impl Project for GeometryArray {
    type Output = Result<Float64Array>;

    fn project(&self, point: &Self) -> Self::Output {
        project_impl(self.into(), point.into(), false)
    }

    fn project_normalized(&self, point: &Self) -> Self::Output {
        project_impl(self.into(), point.into(), true)
    }
}

/// The point at a distance along a lineal geometry.
///
/// Negative distances are measured back from the end, and distances beyond either end are
/// clamped to it. With `normalized`, distances are fractions of the total length. An empty line
/// gives null. The result is two-dimensional.
pub trait Interpolate {
    fn interpolate(
        &self,
        distance: impl Into<BroadcastablePrimitive<Float64Type>>,
        normalized: bool,
    ) -> Result<GeometryArray>;
}

fn interpolate_impl(
    line: BroadcastableGeometry,
    distance: BroadcastablePrimitive<Float64Type>,
    normalized: bool,
) -> Result<GeometryArray> {
    let points = try_binary(&line, &distance, |line, distance| {
        interpolate_point(line, distance, normalized)
    })?;
    Ok(points.into())
}

impl Interpolate for Geometry {
    fn interpolate(
        &self,
        distance: impl Into<BroadcastablePrimitive<Float64Type>>,
        normalized: bool,
    ) -> Result<GeometryArray> {
        interpolate_impl(self.into(), distance.into(), normalized)
    }
}

impl Interpolate for GeometryArray {
    fn interpolate(
        &self,
        distance: impl Into<BroadcastablePrimitive<Float64Type>>,
        normalized: bool,
    ) -> Result<GeometryArray> {
        interpolate_impl(self.into(), distance.into(), normalized)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    fn diagonal() -> Geometry {
        Geometry::line_string(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]).unwrap()
    }

    #[test]
    fn project_points() {
        let points: GeometryArray = vec![
            Geometry::point([1.0, 0.0]).unwrap(),
            Geometry::point([3.0, 3.0]).unwrap(),
        ]
        .into();
        let actual = diagonal().project(&points).unwrap();
        assert_relative_eq!(actual.value(0), 2.0_f64.sqrt() / 2.0);
        assert_relative_eq!(actual.value(1), 2.0 * 2.0_f64.sqrt());
    }

    #[test]
    fn project_normalized() {
        let point = Geometry::point([1.0, 1.0]).unwrap();
        assert_relative_eq!(diagonal().project_normalized(&point).unwrap(), 0.5);
    }

    #[test]
    fn project_requires_lines_and_points() {
        let point = Geometry::point([1.0, 1.0]).unwrap();
        let square = Geometry::rect(0.0, 0.0, 1.0, 1.0);
        assert!(square.project(&point).is_err());
        assert!(diagonal().project(&square).is_err());
    }

    #[test]
    fn project_multi_line_string() {
        let mls = Geometry::multi_line_string(&[
            Geometry::line_string(&[[0.0, 0.0], [1.0, 0.0]]).unwrap(),
            Geometry::line_string(&[[5.0, 0.0], [5.0, 2.0]]).unwrap(),
        ])
        .unwrap();
        let point = Geometry::point([6.0, 1.0]).unwrap();
        assert_relative_eq!(mls.project(&point).unwrap(), 2.0);

        let along = mls.interpolate(vec![0.5, 2.5, 3.0], false).unwrap();
        assert_eq!(along.get(0), Some(&Geometry::point([0.5, 0.0]).unwrap()));
        assert_eq!(along.get(1), Some(&Geometry::point([5.0, 1.5]).unwrap()));
        assert_eq!(along.get(2), Some(&Geometry::point([5.0, 2.0]).unwrap()));
    }

    #[test]
    fn empty_parts_are_skipped() {
        let mls = Geometry::multi_line_string(&[
            Geometry::line_string::<[f64; 2]>(&[]).unwrap(),
            Geometry::line_string(&[[0.0, 0.0], [4.0, 0.0]]).unwrap(),
        ])
        .unwrap();
        let point = Geometry::point([3.0, 1.0]).unwrap();
        assert_relative_eq!(mls.project(&point).unwrap(), 3.0);
        assert_relative_eq!(mls.project_normalized(&point).unwrap(), 0.75);

        let empty = Geometry::line_string::<[f64; 2]>(&[]).unwrap();
        assert!(empty.project(&point).unwrap().is_nan());
    }

    #[test]
    fn interpolate_distances() {
        let line = Geometry::line_string(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0]]).unwrap();
        let actual = line.interpolate(vec![1.0, 3.0, -1.0, 10.0], false).unwrap();
        assert_eq!(actual.get(0), Some(&Geometry::point([1.0, 0.0]).unwrap()));
        assert_eq!(actual.get(1), Some(&Geometry::point([2.0, 1.0]).unwrap()));
        assert_eq!(actual.get(2), Some(&Geometry::point([2.0, 1.0]).unwrap()));
        assert_eq!(actual.get(3), Some(&Geometry::point([2.0, 2.0]).unwrap()));
    }

    #[test]
    fn interpolate_normalized() {
        let actual = diagonal().interpolate(0.5, true).unwrap();
        assert_eq!(actual.len(), 1);
        assert_eq!(actual.get(0), Some(&Geometry::point([1.0, 1.0]).unwrap()));
    }

    #[test]
    fn interpolate_empty_line() {
        let empty = Geometry::line_string::<[f64; 2]>(&[]).unwrap();
        assert!(empty.interpolate(1.0, false).unwrap().is_null(0));
    }
}
