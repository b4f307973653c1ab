use std::f64::consts::PI;

use arrow_array::types::Float64Type;
use geo::{BooleanOps as _BooleanOps, ConvexHull};
use serde::{Deserialize, Serialize};

use crate::algorithm::broadcasting::{BroadcastableGeometry, BroadcastablePrimitive};
use crate::algorithm::geo::boolean_ops::{cascaded_union, from_multi_polygon};
use crate::algorithm::geo::utils::{components, Component};
use crate::algorithm::native::binary::try_binary;
use crate::array::GeometryArray;
use crate::error::Result;
use crate::scalar::Geometry;

/// Options controlling the shape of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferOptions {
    /// The number of segments used to approximate a quarter circle.
    pub quad_segs: usize,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self { quad_segs: 16 }
    }
}

/// The area within a distance of a geometry, with round caps and joins.
///
/// A positive radius grows the geometry; a negative radius erodes polygons and gives an empty
/// Polygon for points and lines. A zero radius returns polygons unchanged and gives an empty
/// Polygon for anything else. The result is two-dimensional.
///
/// # Examples
///
/// ```
/// use geovec::algorithm::geo::{Area, Buffer, BufferOptions};
/// use geovec::scalar::Geometry;
///
/// let point = Geometry::point([0.0, 0.0]).unwrap();
/// let circle = point.buffer(1.0, &BufferOptions::default()).unwrap();
///
/// assert!((circle.area().value(0) - std::f64::consts::PI).abs() < 0.01);
/// ```
pub trait Buffer {
    fn buffer(
        &self,
        radius: impl Into<BroadcastablePrimitive<Float64Type>>,
        options: &BufferOptions,
    ) -> Result<GeometryArray>;
}

fn circle(center: geo::Coord, radius: f64, quad_segs: usize) -> Vec<geo::Coord> {
    let n = 4 * quad_segs.max(1);
    (0..n)
        .map(|i| {
            let angle = 2.0 * PI * (i as f64) / (n as f64);
            geo::coord! { x: center.x + radius * angle.cos(), y: center.y + radius * angle.sin() }
        })
        .collect()
}

fn disc(center: geo::Coord, radius: f64, quad_segs: usize) -> geo::Polygon {
    geo::Polygon::new(circle(center, radius, quad_segs).into(), vec![])
}

fn capsule(line: geo::Line, radius: f64, quad_segs: usize) -> geo::Polygon {
    if line.start == line.end {
        return disc(line.start, radius, quad_segs);
    }
    let mut points = circle(line.start, radius, quad_segs);
    points.extend(circle(line.end, radius, quad_segs));
    geo::MultiPoint::from(points).convex_hull()
}

fn collect_polygons(geom: &geo::Geometry, out: &mut Vec<geo::Polygon>) {
    match geom {
        geo::Geometry::Polygon(poly) if !poly.exterior().0.is_empty() => out.push(poly.clone()),
        geo::Geometry::MultiPolygon(mp) => out.extend(
            mp.iter()
                .filter(|poly| !poly.exterior().0.is_empty())
                .cloned(),
        ),
        geo::Geometry::GeometryCollection(gc) => {
            gc.iter().for_each(|g| collect_polygons(g, out))
        }
        _ => (),
    }
}

pub(crate) fn buffer_geometry(geom: &Geometry, radius: f64, options: &BufferOptions) -> Geometry {
    let mut polygons = vec![];
    collect_polygons(geom.as_geo(), &mut polygons);
    let area = geo::MultiPolygon::new(polygons);

    if geom.is_empty() || radius.is_nan() {
        return Geometry::empty_polygon();
    }
    if radius == 0.0 {
        if area.0.is_empty() {
            log::trace!("zero-width buffer of a {} is empty", geom.geom_type());
        }
        return from_multi_polygon(area);
    }

    let width = radius.abs();
    let pieces = components(geom.as_geo())
        .into_iter()
        .map(|component| match component {
            Component::Point(p) => disc(p.0, width, options.quad_segs),
            Component::Segment(line) => capsule(line, width, options.quad_segs),
        })
        .map(|poly| geo::MultiPolygon::new(vec![poly]))
        .collect();
    let linework = cascaded_union(pieces);

    let result = if radius < 0.0 {
        if area.0.is_empty() {
            geo::MultiPolygon::new(vec![])
        } else {
            area.difference(&linework)
        }
    } else if area.0.is_empty() {
        linework
    } else {
        area.union(&linework)
    };
    from_multi_polygon(result)
}

fn buffer_impl(
    geom: BroadcastableGeometry,
    radius: BroadcastablePrimitive<Float64Type>,
    options: &BufferOptions,
) -> Result<GeometryArray> {
    let buffered = try_binary(&geom, &radius, |geom, radius| {
        Ok(Some(buffer_geometry(geom, radius, options)))
    })?;
    Ok(buffered.into())
}

impl Buffer for Geometry {
    fn buffer(
        &self,
        radius: impl Into<BroadcastablePrimitive<Float64Type>>,
        options: &BufferOptions,
    ) -> Result<GeometryArray> {
        buffer_impl(self.into(), radius.into(), options)
    }
}

impl Buffer for GeometryArray {
    fn buffer(
        &self,
        radius: impl Into<BroadcastablePrimitive<Float64Type>>,
        options: &BufferOptions,
    ) -> Result<GeometryArray> {
        buffer_impl(self.into(), radius.into(), options)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::geo::{Area, Equals};
    use crate::algorithm::native::NumCoordinates;
    use crate::datatypes::GeometryType;
    use crate::test::geoms;
    use approx::assert_relative_eq;

    #[test]
    fn point_area_close_to_circle() {
        let point = Geometry::point([0.0, 0.0]).unwrap();
        let options = BufferOptions { quad_segs: 16 };
        let areas = point.buffer(vec![1.0, 2.0], &options).unwrap().area();
        for (i, radius) in [1.0_f64, 2.0].into_iter().enumerate() {
            assert_relative_eq!(areas.value(i), PI * radius * radius, max_relative = 0.01);
        }
    }

    #[test]
    fn quad_segs_sets_vertex_count() {
        let point = Geometry::point([0.0, 0.0]).unwrap();
        let options = BufferOptions { quad_segs: 2 };
        let buffered = point.buffer(1.0, &options).unwrap();
        assert_eq!(buffered.get(0).unwrap().geom_type(), GeometryType::Polygon);
        assert_eq!(buffered.get_num_coordinates().value(0), 9);
    }

    #[test]
    fn line_buffer() {
        let line = Geometry::line_string(&[[0.0, 0.0], [10.0, 0.0]]).unwrap();
        let buffered = line.buffer(1.0, &BufferOptions::default()).unwrap();
        assert_relative_eq!(
            buffered.area().value(0),
            20.0 + PI,
            max_relative = 0.01
        );
    }

    #[test]
    fn negative_radius_erodes_polygons() {
        let square = Geometry::rect(0.0, 0.0, 10.0, 10.0);
        let eroded = square.buffer(-1.0, &BufferOptions::default()).unwrap();
        assert_relative_eq!(eroded.area().value(0), 64.0, max_relative = 0.01);

        let line = geoms::line_string();
        let eroded = line.buffer(-1.0, &BufferOptions::default()).unwrap();
        assert!(eroded.get(0).unwrap().is_empty());
    }

    #[test]
    fn zero_radius() {
        let buffered = geoms::polygon().buffer(0.0, &BufferOptions::default()).unwrap();
        assert!(buffered.get(0).unwrap().equals(&geoms::polygon()));

        let buffered = geoms::point().buffer(0.0, &BufferOptions::default()).unwrap();
        assert!(buffered.get(0).unwrap().is_empty());
    }

    #[test]
    fn options_from_json() {
        let options: BufferOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, BufferOptions::default());
        let options: BufferOptions = serde_json::from_str(r#"{"quad_segs": 8}"#).unwrap();
        assert_eq!(options.quad_segs, 8);
    }
}
