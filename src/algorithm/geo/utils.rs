use geo::EuclideanLength;
use itertools::Itertools;

use crate::error::{GeoVecError, Result};
use crate::scalar::Geometry;

/// A zero- or one-dimensional piece of a geometry's linework.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Component {
    Point(geo::Point),
    Segment(geo::Line),
}

fn push_line(line: &geo::LineString, out: &mut Vec<Component>) {
    if line.0.len() == 1 {
        out.push(Component::Point(geo::Point(line.0[0])));
    }
    out.extend(
        line.0
            .iter()
            .tuple_windows()
            .map(|(a, b)| Component::Segment(geo::Line::new(*a, *b))),
    );
}

/// Points and segments making up the boundary and linework of a geometry.
///
/// Polygon interiors are not included.
pub(crate) fn components(geom: &geo::Geometry) -> Vec<Component> {
    let mut out = vec![];
    collect_components(geom, &mut out);
    out
}

fn collect_components(geom: &geo::Geometry, out: &mut Vec<Component>) {
    match geom {
        geo::Geometry::Point(p) => out.push(Component::Point(*p)),
        geo::Geometry::MultiPoint(mp) => out.extend(mp.iter().copied().map(Component::Point)),
        geo::Geometry::Line(line) => out.push(Component::Segment(*line)),
        geo::Geometry::LineString(line) => push_line(line, out),
        geo::Geometry::MultiLineString(mls) => mls.iter().for_each(|line| push_line(line, out)),
        geo::Geometry::Polygon(poly) => polygon_rings(poly).for_each(|ring| push_line(ring, out)),
        geo::Geometry::MultiPolygon(mp) => mp
            .iter()
            .flat_map(polygon_rings)
            .for_each(|ring| push_line(ring, out)),
        geo::Geometry::Rect(rect) => push_line(rect.to_polygon().exterior(), out),
        geo::Geometry::Triangle(triangle) => push_line(triangle.to_polygon().exterior(), out),
        geo::Geometry::GeometryCollection(gc) => {
            gc.iter().for_each(|g| collect_components(g, out))
        }
    }
}

pub(crate) fn polygon_rings(poly: &geo::Polygon) -> impl Iterator<Item = &geo::LineString> {
    std::iter::once(poly.exterior()).chain(poly.interiors())
}

/// The lines of a LineString, LinearRing or MultiLineString, in order.
pub(crate) fn lineal_parts(geom: &Geometry) -> Result<Vec<&geo::LineString>> {
    match geom.as_geo() {
        geo::Geometry::LineString(line) => Ok(vec![line]),
        geo::Geometry::MultiLineString(mls) => Ok(mls.iter().collect()),
        _ => Err(GeoVecError::IncorrectGeometryType(format!(
            "expected a LineString, LinearRing or MultiLineString, got {}",
            geom.geom_type()
        ))),
    }
}

/// Planar length of the linework of a geometry; polygons contribute their ring lengths.
pub(crate) fn linework_length(geom: &geo::Geometry) -> f64 {
    match geom {
        geo::Geometry::Point(_) | geo::Geometry::MultiPoint(_) => 0.0,
        geo::Geometry::Line(line) => line.euclidean_length(),
        geo::Geometry::LineString(line) => line.euclidean_length(),
        geo::Geometry::MultiLineString(mls) => mls.euclidean_length(),
        geo::Geometry::Polygon(poly) => polygon_rings(poly).map(|r| r.euclidean_length()).sum(),
        geo::Geometry::MultiPolygon(mp) => mp
            .iter()
            .flat_map(polygon_rings)
            .map(|r| r.euclidean_length())
            .sum(),
        geo::Geometry::Rect(rect) => rect.to_polygon().exterior().euclidean_length(),
        geo::Geometry::Triangle(triangle) => triangle.to_polygon().exterior().euclidean_length(),
        geo::Geometry::GeometryCollection(gc) => gc.iter().map(linework_length).sum(),
    }
}

/// A copy of `geom` without empty parts, at any depth, or `None` if nothing is left.
///
/// `geo`'s relate and distance algorithms expect every line string to have at least two
/// coordinates.
pub(crate) fn without_empty_parts(geom: &geo::Geometry) -> Option<geo::Geometry> {
    fn polygon(poly: &geo::Polygon) -> Option<geo::Polygon> {
        if poly.exterior().0.is_empty() {
            return None;
        }
        let interiors = poly
            .interiors()
            .iter()
            .filter(|ring| !ring.0.is_empty())
            .cloned()
            .collect();
        Some(geo::Polygon::new(poly.exterior().clone(), interiors))
    }

    match geom {
        geo::Geometry::LineString(line) if line.0.len() < 2 => None,
        geo::Geometry::MultiPoint(mp) if mp.0.is_empty() => None,
        geo::Geometry::MultiLineString(mls) => {
            let lines: Vec<_> = mls.iter().filter(|line| line.0.len() > 1).cloned().collect();
            (!lines.is_empty()).then(|| geo::MultiLineString::new(lines).into())
        }
        geo::Geometry::Polygon(poly) => polygon(poly).map(geo::Geometry::Polygon),
        geo::Geometry::MultiPolygon(mp) => {
            let polygons: Vec<_> = mp.iter().filter_map(polygon).collect();
            (!polygons.is_empty()).then(|| geo::MultiPolygon::new(polygons).into())
        }
        geo::Geometry::GeometryCollection(gc) => {
            let parts: Vec<_> = gc.iter().filter_map(without_empty_parts).collect();
            (!parts.is_empty()).then(|| {
                geo::Geometry::GeometryCollection(geo::GeometryCollection::new_from(parts))
            })
        }
        other => Some(other.clone()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geoms;
    use approx::assert_relative_eq;

    #[test]
    fn polygon_components_are_ring_segments() {
        let components = components(geoms::polygon().as_geo());
        assert_eq!(components.len(), 4);
        assert!(components
            .iter()
            .all(|c| matches!(c, Component::Segment(_))));
    }

    #[test]
    fn lengths() {
        assert_relative_eq!(linework_length(geoms::polygon().as_geo()), 8.0);
        assert_relative_eq!(linework_length(geoms::line_string().as_geo()), 2.0);
        assert_relative_eq!(linework_length(geoms::multi_point().as_geo()), 0.0);
    }

    #[test]
    fn empty_parts_are_dropped() {
        let mls = Geometry::multi_line_string(&[
            geoms::line_string(),
            Geometry::line_string::<[f64; 2]>(&[]).unwrap(),
        ])
        .unwrap();
        match without_empty_parts(mls.as_geo()) {
            Some(geo::Geometry::MultiLineString(stripped)) => assert_eq!(stripped.0.len(), 1),
            other => panic!("unexpected {other:?}"),
        }

        let gc = Geometry::geometry_collection(&[
            Geometry::empty_polygon(),
            Geometry::line_string::<[f64; 2]>(&[]).unwrap(),
        ])
        .unwrap();
        assert!(without_empty_parts(gc.as_geo()).is_none());
        assert!(without_empty_parts(geoms::point().as_geo()).is_some());
    }

    #[test]
    fn lineal_parts_rejects_polygons() {
        assert_eq!(lineal_parts(&geoms::multi_line_string()).unwrap().len(), 1);
        assert!(lineal_parts(&geoms::polygon()).is_err());
    }
}
