//! Well-known text output.
//!
//! Coordinates are written with the shortest representation that round-trips, so `2.0` is
//! written as `2`. Three-dimensional geometries are tagged with `Z`, and geometries without
//! coordinates are written as `EMPTY`.

use std::fmt;

use itertools::Itertools;

use crate::datatypes::GeometryType;
use crate::io::ZCursor;
use crate::scalar::Geometry;

fn wkt_name(geom_type: GeometryType) -> &'static str {
    match geom_type {
        GeometryType::Point => "POINT",
        GeometryType::LineString => "LINESTRING",
        GeometryType::LinearRing => "LINEARRING",
        GeometryType::Polygon => "POLYGON",
        GeometryType::MultiPoint => "MULTIPOINT",
        GeometryType::MultiLineString => "MULTILINESTRING",
        GeometryType::MultiPolygon => "MULTIPOLYGON",
        GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
    }
}

fn coord_text(coord: geo::Coord, z: Option<f64>) -> String {
    match z {
        Some(z) => format!("{} {} {}", coord.x, coord.y, z),
        None => format!("{} {}", coord.x, coord.y),
    }
}

fn line_text(line: &geo::LineString, cursor: &mut ZCursor) -> String {
    format!(
        "({})",
        line.0.iter().map(|c| coord_text(*c, cursor.next_z())).join(", ")
    )
}

fn polygon_text(poly: &geo::Polygon, cursor: &mut ZCursor) -> String {
    let rings = std::iter::once(poly.exterior())
        .chain(poly.interiors())
        .map(|ring| line_text(ring, cursor))
        .join(", ");
    format!("({rings})")
}

/// The text following the type tag: either `EMPTY` or a parenthesized coordinate list.
fn body(geom: &Geometry) -> String {
    if geom.is_empty() {
        return "EMPTY".to_string();
    }

    let mut cursor = ZCursor::new(geom.z_values());
    match geom.as_geo() {
        geo::Geometry::Point(p) => format!("({})", coord_text(p.0, cursor.next_z())),
        geo::Geometry::LineString(line) => line_text(line, &mut cursor),
        geo::Geometry::Polygon(poly) => polygon_text(poly, &mut cursor),
        geo::Geometry::GeometryCollection(_) => {
            format!("({})", geom.parts().iter().map(|p| p.to_string()).join(", "))
        }
        _ => format!("({})", geom.parts().iter().map(body).join(", ")),
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(wkt_name(self.geom_type()))?;
        if self.has_z() {
            f.write_str(" Z")?;
        }
        write!(f, " {}", body(self))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geoms;

    #[test]
    fn single_geometries() {
        assert_eq!(geoms::point().to_string(), "POINT (2 2)");
        assert_eq!(geoms::point_z().to_string(), "POINT Z (1 1 1)");
        assert_eq!(geoms::line_string().to_string(), "LINESTRING (0 0, 1 0, 1 1)");
        assert_eq!(
            geoms::linear_ring().to_string(),
            "LINEARRING (0 0, 0 1, 1 1, 1 0, 0 0)"
        );
        assert_eq!(
            Geometry::rect(0.0, 0.0, 1.0, 1.0).to_string(),
            "POLYGON ((1 0, 1 1, 0 1, 0 0, 1 0))"
        );
    }

    #[test]
    fn multi_geometries() {
        assert_eq!(
            geoms::multi_point().to_string(),
            "MULTIPOINT ((0 0), (1 2))"
        );
        assert_eq!(
            geoms::multi_line_string().to_string(),
            "MULTILINESTRING ((0 0, 1 2))"
        );
        assert_eq!(
            geoms::geometry_collection().to_string(),
            "GEOMETRYCOLLECTION (POINT (51 -1), LINESTRING (52 -1, 49 2))"
        );
    }

    #[test]
    fn z_and_empty() {
        let line = Geometry::line_string(&[[0.0, 0.0, 1.5], [1.0, 0.0, 2.0]]).unwrap();
        assert_eq!(line.to_string(), "LINESTRING Z (0 0 1.5, 1 0 2)");
        assert_eq!(Geometry::empty_polygon().to_string(), "POLYGON EMPTY");
    }
}
