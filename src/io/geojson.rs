//! GeoJSON geometry objects.
//!
//! Z values are carried as the third element of each position. LinearRings are written as
//! LineStrings, since GeoJSON has no ring type, and empty geometries are written with empty
//! coordinate lists.

use geojson::Value;

use crate::array::GeometryArray;
use crate::error::{GeoVecError, Result};
use crate::io::ZCursor;
use crate::scalar::Geometry;

fn position(coord: geo::Coord, cursor: &mut ZCursor) -> Vec<f64> {
    match cursor.next_z() {
        Some(z) => vec![coord.x, coord.y, z],
        None => vec![coord.x, coord.y],
    }
}

fn line_positions(line: &geo::LineString, cursor: &mut ZCursor) -> Vec<Vec<f64>> {
    line.0.iter().map(|c| position(*c, cursor)).collect()
}

fn polygon_positions(poly: &geo::Polygon, cursor: &mut ZCursor) -> Vec<Vec<Vec<f64>>> {
    if poly.exterior().0.is_empty() {
        return vec![];
    }
    std::iter::once(poly.exterior())
        .chain(poly.interiors())
        .map(|ring| line_positions(ring, cursor))
        .collect()
}

fn to_value(geom: &Geometry) -> Value {
    let mut cursor = ZCursor::new(geom.z_values());
    match geom.as_geo() {
        geo::Geometry::Point(p) => Value::Point(position(p.0, &mut cursor)),
        geo::Geometry::LineString(line) => Value::LineString(line_positions(line, &mut cursor)),
        geo::Geometry::Polygon(poly) => Value::Polygon(polygon_positions(poly, &mut cursor)),
        geo::Geometry::MultiPoint(mp) => Value::MultiPoint(
            mp.iter().map(|p| position(p.0, &mut cursor)).collect(),
        ),
        geo::Geometry::MultiLineString(mls) => Value::MultiLineString(
            mls.iter()
                .map(|line| line_positions(line, &mut cursor))
                .collect(),
        ),
        geo::Geometry::MultiPolygon(mp) => Value::MultiPolygon(
            mp.iter()
                .map(|poly| polygon_positions(poly, &mut cursor))
                .collect(),
        ),
        _ => Value::GeometryCollection(
            geom.parts()
                .iter()
                .map(|part| geojson::Geometry::new(to_value(part)))
                .collect(),
        ),
    }
}

fn from_value(value: &Value) -> Result<Geometry> {
    match value {
        Value::Point(position) => Geometry::point(position),
        Value::MultiPoint(positions) => {
            let points = positions
                .iter()
                .map(Geometry::point)
                .collect::<Result<Vec<_>>>()?;
            Geometry::multi_point(&points)
        }
        Value::LineString(positions) => Geometry::line_string(positions.as_slice()),
        Value::MultiLineString(lines) => {
            let lines = lines
                .iter()
                .map(|line| Geometry::line_string(line.as_slice()))
                .collect::<Result<Vec<_>>>()?;
            Geometry::multi_line_string(&lines)
        }
        Value::Polygon(rings) => polygon_from_rings(rings.as_slice()),
        Value::MultiPolygon(polygons) => {
            let polygons = polygons
                .iter()
                .map(|rings| polygon_from_rings(rings.as_slice()))
                .collect::<Result<Vec<_>>>()?;
            Geometry::multi_polygon(&polygons)
        }
        Value::GeometryCollection(geoms) => {
            let geoms = geoms
                .iter()
                .map(|geom| from_value(&geom.value))
                .collect::<Result<Vec<_>>>()?;
            Geometry::geometry_collection(&geoms)
        }
    }
}

fn polygon_from_rings(rings: &[Vec<Vec<f64>>]) -> Result<Geometry> {
    match rings.split_first() {
        Some((shell, holes)) => Geometry::polygon_with_holes(shell.as_slice(), holes),
        None => Ok(Geometry::empty_polygon()),
    }
}

impl TryFrom<&geojson::Geometry> for Geometry {
    type Error = GeoVecError;

    fn try_from(value: &geojson::Geometry) -> Result<Self> {
        from_value(&value.value)
    }
}

impl From<&Geometry> for geojson::Geometry {
    fn from(value: &Geometry) -> Self {
        geojson::Geometry::new(to_value(value))
    }
}

impl Geometry {
    /// Parse a GeoJSON geometry object, or the geometry of a GeoJSON Feature.
    ///
    /// ```
    /// use geovec::scalar::Geometry;
    ///
    /// let point = Geometry::from_geojson(r#"{"type": "Point", "coordinates": [1.0, 2.0, 3.0]}"#)
    ///     .unwrap();
    /// assert!(point.has_z());
    /// ```
    pub fn from_geojson(s: &str) -> Result<Self> {
        match s.parse::<geojson::GeoJson>()? {
            geojson::GeoJson::Geometry(geom) => Geometry::try_from(&geom),
            geojson::GeoJson::Feature(geojson::Feature {
                geometry: Some(geom),
                ..
            }) => Geometry::try_from(&geom),
            _ => Err(GeoVecError::General(
                "expected a GeoJSON Geometry or a Feature with a geometry".to_string(),
            )),
        }
    }

    /// Serialize as a GeoJSON geometry object.
    pub fn to_geojson(&self) -> String {
        geojson::Geometry::from(self).to_string()
    }
}

impl GeometryArray {
    /// Parse a JSON array of GeoJSON geometry objects, where `null` is a null slot.
    pub fn from_geojson(s: &str) -> Result<Self> {
        let geoms: Vec<Option<geojson::Geometry>> = serde_json::from_str(s)?;
        geoms
            .iter()
            .map(|maybe_g| maybe_g.as_ref().map(Geometry::try_from).transpose())
            .collect::<Result<Vec<_>>>()
            .map(GeometryArray::new)
    }

    /// Serialize as a JSON array of GeoJSON geometry objects, writing null slots as `null`.
    pub fn to_geojson(&self) -> Result<String> {
        let geoms: Vec<Option<geojson::Geometry>> = self
            .iter()
            .map(|maybe_g| maybe_g.map(geojson::Geometry::from))
            .collect();
        Ok(serde_json::to_string(&geoms)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::GeometryType;
    use crate::test::geoms;

    #[test]
    fn point_with_z() {
        let json = geoms::point_z().to_geojson();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "Point");
        assert_eq!(value["coordinates"], serde_json::json!([1.0, 1.0, 1.0]));
        assert_eq!(Geometry::from_geojson(&json).unwrap(), geoms::point_z());
    }

    #[test]
    fn every_type_survives() {
        let arr = geoms::all_types();
        let parsed = GeometryArray::from_geojson(&arr.to_geojson().unwrap()).unwrap();
        for i in 0..arr.len() {
            let expected = arr.get(i).unwrap();
            let actual = parsed.get(i).unwrap();
            if expected.geom_type() == GeometryType::LinearRing {
                assert_eq!(actual.geom_type(), GeometryType::LineString);
                assert_eq!(actual.as_geo(), expected.as_geo());
            } else {
                assert_eq!(actual, expected);
            }
        }
    }

    #[test]
    fn nulls_as_json_null() {
        let arr = GeometryArray::new(vec![None, Some(geoms::point())]);
        let json = arr.to_geojson().unwrap();
        assert!(json.starts_with("[null,"));
        let parsed = GeometryArray::from_geojson(&json).unwrap();
        assert_eq!(parsed, arr);
    }

    #[test]
    fn feature_geometry() {
        let json = r#"{
            "type": "Feature",
            "properties": {},
            "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 0], [1, 1]]}
        }"#;
        assert_eq!(Geometry::from_geojson(json).unwrap(), geoms::line_string());
    }

    #[test]
    fn invalid_input() {
        let json = r#"{"type": "Point", "coordinates": [1.0, 2.0, 3.0, 4.0]}"#;
        assert!(matches!(
            Geometry::from_geojson(json),
            Err(GeoVecError::InvalidDimension(4))
        ));
        assert!(Geometry::from_geojson("not json").is_err());
    }
}
