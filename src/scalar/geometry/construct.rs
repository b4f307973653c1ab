//! Constructors for [`Geometry`] from coordinates and from other geometries.

use geo::{Coord, CoordsIter};

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeoVecError, Result};
use crate::scalar::Geometry;

/// Coordinates parsed from caller input: planar part plus optional Z.
#[derive(Debug, Default)]
struct ParsedCoords {
    dim: Option<Dimension>,
    xy: Vec<Coord>,
    z: Vec<f64>,
}

impl ParsedCoords {
    fn push(&mut self, coord: &[f64]) -> Result<()> {
        let dim = Dimension::try_from(coord.len())?;
        match self.dim {
            None => self.dim = Some(dim),
            Some(existing) if existing != dim => return Err(GeoVecError::MixedDimensions),
            Some(_) => (),
        }
        self.xy.push(Coord {
            x: coord[0],
            y: coord[1],
        });
        if dim == Dimension::XYZ {
            self.z.push(coord[2]);
        }
        Ok(())
    }

    fn extend<C: AsRef<[f64]>>(&mut self, coords: &[C]) -> Result<()> {
        coords.iter().try_for_each(|c| self.push(c.as_ref()))
    }

    /// Parse one ring, closing it if needed, and append it.
    fn extend_ring<C: AsRef<[f64]>>(&mut self, coords: &[C]) -> Result<usize> {
        let start = self.xy.len();
        let z_start = self.z.len();
        self.extend(coords)?;

        let end = self.xy.len();
        if end > start {
            let has_z = self.z.len() > z_start;
            let closed = self.xy[start] == self.xy[end - 1]
                && (!has_z || self.z[z_start] == self.z[self.z.len() - 1]);
            if !closed {
                self.xy.push(self.xy[start]);
                if has_z {
                    self.z.push(self.z[z_start]);
                }
            }
        }

        let ring_len = self.xy.len() - start;
        if ring_len > 0 && ring_len < 4 {
            return Err(GeoVecError::InvalidGeometry(format!(
                "a linear ring needs at least 4 coordinates once closed, got {ring_len}"
            )));
        }
        Ok(ring_len)
    }

    fn z(&self) -> Option<Vec<f64>> {
        match self.dim {
            Some(Dimension::XYZ) => Some(self.z.clone()),
            _ => None,
        }
    }
}

impl Geometry {
    /// Create a Point from a coordinate of 2 (XY) or 3 (XYZ) values.
    ///
    /// ```
    /// use geovec::scalar::Geometry;
    ///
    /// let point = Geometry::point([1.0, 2.0]).unwrap();
    /// assert!(!point.has_z());
    /// assert!(Geometry::point([0.0, 1.0, 2.0, 3.0]).is_err());
    /// ```
    pub fn point<C: AsRef<[f64]>>(coord: C) -> Result<Self> {
        let mut parsed = ParsedCoords::default();
        parsed.push(coord.as_ref())?;
        let point = geo::Point(parsed.xy[0]);
        Ok(Self::new(
            GeometryType::Point,
            point.into(),
            parsed.z(),
            vec![],
        ))
    }

    /// Create a LineString. It must be empty or have at least two coordinates.
    pub fn line_string<C: AsRef<[f64]>>(coords: &[C]) -> Result<Self> {
        if coords.len() == 1 {
            return Err(GeoVecError::InvalidGeometry(
                "a line string needs 0 or at least 2 coordinates".to_string(),
            ));
        }
        let mut parsed = ParsedCoords::default();
        parsed.extend(coords)?;
        let z = parsed.z();
        Ok(Self::new(
            GeometryType::LineString,
            geo::LineString::new(parsed.xy).into(),
            z,
            vec![],
        ))
    }

    /// Create a LinearRing, closing it if the last coordinate differs from the first.
    pub fn linear_ring<C: AsRef<[f64]>>(coords: &[C]) -> Result<Self> {
        let mut parsed = ParsedCoords::default();
        parsed.extend_ring(coords)?;
        let z = parsed.z();
        Ok(Self::new(
            GeometryType::LinearRing,
            geo::LineString::new(parsed.xy).into(),
            z,
            vec![],
        ))
    }

    /// Create a Polygon without holes.
    pub fn polygon<C: AsRef<[f64]>>(shell: &[C]) -> Result<Self> {
        Self::polygon_with_holes::<C, &[C]>(shell, &[])
    }

    /// Create a Polygon from an exterior ring and interior rings. Rings are closed as needed.
    pub fn polygon_with_holes<C, H>(shell: &[C], holes: &[H]) -> Result<Self>
    where
        C: AsRef<[f64]>,
        H: AsRef<[C]>,
    {
        let mut parsed = ParsedCoords::default();
        let shell_len = parsed.extend_ring(shell)?;
        let mut ring_lens = Vec::with_capacity(holes.len());
        for hole in holes {
            let hole_len = parsed.extend_ring(hole.as_ref())?;
            if hole_len == 0 {
                return Err(GeoVecError::InvalidGeometry(
                    "polygon holes must not be empty".to_string(),
                ));
            }
            ring_lens.push(hole_len);
        }
        if shell_len == 0 && !ring_lens.is_empty() {
            return Err(GeoVecError::InvalidGeometry(
                "an empty polygon cannot have holes".to_string(),
            ));
        }

        let z = parsed.z();
        let mut coords = parsed.xy.into_iter();
        let exterior: geo::LineString = coords.by_ref().take(shell_len).collect();
        let interiors = ring_lens
            .into_iter()
            .map(|len| coords.by_ref().take(len).collect())
            .collect();

        Ok(Self::new(
            GeometryType::Polygon,
            geo::Polygon::new(exterior, interiors).into(),
            z,
            vec![],
        ))
    }

    /// Create a rectangular Polygon, counter-clockwise from `(xmax, ymin)`.
    ///
    /// ```
    /// use geovec::algorithm::geo::Area;
    /// use geovec::scalar::Geometry;
    ///
    /// let rect = Geometry::rect(2.0, 2.0, 4.0, 4.0);
    /// assert_eq!(rect.area(), 4.0);
    /// ```
    pub fn rect(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        let exterior = geo::LineString::from(vec![
            (xmax, ymin),
            (xmax, ymax),
            (xmin, ymax),
            (xmin, ymin),
            (xmax, ymin),
        ]);
        Self::new(
            GeometryType::Polygon,
            geo::Polygon::new(exterior, vec![]).into(),
            None,
            vec![],
        )
    }

    /// Create a MultiPoint from Point geometries.
    pub fn multi_point(points: &[Geometry]) -> Result<Self> {
        let geoms = points
            .iter()
            .map(|g| match g.as_geo() {
                geo::Geometry::Point(p) if g.geom_type() == GeometryType::Point => Ok(*p),
                _ => Err(part_type_error(GeometryType::MultiPoint, g)),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(
            GeometryType::MultiPoint,
            geo::MultiPoint::new(geoms).into(),
            merge_z(points),
            vec![],
        ))
    }

    /// Create a MultiLineString from LineString or LinearRing geometries.
    pub fn multi_line_string(lines: &[Geometry]) -> Result<Self> {
        let geoms = lines
            .iter()
            .map(|g| match g.as_geo() {
                geo::Geometry::LineString(ls) => Ok(ls.clone()),
                _ => Err(part_type_error(GeometryType::MultiLineString, g)),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(
            GeometryType::MultiLineString,
            geo::MultiLineString::new(geoms).into(),
            merge_z(lines),
            vec![],
        ))
    }

    /// Create a MultiPolygon from Polygon geometries.
    pub fn multi_polygon(polygons: &[Geometry]) -> Result<Self> {
        let geoms = polygons
            .iter()
            .map(|g| match g.as_geo() {
                geo::Geometry::Polygon(poly) => Ok(poly.clone()),
                _ => Err(part_type_error(GeometryType::MultiPolygon, g)),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(
            GeometryType::MultiPolygon,
            geo::MultiPolygon::new(geoms).into(),
            merge_z(polygons),
            vec![],
        ))
    }

    /// Create a GeometryCollection from geometries of any type.
    pub fn geometry_collection(geoms: &[Geometry]) -> Result<Self> {
        let collection = geo::GeometryCollection::new_from(
            geoms.iter().map(|g| g.as_geo().clone()).collect(),
        );
        Ok(Self::new(
            GeometryType::GeometryCollection,
            geo::Geometry::GeometryCollection(collection),
            merge_z(geoms),
            geoms.iter().map(|g| g.geom_type()).collect(),
        ))
    }

    /// An empty Polygon.
    pub fn empty_polygon() -> Self {
        Self::new(
            GeometryType::Polygon,
            geo::Polygon::new(geo::LineString::new(vec![]), vec![]).into(),
            None,
            vec![],
        )
    }
}

fn part_type_error(target: GeometryType, part: &Geometry) -> GeoVecError {
    GeoVecError::IncorrectGeometryType(format!(
        "{target} cannot hold a {} part",
        part.geom_type()
    ))
}

/// Concatenate the Z values of `parts`. If only some parts have Z, the others are filled with
/// NaN.
fn merge_z(parts: &[Geometry]) -> Option<Vec<f64>> {
    if !parts.iter().any(|g| g.has_z()) {
        return None;
    }
    let mut z = Vec::with_capacity(parts.iter().map(|g| g.num_coords()).sum());
    for part in parts {
        match part.z_values() {
            Some(values) => z.extend_from_slice(values),
            None => z.extend(std::iter::repeat(f64::NAN).take(part.as_geo().coords_count())),
        }
    }
    Some(z)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geoms;

    #[test]
    fn point_dimensions() {
        assert!(!Geometry::point([2.0, 2.0]).unwrap().has_z());
        assert!(Geometry::point([1.0, 1.0, 1.0]).unwrap().has_z());
    }

    #[test]
    fn point_invalid_dim() {
        assert!(matches!(
            Geometry::point([0.0, 1.0, 2.0, 3.0]),
            Err(GeoVecError::InvalidDimension(4))
        ));
        assert!(matches!(
            Geometry::point([0.0]),
            Err(GeoVecError::InvalidDimension(1))
        ));
    }

    #[test]
    fn mixed_dimensions() {
        let coords: Vec<Vec<f64>> = vec![vec![0.0, 0.0], vec![1.0, 1.0, 1.0]];
        assert!(matches!(
            Geometry::line_string(&coords),
            Err(GeoVecError::MixedDimensions)
        ));
    }

    #[test]
    fn line_string_needs_two_coords() {
        assert!(Geometry::line_string(&[[0.0, 0.0]]).is_err());
        assert!(Geometry::line_string::<[f64; 2]>(&[]).unwrap().is_empty());
    }

    #[test]
    fn linear_ring_is_closed() {
        let ring = geoms::linear_ring();
        assert_eq!(ring.geom_type(), GeometryType::LinearRing);
        assert_eq!(ring.num_coords(), 5);

        let ring_z =
            Geometry::linear_ring(&[[0.0, 0.0, 1.0], [0.0, 1.0, 2.0], [1.0, 1.0, 3.0]]).unwrap();
        assert_eq!(ring_z.z_values().unwrap(), &[1.0, 2.0, 3.0, 1.0]);

        assert!(Geometry::linear_ring(&[[0.0, 0.0], [0.0, 1.0]]).is_err());
    }

    #[test]
    fn polygon_with_hole() {
        let shell = [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]];
        let hole = [[2.0, 2.0], [2.0, 4.0], [4.0, 4.0], [4.0, 2.0], [2.0, 2.0]];
        let polygon = Geometry::polygon_with_holes(&shell, &[&hole[..]]).unwrap();
        match polygon.as_geo() {
            geo::Geometry::Polygon(p) => {
                assert_eq!(p.exterior().0.len(), 5);
                assert_eq!(p.interiors().len(), 1);
                assert_eq!(p.interiors()[0].0.len(), 5);
            }
            _ => panic!("expected a polygon"),
        }
    }

    #[test]
    fn rect_orientation() {
        let rect = Geometry::rect(0.0, 0.0, 1.0, 2.0);
        let coords: Vec<_> = rect.as_geo().coords_iter().collect();
        assert_eq!(coords[0], Coord { x: 1.0, y: 0.0 });
        assert_eq!(coords[1], Coord { x: 1.0, y: 2.0 });
        assert_eq!(coords[2], Coord { x: 0.0, y: 2.0 });
    }

    #[test]
    fn multi_part_types_are_checked() {
        let err = Geometry::multi_point(&[geoms::point(), geoms::line_string()]);
        assert!(matches!(err, Err(GeoVecError::IncorrectGeometryType(_))));
        assert!(Geometry::multi_polygon(&[geoms::point()]).is_err());
    }

    #[test]
    fn partial_z_is_filled_with_nan() {
        let mp = Geometry::multi_point(&[geoms::point(), geoms::point_z()]).unwrap();
        let z = mp.z_values().unwrap();
        assert!(z[0].is_nan());
        assert_eq!(z[1], 1.0);
    }

    #[test]
    fn collection_keeps_part_types() {
        let gc = Geometry::geometry_collection(&[geoms::linear_ring(), geoms::point()]).unwrap();
        let parts = gc.parts();
        assert_eq!(parts[0].geom_type(), GeometryType::LinearRing);
        assert_eq!(parts[1].geom_type(), GeometryType::Point);
    }
}
