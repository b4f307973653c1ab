use arrow_array::types::Float64Type;
use geo::SimplifyIdx;

use crate::algorithm::broadcasting::{BroadcastableGeometry, BroadcastablePrimitive};
use crate::algorithm::geo::utils::polygon_rings;
use crate::algorithm::native::binary::try_binary;
use crate::array::GeometryArray;
use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::scalar::Geometry;

/// Simplifies a geometry.
///
/// The [Ramer–Douglas–Peucker
/// algorithm](https://en.wikipedia.org/wiki/Ramer–Douglas–Peucker_algorithm) simplifies a
/// linestring. Polygons are simplified by running the RDP algorithm on all their constituent
/// rings. This may result in invalid Polygons, and has no guarantee of preserving topology.
/// A ring that would drop below four coordinates is left as it is.
///
/// Multi* objects and collections are simplified by simplifying all their constituent geometries
/// individually. Points are returned unchanged, and Z values of the kept vertices are preserved.
///
/// A tolerance less than or equal to zero will return an unaltered version of the geometry.
pub trait Simplify {
    /// # Examples
    ///
    /// ```
    /// use geovec::algorithm::geo::Simplify;
    /// use geovec::algorithm::native::NumPoints;
    /// use geovec::scalar::Geometry;
    ///
    /// let line = Geometry::line_string(&[[0.0, 0.0], [0.1, 1.0], [0.0, 2.0]]).unwrap();
    ///
    /// let simplified = line.simplify(vec![0.0, 1.0]).unwrap();
    ///
    /// assert_eq!(simplified.get_num_points().values().to_vec(), vec![3, 2]);
    /// ```
    fn simplify(
        &self,
        tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
    ) -> Result<GeometryArray>;
}

fn simplify_line(
    line: &geo::LineString,
    z: Option<&[f64]>,
    epsilon: f64,
    ring: bool,
) -> (geo::LineString, Option<Vec<f64>>) {
    let mut kept = line.simplify_idx(&epsilon);
    if ring && kept.len() < 4 {
        kept = (0..line.0.len()).collect();
    }
    let coords = kept.iter().map(|i| line.0[*i]).collect();
    let z = z.map(|z| kept.iter().map(|i| z[*i]).collect());
    (geo::LineString::new(coords), z)
}

fn simplify_polygon(
    poly: &geo::Polygon,
    z: Option<&[f64]>,
    epsilon: f64,
) -> (geo::Polygon, Option<Vec<f64>>) {
    let mut offset = 0;
    let mut out_z = z.map(|_| vec![]);
    let rings: Vec<geo::LineString> = polygon_rings(poly)
        .map(|ring| {
            let ring_z = z.map(|z| &z[offset..offset + ring.0.len()]);
            offset += ring.0.len();
            let (ring, ring_z) = simplify_line(ring, ring_z, epsilon, true);
            if let (Some(out), Some(ring_z)) = (out_z.as_mut(), ring_z) {
                out.extend(ring_z);
            }
            ring
        })
        .collect();

    let mut rings = rings.into_iter();
    let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(vec![]));
    (geo::Polygon::new(exterior, rings.collect()), out_z)
}

pub(crate) fn simplify_geometry(geom: &Geometry, epsilon: f64) -> Result<Geometry> {
    if epsilon.is_nan() || epsilon <= 0.0 {
        return Ok(geom.clone());
    }

    match (geom.geom_type(), geom.as_geo()) {
        (GeometryType::LineString | GeometryType::LinearRing, geo::Geometry::LineString(line)) => {
            let ring = geom.geom_type() == GeometryType::LinearRing;
            let (line, z) = simplify_line(line, geom.z_values(), epsilon, ring);
            Ok(Geometry::new(geom.geom_type(), line.into(), z, vec![]))
        }
        (GeometryType::Polygon, geo::Geometry::Polygon(poly)) => {
            let (poly, z) = simplify_polygon(poly, geom.z_values(), epsilon);
            Ok(Geometry::new(GeometryType::Polygon, poly.into(), z, vec![]))
        }
        (GeometryType::MultiLineString, _) => {
            Geometry::multi_line_string(&simplify_parts(geom, epsilon)?)
        }
        (GeometryType::MultiPolygon, _) => {
            Geometry::multi_polygon(&simplify_parts(geom, epsilon)?)
        }
        (GeometryType::GeometryCollection, _) => {
            Geometry::geometry_collection(&simplify_parts(geom, epsilon)?)
        }
        _ => Ok(geom.clone()),
    }
}

fn simplify_parts(geom: &Geometry, epsilon: f64) -> Result<Vec<Geometry>> {
    geom.parts()
        .iter()
        .map(|part| simplify_geometry(part, epsilon))
        .collect()
}

fn simplify_impl(
    geom: BroadcastableGeometry,
    tolerance: BroadcastablePrimitive<Float64Type>,
) -> Result<GeometryArray> {
    let simplified = try_binary(&geom, &tolerance, |geom, tolerance| {
        simplify_geometry(geom, tolerance).map(Some)
    })?;
    Ok(simplified.into())
}

impl Simplify for Geometry {
    fn simplify(
        &self,
        tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
    ) -> Result<GeometryArray> {
        simplify_impl(self.into(), tolerance.into())
    }
}

impl Simplify for GeometryArray {
    fn simplify(
        &self,
        tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
    ) -> Result<GeometryArray> {
        simplify_impl(self.into(), tolerance.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::native::{NumCoordinates, NumPoints};
    use crate::test::geoms;

    #[test]
    fn tolerance_broadcast() {
        let line = Geometry::line_string(&[[0.0, 0.0], [0.1, 1.0], [0.0, 2.0]]).unwrap();
        let simplified = line.simplify(vec![0.0, 1.0]).unwrap();
        assert_eq!(simplified.get_num_points().values().to_vec(), vec![3, 2]);
    }

    #[test]
    fn rdp_test() {
        let line = Geometry::line_string(&[
            [0.0, 0.0],
            [5.0, 4.0],
            [11.0, 5.5],
            [17.3, 3.2],
            [27.8, 0.1],
        ])
        .unwrap();
        let simplified = line.simplify(1.0).unwrap();
        let expected = Geometry::line_string(&[
            [0.0, 0.0],
            [5.0, 4.0],
            [11.0, 5.5],
            [27.8, 0.1],
        ])
        .unwrap();
        assert_eq!(simplified.get(0), Some(&expected));
    }

    #[test]
    fn keeps_z_of_kept_vertices() {
        let line =
            Geometry::line_string(&[[0.0, 0.0, 1.0], [0.1, 1.0, 2.0], [0.0, 2.0, 3.0]]).unwrap();
        let simplified = line.simplify(1.0).unwrap();
        let expected = Geometry::line_string(&[[0.0, 0.0, 1.0], [0.0, 2.0, 3.0]]).unwrap();
        assert_eq!(simplified.get(0), Some(&expected));
    }

    #[test]
    fn rings_do_not_collapse() {
        let simplified = geoms::polygon().simplify(100.0).unwrap();
        assert_eq!(simplified.get(0), Some(&geoms::polygon()));

        let simplified = geoms::linear_ring().simplify(100.0).unwrap();
        assert_eq!(simplified.get(0).unwrap().get_num_points(), 5);
    }

    #[test]
    fn points_and_collections() {
        let simplified = geoms::all_types().simplify(0.5).unwrap();
        assert_eq!(simplified.get(0), Some(&geoms::point()));
        assert_eq!(simplified.get(4), Some(&geoms::multi_point()));
        assert_eq!(
            simplified.get_num_coordinates().values().to_vec(),
            vec![1, 3, 5, 5, 2, 2, 10, 3]
        );
        assert_eq!(
            simplified.get(7).unwrap().geom_type(),
            GeometryType::GeometryCollection
        );
    }
}
