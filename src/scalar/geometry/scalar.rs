use std::sync::Arc;

use geo::CoordsIter;

use crate::datatypes::{Dimension, GeometryType};

/// An immutable handle onto a single geometry.
///
/// The planar part of the geometry is stored as a [`geo::Geometry`], which is what every
/// algorithm in this crate operates on. Z values, when present, are kept alongside as one value
/// per coordinate in the order produced by [`CoordsIter::coords_iter`]: a polygon's exterior
/// followed by its interiors, and the parts of multi geometries and collections in order.
///
/// Cloning is cheap: the data is shared behind an [`Arc`].
#[derive(Debug, Clone)]
pub struct Geometry(Arc<GeometryInner>);

#[derive(Debug, PartialEq)]
struct GeometryInner {
    geom_type: GeometryType,
    geom: geo::Geometry,
    z: Option<Vec<f64>>,
    /// Types of the top-level parts of a GeometryCollection. A LinearRing part cannot be told
    /// apart from a LineString part by the stored `geo::Geometry` alone.
    part_types: Vec<GeometryType>,
}

impl Geometry {
    /// Assemble a handle from its parts.
    ///
    /// `geom` must already be normalized (no `Line`, `Rect` or `Triangle` variants) and `z`, if
    /// present, must hold exactly one value per coordinate.
    pub(crate) fn new(
        geom_type: GeometryType,
        geom: geo::Geometry,
        z: Option<Vec<f64>>,
        part_types: Vec<GeometryType>,
    ) -> Self {
        debug_assert!(z
            .as_ref()
            .map_or(true, |z| z.len() == geom.coords_count()));
        Self(Arc::new(GeometryInner {
            geom_type,
            geom,
            z,
            part_types,
        }))
    }

    /// Wrap the output of a `geo` algorithm as a two-dimensional handle.
    ///
    /// `Line` becomes a LineString, and `Rect` and `Triangle` become Polygons.
    pub fn from_geo(geom: impl Into<geo::Geometry>) -> Self {
        let geom = normalize(geom.into());
        let geom_type = geo_type(&geom);
        let part_types = match &geom {
            geo::Geometry::GeometryCollection(gc) => gc.iter().map(geo_type).collect(),
            _ => vec![],
        };
        Self::new(geom_type, geom, None, part_types)
    }

    /// The type of this geometry.
    pub fn geom_type(&self) -> GeometryType {
        self.0.geom_type
    }

    /// The coordinate dimension of this geometry.
    pub fn dimension(&self) -> Dimension {
        if self.0.z.is_some() {
            Dimension::XYZ
        } else {
            Dimension::XY
        }
    }

    /// Whether this geometry carries Z values.
    pub fn has_z(&self) -> bool {
        self.0.z.is_some()
    }

    /// Access the planar geometry.
    pub fn as_geo(&self) -> &geo::Geometry {
        &self.0.geom
    }

    /// Z values, one per coordinate, if this geometry is three-dimensional.
    pub fn z_values(&self) -> Option<&[f64]> {
        self.0.z.as_deref()
    }

    /// The number of coordinates in this geometry.
    pub fn num_coords(&self) -> usize {
        self.0.geom.coords_count()
    }

    /// Whether this geometry has no coordinates at all.
    pub fn is_empty(&self) -> bool {
        self.num_coords() == 0
    }

    /// The parts of a multi geometry or collection.
    ///
    /// A non-empty single geometry is its own only part, and an empty single geometry has none.
    pub fn parts(&self) -> Vec<Geometry> {
        let z = self.z_values();
        let mut offset = 0;
        let mut take_z = |count: usize| {
            let part_z = z.map(|z| z[offset..offset + count].to_vec());
            offset += count;
            part_z
        };

        match &self.0.geom {
            geo::Geometry::MultiPoint(mp) => mp
                .iter()
                .map(|p| Self::new(GeometryType::Point, (*p).into(), take_z(1), vec![]))
                .collect(),
            geo::Geometry::MultiLineString(mls) => mls
                .iter()
                .map(|ls| {
                    let z = take_z(ls.0.len());
                    Self::new(GeometryType::LineString, ls.clone().into(), z, vec![])
                })
                .collect(),
            geo::Geometry::MultiPolygon(mp) => mp
                .iter()
                .map(|poly| {
                    let z = take_z(poly.coords_count());
                    Self::new(GeometryType::Polygon, poly.clone().into(), z, vec![])
                })
                .collect(),
            geo::Geometry::GeometryCollection(gc) => gc
                .iter()
                .zip(self.0.part_types.iter())
                .map(|(g, geom_type)| {
                    let z = take_z(g.coords_count());
                    let part_types = match g {
                        geo::Geometry::GeometryCollection(inner) => {
                            inner.iter().map(geo_type).collect()
                        }
                        _ => vec![],
                    };
                    Self::new(*geom_type, g.clone(), z, part_types)
                })
                .collect(),
            _ if self.is_empty() => vec![],
            _ => vec![self.clone()],
        }
    }

    /// A copy of this geometry with the planar coordinates replaced.
    ///
    /// `geom` must have the same structure as this geometry, so that Z values stay aligned.
    pub(crate) fn with_geo(&self, geom: geo::Geometry) -> Self {
        Self::new(
            self.geom_type(),
            geom,
            self.0.z.clone(),
            self.0.part_types.clone(),
        )
    }

    /// A copy of this geometry with its Z values dropped.
    pub fn to_2d(&self) -> Self {
        if !self.has_z() {
            return self.clone();
        }
        Self::new(
            self.geom_type(),
            self.0.geom.clone(),
            None,
            self.0.part_types.clone(),
        )
    }
}

/// Structural equality: same type, same coordinates, same Z values.
///
/// This is not topological equality; see [`Equals`][crate::algorithm::geo::Equals] for that.
impl PartialEq for Geometry {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl From<geo::Point> for Geometry {
    fn from(value: geo::Point) -> Self {
        Self::from_geo(value)
    }
}

impl From<geo::LineString> for Geometry {
    fn from(value: geo::LineString) -> Self {
        Self::from_geo(value)
    }
}

impl From<geo::Polygon> for Geometry {
    fn from(value: geo::Polygon) -> Self {
        Self::from_geo(value)
    }
}

impl From<geo::MultiPolygon> for Geometry {
    fn from(value: geo::MultiPolygon) -> Self {
        Self::from_geo(value)
    }
}

/// Replace the `geo` variants that have no counterpart in [`GeometryType`].
pub(crate) fn normalize(geom: geo::Geometry) -> geo::Geometry {
    match geom {
        geo::Geometry::Line(line) => geo::LineString::new(vec![line.start, line.end]).into(),
        geo::Geometry::Rect(rect) => rect.to_polygon().into(),
        geo::Geometry::Triangle(triangle) => triangle.to_polygon().into(),
        geo::Geometry::GeometryCollection(gc) => {
            geo::Geometry::GeometryCollection(geo::GeometryCollection::new_from(
                gc.into_iter().map(normalize).collect(),
            ))
        }
        other => other,
    }
}

/// The type of a normalized `geo` geometry.
pub(crate) fn geo_type(geom: &geo::Geometry) -> GeometryType {
    match geom {
        geo::Geometry::Point(_) => GeometryType::Point,
        geo::Geometry::Line(_) | geo::Geometry::LineString(_) => GeometryType::LineString,
        geo::Geometry::Polygon(_) | geo::Geometry::Rect(_) | geo::Geometry::Triangle(_) => {
            GeometryType::Polygon
        }
        geo::Geometry::MultiPoint(_) => GeometryType::MultiPoint,
        geo::Geometry::MultiLineString(_) => GeometryType::MultiLineString,
        geo::Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
        geo::Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
    }
}
