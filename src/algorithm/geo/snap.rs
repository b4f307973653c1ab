use arrow_array::types::Float64Type;
use geo::{CoordsIter, MapCoords};
use rstar::RTree;

use crate::algorithm::broadcasting::{BroadcastableGeometry, BroadcastablePrimitive};
use crate::algorithm::native::binary::try_ternary;
use crate::array::GeometryArray;
use crate::error::Result;
use crate::scalar::Geometry;

/// Snap the vertices of a geometry to the vertices of a reference geometry.
///
/// Each vertex of `self` that lies within `tolerance` of a vertex of `reference` moves onto the
/// nearest such vertex. Other vertices, the structure of the geometry and its Z values are kept.
pub trait Snap<Rhs = Self> {
    fn snap(
        &self,
        reference: &Rhs,
        tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
    ) -> Result<GeometryArray>;
}

pub(crate) fn snap_geometry(geom: &Geometry, reference: &Geometry, tolerance: f64) -> Geometry {
    let vertices: Vec<[f64; 2]> = reference
        .as_geo()
        .coords_iter()
        .map(|c| [c.x, c.y])
        .collect();
    if vertices.is_empty() || geom.is_empty() {
        return geom.clone();
    }
    let tree = RTree::bulk_load(vertices);
    let tree = &tree;

    let snapped = geom.as_geo().map_coords(move |c| {
        match tree.nearest_neighbor(&[c.x, c.y]) {
            Some([x, y]) if (x - c.x).hypot(y - c.y) <= tolerance => geo::coord! { x: *x, y: *y },
            _ => c,
        }
    });
    geom.with_geo(snapped)
}

fn snap_impl(
    geom: BroadcastableGeometry,
    reference: BroadcastableGeometry,
    tolerance: BroadcastablePrimitive<Float64Type>,
) -> Result<GeometryArray> {
    let snapped = try_ternary(&geom, &reference, &tolerance, |geom, reference, tolerance| {
        Ok(Some(snap_geometry(geom, reference, tolerance)))
    })?;
    Ok(snapped.into())
}

impl Snap for Geometry {
    fn snap(
        &self,
        reference: &Self,
        tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
    ) -> Result<GeometryArray> {
        snap_impl(self.into(), reference.into(), tolerance.into())
    }
}

impl Snap<GeometryArray> for Geometry {
    fn snap(
        &self,
        reference: &GeometryArray,
        tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
    ) -> Result<GeometryArray> {
        snap_impl(self.into(), reference.into(), tolerance.into())
    }
}

impl Snap<Geometry> for GeometryArray {
    fn snap(
        &self,
        reference: &Geometry,
        tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
    ) -> Result<GeometryArray> {
        snap_impl(self.into(), reference.into(), tolerance.into())
    }
}

impl Snap for GeometryArray {
    fn snap(
        &self,
        reference: &Self,
        tolerance: impl Into<BroadcastablePrimitive<Float64Type>>,
    ) -> Result<GeometryArray> {
        snap_impl(self.into(), reference.into(), tolerance.into())
    }
}
