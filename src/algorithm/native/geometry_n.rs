use arrow_array::types::Int32Type;

use crate::algorithm::broadcasting::{BroadcastableGeometry, BroadcastablePrimitive};
use crate::algorithm::native::binary::binary;
use crate::algorithm::native::point_n::resolve_index;
use crate::array::GeometryArray;
use crate::error::Result;
use crate::scalar::Geometry;

/// Extract the part at an index of each multi geometry or collection.
///
/// Single geometries are their own part at index 0 (or -1).
pub trait GetGeometryN {
    /// Negative indices count from the end. Nulls and indices out of range give null.
    fn get_geometry_n(
        &self,
        index: impl Into<BroadcastablePrimitive<Int32Type>>,
    ) -> Result<GeometryArray>;
}

impl GetGeometryN for Geometry {
    fn get_geometry_n(
        &self,
        index: impl Into<BroadcastablePrimitive<Int32Type>>,
    ) -> Result<GeometryArray> {
        get_geometry_n_impl(self.into(), index.into())
    }
}

impl GetGeometryN for GeometryArray {
    fn get_geometry_n(
        &self,
        index: impl Into<BroadcastablePrimitive<Int32Type>>,
    ) -> Result<GeometryArray> {
        get_geometry_n_impl(self.into(), index.into())
    }
}

fn get_geometry_n_impl(
    geom: BroadcastableGeometry,
    index: BroadcastablePrimitive<Int32Type>,
) -> Result<GeometryArray> {
    let parts = binary(&geom, &index, |geom, index| {
        let mut parts = geom.parts();
        resolve_index(index, parts.len()).map(|idx| parts.swap_remove(idx))
    })?;
    Ok(parts.into_iter().map(Option::flatten).collect())
}
