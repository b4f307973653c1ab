use arrow_array::types::Int32Type;

use crate::algorithm::broadcasting::{BroadcastableGeometry, BroadcastablePrimitive};
use crate::algorithm::native::binary::binary;
use crate::array::GeometryArray;
use crate::error::Result;
use crate::scalar::Geometry;

/// Resolve a possibly negative index against a sequence of `len` items.
pub(crate) fn resolve_index(index: i32, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let index = i64::from(index);
    let resolved = if index < 0 { len + index } else { index };
    if (0..len).contains(&resolved) {
        usize::try_from(resolved).ok()
    } else {
        None
    }
}

/// The `n`th point of a LineString or LinearRing, keeping its Z value.
///
/// Negative indices count from the end. Other geometry types and indices out of range give
/// `None`.
pub(crate) fn point_n(geom: &Geometry, index: i32) -> Option<Geometry> {
    if !geom.geom_type().is_linear() {
        return None;
    }
    let line = match geom.as_geo() {
        geo::Geometry::LineString(line) => line,
        _ => return None,
    };
    let idx = resolve_index(index, line.0.len())?;
    let z = geom.z_values().map(|z| vec![z[idx]]);
    Some(Geometry::new(
        crate::datatypes::GeometryType::Point,
        geo::Point(line.0[idx]).into(),
        z,
        vec![],
    ))
}

/// Extract the point at an index of each LineString or LinearRing.
pub trait GetPointN {
    /// Negative indices count from the end. Nulls, non-linear geometries and indices out of range
    /// give null.
    fn get_point_n(
        &self,
        index: impl Into<BroadcastablePrimitive<Int32Type>>,
    ) -> Result<GeometryArray>;
}

impl GetPointN for Geometry {
    fn get_point_n(
        &self,
        index: impl Into<BroadcastablePrimitive<Int32Type>>,
    ) -> Result<GeometryArray> {
        get_point_n_impl(self.into(), index.into())
    }
}

impl GetPointN for GeometryArray {
    fn get_point_n(
        &self,
        index: impl Into<BroadcastablePrimitive<Int32Type>>,
    ) -> Result<GeometryArray> {
        get_point_n_impl(self.into(), index.into())
    }
}

fn get_point_n_impl(
    geom: BroadcastableGeometry,
    index: BroadcastablePrimitive<Int32Type>,
) -> Result<GeometryArray> {
    let points = binary(&geom, &index, point_n)?;
    Ok(points.into_iter().map(Option::flatten).collect())
}
