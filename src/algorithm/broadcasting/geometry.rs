use crate::algorithm::broadcasting::{broadcast_index, Broadcast};
use crate::array::GeometryArray;
use crate::scalar::Geometry;

/// An enum over a borrowed [`Geometry`] scalar and a borrowed [`GeometryArray`].
///
/// The scalar variant is repeated to the broadcast length; see the
/// [module docs](crate::algorithm::broadcasting).
#[derive(Debug, Clone, Copy)]
pub enum BroadcastableGeometry<'a> {
    Scalar(&'a Geometry),
    Array(&'a GeometryArray),
}

impl<'a> Broadcast for BroadcastableGeometry<'a> {
    type Item = &'a Geometry;

    fn broadcast_len(&self) -> Option<usize> {
        match self {
            BroadcastableGeometry::Scalar(_) => None,
            BroadcastableGeometry::Array(arr) => Some(arr.len()),
        }
    }

    fn value_at(&self, i: usize) -> Option<Self::Item> {
        match *self {
            BroadcastableGeometry::Scalar(geom) => Some(geom),
            BroadcastableGeometry::Array(arr) => arr.get(broadcast_index(arr.len(), i)),
        }
    }
}

impl<'a> From<&'a Geometry> for BroadcastableGeometry<'a> {
    fn from(value: &'a Geometry) -> Self {
        BroadcastableGeometry::Scalar(value)
    }
}

impl<'a> From<&'a GeometryArray> for BroadcastableGeometry<'a> {
    fn from(value: &'a GeometryArray) -> Self {
        BroadcastableGeometry::Array(value)
    }
}
