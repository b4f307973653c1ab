//! Element-wise kernels over broadcast operands.
//!
//! Every kernel computes the broadcast length of its operands first, then calls `op` once per
//! output slot where all operands are non-null. Slots where any operand is null are null in the
//! output.

use crate::algorithm::broadcasting::{broadcast_len, Broadcast};
use crate::error::Result;

pub(crate) fn try_binary<A, B, T, F>(a: &A, b: &B, mut op: F) -> Result<Vec<Option<T>>>
where
    A: Broadcast,
    B: Broadcast,
    F: FnMut(A::Item, B::Item) -> Result<Option<T>>,
{
    let len = broadcast_len(&[a.broadcast_len(), b.broadcast_len()])?;
    (0..len)
        .map(|i| match (a.value_at(i), b.value_at(i)) {
            (Some(a), Some(b)) => op(a, b),
            _ => Ok(None),
        })
        .collect()
}

pub(crate) fn try_ternary<A, B, C, T, F>(a: &A, b: &B, c: &C, mut op: F) -> Result<Vec<Option<T>>>
where
    A: Broadcast,
    B: Broadcast,
    C: Broadcast,
    F: FnMut(A::Item, B::Item, C::Item) -> Result<Option<T>>,
{
    let len = broadcast_len(&[a.broadcast_len(), b.broadcast_len(), c.broadcast_len()])?;
    (0..len)
        .map(|i| match (a.value_at(i), b.value_at(i), c.value_at(i)) {
            (Some(a), Some(b), Some(c)) => op(a, b, c),
            _ => Ok(None),
        })
        .collect()
}

pub(crate) fn binary<A, B, T, F>(a: &A, b: &B, op: F) -> Result<Vec<Option<T>>>
where
    A: Broadcast,
    B: Broadcast,
    F: Fn(A::Item, B::Item) -> T,
{
    try_binary(a, b, |a, b| Ok(Some(op(a, b))))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::broadcasting::{BroadcastableGeometry, BroadcastablePrimitive};
    use crate::array::GeometryArray;
    use crate::error::GeoVecError;
    use crate::test::geoms;
    use arrow_array::types::Float64Type;

    #[test]
    fn null_operand_gives_null() {
        let arr = GeometryArray::new(vec![Some(geoms::point()), None]);
        let factor: BroadcastablePrimitive<Float64Type> = 2.0.into();
        let out = binary(&BroadcastableGeometry::from(&arr), &factor, |g, f| {
            g.num_coords() as f64 * f
        })
        .unwrap();
        assert_eq!(out, vec![Some(2.0), None]);
    }

    #[test]
    fn mismatch_is_an_error() {
        let arr: GeometryArray = vec![geoms::point(), geoms::point()].into();
        let factor: BroadcastablePrimitive<Float64Type> = vec![1.0, 2.0, 3.0].into();
        let out = binary(&BroadcastableGeometry::from(&arr), &factor, |_, f| f);
        assert!(matches!(out, Err(GeoVecError::BroadcastMismatch(_))));
    }

    #[test]
    fn ternary_broadcasts_all_operands() {
        let point = geoms::point();
        let arr: GeometryArray = vec![geoms::point(), geoms::polygon(), geoms::line_string()].into();
        let tolerance: BroadcastablePrimitive<Float64Type> = vec![0.5].into();
        let out = try_ternary(
            &BroadcastableGeometry::from(&point),
            &BroadcastableGeometry::from(&arr),
            &tolerance,
            |a, b, t| Ok(Some(a.num_coords() + b.num_coords() + t as usize)),
        )
        .unwrap();
        assert_eq!(out, vec![Some(2), Some(6), Some(4)]);
    }
}
