use arrow_array::types::{ArrowPrimitiveType, Float64Type, Int32Type};
use arrow_array::{Array, Float64Array, Int32Array, PrimitiveArray};

use crate::algorithm::broadcasting::{broadcast_index, Broadcast};

/// An enum over a primitive scalar, such as an `f64` tolerance or an `i32` index, and an Arrow
/// [`PrimitiveArray`] of the same type.
///
/// The scalar variant is repeated to the broadcast length; see the
/// [module docs](crate::algorithm::broadcasting).
#[derive(Debug, Clone)]
pub enum BroadcastablePrimitive<T>
where
    T: ArrowPrimitiveType,
{
    Scalar(T::Native),
    Array(PrimitiveArray<T>),
}

impl<T: ArrowPrimitiveType> Broadcast for BroadcastablePrimitive<T> {
    type Item = T::Native;

    fn broadcast_len(&self) -> Option<usize> {
        match self {
            BroadcastablePrimitive::Scalar(_) => None,
            BroadcastablePrimitive::Array(arr) => Some(arr.len()),
        }
    }

    fn value_at(&self, i: usize) -> Option<Self::Item> {
        match self {
            BroadcastablePrimitive::Scalar(val) => Some(*val),
            BroadcastablePrimitive::Array(arr) => {
                let idx = broadcast_index(arr.len(), i);
                if arr.is_null(idx) {
                    None
                } else {
                    Some(arr.value(idx))
                }
            }
        }
    }
}

impl From<f64> for BroadcastablePrimitive<Float64Type> {
    fn from(value: f64) -> Self {
        BroadcastablePrimitive::Scalar(value)
    }
}

impl From<Vec<f64>> for BroadcastablePrimitive<Float64Type> {
    fn from(value: Vec<f64>) -> Self {
        BroadcastablePrimitive::Array(value.into())
    }
}

impl From<&[f64]> for BroadcastablePrimitive<Float64Type> {
    fn from(value: &[f64]) -> Self {
        BroadcastablePrimitive::Array(value.to_vec().into())
    }
}

impl From<Float64Array> for BroadcastablePrimitive<Float64Type> {
    fn from(value: Float64Array) -> Self {
        BroadcastablePrimitive::Array(value)
    }
}

impl From<i32> for BroadcastablePrimitive<Int32Type> {
    fn from(value: i32) -> Self {
        BroadcastablePrimitive::Scalar(value)
    }
}

impl From<Vec<i32>> for BroadcastablePrimitive<Int32Type> {
    fn from(value: Vec<i32>) -> Self {
        BroadcastablePrimitive::Array(value.into())
    }
}

impl From<Int32Array> for BroadcastablePrimitive<Int32Type> {
    fn from(value: Int32Array) -> Self {
        BroadcastablePrimitive::Array(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scalar_repeats() {
        let tolerance: BroadcastablePrimitive<Float64Type> = 0.5.into();
        assert_eq!(tolerance.broadcast_len(), None);
        assert_eq!(tolerance.value_at(0), Some(0.5));
        assert_eq!(tolerance.value_at(100), Some(0.5));
    }

    #[test]
    fn array_nulls() {
        let index: BroadcastablePrimitive<Int32Type> =
            Int32Array::from(vec![Some(1), None]).into();
        assert_eq!(index.broadcast_len(), Some(2));
        assert_eq!(index.value_at(0), Some(1));
        assert_eq!(index.value_at(1), None);
    }

    #[test]
    fn length_one_array_repeats() {
        let radius: BroadcastablePrimitive<Float64Type> = vec![2.0].into();
        assert_eq!(radius.value_at(3), Some(2.0));
    }
}
