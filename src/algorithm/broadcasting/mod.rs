//! Operands that are either a single value or an array.
//!
//! Vectorized operations accept a scalar wherever they accept an array. A scalar, or an array
//! of length one, is repeated to the length of the other operands; all other arrays must share
//! one length. When every operand is a scalar the result has length one.

mod geometry;
mod primitive;

pub use geometry::BroadcastableGeometry;
pub use primitive::BroadcastablePrimitive;

use crate::error::{GeoVecError, Result};

/// An operand that can be read at any output slot once the broadcast length is known.
pub trait Broadcast {
    type Item;

    /// The length of the underlying array, or `None` for a scalar.
    fn broadcast_len(&self) -> Option<usize>;

    /// The value at output slot `i`, or `None` if that value is null.
    ///
    /// `i` must be less than the length returned by [`broadcast_len`] for the full set of
    /// operands.
    fn value_at(&self, i: usize) -> Option<Self::Item>;
}

/// Compute the output length for operands of the given lengths (`None` for scalars).
pub fn broadcast_len(lens: &[Option<usize>]) -> Result<usize> {
    let array_lens: Vec<usize> = lens.iter().flatten().copied().collect();

    let mut target: Option<usize> = None;
    for len in array_lens.iter().copied().filter(|len| *len != 1) {
        match target {
            None => target = Some(len),
            Some(existing) if existing != len => {
                log::debug!("cannot broadcast operands with lengths {array_lens:?}");
                return Err(GeoVecError::BroadcastMismatch(array_lens));
            }
            Some(_) => (),
        }
    }

    Ok(target.unwrap_or(1))
}

/// Index into an array of `len` values for output slot `i`, repeating length-one arrays.
#[inline]
pub(crate) fn broadcast_index(len: usize, i: usize) -> usize {
    if len == 1 {
        0
    } else {
        i
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn scalars_only() {
        assert_eq!(broadcast_len(&[None, None]).unwrap(), 1);
    }

    #[test]
    fn scalar_and_array() {
        assert_eq!(broadcast_len(&[None, Some(6)]).unwrap(), 6);
        assert_eq!(broadcast_len(&[Some(6), None, None]).unwrap(), 6);
    }

    #[test]
    fn length_one_arrays_repeat() {
        assert_eq!(broadcast_len(&[Some(1), Some(4)]).unwrap(), 4);
        assert_eq!(broadcast_len(&[Some(1), Some(1)]).unwrap(), 1);
    }

    #[test]
    fn empty_arrays() {
        assert_eq!(broadcast_len(&[Some(0), None]).unwrap(), 0);
        assert_eq!(broadcast_len(&[Some(0), Some(1)]).unwrap(), 0);
    }

    #[test]
    fn mismatched_lengths() {
        let err = broadcast_len(&[Some(2), Some(3)]).unwrap_err();
        assert!(matches!(err, GeoVecError::BroadcastMismatch(lens) if lens == vec![2, 3]));
    }
}
