//! Vectorized algorithms implemented on geometry handles and arrays.

pub mod broadcasting;
pub mod geo;
pub mod native;
