//! Contains the [`GeometryArray`], an array of geometry handles.

pub use array::GeometryArray;

mod array;
