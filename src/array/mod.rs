//! Contains the array of geometry handles that every vectorized operation consumes.

pub use geometry::GeometryArray;

pub mod geometry;
