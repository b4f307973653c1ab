//! Contains the [`Geometry`] handle, an immutable, cheaply cloned reference to one geometry.

pub use geometry::Geometry;

pub mod geometry;
