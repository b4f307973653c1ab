//! Algorithms implemented on geometry handles and arrays using georust/geo algorithms.

pub(crate) mod utils;

/// Calculate the area of the surface of a `Geometry`.
pub mod area;
pub use area::Area;

/// Polygon overlay operations.
pub mod boolean_ops;
pub use boolean_ops::{Difference, Intersection, SymmetricDifference, UnaryUnion, Union};

/// Round buffers around geometries.
pub mod buffer;
pub use buffer::{Buffer, BufferOptions};

/// Calculate the centroid of a `Geometry`.
pub mod centroid;
pub use centroid::Centroid;

/// Calculate the minimum distance between two `Geometries`.
pub mod distance;
pub use distance::Distance;

/// Calculate the length of a `Geometry`.
pub mod length;
pub use length::Length;

/// Binary spatial predicates based on the DE-9IM intersection matrix.
pub mod predicates;
pub use predicates::{
    CoveredBy, Covers, Crosses, Contains, Disjoint, Equals, Intersects, Overlaps, Touches, Within,
};

/// Locate points along lines, and points at a distance along lines.
pub mod project;
pub use project::{Interpolate, Project};

/// Simplify `Geometries` with the Ramer–Douglas–Peucker algorithm.
pub mod simplify;
pub use simplify::Simplify;

/// Snap vertices to a reference geometry.
pub mod snap;
pub use snap::Snap;
