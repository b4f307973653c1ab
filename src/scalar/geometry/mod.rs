mod construct;
mod scalar;

pub use scalar::Geometry;
