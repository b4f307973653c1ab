//! Defines [`GeoVecError`], representing all errors returned by this crate.

use std::fmt::Debug;

use arrow_schema::ArrowError;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoVecError {
    /// [ArrowError]
    #[error(transparent)]
    Arrow(#[from] ArrowError),

    /// A coordinate did not have 2 or 3 values.
    #[error("Invalid coordinate dimension {0}: expected 2 (XY) or 3 (XYZ)")]
    InvalidDimension(usize),

    /// Coordinates of a single geometry disagree on their dimension.
    #[error("Coordinates of one geometry must all be XY or all be XYZ")]
    MixedDimensions,

    /// Input that cannot form a valid geometry of the requested type.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Incorrect geometry type for operation
    #[error("Incorrect geometry type for operation: {0}")]
    IncorrectGeometryType(String),

    /// Array operands whose lengths cannot be broadcast together.
    #[error("Operands could not be broadcast together with lengths {0:?}")]
    BroadcastMismatch(Vec<usize>),

    /// [geojson::Error]
    #[error(transparent)]
    GeoJson(#[from] geojson::Error),

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /// General error.
    #[error("General error: {0}")]
    General(String),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoVecError>;
