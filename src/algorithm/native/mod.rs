//! Operations implemented directly on geometry handles, and the element-wise kernels every
//! operation in this crate is built on.

pub(crate) mod binary;
mod equals_exact;
mod geometry_n;
mod get_coordinate;
mod has_z;
mod is_empty;
pub(crate) mod point_n;
mod num_points;
mod type_id;
mod unary;

pub use equals_exact::EqualsExact;
pub use geometry_n::GetGeometryN;
pub use get_coordinate::GetCoordinate;
pub use has_z::HasZ;
pub use is_empty::IsEmpty;
pub use num_points::{NumCoordinates, NumGeometries, NumPoints};
pub use point_n::GetPointN;
pub use type_id::GeomTypeId;
pub use unary::Unary;
