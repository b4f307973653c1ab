//! Vectorized geometry predicates, constructors and measurements.
//!
//! Immutable [`Geometry`][scalar::Geometry] handles are collected into
//! [`GeometryArray`][array::GeometryArray]s, and every operation in [`algorithm`] works
//! element-wise over arrays. Operands broadcast against each other: a single geometry or value
//! stands in for an array of any length, and null slots propagate to the output. Results are
//! Arrow arrays.
//!
//! ```
//! use geovec::algorithm::geo::Intersects;
//! use geovec::construction::points;
//! use geovec::scalar::Geometry;
//!
//! let points = points(vec![0.0, 3.0], vec![0.0, 3.0], None).unwrap();
//! let square = Geometry::rect(2.0, 2.0, 4.0, 4.0);
//!
//! let hits = points.intersects(&square).unwrap();
//! assert!(!hits.value(0));
//! assert!(hits.value(1));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod algorithm;
pub mod array;
pub mod construction;
pub mod datatypes;
pub mod error;
pub mod io;
pub mod scalar;
