//! # fleetscope-types
//!
//! Domain types for the fleetscope analytics read API.
//! Pure data types with no dependencies beyond serde.

pub mod params;
pub mod point;

pub use params::{AlgoParams, ParamRow};
pub use point::DataPoint;
