//! # fleetscope-store
//!
//! Storage port for analytics algorithm output: the abstract trait the
//! HTTP layer depends on, plus its query and error types. Adapter crates
//! (e.g. `fleetscope-store-sqlite`) provide the implementations.

pub mod query;
pub mod store;

pub use query::SeriesFilter;
pub use store::{AnalyticsStore, StoreError};
