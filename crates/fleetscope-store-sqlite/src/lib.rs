//! # fleetscope-store-sqlite
//!
//! SQLite adapter for the fleetscope analytics store. Implements
//! `AnalyticsStore` over a single mutex-guarded connection, with the
//! backing table and column names taken from a configurable mapping.

pub mod mapping;
mod rows;
mod sql;
pub mod store;

pub use mapping::TableMapping;
pub use store::SqliteAnalyticsStore;
