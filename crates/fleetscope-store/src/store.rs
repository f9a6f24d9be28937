//! Abstract store trait for analytics algorithm output.

use async_trait::async_trait;
use thiserror::Error;

use fleetscope_types::{AlgoParams, DataPoint};

use crate::query::SeriesFilter;

/// Errors returned by store implementations.
///
/// Connection, locking and query failures all collapse into `Storage`;
/// the transport layer surfaces the message text unchanged, so `Display`
/// carries the raw backend text with no added prefix.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database or I/O failure.
    #[error("{message}")]
    Storage { message: String },
}

impl StoreError {
    /// Creates a storage error from any displayable message.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Read access to stored algorithm output.
///
/// Handlers receive this trait as an injected dependency, so tests can
/// substitute a double without a database.
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    /// Lists distinct algorithm names, sorted ascending.
    async fn list_algos(&self) -> Result<Vec<String>, StoreError>;

    /// Returns the distinct filter dimensions recorded for an algorithm.
    ///
    /// Unknown algorithms yield empty lists, not an error.
    async fn params_for_algo(&self, algo_name: &str) -> Result<AlgoParams, StoreError>;

    /// Fetches the series matching the filter, ordered by date ascending.
    async fn fetch_series(&self, filter: &SeriesFilter) -> Result<Vec<DataPoint>, StoreError>;
}
