//! Query types for analytics store lookups.

use serde::{Deserialize, Serialize};

/// Exact-equality filter identifying one time series.
///
/// All four fields are required; together they select the rows of a
/// single series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesFilter {
    pub algo_name: String,
    pub vehicle: String,
    pub psn: String,
    pub pname: String,
}

impl SeriesFilter {
    /// Creates a filter from the four identifying fields.
    pub fn new(
        algo_name: impl Into<String>,
        vehicle: impl Into<String>,
        psn: impl Into<String>,
        pname: impl Into<String>,
    ) -> Self {
        Self {
            algo_name: algo_name.into(),
            vehicle: vehicle.into(),
            psn: psn.into(),
            pname: pname.into(),
        }
    }
}
