//! Time-series observation type.

use serde::{Deserialize, Serialize};

/// One observation within an `(algo_name, vehicle, psn, pname)` series.
///
/// Field order matches the wire contract of the data endpoint; `date` is
/// the natural ordering key of a series and is kept as stored text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Observation date, as stored.
    pub date: String,
    /// Measured parameter value.
    pub pvalue: f64,
    /// Parameter group label; nullable in the backing table.
    pub pgroup: Option<String>,
    /// Parameter name, echoed from the stored row.
    pub pname: String,
    /// Vehicle identifier, echoed from the stored row.
    pub vehicle: String,
    /// Unit serial number, echoed from the stored row.
    pub psn: String,
}
