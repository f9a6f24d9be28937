//! JSON envelopes for the analytics API.
//!
//! Success and error bodies are typed structs rather than ad-hoc JSON
//! maps so the serialized key order is the declaration order, keeping
//! response bytes stable across identical requests.

use serde::Serialize;

use fleetscope_store::SeriesFilter;
use fleetscope_types::{AlgoParams, DataPoint};

/// Body of a successful algorithm-list response.
#[derive(Debug, Serialize)]
pub struct AlgosBody {
    pub status: &'static str,
    pub algos: Vec<String>,
}

impl AlgosBody {
    pub fn new(algos: Vec<String>) -> Self {
        Self {
            status: "ok",
            algos,
        }
    }
}

/// Body of a successful parameter-discovery response.
///
/// `algo_name` echoes the request; the four lists come from the store.
#[derive(Debug, Serialize)]
pub struct ParamsBody {
    pub status: &'static str,
    pub algo_name: String,
    pub pgroups: Vec<String>,
    pub pnames: Vec<String>,
    pub vehicles: Vec<String>,
    pub psns: Vec<String>,
}

impl ParamsBody {
    pub fn new(algo_name: impl Into<String>, params: AlgoParams) -> Self {
        Self {
            status: "ok",
            algo_name: algo_name.into(),
            pgroups: params.pgroups,
            pnames: params.pnames,
            vehicles: params.vehicles,
            psns: params.psns,
        }
    }
}

/// Body of a successful series-fetch response.
///
/// The four identity fields echo the request; each point's fields come
/// from its stored row.
#[derive(Debug, Serialize)]
pub struct DataBody {
    pub status: &'static str,
    pub algo_name: String,
    pub vehicle: String,
    pub psn: String,
    pub pname: String,
    pub points: Vec<DataPoint>,
}

impl DataBody {
    pub fn new(filter: &SeriesFilter, points: Vec<DataPoint>) -> Self {
        Self {
            status: "ok",
            algo_name: filter.algo_name.clone(),
            vehicle: filter.vehicle.clone(),
            psn: filter.psn.clone(),
            pname: filter.pname.clone(),
            points,
        }
    }
}

/// Error body shared by validation (400) and store (500) failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algos_body_keeps_wire_order() {
        let body = AlgosBody::new(vec!["a".to_string(), "b".to_string()]);
        let json = serde_json::to_string(&body).expect("serialize");
        assert_eq!(json, r#"{"status":"ok","algos":["a","b"]}"#);
    }

    #[test]
    fn params_body_keeps_wire_order() {
        let body = ParamsBody::new("X", AlgoParams::default());
        let json = serde_json::to_string(&body).expect("serialize");
        assert_eq!(
            json,
            r#"{"status":"ok","algo_name":"X","pgroups":[],"pnames":[],"vehicles":[],"psns":[]}"#
        );
    }

    #[test]
    fn data_body_echoes_request_identity() {
        let filter = SeriesFilter::new("X", "V1", "S1", "P1");
        let body = DataBody::new(&filter, Vec::new());
        let json = serde_json::to_string(&body).expect("serialize");
        assert_eq!(
            json,
            r#"{"status":"ok","algo_name":"X","vehicle":"V1","psn":"S1","pname":"P1","points":[]}"#
        );
    }

    #[test]
    fn error_body_shape() {
        let body = ErrorBody::new("algo_name is required");
        let json = serde_json::to_string(&body).expect("serialize");
        assert_eq!(json, r#"{"status":"error","message":"algo_name is required"}"#);
    }
}
