//! Axum router for the analytics read API.
//! Routes: `GET /api/analytics/algos` (discovery), `POST
//! /api/analytics/params_for_algo` (filter dimensions), `POST
//! /api/analytics/data` (series fetch), plus liveness/readiness probes.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map, Value};

use fleetscope_store::{AnalyticsStore, SeriesFilter, StoreError};

use crate::response::{AlgosBody, DataBody, ErrorBody, ParamsBody};

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Injected analytics store.
    pub store: Arc<dyn AnalyticsStore>,
}

/// Builds the axum `Router` with all analytics routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/analytics/algos", get(handle_algos))
        .route("/api/analytics/params_for_algo", post(handle_params_for_algo))
        .route("/api/analytics/data", post(handle_data))
        .route("/health", get(handle_health))
        .route("/health/ready", get(handle_ready))
        .with_state(state)
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": "fleetscope"}))
}

/// Readiness probe: returns `200 OK` once the server is accepting requests.
async fn handle_ready() -> impl IntoResponse {
    Json(json!({"status": "ready", "service": "fleetscope"}))
}

async fn handle_algos(State(state): State<AppState>) -> Response {
    tracing::debug!("listing algorithms");
    match state.store.list_algos().await {
        Ok(algos) => (StatusCode::OK, Json(AlgosBody::new(algos))).into_response(),
        Err(e) => store_error(&e),
    }
}

async fn handle_params_for_algo(State(state): State<AppState>, body: String) -> Response {
    let body = parse_body(&body);
    let Some(algo_name) = non_empty_str(&body, "algo_name") else {
        return validation_error("algo_name is required");
    };

    tracing::debug!(algo_name = %algo_name, "discovering filter dimensions");
    match state.store.params_for_algo(algo_name).await {
        Ok(params) => (StatusCode::OK, Json(ParamsBody::new(algo_name, params))).into_response(),
        Err(e) => store_error(&e),
    }
}

async fn handle_data(State(state): State<AppState>, body: String) -> Response {
    let body = parse_body(&body);
    let fields = [
        ("algo_name", non_empty_str(&body, "algo_name")),
        ("vehicle", non_empty_str(&body, "vehicle")),
        ("psn", non_empty_str(&body, "psn")),
        ("pname", non_empty_str(&body, "pname")),
    ];
    let filter = match fields {
        [(_, Some(algo_name)), (_, Some(vehicle)), (_, Some(psn)), (_, Some(pname))] => {
            SeriesFilter::new(algo_name, vehicle, psn, pname)
        }
        _ => {
            let missing: Vec<&str> = fields
                .iter()
                .filter(|(_, value)| value.is_none())
                .map(|(name, _)| *name)
                .collect();
            return validation_error(format!(
                "Missing required parameters: {}",
                missing.join(", ")
            ));
        }
    };

    tracing::debug!(
        algo_name = %filter.algo_name,
        vehicle = %filter.vehicle,
        psn = %filter.psn,
        pname = %filter.pname,
        "fetching series"
    );
    match state.store.fetch_series(&filter).await {
        Ok(points) => (StatusCode::OK, Json(DataBody::new(&filter, points))).into_response(),
        Err(e) => store_error(&e),
    }
}

/// Parses a request body leniently: anything that is not valid JSON is
/// treated as an empty object, so validation reports missing fields
/// instead of a parse failure.
fn parse_body(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Extracts a usable string field from the body. Missing keys, `null`,
/// non-string values and empty strings all count as absent.
fn non_empty_str<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Produces the 400 response for failed input validation.
fn validation_error(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorBody::new(message))).into_response()
}

/// Produces the 500 response for a store failure, surfacing the raw
/// error text in the body.
fn store_error(err: &StoreError) -> Response {
    tracing::warn!(error = %err, "store query failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new(err.to_string())),
    )
        .into_response()
}
