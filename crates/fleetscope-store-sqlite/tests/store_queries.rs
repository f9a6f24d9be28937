//! Query behavior tests for `SqliteAnalyticsStore`, run against a seeded
//! in-memory database.

use fleetscope_store::{AnalyticsStore, SeriesFilter};
use fleetscope_store_sqlite::{SqliteAnalyticsStore, TableMapping};

const SCHEMA: &str = "CREATE TABLE algo_output (
    algo_name TEXT,
    pgroup    TEXT,
    pname     TEXT,
    vehicle   TEXT,
    psn       TEXT,
    date      TEXT,
    pvalue    REAL
)";

fn store_with_rows(rows: &str) -> SqliteAnalyticsStore {
    let conn = rusqlite::Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch(&format!("{SCHEMA}; {rows}")).expect("seed rows");
    SqliteAnalyticsStore::from_connection(conn, &TableMapping::default()).expect("create store")
}

fn seeded_store() -> SqliteAnalyticsStore {
    store_with_rows(
        "INSERT INTO algo_output VALUES
            ('X', 'G1', 'P1', 'V1', 'S1', '2024-01-01', 1.0),
            ('X', 'G2', 'P1', 'V1', 'S1', '2024-01-02', 2.0),
            ('brakes', 'G1', 'temp', 'V2', 'S9', '2023-06-02', 18.25),
            ('brakes', NULL, 'temp', 'V2', 'S9', '2023-06-01', 17.5)",
    )
}

#[tokio::test]
async fn list_algos_returns_sorted_distinct_names() {
    let store = seeded_store();
    let algos = store.list_algos().await.expect("list algos");
    // Uppercase sorts before lowercase under the byte ordering.
    assert_eq!(algos, vec!["X", "brakes"]);
}

#[tokio::test]
async fn list_algos_skips_null_names() {
    let store = store_with_rows(
        "INSERT INTO algo_output VALUES
            (NULL, 'G1', 'P1', 'V1', 'S1', '2024-01-01', 1.0),
            ('X', 'G1', 'P1', 'V1', 'S1', '2024-01-01', 1.0)",
    );
    let algos = store.list_algos().await.expect("list algos");
    assert_eq!(algos, vec!["X"]);
}

#[tokio::test]
async fn list_algos_on_empty_table_is_empty() {
    let store = store_with_rows("");
    let algos = store.list_algos().await.expect("list algos");
    assert!(algos.is_empty());
}

#[tokio::test]
async fn params_for_algo_derives_four_sorted_lists() {
    let store = seeded_store();
    let params = store.params_for_algo("X").await.expect("params");
    assert_eq!(params.pgroups, vec!["G1", "G2"]);
    assert_eq!(params.pnames, vec!["P1"]);
    assert_eq!(params.vehicles, vec!["V1"]);
    assert_eq!(params.psns, vec!["S1"]);
}

#[tokio::test]
async fn params_for_algo_excludes_null_values() {
    let store = seeded_store();
    let params = store.params_for_algo("brakes").await.expect("params");
    // One brakes row has a NULL pgroup; it must not surface in the list.
    assert_eq!(params.pgroups, vec!["G1"]);
    assert_eq!(params.pnames, vec!["temp"]);
}

#[tokio::test]
async fn params_for_unknown_algo_is_empty_not_error() {
    let store = seeded_store();
    let params = store.params_for_algo("no-such-algo").await.expect("params");
    assert!(params.pgroups.is_empty());
    assert!(params.pnames.is_empty());
    assert!(params.vehicles.is_empty());
    assert!(params.psns.is_empty());
}

#[tokio::test]
async fn fetch_series_orders_points_by_date() {
    let store = seeded_store();
    let filter = SeriesFilter::new("brakes", "V2", "S9", "temp");
    let points = store.fetch_series(&filter).await.expect("fetch");
    // Rows were inserted newest-first; the query re-orders them.
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].date, "2023-06-01");
    assert_eq!(points[0].pvalue, 17.5);
    assert_eq!(points[1].date, "2023-06-02");
    assert_eq!(points[1].pvalue, 18.25);
}

#[tokio::test]
async fn fetch_series_echoes_row_fields() {
    let store = seeded_store();
    let filter = SeriesFilter::new("X", "V1", "S1", "P1");
    let points = store.fetch_series(&filter).await.expect("fetch");
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].pgroup.as_deref(), Some("G1"));
    assert_eq!(points[0].pname, "P1");
    assert_eq!(points[0].vehicle, "V1");
    assert_eq!(points[0].psn, "S1");
    assert_eq!(points[1].pgroup.as_deref(), Some("G2"));
}

#[tokio::test]
async fn fetch_series_keeps_null_pgroup_rows() {
    let store = store_with_rows(
        "INSERT INTO algo_output VALUES
            ('X', NULL, 'P1', 'V1', 'S1', '2024-01-01', 1.0)",
    );
    let filter = SeriesFilter::new("X", "V1", "S1", "P1");
    let points = store.fetch_series(&filter).await.expect("fetch");
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].pgroup, None);
}

#[tokio::test]
async fn fetch_series_requires_all_four_to_match() {
    let store = seeded_store();
    let filter = SeriesFilter::new("X", "V2", "S1", "P1");
    let points = store.fetch_series(&filter).await.expect("fetch");
    assert!(points.is_empty());
}
