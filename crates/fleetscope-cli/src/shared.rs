//! Shared helpers used across CLI commands.
//!
//! Centralises opening the SQLite analytics store with the configured
//! table mapping, ensuring consistent defaults everywhere.

use std::sync::Arc;

use fleetscope_config::FleetscopeConfig;
use fleetscope_store::AnalyticsStore;
use fleetscope_store_sqlite::{SqliteAnalyticsStore, TableMapping};

/// Opens the SQLite analytics store.
///
/// Uses the configured database path unless `db` overrides it.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the configured
/// table mapping names an invalid identifier.
pub fn open_store(
    db: &Option<String>,
    config: &FleetscopeConfig,
) -> anyhow::Result<Arc<dyn AnalyticsStore>> {
    let path = db
        .clone()
        .unwrap_or_else(|| config.store.database_path.clone());
    if let Some(parent) = std::path::Path::new(&path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let store = SqliteAnalyticsStore::open(&path, &table_mapping(config))
        .map_err(|e| anyhow::anyhow!("store error: {e}"))?;
    Ok(Arc::new(store))
}

/// Translates the configured table and column names into the adapter's
/// mapping.
pub fn table_mapping(config: &FleetscopeConfig) -> TableMapping {
    let cols = &config.store.columns;
    TableMapping {
        table: config.store.table.clone(),
        algo_name: cols.algo_name.clone(),
        pgroup: cols.pgroup.clone(),
        pname: cols.pname.clone(),
        vehicle: cols.vehicle.clone(),
        psn: cols.psn.clone(),
        date: cols.date.clone(),
        pvalue: cols.pvalue.clone(),
    }
}
