//! Configuration schema types.

use serde::{Deserialize, Serialize};

/// Top-level fleetscope configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FleetscopeConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub http: HttpConfig,
    /// Analytics store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// TCP port the API listens on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

/// Analytics store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite database.
    #[serde(default = "default_db_path")]
    pub database_path: String,
    /// Name of the backing table.
    #[serde(default = "default_table")]
    pub table: String,
    /// Physical column names of the backing table.
    #[serde(default)]
    pub columns: ColumnConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: default_db_path(),
            table: default_table(),
            columns: ColumnConfig::default(),
        }
    }
}

fn default_db_path() -> String {
    "fleetscope.db".to_string()
}

fn default_table() -> String {
    "algo_output".to_string()
}

/// Physical column names, overridable per deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Algorithm name column.
    #[serde(default = "default_algo_name_col")]
    pub algo_name: String,
    /// Parameter group column.
    #[serde(default = "default_pgroup_col")]
    pub pgroup: String,
    /// Parameter name column.
    #[serde(default = "default_pname_col")]
    pub pname: String,
    /// Vehicle identifier column.
    #[serde(default = "default_vehicle_col")]
    pub vehicle: String,
    /// Unit serial number column.
    #[serde(default = "default_psn_col")]
    pub psn: String,
    /// Observation date column.
    #[serde(default = "default_date_col")]
    pub date: String,
    /// Parameter value column.
    #[serde(default = "default_pvalue_col")]
    pub pvalue: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            algo_name: default_algo_name_col(),
            pgroup: default_pgroup_col(),
            pname: default_pname_col(),
            vehicle: default_vehicle_col(),
            psn: default_psn_col(),
            date: default_date_col(),
            pvalue: default_pvalue_col(),
        }
    }
}

fn default_algo_name_col() -> String {
    "algo_name".to_string()
}
fn default_pgroup_col() -> String {
    "pgroup".to_string()
}
fn default_pname_col() -> String {
    "pname".to_string()
}
fn default_vehicle_col() -> String {
    "vehicle".to_string()
}
fn default_psn_col() -> String {
    "psn".to_string()
}
fn default_date_col() -> String {
    "date".to_string()
}
fn default_pvalue_col() -> String {
    "pvalue".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "fleetscope=trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
