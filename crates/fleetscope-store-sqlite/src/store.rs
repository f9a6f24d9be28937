//! SQLite implementation of the `AnalyticsStore` trait.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::params;

use fleetscope_store::{AnalyticsStore, SeriesFilter, StoreError};
use fleetscope_types::{AlgoParams, DataPoint};

use crate::mapping::TableMapping;
use crate::rows::{row_to_param_row, row_to_point};
use crate::sql::{build_series_sql, SeriesSql};

/// SQLite-backed analytics store.
///
/// Holds one connection behind a mutex. Every query acquires the guard
/// for its own scope, so the connection is released on each exit path,
/// including errors.
pub struct SqliteAnalyticsStore {
    conn: Mutex<rusqlite::Connection>,
    sql: SeriesSql,
}

/// Maps a `rusqlite::Error` to a `StoreError`, keeping the backend text.
fn map_sqlite_err(e: rusqlite::Error) -> StoreError {
    StoreError::Storage {
        message: e.to_string(),
    }
}

impl SqliteAnalyticsStore {
    /// Opens the SQLite database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the mapping
    /// names an invalid identifier.
    pub fn open(path: &str, mapping: &TableMapping) -> Result<Self, StoreError> {
        let conn = rusqlite::Connection::open(path).map_err(map_sqlite_err)?;
        Self::from_connection(conn, mapping)
    }

    /// Wraps an already-open connection.
    ///
    /// Tests use this to seed an in-memory database before handing it
    /// to the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the mapping names an invalid identifier.
    pub fn from_connection(
        conn: rusqlite::Connection,
        mapping: &TableMapping,
    ) -> Result<Self, StoreError> {
        mapping.validate()?;
        Ok(Self {
            conn: Mutex::new(conn),
            sql: build_series_sql(mapping),
        })
    }

    /// Acquires the connection guard for one query.
    fn lock_conn(&self) -> Result<MutexGuard<'_, rusqlite::Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|e| StoreError::storage(e.to_string()))
    }
}

#[async_trait]
impl AnalyticsStore for SqliteAnalyticsStore {
    async fn list_algos(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(&self.sql.list_algos).map_err(map_sqlite_err)?;
        let names = stmt
            .query_map([], |row| row.get::<_, Option<String>>(0))
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        // A NULL algorithm name is not listable; skip it.
        Ok(names.into_iter().flatten().collect())
    }

    async fn params_for_algo(&self, algo_name: &str) -> Result<AlgoParams, StoreError> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(&self.sql.params_for_algo)
            .map_err(map_sqlite_err)?;
        let rows = stmt
            .query_map(params![algo_name], row_to_param_row)
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        Ok(AlgoParams::from_rows(rows))
    }

    async fn fetch_series(&self, filter: &SeriesFilter) -> Result<Vec<DataPoint>, StoreError> {
        let conn = self.lock_conn()?;
        let mut stmt = conn
            .prepare(&self.sql.fetch_series)
            .map_err(map_sqlite_err)?;
        let points = stmt
            .query_map(
                params![filter.algo_name, filter.vehicle, filter.psn, filter.pname],
                row_to_point,
            )
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        Ok(points)
    }
}
