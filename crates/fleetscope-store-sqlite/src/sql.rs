//! SQL rendering for the three read queries.
//!
//! Statements are rendered once per store from a validated
//! [`TableMapping`]; user-supplied values only ever travel as bound
//! parameters.

use crate::mapping::TableMapping;

/// The three parameterized query strings used by the store.
#[derive(Debug, Clone)]
pub(crate) struct SeriesSql {
    pub(crate) list_algos: String,
    pub(crate) params_for_algo: String,
    pub(crate) fetch_series: String,
}

pub(crate) fn build_series_sql(mapping: &TableMapping) -> SeriesSql {
    let list_algos = format!(
        "SELECT DISTINCT {algo} FROM {table} ORDER BY {algo}",
        algo = mapping.algo_name,
        table = mapping.table,
    );
    let params_for_algo = format!(
        "SELECT DISTINCT {pgroup}, {pname}, {vehicle}, {psn} FROM {table} WHERE {algo} = ?1",
        pgroup = mapping.pgroup,
        pname = mapping.pname,
        vehicle = mapping.vehicle,
        psn = mapping.psn,
        table = mapping.table,
        algo = mapping.algo_name,
    );
    let fetch_series = format!(
        "SELECT {date}, {pvalue}, {pgroup}, {pname}, {vehicle}, {psn} FROM {table} \
         WHERE {algo} = ?1 AND {vehicle} = ?2 AND {psn} = ?3 AND {pname} = ?4 \
         ORDER BY {date}",
        date = mapping.date,
        pvalue = mapping.pvalue,
        pgroup = mapping.pgroup,
        pname = mapping.pname,
        vehicle = mapping.vehicle,
        psn = mapping.psn,
        table = mapping.table,
        algo = mapping.algo_name,
    );
    SeriesSql {
        list_algos,
        params_for_algo,
        fetch_series,
    }
}
