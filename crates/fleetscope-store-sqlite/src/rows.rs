//! Row-to-domain mapping for the SQLite analytics store.

use fleetscope_types::{DataPoint, ParamRow};

/// Maps one `(pgroup, pname, vehicle, psn)` projection row.
pub(crate) fn row_to_param_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ParamRow> {
    Ok(ParamRow {
        pgroup: row.get(0)?,
        pname: row.get(1)?,
        vehicle: row.get(2)?,
        psn: row.get(3)?,
    })
}

/// Maps one series row into a `DataPoint`.
///
/// Column order follows the fetch query: date, pvalue, pgroup, pname,
/// vehicle, psn.
pub(crate) fn row_to_point(row: &rusqlite::Row<'_>) -> rusqlite::Result<DataPoint> {
    Ok(DataPoint {
        date: row.get(0)?,
        pvalue: row.get(1)?,
        pgroup: row.get(2)?,
        pname: row.get(3)?,
        vehicle: row.get(4)?,
        psn: row.get(5)?,
    })
}
