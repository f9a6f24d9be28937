//! Filter-dimension discovery types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One `(pgroup, pname, vehicle, psn)` projection row for an algorithm.
///
/// Every field is optional because the backing table allows NULLs in any
/// of the four columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamRow {
    pub pgroup: Option<String>,
    pub pname: Option<String>,
    pub vehicle: Option<String>,
    pub psn: Option<String>,
}

/// The four filter dimensions recorded for one algorithm.
///
/// Each list is deduplicated, sorted ascending, and free of NULL entries.
/// The lists are independent projections of the same row set, not a
/// cross-product: a `pgroup` and a `vehicle` both present here need not
/// co-occur in any single row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgoParams {
    pub pgroups: Vec<String>,
    pub pnames: Vec<String>,
    pub vehicles: Vec<String>,
    pub psns: Vec<String>,
}

impl AlgoParams {
    /// Derives the four lists from projected rows, dropping NULL values
    /// per dimension.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = ParamRow>,
    {
        let mut pgroups = BTreeSet::new();
        let mut pnames = BTreeSet::new();
        let mut vehicles = BTreeSet::new();
        let mut psns = BTreeSet::new();

        for row in rows {
            if let Some(pgroup) = row.pgroup {
                pgroups.insert(pgroup);
            }
            if let Some(pname) = row.pname {
                pnames.insert(pname);
            }
            if let Some(vehicle) = row.vehicle {
                vehicles.insert(vehicle);
            }
            if let Some(psn) = row.psn {
                psns.insert(psn);
            }
        }

        Self {
            pgroups: pgroups.into_iter().collect(),
            pnames: pnames.into_iter().collect(),
            vehicles: vehicles.into_iter().collect(),
            psns: psns.into_iter().collect(),
        }
    }
}
