//! Logical-to-physical name mapping for the analytics output table.

use fleetscope_store::StoreError;

/// Physical names of the backing table and its seven columns.
///
/// The column semantics are fixed; only the physical names vary per
/// deployment. Defaults match the conventional `algo_output` layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMapping {
    pub table: String,
    pub algo_name: String,
    pub pgroup: String,
    pub pname: String,
    pub vehicle: String,
    pub psn: String,
    pub date: String,
    pub pvalue: String,
}

impl Default for TableMapping {
    fn default() -> Self {
        Self {
            table: "algo_output".to_string(),
            algo_name: "algo_name".to_string(),
            pgroup: "pgroup".to_string(),
            pname: "pname".to_string(),
            vehicle: "vehicle".to_string(),
            psn: "psn".to_string(),
            date: "date".to_string(),
            pvalue: "pvalue".to_string(),
        }
    }
}

impl TableMapping {
    /// Validates every name as a bare SQL identifier.
    ///
    /// The names are rendered into SQL text once at store construction,
    /// so anything outside `[A-Za-z_][A-Za-z0-9_]*` is rejected here.
    ///
    /// # Errors
    ///
    /// Returns a `Storage` error naming the offending entry.
    pub fn validate(&self) -> Result<(), StoreError> {
        let entries = [
            ("table", &self.table),
            ("algo_name column", &self.algo_name),
            ("pgroup column", &self.pgroup),
            ("pname column", &self.pname),
            ("vehicle column", &self.vehicle),
            ("psn column", &self.psn),
            ("date column", &self.date),
            ("pvalue column", &self.pvalue),
        ];
        for (what, name) in entries {
            if !is_identifier(name) {
                return Err(StoreError::storage(format!(
                    "invalid {what} name: {name:?}"
                )));
            }
        }
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
