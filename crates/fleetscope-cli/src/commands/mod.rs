//! CLI command definitions.

pub mod algos;
pub mod serve;
