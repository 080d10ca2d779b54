//!
//! The outcome of a successful pipeline run.
//!

use std::path::PathBuf;

use crate::aggregator::aggregation::Aggregation;
use crate::reporter::table::Table;

///
/// The outcome of a successful pipeline run.
///
#[derive(Debug)]
pub struct Summary {
    /// The number of extracted records.
    pub records: usize,
    /// The aggregated rows.
    pub aggregation: Aggregation,
    /// The printed table.
    pub table: Table,
    /// The chart files written, in family order.
    pub charts: Vec<PathBuf>,
}
