//!
//! The aggregated benchmark results.
//!

use crate::aggregator::duplicate::Duplicate;
use crate::aggregator::row::Row;

///
/// The aggregated benchmark results.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Aggregation {
    /// The rows sorted by family, then by size.
    pub rows: Vec<Row>,
    /// The measurements that were overwritten by later ones.
    pub duplicates: Vec<Duplicate>,
}

impl Aggregation {
    ///
    /// Rows with both compared variants, in row order.
    ///
    pub fn complete_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.is_complete())
    }

    ///
    /// Rows missing at least one compared variant, in row order.
    ///
    pub fn incomplete_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| !row.is_complete())
    }

    ///
    /// The distinct families that have at least one complete row.
    ///
    pub fn chart_families(&self) -> Vec<&str> {
        let mut families: Vec<&str> = self.complete_rows().map(|row| row.family.as_str()).collect();
        families.dedup();
        families
    }
}
