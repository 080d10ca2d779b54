//!
//! Groups benchmark records by family and input size.
//!

pub mod aggregation;
pub mod duplicate;
pub mod error;
pub mod metrics;
pub mod row;
pub mod variant;

use std::collections::BTreeMap;

use crate::extractor::record::Record;

use self::aggregation::Aggregation;
use self::duplicate::Duplicate;
use self::error::Error;
use self::row::Row;

///
/// Groups benchmark records by family and input size.
///
/// A later measurement of the same family, size, and variant replaces the earlier one.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct Aggregator {
    /// Fails on the first overwritten measurement instead of recording it.
    pub strict_duplicates: bool,
}

impl Aggregator {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(strict_duplicates: bool) -> Self {
        Self { strict_duplicates }
    }

    ///
    /// Aggregates the records into rows sorted by family and then by size.
    ///
    pub fn aggregate(&self, records: Vec<Record>) -> Result<Aggregation, Error> {
        let mut groups: BTreeMap<(String, u64), BTreeMap<String, f64>> = BTreeMap::new();
        let mut duplicates = Vec::new();

        for Record {
            family,
            variant,
            size,
            time_ns,
        } in records.into_iter()
        {
            let times = groups.entry((family.clone(), size)).or_default();
            let Some(previous_ns) = times.insert(variant.clone(), time_ns) else {
                continue;
            };
            if self.strict_duplicates {
                return Err(Error::Duplicate {
                    family,
                    size,
                    variant,
                });
            }
            duplicates.push(Duplicate {
                family,
                size,
                variant,
                previous_ns,
                current_ns: time_ns,
            });
        }

        let rows = groups
            .into_iter()
            .map(|((family, size), times_ns)| Row::new(family, size, times_ns))
            .collect();
        Ok(Aggregation { rows, duplicates })
    }
}
