//!
//! JSON export of every aggregated row.
//!

use std::collections::BTreeMap;

use crate::aggregator::aggregation::Aggregation;
use crate::aggregator::row::Row;

///
/// One exported row.
///
/// Incomplete rows are exported with their raw times and without a speedup.
///
#[derive(Debug, serde::Serialize)]
struct Entry<'a> {
    family: &'a str,
    size: u64,
    complete: bool,
    times_ns: &'a BTreeMap<String, f64>,
    per_item_ns: BTreeMap<&'a str, f64>,
    speedup: Option<f64>,
}

impl<'a> From<&'a Row> for Entry<'a> {
    fn from(row: &'a Row) -> Self {
        Self {
            family: row.family.as_str(),
            size: row.size,
            complete: row.is_complete(),
            times_ns: &row.times_ns,
            per_item_ns: row
                .times_ns
                .keys()
                .filter_map(|variant| {
                    row.per_item(variant)
                        .map(|per_item| (variant.as_str(), per_item))
                })
                .collect(),
            speedup: row.speedup(),
        }
    }
}

///
/// JSON export of every aggregated row.
///
#[derive(Debug, Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl From<&Aggregation> for Json {
    fn from(aggregation: &Aggregation) -> Self {
        let entries: Vec<Entry> = aggregation.rows.iter().map(Entry::from).collect();
        let content = serde_json::to_string_pretty(&entries).expect("Always valid");
        Self { content }
    }
}

#[cfg(test)]
mod tests {
    use super::Json;
    use crate::aggregator::Aggregator;
    use crate::extractor::record::Record;

    #[test]
    fn all_rows() {
        let aggregation = Aggregator::default()
            .aggregate(vec![
                Record::new("Sort", "Batched", 2, 10.0),
                Record::new("Sort", "Standard", 2, 20.0),
                Record::new("Sort", "Standard", 4, 40.0),
            ])
            .expect("Aggregation failure");

        let json: serde_json::Value =
            serde_json::from_str(Json::from(&aggregation).content.as_str())
                .expect("Always valid");

        assert_eq!(
            json,
            serde_json::json!([
                {
                    "family": "Sort",
                    "size": 2,
                    "complete": true,
                    "times_ns": { "Batched": 10.0, "Standard": 20.0 },
                    "per_item_ns": { "Batched": 5.0, "Standard": 10.0 },
                    "speedup": 2.0
                },
                {
                    "family": "Sort",
                    "size": 4,
                    "complete": false,
                    "times_ns": { "Standard": 40.0 },
                    "per_item_ns": { "Standard": 10.0 },
                    "speedup": null
                }
            ])
        );
    }
}
