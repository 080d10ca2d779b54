//!
//! All measurements of one benchmark family at one input size.
//!

use std::collections::BTreeMap;

use crate::aggregator::metrics::Metrics;
use crate::aggregator::variant;

///
/// All measurements of one benchmark family at one input size.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Row {
    /// The benchmark family.
    pub family: String,
    /// The input size.
    pub size: u64,
    /// The time of one operation per variant, ordered by variant name.
    pub times_ns: BTreeMap<String, f64>,
}

impl Row {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(family: String, size: u64, times_ns: BTreeMap<String, f64>) -> Self {
        Self {
            family,
            size,
            times_ns,
        }
    }

    ///
    /// Returns the raw time of `variant`.
    ///
    pub fn time(&self, variant: &str) -> Option<f64> {
        self.times_ns.get(variant).copied()
    }

    ///
    /// Returns the time of `variant` divided by the input size.
    ///
    pub fn per_item(&self, variant: &str) -> Option<f64> {
        self.time(variant).map(|time| time / self.size as f64)
    }

    ///
    /// Returns the standard time divided by the batched time.
    ///
    pub fn speedup(&self) -> Option<f64> {
        let batched = self.time(variant::BATCHED)?;
        let standard = self.time(variant::STANDARD)?;
        Some(standard / batched)
    }

    ///
    /// Returns the derived metrics, or `None` if the row is incomplete.
    ///
    pub fn metrics(&self) -> Option<Metrics> {
        Some(Metrics {
            batched_per_item_ns: self.per_item(variant::BATCHED)?,
            standard_per_item_ns: self.per_item(variant::STANDARD)?,
            speedup: self.speedup()?,
        })
    }

    ///
    /// Whether both compared variants are present.
    ///
    pub fn is_complete(&self) -> bool {
        self.missing_variants().is_empty()
    }

    ///
    /// Returns the compared variants that were not reported.
    ///
    pub fn missing_variants(&self) -> Vec<&'static str> {
        variant::REQUIRED
            .into_iter()
            .filter(|variant| !self.times_ns.contains_key(*variant))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::Row;
    use crate::aggregator::metrics::Metrics;

    fn row(size: u64, times: &[(&str, f64)]) -> Row {
        Row::new(
            "Sort".to_owned(),
            size,
            times
                .iter()
                .map(|(variant, time)| (variant.to_string(), *time))
                .collect::<BTreeMap<String, f64>>(),
        )
    }

    #[test]
    fn metrics() {
        let row = row(1, &[("Batched", 10.0), ("Standard", 20.0)]);

        assert_eq!(
            row.metrics(),
            Some(Metrics {
                batched_per_item_ns: 10.0,
                standard_per_item_ns: 20.0,
                speedup: 2.0,
            })
        );
    }

    #[test]
    fn metrics_unrounded() {
        let row = row(500, &[("Batched", 10.0), ("Standard", 20.0)]);
        let metrics = row.metrics().expect("Always valid");

        assert_eq!(metrics.batched_per_item_ns, 0.02);
        assert_eq!(metrics.standard_per_item_ns, 0.04);
        assert_eq!(metrics.speedup, 2.0);
    }

    #[test]
    fn incomplete() {
        let row = row(30, &[("Batched", 10.0)]);

        assert!(!row.is_complete());
        assert_eq!(row.missing_variants(), vec!["Standard"]);
        assert_eq!(row.metrics(), None);
        assert_eq!(row.speedup(), None);
        assert!((row.per_item("Batched").expect("Always valid") - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn extra_variant() {
        let row = row(2, &[("Batched", 10.0), ("Parallel", 4.0), ("Standard", 30.0)]);

        assert!(row.is_complete());
        assert_eq!(row.speedup(), Some(3.0));
        assert_eq!(
            row.times_ns.keys().collect::<Vec<_>>(),
            vec!["Batched", "Parallel", "Standard"]
        );
    }
}
