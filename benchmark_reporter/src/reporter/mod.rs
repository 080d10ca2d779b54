//!
//! Renders the aggregated rows as a table, charts, and exports.
//!

pub mod chart;
pub mod error;
pub mod export;
pub mod table;

use std::path::Path;
use std::path::PathBuf;

use crate::aggregator::aggregation::Aggregation;

use self::chart::Chart;
use self::error::Error;
use self::export::format::Format;
use self::export::Export;
use self::table::Table;

///
/// Renders the aggregated rows as a table, charts, and exports.
///
#[derive(Debug, Clone)]
pub struct Reporter {
    /// The directory receiving the chart files.
    pub output_directory: PathBuf,
    /// The prefix of every chart file name.
    pub output_prefix: String,
    /// The number of decimal places in the table and labels.
    pub precision: usize,
}

impl Default for Reporter {
    fn default() -> Self {
        Self {
            output_directory: PathBuf::from("."),
            output_prefix: String::new(),
            precision: Self::DEFAULT_PRECISION,
        }
    }
}

impl Reporter {
    /// The default number of decimal places.
    pub const DEFAULT_PRECISION: usize = 1;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(output_directory: PathBuf, output_prefix: String, precision: usize) -> Self {
        Self {
            output_directory,
            output_prefix,
            precision,
        }
    }

    ///
    /// Returns the table of the complete rows.
    ///
    pub fn table(&self, aggregation: &Aggregation) -> Table {
        Table::new(aggregation.complete_rows(), self.precision)
    }

    ///
    /// Returns one chart per family with at least one complete row, ordered by family.
    ///
    pub fn charts(&self, aggregation: &Aggregation) -> Vec<Chart> {
        aggregation
            .chart_families()
            .into_iter()
            .map(|family| {
                Chart::new(
                    family,
                    aggregation
                        .complete_rows()
                        .filter(|row| row.family == family),
                )
            })
            .collect()
    }

    ///
    /// Returns the path of the chart file.
    ///
    pub fn chart_path(&self, chart: &Chart) -> PathBuf {
        self.output_directory
            .join(chart.file_name(self.output_prefix.as_str()))
    }

    ///
    /// Writes a chart to the output directory and returns its path.
    ///
    pub fn write_chart(&self, chart: &Chart) -> Result<PathBuf, Error> {
        std::fs::create_dir_all(self.output_directory.as_path()).map_err(|error| {
            Error::OutputDirectory {
                error,
                path: self.output_directory.clone(),
            }
        })?;
        let path = self.chart_path(chart);
        chart.write_to_file(path.as_path(), self.precision)?;
        Ok(path)
    }

    ///
    /// Exports every row, including the incomplete ones, to `path`.
    ///
    pub fn export(&self, aggregation: &Aggregation, format: Format, path: &Path) -> Result<(), Error> {
        Export::new(aggregation, format, self.precision, path)?.write_to_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::Reporter;
    use crate::aggregator::Aggregator;
    use crate::extractor::record::Record;

    fn aggregation() -> crate::aggregator::aggregation::Aggregation {
        Aggregator::default()
            .aggregate(vec![
                Record::new("PCGShuffle", "Batched", 100, 300.0),
                Record::new("PCGShuffle", "Standard", 100, 600.0),
                Record::new("ChaChaShuffle", "Batched", 30, 150.0),
                Record::new("ChaChaShuffle", "Standard", 30, 300.0),
                Record::new("ChaChaShuffle", "Batched", 10, 50.0),
                Record::new("ChaChaShuffle", "Standard", 10, 100.0),
                Record::new("Sort", "Batched", 10, 50.0),
            ])
            .expect("Aggregation failure")
    }

    #[test]
    fn charts_per_family() {
        let charts = Reporter::default().charts(&aggregation());

        let families: Vec<&str> = charts.iter().map(|chart| chart.family.as_str()).collect();
        assert_eq!(families, vec!["ChaChaShuffle", "PCGShuffle"]);
        assert_eq!(charts[0].sizes, vec![10, 30]);
        assert_eq!(charts[1].sizes, vec![100]);
    }

    #[test]
    fn write_chart_overwrites() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let output_directory = directory.path().join("charts");
        let reporter = Reporter::new(output_directory.clone(), "nightly_".to_owned(), 1);
        let charts = reporter.charts(&aggregation());
        let stale = output_directory.join("nightly_chachashuffle_benchmark.svg");
        std::fs::create_dir_all(output_directory.as_path()).expect("Directory creation");
        std::fs::write(stale.as_path(), "stale").expect("Stale file writing");

        let path = reporter.write_chart(&charts[0]).expect("Chart writing failure");

        assert_eq!(path, stale);
        let content = std::fs::read_to_string(path).expect("Chart reading failure");
        assert!(content.starts_with("<svg "));
    }

    #[test]
    fn error_chart_write() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let blocker = directory.path().join("blocker");
        std::fs::write(blocker.as_path(), "not a directory").expect("File writing");
        let reporter = Reporter::new(blocker, String::new(), 1);
        let charts = reporter.charts(&aggregation());

        let result = reporter.write_chart(&charts[0]);

        assert!(matches!(
            result,
            Err(crate::reporter::error::Error::OutputDirectory { .. })
        ));
    }

    #[test]
    fn table_rows() {
        let table = Reporter::default().table(&aggregation());

        let keys: Vec<(&str, &str)> = table
            .rows
            .iter()
            .map(|row| (row[0].as_str(), row[1].as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![("ChaChaShuffle", "10"), ("ChaChaShuffle", "30"), ("PCGShuffle", "100")]
        );
    }
}
