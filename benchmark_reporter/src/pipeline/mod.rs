//!
//! Runs capture, extraction, aggregation, and reporting in sequence.
//!

pub mod source;
pub mod summary;

use std::path::PathBuf;

use crate::aggregator::Aggregator;
use crate::capture::raw_log::RawLog;
use crate::capture::Capture;
use crate::console::Console;
use crate::error::Error;
use crate::extractor::Extractor;
use crate::reporter::export::format::Format;
use crate::reporter::Reporter;

use self::source::Source;
use self::summary::Summary;

///
/// Runs capture, extraction, aggregation, and reporting in sequence.
///
/// Each stage consumes the complete output of the previous one. The first
/// failure aborts the remaining stages.
///
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    /// The origin of the benchmark output.
    pub source: Source,
    /// Where to save the captured output, if anywhere.
    pub raw_log_path: Option<PathBuf>,
    /// The aggregation settings.
    pub aggregator: Aggregator,
    /// The report settings.
    pub reporter: Reporter,
    /// The optional export format and destination.
    pub export: Option<(Format, PathBuf)>,
    /// The terminal output settings.
    pub console: Console,
}

impl Pipeline {
    ///
    /// Runs the pipeline to completion.
    ///
    pub fn run(self) -> Result<Summary, Error> {
        let log = self.capture()?;
        if let Some(path) = self.raw_log_path.as_deref() {
            log.write_to_file(path)?;
        }

        self.console.status("Parsing", format!("{} lines of output", log.len()));
        let records = Extractor::extract(&log)?;
        let record_count = records.len();

        let aggregation = self.aggregator.aggregate(records)?;
        for duplicate in aggregation.duplicates.iter() {
            self.console.warning(duplicate);
        }
        for row in aggregation.incomplete_rows() {
            self.console.warning(format!(
                "`{}` size {} is missing {} and is left out of the table and charts",
                row.family,
                row.size,
                row.missing_variants().join(", ")
            ));
        }

        let table = self.reporter.table(&aggregation);
        println!();
        println!("{table}");
        println!();

        let mut charts = Vec::new();
        for chart in self.reporter.charts(&aggregation).iter() {
            let path = self.reporter.write_chart(chart)?;
            self.console.status("Saved", format!("chart: {}", path.display()));
            charts.push(path);
        }

        if let Some((format, path)) = self.export.as_ref() {
            self.reporter.export(&aggregation, *format, path.as_path())?;
            self.console
                .status("Exported", format!("{format}: {}", path.display()));
        }

        self.console.status(
            "Finished",
            format!("{record_count} records, {} charts", charts.len()),
        );
        Ok(Summary {
            records: record_count,
            aggregation,
            table,
            charts,
        })
    }

    ///
    /// Obtains the raw log from the configured source.
    ///
    fn capture(&self) -> Result<RawLog, Error> {
        let log = match &self.source {
            Source::Command(command) => {
                self.console.status("Running", command);
                let log = if self.console.quiet {
                    Capture::run(command, std::io::sink())?
                } else {
                    Capture::run(command, std::io::stdout())?
                };
                self.console.status("Completed", command);
                log
            }
            Source::Replay(path) => {
                self.console.status("Replaying", path.display());
                RawLog::try_from(path.as_path())?
            }
        };
        Ok(log)
    }
}
