//!
//! The benchmark reporter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark reporter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the live output echo, status lines, and warnings.
    #[arg(short, long)]
    pub quiet: bool,

    /// Parses a raw log saved by `--raw-log` instead of running the benchmarks.
    #[arg(long, conflicts_with = "command")]
    pub replay: Option<PathBuf>,

    /// Saves the captured benchmark output verbatim.
    #[arg(long)]
    pub raw_log: Option<PathBuf>,

    /// Directory receiving the chart files.
    #[arg(short, long, default_value = ".")]
    pub output_directory: PathBuf,

    /// Prefix of every chart file name.
    #[arg(long, default_value_t = String::new())]
    pub output_prefix: String,

    /// Decimal places in the table and chart labels.
    #[arg(long, default_value_t = benchmark_reporter::Reporter::DEFAULT_PRECISION)]
    pub precision: usize,

    /// Export format of all aggregated rows: `json` or `xlsx`.
    #[arg(long, requires = "export_path")]
    pub export_format: Option<benchmark_reporter::ExportFormat>,

    /// Export destination.
    #[arg(long, requires = "export_format")]
    pub export_path: Option<PathBuf>,

    /// Fails if the same family, size, and variant is reported twice.
    /// By default the later measurement replaces the earlier one.
    #[arg(long)]
    pub strict_duplicates: bool,

    /// The benchmark command. Defaults to `go test -bench=.`.
    #[arg(last = true)]
    pub command: Vec<String>,
}

impl Arguments {
    ///
    /// Builds the pipeline described by the arguments.
    ///
    pub fn into_pipeline(self) -> benchmark_reporter::Pipeline {
        let source = match self.replay {
            Some(path) => benchmark_reporter::Source::Replay(path),
            None => benchmark_reporter::Source::Command(
                benchmark_reporter::Command::from_words(self.command).unwrap_or_default(),
            ),
        };
        let export = self.export_format.zip(self.export_path);

        benchmark_reporter::Pipeline {
            source,
            raw_log_path: self.raw_log,
            aggregator: benchmark_reporter::Aggregator::new(self.strict_duplicates),
            reporter: benchmark_reporter::Reporter::new(
                self.output_directory,
                self.output_prefix,
                self.precision,
            ),
            export,
            console: benchmark_reporter::Console::new(self.quiet),
        }
    }
}
