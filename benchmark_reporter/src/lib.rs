//!
//! The benchmark reporter library.
//!

pub mod aggregator;
pub mod capture;
pub mod console;
pub mod error;
pub mod extractor;
pub mod pipeline;
pub mod reporter;

pub use crate::aggregator::aggregation::Aggregation;
pub use crate::aggregator::duplicate::Duplicate;
pub use crate::aggregator::error::Error as AggregatorError;
pub use crate::aggregator::metrics::Metrics;
pub use crate::aggregator::row::Row;
pub use crate::aggregator::variant;
pub use crate::aggregator::Aggregator;
pub use crate::capture::command::Command;
pub use crate::capture::error::Error as CaptureError;
pub use crate::capture::raw_log::RawLog;
pub use crate::capture::Capture;
pub use crate::console::Console;
pub use crate::error::Error;
pub use crate::extractor::error::Error as ExtractorError;
pub use crate::extractor::record::Record;
pub use crate::extractor::Extractor;
pub use crate::pipeline::source::Source;
pub use crate::pipeline::summary::Summary;
pub use crate::pipeline::Pipeline;
pub use crate::reporter::chart::Chart;
pub use crate::reporter::error::Error as ReporterError;
pub use crate::reporter::export::format::Format as ExportFormat;
pub use crate::reporter::table::Table;
pub use crate::reporter::Reporter;

/// The process exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on failure.
pub const EXIT_CODE_FAILURE: i32 = 1;
