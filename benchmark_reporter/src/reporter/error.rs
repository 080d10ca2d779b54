//!
//! Benchmark report writing error.
//!

use std::path::PathBuf;

///
/// Benchmark report writing error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error creating the chart output directory.
    #[error("Creating output directory {path:?}: {error}")]
    OutputDirectory {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the directory.
        path: PathBuf,
    },
    /// Error saving a chart.
    #[error("Chart file {path:?} writing: {error}")]
    ChartWrite {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the chart file.
        path: PathBuf,
    },
    /// Error saving a JSON export.
    #[error("Export file {path:?} writing: {error}")]
    ExportWrite {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the export file.
        path: PathBuf,
    },
    /// Error building or saving an XLSX export.
    #[error("Export workbook {path:?} writing: {error}")]
    ExportWorkbook {
        /// The underlying workbook error.
        error: rust_xlsxwriter::XlsxError,
        /// The path to the export file.
        path: PathBuf,
    },
}
