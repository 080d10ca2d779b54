//!
//! The benchmark reporter error.
//!

///
/// The benchmark reporter error.
///
/// Every variant is fatal and aborts the remaining pipeline stages.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The benchmark runner could not be launched, failed, or its output could not be read.
    #[error(transparent)]
    Capture(#[from] crate::capture::error::Error),
    /// No benchmark records could be extracted.
    #[error(transparent)]
    Extractor(#[from] crate::extractor::error::Error),
    /// The records could not be aggregated.
    #[error(transparent)]
    Aggregator(#[from] crate::aggregator::error::Error),
    /// The charts or the export could not be written.
    #[error(transparent)]
    Reporter(#[from] crate::reporter::error::Error),
}
