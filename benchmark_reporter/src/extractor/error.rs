//!
//! Benchmark record extraction error.
//!

///
/// Benchmark record extraction error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// None of the captured lines is a benchmark result.
    #[error("No benchmark data found in {lines} lines of output")]
    NoData {
        /// The number of lines inspected.
        lines: usize,
    },
}
