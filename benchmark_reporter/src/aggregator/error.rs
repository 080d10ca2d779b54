//!
//! Benchmark record aggregation error.
//!

///
/// Benchmark record aggregation error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The same measurement was reported twice while duplicates are forbidden.
    #[error("Duplicate measurement for `{family}` size {size} variant `{variant}`")]
    Duplicate {
        /// The benchmark family.
        family: String,
        /// The input size.
        size: u64,
        /// The implementation variant.
        variant: String,
    },
}
