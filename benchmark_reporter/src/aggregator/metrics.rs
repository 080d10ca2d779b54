//!
//! Metrics derived from a complete row.
//!

///
/// Metrics derived from a complete row.
///
/// Values are kept unrounded.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Metrics {
    /// The batched variant time per input item in nanoseconds.
    pub batched_per_item_ns: f64,
    /// The standard variant time per input item in nanoseconds.
    pub standard_per_item_ns: f64,
    /// The standard time divided by the batched time.
    pub speedup: f64,
}
