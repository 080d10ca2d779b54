//!
//! The compared implementation variants.
//!

/// The optimized variant.
pub const BATCHED: &str = "Batched";

/// The baseline variant.
pub const STANDARD: &str = "Standard";

/// The variants a row needs for its derived metrics.
pub const REQUIRED: [&str; 2] = [BATCHED, STANDARD];
