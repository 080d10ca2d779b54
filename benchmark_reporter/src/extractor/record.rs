//!
//! A single benchmark measurement.
//!

///
/// A single benchmark measurement.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// The benchmark family, with its report suffix applied.
    pub family: String,
    /// The implementation variant, e.g. `Batched`.
    pub variant: String,
    /// The input size, at least 1.
    pub size: u64,
    /// The time of one operation in nanoseconds.
    pub time_ns: f64,
}

impl Record {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(family: &str, variant: &str, size: u64, time_ns: f64) -> Self {
        Self {
            family: family.to_owned(),
            variant: variant.to_owned(),
            size,
            time_ns,
        }
    }
}
