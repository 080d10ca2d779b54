//!
//! An overwritten measurement.
//!

///
/// An overwritten measurement.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Duplicate {
    /// The benchmark family.
    pub family: String,
    /// The input size.
    pub size: u64,
    /// The implementation variant.
    pub variant: String,
    /// The discarded earlier time.
    pub previous_ns: f64,
    /// The retained later time.
    pub current_ns: f64,
}

impl std::fmt::Display for Duplicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "`{}` size {} variant `{}` reported twice, {} ns/op replaced by {} ns/op",
            self.family, self.size, self.variant, self.previous_ns, self.current_ns
        )
    }
}
