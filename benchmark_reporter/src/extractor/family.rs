//!
//! Benchmark family naming.
//!

///
/// Families whose benchmark names omit a suffix that reports must show.
///
pub const SUFFIXES: [(&str, &str); 2] = [("ChaCha", "Shuffle"), ("PCG", "Shuffle")];

///
/// Returns the report name of a benchmark family.
///
pub fn normalize(family: &str) -> String {
    SUFFIXES
        .iter()
        .find(|(name, _)| *name == family)
        .map(|(name, suffix)| format!("{name}{suffix}"))
        .unwrap_or_else(|| family.to_owned())
}
