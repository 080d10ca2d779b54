//!
//! The verbatim benchmark runner output.
//!

use std::path::Path;

use crate::capture::error::Error;

///
/// The verbatim benchmark runner output.
///
/// Lines are kept in arrival order together with their terminators.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawLog {
    /// The captured lines.
    pub lines: Vec<String>,
}

impl RawLog {
    ///
    /// Splits a text into lines, keeping the terminators.
    ///
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_owned).collect(),
        }
    }

    ///
    /// Appends a line received from the runner.
    ///
    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    ///
    /// Returns the number of captured lines.
    ///
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    ///
    /// Whether nothing was captured.
    ///
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    ///
    /// Iterates over the captured lines.
    ///
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    ///
    /// Saves the log exactly as it was received.
    ///
    pub fn write_to_file(&self, path: &Path) -> Result<(), Error> {
        std::fs::write(path, self.lines.concat()).map_err(|error| Error::RawLogWriting {
            error,
            path: path.to_path_buf(),
        })
    }
}

impl TryFrom<&Path> for RawLog {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let bytes = std::fs::read(path).map_err(|error| Error::RawLogReading {
            error,
            path: path.to_path_buf(),
        })?;
        Ok(Self::from_text(String::from_utf8_lossy(bytes.as_slice()).as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::RawLog;

    #[test]
    fn from_text_keeps_terminators() {
        let log = RawLog::from_text("goos: linux\nPASS\nok  \tbatchedrand\t3.1s");

        assert_eq!(
            log.lines,
            vec!["goos: linux\n", "PASS\n", "ok  \tbatchedrand\t3.1s"]
        );
    }

    #[test]
    fn file_replay() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let path = directory.path().join("raw.log");
        let log = RawLog::from_text("first\r\nsecond\n\nthird\n");

        log.write_to_file(path.as_path()).expect("Raw log writing");
        let replayed = RawLog::try_from(path.as_path()).expect("Raw log reading");

        assert_eq!(replayed, log);
        assert_eq!(
            std::fs::read_to_string(path).expect("Raw log reading"),
            "first\r\nsecond\n\nthird\n"
        );
    }

    #[test]
    fn file_replay_invalid_utf8() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let path = directory.path().join("raw.log");
        std::fs::write(
            path.as_path(),
            b"caf\xE9\nBenchmarkChaCha/Batched_size_1-8 1 10.0 ns/op\n",
        )
        .expect("Raw log writing");

        let replayed = RawLog::try_from(path.as_path()).expect("Raw log reading");

        assert_eq!(
            replayed.lines,
            vec![
                "caf\u{FFFD}\n",
                "BenchmarkChaCha/Batched_size_1-8 1 10.0 ns/op\n"
            ]
        );
    }

    #[test]
    fn missing_file() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let path = directory.path().join("missing.log");

        assert!(matches!(
            RawLog::try_from(path.as_path()),
            Err(crate::capture::error::Error::RawLogReading { .. })
        ));
    }
}
