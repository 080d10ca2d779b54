//!
//! Benchmark output capture error.
//!

use std::path::PathBuf;

///
/// Benchmark output capture error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The runner executable is missing or cannot be started.
    #[error("Benchmark command `{command}` launching: {error}")]
    Launch {
        /// The command line.
        command: String,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The runner was started, but exited with a failure status.
    #[error("Benchmark command `{command}` failed with {status}")]
    Exit {
        /// The command line.
        command: String,
        /// The exit status of the runner.
        status: std::process::ExitStatus,
    },
    /// The runner output or its termination could not be read.
    #[error("Benchmark command `{command}` output reading: {error}")]
    Reading {
        /// The command line.
        command: String,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The captured output could not be echoed to the terminal.
    #[error("Benchmark output echoing: {0}")]
    Echo(std::io::Error),
    /// Error reading a saved raw log.
    #[error("Reading raw log {path:?}: {error}")]
    RawLogReading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the raw log.
        path: PathBuf,
    },
    /// Error saving a raw log.
    #[error("Writing raw log {path:?}: {error}")]
    RawLogWriting {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the raw log.
        path: PathBuf,
    },
}

impl Error {
    ///
    /// Returns the exit code of a failed runner, if it exited with one.
    ///
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Exit { status, .. } => status.code(),
            _ => None,
        }
    }
}
