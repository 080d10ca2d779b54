//!
//! Where the benchmark output comes from.
//!

use std::path::PathBuf;

use crate::capture::command::Command;

///
/// Where the benchmark output comes from.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Launch the runner and capture its output.
    Command(Command),
    /// Read a raw log saved by an earlier run.
    Replay(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Self::Command(Command::default())
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Command(command) => write!(f, "{command}"),
            Self::Replay(path) => write!(f, "{}", path.display()),
        }
    }
}
