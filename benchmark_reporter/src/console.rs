//!
//! Status and warning lines printed to the terminal.
//!

use colored::Colorize;

///
/// Status and warning lines printed to the terminal.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct Console {
    /// Suppresses everything but the results table and fatal errors.
    pub quiet: bool,
}

impl Console {
    /// Width of the right-aligned status verb.
    const VERB_WIDTH: usize = 12;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    ///
    /// Prints a status line, e.g. `     Running go test -bench=.`.
    ///
    pub fn status<M>(&self, verb: &str, message: M)
    where
        M: std::fmt::Display,
    {
        if self.quiet {
            return;
        }
        let verb = format!("{verb:>width$}", width = Self::VERB_WIDTH);
        println!("{} {message}", verb.bright_green().bold());
    }

    ///
    /// Prints a warning to `stderr`.
    ///
    pub fn warning<M>(&self, message: M)
    where
        M: std::fmt::Display,
    {
        if self.quiet {
            return;
        }
        eprintln!("{} {message}", "Warning:".bright_yellow().bold());
    }
}
