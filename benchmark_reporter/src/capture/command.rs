//!
//! The external benchmark runner invocation.
//!

///
/// The external benchmark runner invocation.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The executable name or path.
    pub program: String,
    /// The arguments passed to the executable.
    pub arguments: Vec<String>,
}

impl Command {
    /// The default runner executable.
    pub const DEFAULT_PROGRAM: &'static str = "go";

    /// The default runner arguments.
    pub const DEFAULT_ARGUMENTS: [&'static str; 2] = ["test", "-bench=."];

    ///
    /// A shortcut constructor.
    ///
    pub fn new<P, I, A>(program: P, arguments: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    ///
    /// Splits a command line into the program and its arguments.
    ///
    /// Returns `None` if `words` is empty.
    ///
    pub fn from_words(words: Vec<String>) -> Option<Self> {
        let mut words = words.into_iter();
        let program = words.next()?;
        Some(Self::new(program, words))
    }
}

impl Default for Command {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM, Self::DEFAULT_ARGUMENTS)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for argument in self.arguments.iter() {
            write!(f, " {argument}")?;
        }
        Ok(())
    }
}
