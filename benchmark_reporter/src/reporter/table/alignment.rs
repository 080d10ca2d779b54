//!
//! Table column alignment.
//!

///
/// Table column alignment.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Text columns.
    Left,
    /// Numeric columns.
    Right,
}

impl Alignment {
    ///
    /// Returns the Markdown separator cell of the given width.
    ///
    pub fn separator(&self, width: usize) -> String {
        match self {
            Self::Left => format!(":{}", "-".repeat(width + 1)),
            Self::Right => format!("{}:", "-".repeat(width + 1)),
        }
    }

    ///
    /// Pads `cell` to the given width.
    ///
    pub fn pad(&self, cell: &str, width: usize) -> String {
        match self {
            Self::Left => format!("{cell:<width$}"),
            Self::Right => format!("{cell:>width$}"),
        }
    }
}
