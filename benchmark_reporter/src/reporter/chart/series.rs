//!
//! One variant's bars in a chart.
//!

///
/// One variant's bars in a chart.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// The variant name shown in the legend.
    pub name: &'static str,
    /// The SVG fill color.
    pub color: &'static str,
    /// The time per item for each chart category.
    pub values: Vec<f64>,
}

impl Series {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: &'static str, color: &'static str, values: Vec<f64>) -> Self {
        Self {
            name,
            color,
            values,
        }
    }
}
