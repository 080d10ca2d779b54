//!
//! Export format for aggregated benchmark data.
//!

///
/// Export format for aggregated benchmark data.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Pretty-printed JSON list of rows.
    #[default]
    Json,
    /// Excel spreadsheet with native charts.
    Xlsx,
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xlsx" => Ok(Self::Xlsx),
            string => anyhow::bail!(
                "Unknown export format `{string}`. Supported formats: {}",
                [Self::Json, Self::Xlsx]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Xlsx => write!(f, "xlsx"),
        }
    }
}
