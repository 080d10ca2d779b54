//!
//! Machine-readable export of aggregated benchmark data.
//!

pub mod format;
pub mod json;
pub mod xlsx;

use std::path::Path;

use crate::aggregator::aggregation::Aggregation;
use crate::reporter::error::Error;

use self::format::Format;
use self::json::Json;
use self::xlsx::Xlsx;

///
/// Machine-readable export of aggregated benchmark data.
///
pub enum Export {
    /// A single text file.
    SingleFile(String),
    /// A single workbook.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Export {
    ///
    /// Builds the export of `aggregation` in `format`.
    ///
    pub fn new(
        aggregation: &Aggregation,
        format: Format,
        precision: usize,
        path: &Path,
    ) -> Result<Self, Error> {
        Ok(match format {
            Format::Json => Json::from(aggregation).into(),
            Format::Xlsx => Xlsx::new(aggregation, precision)
                .map_err(|error| Error::ExportWorkbook {
                    error,
                    path: path.to_path_buf(),
                })?
                .into(),
        })
    }

    ///
    /// Writes the export to `path`, replacing an existing file.
    ///
    pub fn write_to_file(self, path: &Path) -> Result<(), Error> {
        match self {
            Export::SingleFile(content) => {
                std::fs::write(path, content).map_err(|error| Error::ExportWrite {
                    error,
                    path: path.to_path_buf(),
                })?;
            }
            Export::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path)
                    .map_err(|error| Error::ExportWorkbook {
                        error,
                        path: path.to_path_buf(),
                    })?;
            }
        }
        Ok(())
    }
}

impl From<Json> for Export {
    fn from(value: Json) -> Self {
        Export::SingleFile(value.content)
    }
}

impl From<Xlsx> for Export {
    fn from(value: Xlsx) -> Self {
        Export::SingleFileXlsx(value.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::Export;
    use crate::aggregator::Aggregator;
    use crate::extractor::record::Record;
    use crate::reporter::export::format::Format;

    fn aggregation() -> crate::aggregator::aggregation::Aggregation {
        Aggregator::default()
            .aggregate(vec![
                Record::new("ChaChaShuffle", "Batched", 30, 150.0),
                Record::new("ChaChaShuffle", "Standard", 30, 300.0),
                Record::new("PCGShuffle", "Batched", 30, 120.0),
                Record::new("Sort", "Standard", 30, 40.0),
            ])
            .expect("Aggregation failure")
    }

    #[test]
    fn json_file() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let path = directory.path().join("results.json");

        Export::new(&aggregation(), Format::Json, 1, path.as_path())
            .expect("Export failure")
            .write_to_file(path.as_path())
            .expect("Export writing failure");

        let content = std::fs::read_to_string(path).expect("Export reading failure");
        let json: serde_json::Value = serde_json::from_str(content.as_str()).expect("Always valid");
        assert_eq!(json.as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn xlsx_file() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let path = directory.path().join("results.xlsx");

        Export::new(&aggregation(), Format::Xlsx, 2, path.as_path())
            .expect("Export failure")
            .write_to_file(path.as_path())
            .expect("Export writing failure");

        let bytes = std::fs::read(path).expect("Export reading failure");
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn error_missing_directory() {
        let directory = tempfile::tempdir().expect("Temporary directory creation");
        let path = directory.path().join("missing").join("results.json");

        let result = Export::new(&aggregation(), Format::Json, 1, path.as_path())
            .expect("Export failure")
            .write_to_file(path.as_path());

        assert!(matches!(
            result,
            Err(crate::reporter::error::Error::ExportWrite { .. })
        ));
    }
}
