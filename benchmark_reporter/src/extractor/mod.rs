//!
//! Extracts benchmark records from the captured output.
//!

pub mod error;
pub mod family;
pub mod record;

use regex::Regex;

use crate::capture::raw_log::RawLog;

use self::error::Error;
use self::record::Record;

lazy_static::lazy_static! {
    ///
    /// The benchmark result line, e.g. `BenchmarkChaCha/Batched_size_1000-8 500000 42.5 ns/op`.
    ///
    static ref LINE: Regex = Regex::new(
        r"^Benchmark([[:alnum:]]+)/([[:alnum:]]+)_size_(\d+)-\S+\s+\S+\s+([\d.]+) ns/op"
    )
    .expect("Always valid");
}

///
/// Extracts benchmark records from the captured output.
///
pub struct Extractor;

impl Extractor {
    ///
    /// Extracts one record per result line, in the order of the log.
    ///
    pub fn extract(log: &RawLog) -> Result<Vec<Record>, Error> {
        let records: Vec<Record> = log.iter().filter_map(Self::parse_line).collect();
        if records.is_empty() {
            return Err(Error::NoData { lines: log.len() });
        }
        Ok(records)
    }

    ///
    /// Parses a single line, returning `None` if it is not a valid result line.
    ///
    pub fn parse_line(line: &str) -> Option<Record> {
        let captures = LINE.captures(line.trim())?;

        let size: u64 = captures[3].parse().ok()?;
        if size == 0 {
            return None;
        }
        let time_ns: f64 = captures[4].parse().ok()?;
        if !time_ns.is_finite() {
            return None;
        }

        Some(Record {
            family: family::normalize(&captures[1]),
            variant: captures[2].to_owned(),
            size,
            time_ns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Extractor;
    use crate::capture::raw_log::RawLog;
    use crate::extractor::error::Error;
    use crate::extractor::record::Record;

    #[test]
    fn shuffle_family() {
        let record = Extractor::parse_line("BenchmarkChaCha/Batched_size_1000-8 500000 42.5 ns/op");

        assert_eq!(
            record,
            Some(Record::new("ChaChaShuffle", "Batched", 1000, 42.5))
        );
    }

    #[test]
    fn verbatim_family() {
        let record = Extractor::parse_line("BenchmarkSort/Standard_size_500-4 1000000 10.0 ns/op");

        assert_eq!(record, Some(Record::new("Sort", "Standard", 500, 10.0)));
    }

    #[test]
    fn surrounding_whitespace() {
        let record = Extractor::parse_line(
            "  BenchmarkPCG/Standard_size_30-16   \t 9876543\t  121 ns/op\t  0 B/op\r\n",
        );

        assert_eq!(record, Some(Record::new("PCGShuffle", "Standard", 30, 121.0)));
    }

    #[test]
    fn non_matching_lines() {
        for line in [
            "",
            "goos: linux",
            "goarch: amd64",
            "pkg: github.com/example/batchedrand",
            "PASS",
            "ok  \tgithub.com/example/batchedrand\t12.345s",
            "BenchmarkChaCha/Batched_size_1000 500000 42.5 ns/op",
            "BenchmarkChaCha/Batched_size_1000-8 500000 42.5 ms/op",
            "BenchmarkChaCha/Batched_size_-8 500000 42.5 ns/op",
            "BenchmarkChaCha-8 500000 42.5 ns/op",
            "SomeBenchmarkChaCha/Batched_size_1000-8 500000 42.5 ns/op",
            "BenchmarkCha_Cha/Batched_size_1000-8 500000 42.5 ns/op",
        ] {
            assert_eq!(Extractor::parse_line(line), None, "line {line:?}");
        }
    }

    #[test]
    fn unparseable_numbers() {
        assert_eq!(
            Extractor::parse_line("BenchmarkSort/Batched_size_0-8 500000 42.5 ns/op"),
            None
        );
        assert_eq!(
            Extractor::parse_line("BenchmarkSort/Batched_size_10-8 500000 1.2.3 ns/op"),
            None
        );
        assert_eq!(
            Extractor::parse_line("BenchmarkSort/Batched_size_10-8 500000 . ns/op"),
            None
        );
        assert_eq!(
            Extractor::parse_line(
                "BenchmarkSort/Batched_size_99999999999999999999999-8 500000 1.0 ns/op"
            ),
            None
        );
    }

    #[test]
    fn encounter_order() {
        let log = RawLog::from_text(
            "goos: linux\n\
             BenchmarkPCG/Standard_size_30-8 1000 200.0 ns/op\n\
             BenchmarkPCG/Batched_size_30-8 1000 100.0 ns/op\n\
             PASS\n\
             BenchmarkChaCha/Batched_size_30-8 1000 50.0 ns/op\n",
        );

        let records = Extractor::extract(&log).expect("Extraction failure");

        assert_eq!(
            records,
            vec![
                Record::new("PCGShuffle", "Standard", 30, 200.0),
                Record::new("PCGShuffle", "Batched", 30, 100.0),
                Record::new("ChaChaShuffle", "Batched", 30, 50.0),
            ]
        );
    }

    #[test]
    fn error_no_data() {
        let log = RawLog::from_text("goos: linux\nPASS\n");

        assert!(matches!(
            Extractor::extract(&log),
            Err(Error::NoData { lines: 2 })
        ));
    }
}
