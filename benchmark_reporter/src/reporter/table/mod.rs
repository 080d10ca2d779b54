//!
//! The benchmark results table.
//!

pub mod alignment;

use crate::aggregator::metrics::Metrics;
use crate::aggregator::row::Row;

use self::alignment::Alignment;

///
/// The benchmark results table.
///
/// Rendered as a Markdown pipe table.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// The formatted cells, one vector per row.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// The heading printed above the table.
    pub const HEADING: &'static str = "### Benchmark results table";

    /// The column headers and their alignments.
    pub const COLUMNS: [(&'static str, Alignment); 5] = [
        ("Benchmark", Alignment::Left),
        ("Size", Alignment::Right),
        ("Batched (ns/item)", Alignment::Right),
        ("Standard (ns/item)", Alignment::Right),
        ("Speedup", Alignment::Right),
    ];

    ///
    /// Formats the complete rows with `precision` decimal places, keeping their order.
    ///
    pub fn new<'a, I>(rows: I, precision: usize) -> Self
    where
        I: IntoIterator<Item = &'a Row>,
    {
        let rows = rows
            .into_iter()
            .filter_map(|row| row.metrics().map(|metrics| (row, metrics)))
            .map(
                |(
                    row,
                    Metrics {
                        batched_per_item_ns,
                        standard_per_item_ns,
                        speedup,
                    },
                )| {
                    vec![
                        row.family.clone(),
                        row.size.to_string(),
                        format!("{batched_per_item_ns:.precision$}"),
                        format!("{standard_per_item_ns:.precision$}"),
                        format!("{speedup:.precision$}"),
                    ]
                },
            )
            .collect();
        Self { rows }
    }

    ///
    /// Whether the table has no data rows.
    ///
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    ///
    /// Returns the width of each column.
    ///
    fn widths(&self) -> Vec<usize> {
        Self::COLUMNS
            .iter()
            .enumerate()
            .map(|(index, (header, _))| {
                self.rows
                    .iter()
                    .map(|row| row[index].len())
                    .chain(std::iter::once(header.len()))
                    .max()
                    .unwrap_or_default()
            })
            .collect()
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let widths = self.widths();

        writeln!(f, "{}", Self::HEADING)?;
        let header: Vec<String> = Self::COLUMNS
            .iter()
            .zip(widths.iter())
            .map(|((header, alignment), width)| alignment.pad(header, *width))
            .collect();
        writeln!(f, "| {} |", header.join(" | "))?;
        let separator: Vec<String> = Self::COLUMNS
            .iter()
            .zip(widths.iter())
            .map(|((_, alignment), width)| alignment.separator(*width))
            .collect();
        write!(f, "|{}|", separator.join("|"))?;
        for row in self.rows.iter() {
            let cells: Vec<String> = row
                .iter()
                .zip(Self::COLUMNS.iter().zip(widths.iter()))
                .map(|(cell, ((_, alignment), width))| alignment.pad(cell, *width))
                .collect();
            write!(f, "\n| {} |", cells.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::Table;
    use crate::aggregator::row::Row;

    fn row(family: &str, size: u64, times: &[(&str, f64)]) -> Row {
        Row::new(
            family.to_owned(),
            size,
            times
                .iter()
                .map(|(variant, time)| (variant.to_string(), *time))
                .collect::<BTreeMap<String, f64>>(),
        )
    }

    #[test]
    fn one_decimal() {
        let rows = vec![row("Sort", 1, &[("Batched", 10.0), ("Standard", 20.0)])];

        let table = Table::new(rows.iter(), 1);

        assert_eq!(table.rows, vec![vec!["Sort", "1", "10.0", "20.0", "2.0"]]);
    }

    #[test]
    fn precision() {
        let rows = vec![row("Sort", 3, &[("Batched", 1.0), ("Standard", 2.5)])];

        let table = Table::new(rows.iter(), 3);

        assert_eq!(table.rows, vec![vec!["Sort", "3", "0.333", "0.833", "2.500"]]);
    }

    #[test]
    fn incomplete_rows_excluded() {
        let rows = vec![
            row("Search", 10, &[("Standard", 20.0)]),
            row("Sort", 1, &[("Batched", 10.0), ("Standard", 20.0)]),
        ];

        let table = Table::new(rows.iter(), 1);

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0], "Sort");
    }

    #[test]
    fn markdown() {
        let rows = vec![
            row("ChaChaShuffle", 30, &[("Batched", 150.0), ("Standard", 300.0)]),
            row("ChaChaShuffle", 500000, &[("Batched", 1000000.0), ("Standard", 1500000.0)]),
        ];

        let table = Table::new(rows.iter(), 1);

        assert_eq!(
            table.to_string(),
            "### Benchmark results table\n\
             | Benchmark     |   Size | Batched (ns/item) | Standard (ns/item) | Speedup |\n\
             |:--------------|-------:|------------------:|-------------------:|--------:|\n\
             | ChaChaShuffle |     30 |               5.0 |               10.0 |     2.0 |\n\
             | ChaChaShuffle | 500000 |               2.0 |                3.0 |     1.5 |"
        );
    }
}
