//!
//! XLSX export of aggregated benchmark data.
//!

pub mod worksheet;

use crate::aggregator::aggregation::Aggregation;
use crate::aggregator::variant;

use self::worksheet::Worksheet;

///
/// XLSX export of aggregated benchmark data.
///
/// Every row goes to the results worksheet. Complete rows are also copied to a
/// hidden chart data worksheet, which backs one column chart per family, so the
/// charts show exactly the rows of the results table.
///
pub struct Xlsx {
    /// Worksheet with every aggregated row.
    pub results_worksheet: Worksheet,
    /// Hidden worksheet with the complete rows only.
    pub chart_data_worksheet: Worksheet,
    /// The charted families with their first and last chart data rows.
    pub chart_ranges: Vec<(String, u32, u32)>,
}

impl Xlsx {
    /// The name of the results worksheet.
    pub const RESULTS_WORKSHEET_NAME: &'static str = "Results";
    /// The name of the chart data worksheet, referenced by the chart ranges.
    pub const CHART_DATA_WORKSHEET_NAME: &'static str = "Chart data";

    /// The first worksheet column occupied by charts.
    const CHART_COLUMN: u16 = 8;
    /// The number of worksheet rows reserved for each chart.
    const CHART_ROWS: u32 = 20;

    ///
    /// Writes the aggregation with `precision` decimal places in value cells.
    ///
    pub fn new(aggregation: &Aggregation, precision: usize) -> Result<Self, rust_xlsxwriter::XlsxError> {
        let mut results_worksheet = Worksheet::new(Self::RESULTS_WORKSHEET_NAME, precision)?;
        for row in aggregation.rows.iter() {
            results_worksheet.write_row(row)?;
        }

        let mut chart_data_worksheet = Worksheet::new(Self::CHART_DATA_WORKSHEET_NAME, precision)?;
        chart_data_worksheet.worksheet.set_hidden(true);
        let mut chart_ranges: Vec<(String, u32, u32)> = Vec::new();
        for row in aggregation.complete_rows() {
            let row_index = chart_data_worksheet.write_row(row)?;
            match chart_ranges.last_mut() {
                Some((family, _, last)) if family.as_str() == row.family.as_str() => {
                    *last = row_index
                }
                _ => chart_ranges.push((row.family.clone(), row_index, row_index)),
            }
        }

        for (chart_index, (family, first, last)) in chart_ranges.iter().enumerate() {
            let chart = Self::chart(family.as_str(), *first, *last);
            results_worksheet.worksheet.insert_chart(
                1 + chart_index as u32 * Self::CHART_ROWS,
                Self::CHART_COLUMN,
                &chart,
            )?;
        }

        Ok(Self {
            results_worksheet,
            chart_data_worksheet,
            chart_ranges,
        })
    }

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.push_worksheet(self.results_worksheet.into_inner());
        workbook.push_worksheet(self.chart_data_worksheet.into_inner());
        workbook
    }

    ///
    /// Builds the column chart of `family` occupying chart data rows `first..=last`.
    ///
    fn chart(family: &str, first: u32, last: u32) -> rust_xlsxwriter::Chart {
        let title = format!(
            "{family} benchmark: {} vs {}",
            variant::BATCHED,
            variant::STANDARD
        );
        let categories = (
            Self::CHART_DATA_WORKSHEET_NAME,
            first,
            Worksheet::SIZE_COLUMN,
            last,
            Worksheet::SIZE_COLUMN,
        );

        let mut chart = rust_xlsxwriter::Chart::new(rust_xlsxwriter::ChartType::Column);
        chart.title().set_name(title.as_str());
        chart.x_axis().set_name("Array size");
        chart.y_axis().set_name("Time (ns/item)");
        chart
            .legend()
            .set_position(rust_xlsxwriter::ChartLegendPosition::Top);
        for (name, color, column) in [
            (variant::BATCHED, "#00008B", Worksheet::BATCHED_PER_ITEM_COLUMN),
            (variant::STANDARD, "#FF0000", Worksheet::STANDARD_PER_ITEM_COLUMN),
        ] {
            chart
                .add_series()
                .set_name(name)
                .set_categories(categories)
                .set_values((Self::CHART_DATA_WORKSHEET_NAME, first, column, last, column))
                .set_format(
                    rust_xlsxwriter::ChartFormat::new()
                        .set_solid_fill(rust_xlsxwriter::ChartSolidFill::new().set_color(color)),
                );
        }
        chart
    }
}
