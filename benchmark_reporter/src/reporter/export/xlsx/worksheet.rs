//!
//! XLSX worksheet for aggregated benchmark rows.
//!

use crate::aggregator::row::Row;
use crate::aggregator::variant;

///
/// XLSX worksheet for aggregated benchmark rows.
///
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// The number of data rows written.
    pub rows: u32,
    /// The value cell format.
    pub value_format: rust_xlsxwriter::Format,
}

impl Worksheet {
    /// Header names and their column widths.
    pub const HEADERS: [(&'static str, usize); 7] = [
        ("Benchmark", 20),
        ("Size", 12),
        ("Batched (ns/op)", 18),
        ("Standard (ns/op)", 18),
        ("Batched (ns/item)", 18),
        ("Standard (ns/item)", 18),
        ("Speedup", 12),
    ];

    /// Column of the input size.
    pub const SIZE_COLUMN: u16 = 1;
    /// Column of the batched time per item.
    pub const BATCHED_PER_ITEM_COLUMN: u16 = 4;
    /// Column of the standard time per item.
    pub const STANDARD_PER_ITEM_COLUMN: u16 = 5;

    ///
    /// Creates a new worksheet with the given name and `precision` decimal places in value cells.
    ///
    pub fn new(name: &str, precision: usize) -> Result<Self, rust_xlsxwriter::XlsxError> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        for (header_index, (header_name, column_width)) in Self::HEADERS.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                *header_name,
                &Self::column_header_format(),
            )?;
            worksheet.set_column_width(header_index as u16, *column_width as f64)?;
        }

        Ok(Self {
            worksheet,
            rows: 0,
            value_format: Self::value_format(precision),
        })
    }

    ///
    /// Appends a row and returns its index. Missing values are left blank.
    ///
    pub fn write_row(&mut self, row: &Row) -> Result<u32, rust_xlsxwriter::XlsxError> {
        self.rows += 1;
        let row_index = self.rows;

        self.worksheet.write_with_format(
            row_index,
            0,
            row.family.as_str(),
            &Self::row_header_format(),
        )?;
        self.worksheet.write_with_format(
            row_index,
            Self::SIZE_COLUMN,
            row.size,
            &Self::row_header_format(),
        )?;

        let values = [
            row.time(variant::BATCHED),
            row.time(variant::STANDARD),
            row.per_item(variant::BATCHED),
            row.per_item(variant::STANDARD),
            row.speedup(),
        ];
        for (offset, value) in values.into_iter().enumerate() {
            let Some(value) = value.filter(|value| value.is_finite()) else {
                continue;
            };
            self.worksheet.write_with_format(
                row_index,
                2 + offset as u16,
                value,
                &self.value_format,
            )?;
        }

        Ok(row_index)
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#EEF3FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#DDE6FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Left);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the value cell format with `precision` decimal places.
    ///
    fn value_format(precision: usize) -> rust_xlsxwriter::Format {
        let number_format = if precision == 0 {
            "0".to_owned()
        } else {
            format!("0.{}", "0".repeat(precision))
        };
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#000000");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Right);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        let format = format.set_num_format(number_format.as_str());
        format
    }
}
