//!
//! The per-family grouped bar chart.
//!

pub mod axis;
pub mod series;

use std::fmt::Write;
use std::path::Path;

use crate::aggregator::row::Row;
use crate::aggregator::variant;
use crate::reporter::error::Error;

use self::axis::Axis;
use self::series::Series;

///
/// The per-family grouped bar chart.
///
/// One category per input size, one bar per variant, heights in nanoseconds per item.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// The benchmark family.
    pub family: String,
    /// The input sizes in ascending order.
    pub sizes: Vec<u64>,
    /// The batched and standard bars.
    pub series: [Series; 2],
}

impl Chart {
    /// The chart file name suffix.
    pub const FILE_SUFFIX: &'static str = "_benchmark.svg";

    const WIDTH: f64 = 1000.0;
    const HEIGHT: f64 = 600.0;
    const PLOT_LEFT: f64 = 100.0;
    const PLOT_RIGHT: f64 = 960.0;
    const PLOT_TOP: f64 = 70.0;
    const PLOT_BOTTOM: f64 = 520.0;
    /// Share of a category band taken by one bar.
    const BAR_SHARE: f64 = 0.35;

    ///
    /// Builds the chart of `family` from its complete rows, which must be sorted by size.
    ///
    pub fn new<'a, I>(family: &str, rows: I) -> Self
    where
        I: IntoIterator<Item = &'a Row>,
    {
        let mut sizes = Vec::new();
        let mut batched = Vec::new();
        let mut standard = Vec::new();
        for row in rows.into_iter() {
            let Some(metrics) = row.metrics() else {
                continue;
            };
            sizes.push(row.size);
            batched.push(metrics.batched_per_item_ns);
            standard.push(metrics.standard_per_item_ns);
        }

        Self {
            family: family.to_owned(),
            sizes,
            series: [
                Series::new(variant::BATCHED, "darkblue", batched),
                Series::new(variant::STANDARD, "red", standard),
            ],
        }
    }

    ///
    /// Returns the chart title.
    ///
    pub fn title(&self) -> String {
        format!(
            "{} benchmark: {} vs {}",
            self.family, variant::BATCHED, variant::STANDARD
        )
    }

    ///
    /// Returns the file name, e.g. `chachashuffle_benchmark.svg` for an empty prefix.
    ///
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{prefix}{}{}", self.family.to_lowercase(), Self::FILE_SUFFIX)
    }

    ///
    /// Renders the chart as an SVG document.
    ///
    pub fn to_svg(&self, precision: usize) -> String {
        let mut svg = String::with_capacity(4096);
        self.render(&mut svg, precision).expect("Always valid");
        svg
    }

    ///
    /// Writes the chart to `path`, replacing an existing file.
    ///
    pub fn write_to_file(&self, path: &Path, precision: usize) -> Result<(), Error> {
        std::fs::write(path, self.to_svg(precision)).map_err(|error| Error::ChartWrite {
            error,
            path: path.to_path_buf(),
        })
    }

    fn render(&self, svg: &mut String, precision: usize) -> std::fmt::Result {
        let axis = Axis::new(
            self.series
                .iter()
                .flat_map(|series| series.values.iter().copied()),
        );
        let tick_precision = precision.max(axis.decimals());
        let plot_width = Self::PLOT_RIGHT - Self::PLOT_LEFT;
        let plot_height = Self::PLOT_BOTTOM - Self::PLOT_TOP;
        let band = plot_width / self.sizes.len().max(1) as f64;
        let bar_width = band * Self::BAR_SHARE;
        let y_of = |value: f64| Self::PLOT_BOTTOM - axis.ratio(value) * plot_height;

        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{1}" viewBox="0 0 {0} {1}" font-family="sans-serif" font-size="14">"#,
            Self::WIDTH,
            Self::HEIGHT
        )?;
        writeln!(
            svg,
            r#"<rect width="{}" height="{}" fill="white"/>"#,
            Self::WIDTH,
            Self::HEIGHT
        )?;
        writeln!(
            svg,
            r#"<text x="{:.1}" y="40" text-anchor="middle" font-size="18">{}</text>"#,
            Self::WIDTH / 2.0,
            self.title()
        )?;

        for tick in axis.ticks() {
            let y = y_of(tick);
            writeln!(
                svg,
                r##"<line class="grid" x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#b0b0b0" stroke-dasharray="4 4" stroke-opacity="0.7"/>"##,
                Self::PLOT_LEFT,
                Self::PLOT_RIGHT
            )?;
            writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="end">{tick:.tick_precision$}</text>"#,
                Self::PLOT_LEFT - 8.0,
                y + 5.0
            )?;
        }

        for (index, size) in self.sizes.iter().enumerate() {
            let center = Self::PLOT_LEFT + band * (index as f64 + 0.5);
            writeln!(
                svg,
                r##"<line class="grid" x1="{center:.1}" y1="{:.1}" x2="{center:.1}" y2="{:.1}" stroke="#b0b0b0" stroke-dasharray="4 4" stroke-opacity="0.7"/>"##,
                Self::PLOT_TOP,
                Self::PLOT_BOTTOM
            )?;
            for (offset, series) in [-1.0, 0.0].into_iter().zip(self.series.iter()) {
                let value = series.values[index];
                let x = center + offset * bar_width;
                let y = y_of(value);
                writeln!(
                    svg,
                    r#"<rect class="bar" x="{x:.1}" y="{y:.1}" width="{bar_width:.1}" height="{:.1}" fill="{}"><title>{} {size}: {value:.precision$} ns/item</title></rect>"#,
                    Self::PLOT_BOTTOM - y,
                    series.color,
                    series.name
                )?;
                writeln!(
                    svg,
                    r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11">{value:.precision$}</text>"#,
                    x + bar_width / 2.0,
                    y - 4.0
                )?;
            }
            writeln!(
                svg,
                r#"<text x="{center:.1}" y="{:.1}" text-anchor="middle">{size}</text>"#,
                Self::PLOT_BOTTOM + 24.0
            )?;
        }

        writeln!(
            svg,
            r#"<line class="axis" x1="{0:.1}" y1="{1:.1}" x2="{0:.1}" y2="{2:.1}" stroke="black"/>"#,
            Self::PLOT_LEFT,
            Self::PLOT_TOP,
            Self::PLOT_BOTTOM
        )?;
        writeln!(
            svg,
            r#"<line class="axis" x1="{0:.1}" y1="{2:.1}" x2="{1:.1}" y2="{2:.1}" stroke="black"/>"#,
            Self::PLOT_LEFT,
            Self::PLOT_RIGHT,
            Self::PLOT_BOTTOM
        )?;
        writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">Array size</text>"#,
            (Self::PLOT_LEFT + Self::PLOT_RIGHT) / 2.0,
            Self::HEIGHT - 30.0
        )?;
        writeln!(
            svg,
            r#"<text transform="translate(30 {:.1}) rotate(-90)" text-anchor="middle">Time (ns/item)</text>"#,
            (Self::PLOT_TOP + Self::PLOT_BOTTOM) / 2.0
        )?;

        for (index, series) in self.series.iter().enumerate() {
            let y = Self::PLOT_TOP + 10.0 + index as f64 * 24.0;
            writeln!(
                svg,
                r#"<rect class="legend" x="{:.1}" y="{y:.1}" width="18" height="12" fill="{}"/>"#,
                Self::PLOT_RIGHT - 130.0,
                series.color
            )?;
            writeln!(
                svg,
                r#"<text x="{:.1}" y="{:.1}">{}</text>"#,
                Self::PLOT_RIGHT - 104.0,
                y + 11.0,
                series.name
            )?;
        }

        writeln!(svg, "</svg>")
    }
}
