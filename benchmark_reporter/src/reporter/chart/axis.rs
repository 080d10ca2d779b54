//!
//! The value axis of a bar chart.
//!

///
/// The value axis of a bar chart.
///
/// The axis starts at zero and ends at the first tick at or above the largest value.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    /// The distance between two ticks.
    pub step: f64,
    /// The value at the top of the axis.
    pub maximum: f64,
}

impl Axis {
    /// The preferred number of intervals between ticks.
    const INTERVALS: f64 = 5.0;

    /// Tolerance for values that land exactly on a tick.
    const EPSILON: f64 = 1e-9;

    ///
    /// Builds an axis covering `values` with round tick steps of 1, 2, or 5 times a power of ten.
    ///
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let largest = values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold(0.0_f64, f64::max);
        if largest <= 0.0 {
            return Self {
                step: 0.2,
                maximum: 1.0,
            };
        }

        let raw_step = largest / Self::INTERVALS;
        let magnitude = 10_f64.powi(raw_step.log10().floor() as i32);
        let step = [1.0, 2.0, 5.0, 10.0]
            .into_iter()
            .map(|multiplier| multiplier * magnitude)
            .find(|step| *step >= raw_step)
            .unwrap_or(10.0 * magnitude);
        let maximum = (largest / step - Self::EPSILON).ceil() * step;

        Self { step, maximum }
    }

    ///
    /// Returns the tick values from zero to the axis maximum.
    ///
    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.maximum / self.step).round() as usize;
        (0..=count).map(|index| index as f64 * self.step).collect()
    }

    ///
    /// Returns the number of decimal places needed to tell ticks apart.
    ///
    pub fn decimals(&self) -> usize {
        if self.step >= 1.0 {
            return 0;
        }
        (-self.step.log10().floor()) as usize
    }

    ///
    /// Returns the share of the axis height covered by `value`.
    ///
    pub fn ratio(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        (value / self.maximum).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Axis;

    #[test]
    fn round_steps() {
        let axis = Axis::new([3.2, 9.1, 7.0]);

        assert_eq!(axis.step, 2.0);
        assert_eq!(axis.maximum, 10.0);
        assert_eq!(axis.ticks(), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn small_values() {
        let axis = Axis::new([0.02, 0.04]);

        assert!((axis.step - 0.01).abs() < 1e-12);
        assert!((axis.maximum - 0.04).abs() < 1e-12);
        assert_eq!(axis.ticks().len(), 5);
    }

    #[test]
    fn empty() {
        let axis = Axis::new(std::iter::empty());

        assert_eq!(axis.maximum, 1.0);
        assert_eq!(axis.ratio(0.5), 0.5);
    }

    #[test]
    fn ratio_clamped() {
        let axis = Axis::new([10.0]);

        assert_eq!(axis.ratio(5.0), 0.5);
        assert_eq!(axis.ratio(f64::INFINITY), 0.0);
        assert_eq!(axis.ratio(-1.0), 0.0);
    }
}
