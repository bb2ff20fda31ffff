use crate::error::{FilterError, Result};
use crate::signal_processing::filter::Filter;
use crate::signal_processing::history::HistoryLine;

/// Direct-form I infinite impulse response filter
///
/// Evaluates the difference equation
///
/// ```text
/// a[0]·y[n] = b[0]·x[n] + Σ_{i=1..N} (b[i]·x[n-i] − a[i]·y[n-i])
/// ```
///
/// one sample at a time, where `N` is the filter order. `a` holds the
/// feedback (denominator) coefficients and `b` the feedforward (numerator)
/// coefficients, `N + 1` of each. The last `N` inputs and outputs are kept
/// in fixed-size history windows.
///
/// A freshly constructed filter passes its input through unchanged:
/// `a[0] = b[0] = 1.0`, every other coefficient and all history is zero.
///
/// # Example
/// ```
/// use iirfilter::signal_processing::IirFilter;
///
/// let mut filter = IirFilter::new(1).unwrap();
/// assert_eq!(filter.process(3.0), 3.0);
///
/// // y[n] = 0.5·x[n] + 0.5·y[n-1]
/// filter.set_full_coefficients(&[1.0, -0.5], &[0.5, 0.0]).unwrap();
/// filter.reset();
/// assert_eq!(filter.process(1.0), 0.5);
/// assert_eq!(filter.process(0.0), 0.25);
/// ```
#[derive(Debug, Clone)]
pub struct IirFilter {
    order: usize,
    a: Vec<f64>,
    b: Vec<f64>,
    x_history: HistoryLine,
    y_history: HistoryLine,
}

impl IirFilter {
    /// Create a new filter of the given order with passthrough coefficients
    ///
    /// # Errors
    /// Returns `FilterError::InvalidArgument` if `order` is zero
    pub fn new(order: usize) -> Result<Self> {
        if order < 1 {
            return Err(FilterError::InvalidArgument(
                "order must be greater than zero".to_string(),
            ));
        }

        let mut a = vec![0.0; order + 1];
        let mut b = vec![0.0; order + 1];
        a[0] = 1.0;
        b[0] = 1.0;

        log::debug!("IIR filter created: order {}", order);

        Ok(Self {
            order,
            a,
            b,
            x_history: HistoryLine::new(order),
            y_history: HistoryLine::new(order),
        })
    }

    /// Replace the coefficients from two `order`-length slices
    ///
    /// `a_coeffs` goes into the feedback (denominator) storage, so its first
    /// element becomes the output divisor and must not be zero. `b_coeffs`
    /// goes into the feedforward (numerator) storage. Each slice fills
    /// coefficient slots `0..order`; the highest slot, `order`, is reset to
    /// zero. Use [`IirFilter::set_full_coefficients`] to set all `order + 1`
    /// slots.
    ///
    /// History is left untouched. On error nothing is modified.
    ///
    /// # Errors
    /// Returns `FilterError::InvalidArgument` if either slice is not exactly
    /// `order` long, or if `a_coeffs[0]` is zero. Checks run in that order:
    /// `a_coeffs` length, `a_coeffs[0]`, then `b_coeffs` length.
    pub fn set_coefficients(&mut self, a_coeffs: &[f64], b_coeffs: &[f64]) -> Result<()> {
        self.validate(a_coeffs, b_coeffs, self.order)?;

        self.a[..self.order].copy_from_slice(a_coeffs);
        self.b[..self.order].copy_from_slice(b_coeffs);
        self.a[self.order] = 0.0;
        self.b[self.order] = 0.0;

        log::debug!(
            "IIR filter coefficients updated: a={:?} b={:?}",
            self.a,
            self.b
        );
        Ok(())
    }

    /// Replace every coefficient slot from two `order + 1`-length slices
    ///
    /// Same rules as [`IirFilter::set_coefficients`], except the slices must
    /// cover all `order + 1` slots, including the highest-order tap.
    ///
    /// # Errors
    /// Returns `FilterError::InvalidArgument` if either slice is not exactly
    /// `order + 1` long, or if `a_coeffs[0]` is zero
    pub fn set_full_coefficients(&mut self, a_coeffs: &[f64], b_coeffs: &[f64]) -> Result<()> {
        self.validate(a_coeffs, b_coeffs, self.order + 1)?;

        self.a.copy_from_slice(a_coeffs);
        self.b.copy_from_slice(b_coeffs);

        log::debug!(
            "IIR filter coefficients updated: a={:?} b={:?}",
            self.a,
            self.b
        );
        Ok(())
    }

    fn validate(&self, a_coeffs: &[f64], b_coeffs: &[f64], expected: usize) -> Result<()> {
        if a_coeffs.len() != expected {
            return Err(FilterError::InvalidArgument(format!(
                "a_coeffs must be of size {}, got {}",
                expected,
                a_coeffs.len()
            )));
        }

        if a_coeffs[0] == 0.0 {
            return Err(FilterError::InvalidArgument(
                "a_coeffs[0] must not be zero".to_string(),
            ));
        }

        if b_coeffs.len() != expected {
            return Err(FilterError::InvalidArgument(format!(
                "b_coeffs must be of size {}, got {}",
                expected,
                b_coeffs.len()
            )));
        }

        Ok(())
    }

    /// Filter a single sample
    ///
    /// Computes the newest output from `sample` and the stored history, then
    /// shifts both history windows by one. Never fails; NaN and infinities
    /// propagate per IEEE-754.
    pub fn process(&mut self, sample: f64) -> f64 {
        let mut acc = 0.0;
        let taps = self.b[1..].iter().zip(&self.a[1..]);
        let history = self.x_history.iter().zip(self.y_history.iter());
        for ((b, a), (x, y)) in taps.zip(history) {
            acc += b * x - a * y;
        }
        let result = (acc + self.b[0] * sample) / self.a[0];

        self.x_history.push(sample);
        self.y_history.push(result);

        result
    }

    /// Zero both history windows, keeping the coefficients
    pub fn reset(&mut self) {
        self.x_history.clear();
        self.y_history.clear();
        log::debug!("IIR filter history cleared");
    }

    /// Filter order, fixed at construction
    pub fn order(&self) -> usize {
        self.order
    }

    /// Feedback (denominator) coefficients, all `order + 1` slots
    pub fn a_coeffs(&self) -> &[f64] {
        &self.a
    }

    /// Feedforward (numerator) coefficients, all `order + 1` slots
    pub fn b_coeffs(&self) -> &[f64] {
        &self.b
    }

    /// Last `order` inputs, most recent first
    pub fn input_history(&self) -> impl Iterator<Item = f64> + '_ {
        self.x_history.iter().copied()
    }

    /// Last `order` outputs, most recent first
    pub fn output_history(&self) -> impl Iterator<Item = f64> + '_ {
        self.y_history.iter().copied()
    }
}

impl Filter for IirFilter {
    fn process(&mut self, sample: f64) -> f64 {
        IirFilter::process(self, sample)
    }

    fn reset(&mut self) {
        IirFilter::reset(self)
    }
}
