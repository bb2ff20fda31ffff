use crate::error::{FilterError, Result};
use crate::signal_processing::iir::IirFilter;
use num_complex::Complex;
use std::f64::consts::PI;

/// Evaluate a polynomial in z⁻¹ at z = e^{jω}
fn eval_z_inverse(coeffs: &[f64], omega: f64) -> Complex<f64> {
    coeffs
        .iter()
        .enumerate()
        .map(|(k, &c)| Complex::from_polar(c, -omega * k as f64))
        .sum()
}

/// Complex frequency response H(e^{jω}) = B(e^{jω}) / A(e^{jω})
///
/// # Arguments
/// * `a_coeffs` - Feedback (denominator) coefficients
/// * `b_coeffs` - Feedforward (numerator) coefficients
/// * `freq_hz` - Frequency to evaluate at
/// * `sample_rate` - Sample rate in Hz
///
/// # Errors
/// Returns `FilterError::InvalidArgument` if `sample_rate` is not a positive
/// finite number
pub fn frequency_response(
    a_coeffs: &[f64],
    b_coeffs: &[f64],
    freq_hz: f64,
    sample_rate: f64,
) -> Result<Complex<f64>> {
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(FilterError::InvalidArgument(format!(
            "sample_rate must be positive, got {}",
            sample_rate
        )));
    }

    let omega = 2.0 * PI * freq_hz / sample_rate;
    Ok(eval_z_inverse(b_coeffs, omega) / eval_z_inverse(a_coeffs, omega))
}

impl IirFilter {
    /// Complex response of the current coefficients at `freq_hz`
    ///
    /// Depends only on the coefficients, not on the filter history.
    pub fn frequency_response(&self, freq_hz: f64, sample_rate: f64) -> Result<Complex<f64>> {
        frequency_response(self.a_coeffs(), self.b_coeffs(), freq_hz, sample_rate)
    }

    /// Gain in dB of the current coefficients at `freq_hz`
    pub fn magnitude_db(&self, freq_hz: f64, sample_rate: f64) -> Result<f64> {
        let h = self.frequency_response(freq_hz, sample_rate)?;
        Ok(20.0 * h.norm().log10())
    }
}
