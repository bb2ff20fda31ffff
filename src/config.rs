//! Configuration for building an IIR filter from a file.
//!
//! ## File format
//!
//! ```toml
//! order = 2
//! a_coeffs = [1.0, -0.6, 0.2]
//! b_coeffs = [0.3, 0.2, 0.1]
//! ```
//!
//! Coefficient lists of length `order` are applied with
//! [`IirFilter::set_coefficients`], lists of length `order + 1` with
//! [`IirFilter::set_full_coefficients`]. Leaving both lists out keeps the
//! passthrough defaults.

use crate::error::{FilterError, Result};
use crate::signal_processing::IirFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Filter configuration
///
/// # Example
/// ```
/// use iirfilter::config::FilterConfig;
///
/// let config = FilterConfig::from_toml_str(
///     "order = 1\na_coeffs = [1.0, -0.5]\nb_coeffs = [0.5, 0.0]\n",
/// )
/// .unwrap();
/// let mut filter = config.build().unwrap();
/// assert_eq!(filter.process(1.0), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Filter order (must be at least 1)
    #[serde(default = "default_order")]
    pub order: usize,
    /// Feedback (denominator) coefficients; element 0 is the output divisor
    #[serde(default)]
    pub a_coeffs: Option<Vec<f64>>,
    /// Feedforward (numerator) coefficients
    #[serde(default)]
    pub b_coeffs: Option<Vec<f64>>,
}

fn default_order() -> usize {
    1
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            order: default_order(),
            a_coeffs: None,
            b_coeffs: None,
        }
    }
}

impl FilterConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FilterError::Config(e.to_string()))
    }

    /// Read and parse a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| FilterError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        log::info!(
            "Loaded filter config from {}: order {}",
            path.display(),
            config.order
        );
        Ok(config)
    }

    /// Construct and configure a filter
    ///
    /// # Errors
    /// Returns `FilterError::Config` if only one coefficient list is given,
    /// and `FilterError::InvalidArgument` for anything the filter itself
    /// rejects.
    pub fn build(&self) -> Result<IirFilter> {
        let mut filter = IirFilter::new(self.order)?;

        match (&self.a_coeffs, &self.b_coeffs) {
            (None, None) => {}
            (Some(a), Some(b)) => {
                let full = self.order + 1;
                if a.len() == full && b.len() == full {
                    filter.set_full_coefficients(a, b)?;
                } else {
                    filter.set_coefficients(a, b)?;
                }
            }
            (Some(_), None) => {
                return Err(FilterError::Config(
                    "a_coeffs given without b_coeffs".to_string(),
                ));
            }
            (None, Some(_)) => {
                return Err(FilterError::Config(
                    "b_coeffs given without a_coeffs".to_string(),
                ));
            }
        }

        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_passthrough() {
        let mut filter = FilterConfig::default().build().unwrap();
        assert_eq!(filter.order(), 1);
        assert_eq!(filter.process(2.5), 2.5);
    }

    #[test]
    fn test_parse_order_only() {
        let config = FilterConfig::from_toml_str("order = 4").unwrap();
        assert_eq!(config.order, 4);
        assert!(config.a_coeffs.is_none());
        assert!(config.b_coeffs.is_none());
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = FilterConfig::from_toml_str("").unwrap();
        assert_eq!(config, FilterConfig::default());
    }

    #[test]
    fn test_build_order_length_lists() {
        let config = FilterConfig::from_toml_str(
            "order = 2\na_coeffs = [2.0, 0.5]\nb_coeffs = [1.0, 0.25]\n",
        )
        .unwrap();
        let filter = config.build().unwrap();
        assert_eq!(filter.a_coeffs(), &[2.0, 0.5, 0.0]);
        assert_eq!(filter.b_coeffs(), &[1.0, 0.25, 0.0]);
    }

    #[test]
    fn test_build_full_length_lists() {
        let config = FilterConfig {
            order: 2,
            a_coeffs: Some(vec![1.0, -0.6, 0.2]),
            b_coeffs: Some(vec![0.3, 0.2, 0.1]),
        };
        let filter = config.build().unwrap();
        assert_eq!(filter.a_coeffs(), &[1.0, -0.6, 0.2]);
        assert_eq!(filter.b_coeffs(), &[0.3, 0.2, 0.1]);
    }

    #[test]
    fn test_build_rejects_zero_order() {
        let config = FilterConfig::from_toml_str("order = 0").unwrap();
        assert!(matches!(
            config.build(),
            Err(FilterError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_build_rejects_zero_divisor() {
        let config = FilterConfig {
            order: 1,
            a_coeffs: Some(vec![0.0]),
            b_coeffs: Some(vec![1.0]),
        };
        assert!(matches!(
            config.build(),
            Err(FilterError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_build_rejects_unpaired_lists() {
        let config = FilterConfig {
            order: 1,
            a_coeffs: Some(vec![1.0]),
            b_coeffs: None,
        };
        assert!(matches!(config.build(), Err(FilterError::Config(_))));

        let config = FilterConfig {
            order: 1,
            a_coeffs: None,
            b_coeffs: Some(vec![1.0]),
        };
        assert!(matches!(config.build(), Err(FilterError::Config(_))));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            FilterConfig::from_toml_str("order = \"two\""),
            Err(FilterError::Config(_))
        ));
        assert!(matches!(
            FilterConfig::from_toml_str("order = 1\ngain = 3.0"),
            Err(FilterError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = FilterConfig::load("/nonexistent/iirfilter.toml");
        assert!(matches!(result, Err(FilterError::Config(_))));
    }
}
