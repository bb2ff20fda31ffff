pub mod config;
pub mod error;
pub mod signal_processing;

pub use config::FilterConfig;
pub use error::{FilterError, Result};
pub use signal_processing::{Filter, IirFilter};
