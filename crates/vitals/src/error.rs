//! Validation Error Types

use thiserror::Error;

/// Errors during reading validation
#[derive(Debug, Clone, Error)]
pub enum VitalsError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Value is NaN or infinite
    #[error("{field} value is not a finite number")]
    NotFinite { field: &'static str },
}
