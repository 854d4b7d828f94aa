//! Vital-sign reading and range validation

use crate::error::VitalsError;
use serde::{Deserialize, Serialize};

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalRanges {
    /// SpO₂ valid range (%)
    pub spo2_range: (f64, f64),
    /// Heart rate valid range (BPM)
    pub heart_rate_range: (f64, f64),
}

impl Default for VitalRanges {
    fn default() -> Self {
        Self {
            spo2_range: (40.0, 100.0),
            heart_rate_range: (40.0, 200.0),
        }
    }
}

/// One SpO₂/heart-rate sample. Lives only for the duration of a single
/// classification call; nothing persists it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalReading {
    /// Blood oxygen saturation (%)
    pub spo2: f64,
    /// Heart rate (BPM)
    pub heart_rate: f64,
}

impl VitalReading {
    /// Create a new reading (not yet validated)
    pub fn new(spo2: f64, heart_rate: f64) -> Self {
        Self { spo2, heart_rate }
    }

    /// Validate against the default measurement ranges
    pub fn validate(&self) -> Result<(), VitalsError> {
        self.validate_with(&VitalRanges::default())
    }

    /// Validate against explicit ranges
    pub fn validate_with(&self, ranges: &VitalRanges) -> Result<(), VitalsError> {
        validate_range("spo2", self.spo2, ranges.spo2_range)?;
        validate_range("heart_rate", self.heart_rate, ranges.heart_rate_range)?;
        Ok(())
    }

    /// Raw feature vector in model input order
    pub fn features(&self) -> [f64; 2] {
        [self.spo2, self.heart_rate]
    }
}

/// Validate a single value against a range
fn validate_range(field: &'static str, value: f64, range: (f64, f64)) -> Result<(), VitalsError> {
    if !value.is_finite() {
        return Err(VitalsError::NotFinite { field });
    }
    if value < range.0 || value > range.1 {
        return Err(VitalsError::OutOfRange {
            field,
            value,
            min: range.0,
            max: range.1,
        });
    }
    Ok(())
}
