//! Vital-Sign Core Types
//!
//! Shared data model for the stress detection pipeline: one SpO₂/heart-rate
//! reading, the stress category label, and input range validation.

mod error;
mod label;
mod reading;

pub use error::VitalsError;
pub use label::StressLabel;
pub use reading::{VitalRanges, VitalReading};
