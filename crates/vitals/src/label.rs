//! Stress category labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stress category produced by the rule gate or the model.
///
/// Open string rather than a closed enum: the trained label encoder may carry
/// classes the rule table never emits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StressLabel(String);

impl StressLabel {
    /// Labels emitted by the threshold rule table
    pub const CRITICAL_HYPOXIA: &'static str = "Critical Hypoxia (Severe Stress)";
    pub const HIGH_PHYSIOLOGICAL: &'static str = "High Physiological Stress";
    pub const NORMAL: &'static str = "Normal";
    pub const MODERATE: &'static str = "Moderate Stress";
    pub const SEVERE: &'static str = "Severe Stress";

    /// Create a label from any category string
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StressLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StressLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}
