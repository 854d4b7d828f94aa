//! Classification result types

use serde::{Deserialize, Serialize};
use vitals::StressLabel;

/// Which stage produced the label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSource {
    /// A medical threshold rule matched
    Rule,
    /// The rule table abstained; the statistical model decided
    Model,
}

/// Result of one classification call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The stress category
    pub label: StressLabel,
    /// Which stage produced it
    pub source: LabelSource,
    /// Ordered coping activities for the category
    pub suggestions: Vec<String>,
}
