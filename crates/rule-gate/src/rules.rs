//! Medical threshold rule table

use tracing::debug;
use vitals::{StressLabel, VitalReading};

/// Ordered rule table over (SpO₂, heart rate).
///
/// Rules are checked top to bottom and the first hit wins. The table is
/// intentionally incomplete: readings with mismatched severity bands fall
/// through to the model, which covers the gaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleGate;

impl RuleGate {
    /// Create a new rule gate
    pub fn new() -> Self {
        Self
    }

    /// Apply the threshold rules to a reading. `None` means no rule matched
    /// and the caller should fall back to the model. Pure function, no error
    /// path; inputs are validated upstream.
    pub fn evaluate(&self, reading: &VitalReading) -> Option<StressLabel> {
        let spo2 = reading.spo2;
        let hr = reading.heart_rate;

        let label = if spo2 < 60.0 && hr < 60.0 {
            StressLabel::new(StressLabel::CRITICAL_HYPOXIA)
        } else if (60.0..80.0).contains(&spo2) && (60.0..80.0).contains(&hr) {
            StressLabel::new(StressLabel::HIGH_PHYSIOLOGICAL)
        } else if (80.0..=100.0).contains(&spo2) && (80.0..=100.0).contains(&hr) {
            StressLabel::new(StressLabel::NORMAL)
        } else if hr > 100.0 && hr <= 120.0 && (100.0..=120.0).contains(&hr) {
            // The second clause re-checks heart rate; the deployed table never
            // constrained SpO₂ here. Kept as-built (see DESIGN.md).
            StressLabel::new(StressLabel::MODERATE)
        } else if hr > 120.0 && spo2 > 120.0 {
            // SpO₂ > 120 cannot hold for validated input, so this rule never
            // fires and tachycardia above 120 BPM goes to the model. Kept
            // as-built (see DESIGN.md).
            StressLabel::new(StressLabel::SEVERE)
        } else {
            debug!(spo2, heart_rate = hr, "no threshold rule matched, deferring to model");
            return None;
        };

        debug!(spo2, heart_rate = hr, label = %label, "threshold rule matched");
        Some(label)
    }
}
