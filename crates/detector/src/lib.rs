//! Two-Stage Stress Detector
//!
//! Deterministic threshold rules run first; the statistical model covers the
//! readings the rule table leaves uncovered. Every reading yields exactly one
//! label and one suggestion list.

mod analysis;

pub use analysis::{Classification, LabelSource};

use inference::{InferenceError, ModelBundle};
use rule_gate::RuleGate;
use suggestions::suggestions_for;
use tracing::debug;
use vitals::VitalReading;

/// Rule gate plus model fallback behind one classify call.
///
/// Holds the read-only model bundle; callers validate readings before handing
/// them in.
pub struct StressDetector {
    gate: RuleGate,
    model: ModelBundle,
}

impl StressDetector {
    /// Create a detector around a loaded model bundle
    pub fn new(model: ModelBundle) -> Self {
        Self {
            gate: RuleGate::new(),
            model,
        }
    }

    /// Classify one reading and attach coping suggestions.
    ///
    /// The gate is consulted first; the model is invoked at most once, only
    /// when the gate abstains.
    pub fn classify(&self, reading: &VitalReading) -> Result<Classification, InferenceError> {
        let (label, source) = match self.gate.evaluate(reading) {
            Some(label) => (label, LabelSource::Rule),
            None => (self.model.predict(reading)?, LabelSource::Model),
        };

        let suggestions = suggestions_for(&label);
        debug!(label = %label, ?source, "classification complete");

        Ok(Classification {
            label,
            source,
            suggestions,
        })
    }

    /// The underlying model bundle
    pub fn model(&self) -> &ModelBundle {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inference::{FeatureScaler, LabelEncoder, LinearClassifier};
    use vitals::StressLabel;

    /// Single-class bundle so the model path is fully predictable
    fn detector_with_single_class(label: &str) -> StressDetector {
        let bundle = ModelBundle::from_parts(
            FeatureScaler {
                mean: vec![88.0, 92.0],
                scale: vec![12.0, 28.0],
            },
            LinearClassifier {
                coefficients: vec![vec![0.0, 0.0]],
                intercepts: vec![0.0],
            },
            LabelEncoder {
                classes: vec![label.to_string()],
            },
        )
        .unwrap();
        StressDetector::new(bundle)
    }

    #[test]
    fn test_rule_path_wins_over_model() {
        let detector = detector_with_single_class("Elevated Stress");
        let result = detector.classify(&VitalReading::new(97.0, 90.0)).unwrap();
        assert_eq!(result.label.as_str(), StressLabel::NORMAL);
        assert_eq!(result.source, LabelSource::Rule);
        assert_eq!(
            result.suggestions,
            vec!["✅ You're fine!", "💧 Stay hydrated", "🙂 Stay positive"]
        );
    }

    #[test]
    fn test_high_stress_has_five_suggestions() {
        let detector = detector_with_single_class("Elevated Stress");
        let result = detector.classify(&VitalReading::new(70.0, 70.0)).unwrap();
        assert_eq!(result.label.as_str(), StressLabel::HIGH_PHYSIOLOGICAL);
        assert_eq!(result.source, LabelSource::Rule);
        assert_eq!(result.suggestions.len(), 5);
    }

    #[test]
    fn test_gate_abstains_and_model_decides() {
        let detector = detector_with_single_class("Elevated Stress");
        // Mismatched bands: healthy saturation, bradycardic heart rate
        let result = detector.classify(&VitalReading::new(97.0, 70.0)).unwrap();
        assert_eq!(result.label.as_str(), "Elevated Stress");
        assert_eq!(result.source, LabelSource::Model);
        // "Elevated" carries no severity keyword, so the reassurance list
        assert_eq!(result.suggestions.len(), 3);
    }

    #[test]
    fn test_model_error_propagates() {
        let bundle = ModelBundle::from_parts(
            FeatureScaler {
                mean: vec![0.0, 0.0],
                scale: vec![1.0, 1.0],
            },
            LinearClassifier {
                coefficients: vec![vec![0.0, 0.0]],
                intercepts: vec![0.0],
            },
            // No labels at all: any model decision is undecodable
            LabelEncoder { classes: vec![] },
        )
        .unwrap();
        let detector = StressDetector::new(bundle);

        let err = detector
            .classify(&VitalReading::new(97.0, 70.0))
            .unwrap_err();
        assert!(matches!(err, InferenceError::UnknownClassIndex { .. }));
    }

    #[test]
    fn test_idempotent_classification() {
        let detector = detector_with_single_class("Elevated Stress");
        let reading = VitalReading::new(97.0, 70.0);
        assert_eq!(
            detector.classify(&reading).unwrap(),
            detector.classify(&reading).unwrap()
        );
    }
}
