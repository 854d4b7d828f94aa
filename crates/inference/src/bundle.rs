//! Model artifact bundle

use crate::{FeatureScaler, InferenceError, LabelEncoder, LinearClassifier};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};
use vitals::{StressLabel, VitalReading};

/// The scaler + classifier + label-encoder bundle.
///
/// Loaded once at process start and never mutated afterwards, so it can be
/// shared across handlers behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    scaler: FeatureScaler,
    classifier: LinearClassifier,
    encoder: LabelEncoder,
}

impl ModelBundle {
    /// File names inside the artifact directory
    pub const SCALER_FILE: &'static str = "scaler.json";
    pub const CLASSIFIER_FILE: &'static str = "classifier.json";
    pub const LABELS_FILE: &'static str = "labels.json";

    /// Load all three artifacts from a directory. Any missing or corrupt
    /// artifact fails the load; the service must not start serving without a
    /// working fallback path.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let dir = dir.as_ref();
        info!("Loading model artifacts from {}", dir.display());

        let scaler: FeatureScaler = read_artifact(dir, Self::SCALER_FILE, "scaler")?;
        let classifier: LinearClassifier =
            read_artifact(dir, Self::CLASSIFIER_FILE, "classifier")?;
        let encoder: LabelEncoder = read_artifact(dir, Self::LABELS_FILE, "label encoder")?;

        let bundle = Self {
            scaler,
            classifier,
            encoder,
        };
        bundle.check_shapes()?;

        info!(
            classes = bundle.encoder.classes.len(),
            features = bundle.scaler.width(),
            "Model bundle ready"
        );
        Ok(bundle)
    }

    /// Build a bundle from already-deserialized artifacts (tests, embedding)
    pub fn from_parts(
        scaler: FeatureScaler,
        classifier: LinearClassifier,
        encoder: LabelEncoder,
    ) -> Result<Self, InferenceError> {
        let bundle = Self {
            scaler,
            classifier,
            encoder,
        };
        bundle.check_shapes()?;
        Ok(bundle)
    }

    /// Scale, classify, and decode one reading
    pub fn predict(&self, reading: &VitalReading) -> Result<StressLabel, InferenceError> {
        let scaled = self.scaler.transform(&reading.features())?;
        let index = self.classifier.predict(&scaled)?;
        let label = self.encoder.inverse_transform(index)?;
        debug!(
            spo2 = reading.spo2,
            heart_rate = reading.heart_rate,
            class = index,
            label,
            "model prediction"
        );
        Ok(StressLabel::new(label))
    }

    /// Number of classes the label encoder carries
    pub fn class_count(&self) -> usize {
        self.encoder.classes.len()
    }

    /// Consistency checks across artifacts. Class/label count mismatches are
    /// deliberately left to surface at predict time as UnknownClassIndex.
    fn check_shapes(&self) -> Result<(), InferenceError> {
        if self.scaler.mean.len() != self.scaler.scale.len() {
            return Err(InferenceError::ShapeMismatch(format!(
                "scaler mean has {} entries but scale has {}",
                self.scaler.mean.len(),
                self.scaler.scale.len()
            )));
        }
        // A zero or non-finite divisor would turn every downstream feature
        // into inf/NaN; reject it here, the designated fail-fast point
        for (index, &value) in self.scaler.scale.iter().enumerate() {
            if !value.is_finite() || value == 0.0 {
                return Err(InferenceError::DegenerateScale { index, value });
            }
        }
        if self.classifier.coefficients.len() != self.classifier.intercepts.len() {
            return Err(InferenceError::ShapeMismatch(format!(
                "classifier has {} coefficient rows but {} intercepts",
                self.classifier.coefficients.len(),
                self.classifier.intercepts.len()
            )));
        }
        for (index, row) in self.classifier.coefficients.iter().enumerate() {
            if row.len() != self.scaler.width() {
                return Err(InferenceError::ShapeMismatch(format!(
                    "class {} row has {} coefficients but the scaler is {} wide",
                    index,
                    row.len(),
                    self.scaler.width()
                )));
            }
        }
        Ok(())
    }
}

fn read_artifact<T: DeserializeOwned>(
    dir: &Path,
    file: &str,
    name: &'static str,
) -> Result<T, InferenceError> {
    let path = dir.join(file);
    let raw = std::fs::read_to_string(&path).map_err(|source| InferenceError::ArtifactRead {
        name,
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| InferenceError::ArtifactParse { name, source })
}
