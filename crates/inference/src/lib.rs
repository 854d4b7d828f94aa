//! Statistical Fallback Predictor
//!
//! Wraps the pre-trained model artifact bundle (feature scaler, linear
//! classifier, label encoder). Loaded once at startup, read-only afterwards;
//! serves predictions for readings the rule gate abstains on.

mod artifacts;
mod bundle;

pub use artifacts::{FeatureScaler, LabelEncoder, LinearClassifier};
pub use bundle::ModelBundle;

use thiserror::Error;

/// Errors during artifact loading and prediction
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model artifact '{name}' unreadable at {path}: {source}")]
    ArtifactRead {
        name: &'static str,
        path: String,
        source: std::io::Error,
    },
    #[error("model artifact '{name}' is corrupt: {source}")]
    ArtifactParse {
        name: &'static str,
        source: serde_json::Error,
    },
    #[error("artifact shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("scaler scale entry {index} is {value}; every entry must be finite and non-zero")]
    DegenerateScale { index: usize, value: f64 },
    #[error("classifier produced class index {index}, but the encoder only knows {known} labels")]
    UnknownClassIndex { index: usize, known: usize },
}
