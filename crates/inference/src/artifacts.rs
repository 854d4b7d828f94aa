//! Serialized model artifacts
//!
//! The three pieces the training side exports: per-feature scaling
//! parameters, linear decision parameters, and the ordered class list.

use crate::InferenceError;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Standard-scaler parameters (per-feature mean and scale)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl FeatureScaler {
    /// Number of features the scaler was fitted on
    pub fn width(&self) -> usize {
        self.mean.len()
    }

    /// Apply the stored transform to a raw feature vector
    pub fn transform(&self, features: &[f64]) -> Result<Array1<f64>, InferenceError> {
        if self.mean.len() != self.scale.len() {
            return Err(InferenceError::ShapeMismatch(format!(
                "scaler mean has {} entries but scale has {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if features.len() != self.mean.len() {
            return Err(InferenceError::ShapeMismatch(format!(
                "scaler expects {} features, got {}",
                self.mean.len(),
                features.len()
            )));
        }

        let x = Array1::from_iter(features.iter().copied());
        let mean = Array1::from_iter(self.mean.iter().copied());
        let scale = Array1::from_iter(self.scale.iter().copied());
        Ok((x - mean) / scale)
    }
}

/// Linear decision parameters: one coefficient row and one intercept per class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl LinearClassifier {
    /// Predict a class index from scaled features (argmax of class scores)
    pub fn predict(&self, scaled: &Array1<f64>) -> Result<usize, InferenceError> {
        if self.coefficients.len() != self.intercepts.len() {
            return Err(InferenceError::ShapeMismatch(format!(
                "classifier has {} coefficient rows but {} intercepts",
                self.coefficients.len(),
                self.intercepts.len()
            )));
        }

        let mut best: Option<(usize, f64)> = None;
        for (index, (row, intercept)) in
            self.coefficients.iter().zip(&self.intercepts).enumerate()
        {
            if row.len() != scaled.len() {
                return Err(InferenceError::ShapeMismatch(format!(
                    "class {} row has {} coefficients, expected {}",
                    index,
                    row.len(),
                    scaled.len()
                )));
            }
            let score: f64 =
                row.iter().zip(scaled.iter()).map(|(w, x)| w * x).sum::<f64>() + intercept;
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((index, score)),
            }
        }

        best.map(|(index, _)| index).ok_or_else(|| {
            InferenceError::ShapeMismatch("classifier has no classes".to_string())
        })
    }
}

/// Ordered class list from the trained label encoder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    /// Decode a class index to its label string. An index outside the class
    /// list is an internal consistency error, never mapped to a default.
    pub fn inverse_transform(&self, index: usize) -> Result<&str, InferenceError> {
        self.classes
            .get(index)
            .map(String::as_str)
            .ok_or(InferenceError::UnknownClassIndex {
                index,
                known: self.classes.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaler_transform() {
        let scaler = FeatureScaler {
            mean: vec![90.0, 80.0],
            scale: vec![10.0, 20.0],
        };
        let scaled = scaler.transform(&[100.0, 70.0]).unwrap();
        assert_eq!(scaled[0], 1.0);
        assert_eq!(scaled[1], -0.5);
    }

    #[test]
    fn test_scaler_width_mismatch() {
        let scaler = FeatureScaler {
            mean: vec![90.0, 80.0],
            scale: vec![10.0, 20.0],
        };
        assert!(scaler.transform(&[100.0]).is_err());
    }

    #[test]
    fn test_classifier_argmax() {
        let classifier = LinearClassifier {
            coefficients: vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![-1.0, -1.0]],
            intercepts: vec![0.0, 0.5, 0.0],
        };
        let scaled = Array1::from(vec![1.0, 1.0]);
        // Scores: 1.0, 1.5, -2.0
        assert_eq!(classifier.predict(&scaled).unwrap(), 1);
    }

    #[test]
    fn test_classifier_row_mismatch() {
        let classifier = LinearClassifier {
            coefficients: vec![vec![1.0, 0.0, 0.0]],
            intercepts: vec![0.0],
        };
        let scaled = Array1::from(vec![1.0, 1.0]);
        assert!(classifier.predict(&scaled).is_err());
    }

    #[test]
    fn test_encoder_decode() {
        let encoder = LabelEncoder {
            classes: vec!["Low Stress".to_string(), "Normal".to_string()],
        };
        assert_eq!(encoder.inverse_transform(1).unwrap(), "Normal");
    }

    #[test]
    fn test_encoder_unknown_index() {
        let encoder = LabelEncoder {
            classes: vec!["Normal".to_string()],
        };
        let err = encoder.inverse_transform(3).unwrap_err();
        assert!(matches!(
            err,
            InferenceError::UnknownClassIndex { index: 3, known: 1 }
        ));
    }
}
