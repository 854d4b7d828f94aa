//! Classification Route

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, warn};

use crate::AppState;
use detector::LabelSource;
use vitals::{StressLabel, VitalReading};

/// Request body for the classify endpoint
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// Blood oxygen saturation (%)
    pub spo2: f64,
    /// Heart rate (BPM)
    pub heart_rate: f64,
}

/// Response body for a successful classification
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub label: StressLabel,
    pub source: LabelSource,
    pub suggestions: Vec<String>,
    pub quote: &'static str,
}

/// Error body for rejected or failed requests
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Classify one SpO₂/heart-rate reading
pub async fn classify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> impl IntoResponse {
    let reading = VitalReading::new(req.spo2, req.heart_rate);

    if let Err(e) = reading.validate() {
        warn!("Rejected reading: {}", e);
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response();
    }

    match state.detector.classify(&reading) {
        Ok(result) => Json(ClassifyResponse {
            label: result.label,
            source: result.source,
            suggestions: result.suggestions,
            quote: suggestions::random_quote(),
        })
        .into_response(),
        Err(e) => {
            error!("Classification failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
