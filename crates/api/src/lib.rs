//! Stress Detection API Server
//!
//! REST surface for the two-stage stress classifier: one classify endpoint,
//! a health check, and the motivational quote banner.

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod routes;
mod settings;

pub use settings::Settings;

use detector::StressDetector;
use inference::ModelBundle;

/// Application state shared across handlers.
///
/// The detector owns the read-only model bundle, so plain `Arc` sharing is
/// enough; no handler has a write path.
pub struct AppState {
    /// Two-stage classifier
    pub detector: StressDetector,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state around a detector
    pub fn new(detector: StressDetector) -> Self {
        Self {
            detector,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub model: ModelHealth,
}

/// Model bundle health
#[derive(Debug, Serialize)]
pub struct ModelHealth {
    pub status: String,
    pub classes: usize,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/classify", post(routes::classify::classify))
        .route("/api/v1/quote", get(routes::quote::get_quote))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        model: ModelHealth {
            status: "loaded".to_string(),
            classes: state.detector.model().class_count(),
        },
    };

    Json(response)
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server. The model bundle is loaded before the listener binds, so
/// a missing or corrupt artifact aborts startup instead of surfacing on the
/// first fallback request.
pub async fn run_server(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let bundle = ModelBundle::load(&settings.model_dir)?;
    let state = Arc::new(AppState::new(StressDetector::new(bundle)));
    let app = create_router(state);

    info!("Starting API server on {}", settings.listen_addr);

    let listener = tokio::net::TcpListener::bind(&settings.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use inference::{FeatureScaler, LabelEncoder, LinearClassifier};
    use tower::ServiceExt;

    fn test_app() -> Router {
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
                classes: vec!["Elevated Stress".to_string()],
            },
        )
        .unwrap();
        create_router(Arc::new(AppState::new(StressDetector::new(bundle))))
    }

    fn classify_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/classify")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["model"]["classes"], 1);
    }

    #[tokio::test]
    async fn test_classify_rule_path() {
        let response = test_app()
            .oneshot(classify_request(r#"{"spo2": 97, "heart_rate": 90}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["label"], "Normal");
        assert_eq!(json["source"], "rule");
        assert_eq!(json["suggestions"].as_array().unwrap().len(), 3);
        assert_eq!(json["suggestions"][0], "✅ You're fine!");
    }

    #[tokio::test]
    async fn test_classify_model_path() {
        let response = test_app()
            .oneshot(classify_request(r#"{"spo2": 97, "heart_rate": 70}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["label"], "Elevated Stress");
        assert_eq!(json["source"], "model");
    }

    #[tokio::test]
    async fn test_classify_rejects_out_of_range() {
        let response = test_app()
            .oneshot(classify_request(r#"{"spo2": 30, "heart_rate": 90}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("spo2"));
    }

    #[tokio::test]
    async fn test_quote_endpoint() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/quote")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(!json["quote"].as_str().unwrap().is_empty());
    }
}
