//! Quote Route

use axum::Json;
use serde::Serialize;

/// Response for the quote endpoint
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote: &'static str,
}

/// Get one motivational quote
pub async fn get_quote() -> Json<QuoteResponse> {
    Json(QuoteResponse {
        quote: suggestions::random_quote(),
    })
}
