//! HTTP handler for AI insight queries
//!
//! - POST /api/get_nature_insight — `{query}` → `{response}` or 500 `{error}`

use crate::advisor::InsightGateway;
use crate::error::Result;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

/// Shared state for the advisor handler
#[derive(Clone)]
pub struct AdvisorState {
    pub gateway: InsightGateway,
}

/// Create the advisor router
pub fn advisor_router(state: AdvisorState) -> Router {
    Router::new()
        .route("/api/get_nature_insight", post(get_nature_insight))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
struct InsightQuery {
    #[serde(default)]
    query: String,
}

#[derive(Debug, Serialize)]
struct InsightResponse {
    response: String,
}

/// POST /api/get_nature_insight
async fn get_nature_insight(
    State(state): State<AdvisorState>,
    Json(request): Json<InsightQuery>,
) -> Result<Json<InsightResponse>> {
    let response = state.gateway.get_insight(&request.query).await?;
    Ok(Json(InsightResponse { response }))
}
