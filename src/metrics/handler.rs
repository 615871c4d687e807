//! HTTP handlers for chart data
//!
//! - GET /api/visualization_data
//! - GET /api/research_stats

use crate::metrics::{research_snapshot, visualization_snapshot};
use axum::{response::IntoResponse, routing::get, Json, Router};

/// Create the metrics router (stateless)
pub fn metrics_router() -> Router {
    Router::new()
        .route("/api/visualization_data", get(get_visualization_data))
        .route("/api/research_stats", get(get_research_stats))
}

/// GET /api/visualization_data
async fn get_visualization_data() -> impl IntoResponse {
    Json(visualization_snapshot())
}

/// GET /api/research_stats
async fn get_research_stats() -> impl IntoResponse {
    Json(research_snapshot())
}
