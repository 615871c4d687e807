//! HTTP handlers for community insights
//!
//! - POST /submit_insight         — form submission, redirects to the landing page
//! - POST /vote_insight/:index    — upvote by position

use crate::error::{Error, Result};
use crate::insights::store::{InsightStore, INVALID_INDEX};
use crate::insights::types::{SubmitInsightRequest, VoteResponse};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    routing::post,
    Form, Json, Router,
};
use std::sync::Arc;

/// Notice key attached to the redirect after a submission
pub const SUBMITTED_NOTICE: &str = "insight_submitted";

/// Shared state for insight handlers
#[derive(Clone)]
pub struct InsightsState {
    pub store: Arc<InsightStore>,
}

/// Create the insights router
pub fn insights_router(state: InsightsState) -> Router {
    Router::new()
        .route("/submit_insight", post(submit_insight))
        .route("/vote_insight/:index", post(vote_insight))
        .with_state(state)
}

/// POST /submit_insight
///
/// A body that is not a urlencoded form is treated as an empty submission.
async fn submit_insight(
    State(state): State<InsightsState>,
    form: Option<Form<SubmitInsightRequest>>,
) -> impl IntoResponse {
    let request = form.map(|Form(f)| f).unwrap_or_default();
    state.store.submit(request).await;
    Redirect::to(&format!("/?notice={}", SUBMITTED_NOTICE))
}

/// POST /vote_insight/:index
async fn vote_insight(
    State(state): State<InsightsState>,
    Path(index): Path<String>,
) -> Result<Json<VoteResponse>> {
    let index: usize = index
        .parse()
        .map_err(|_| Error::NotFound(INVALID_INDEX.to_string()))?;
    let votes = state.store.vote(index).await?;
    Ok(Json(VoteResponse { votes }))
}
