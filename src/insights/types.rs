//! Community insight wire types

use serde::{Deserialize, Serialize};

/// A community-submitted insight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityInsight {
    pub name: String,
    pub title: String,
    pub inspiration: String,
    pub description: String,
    /// Submission date, `YYYY-MM-DD`
    pub date: String,
    pub votes: u64,
}

/// Submission form body
///
/// Every field is optional and defaults to an empty string; submissions are
/// never rejected for missing fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubmitInsightRequest {
    pub name: String,
    pub title: String,
    pub inspiration: String,
    pub description: String,
}

/// Response body for a successful vote
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub votes: u64,
}
