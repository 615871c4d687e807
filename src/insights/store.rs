//! In-memory community insight store
//!
//! Uses `tokio::sync::RwLock` so that appends and vote increments are atomic
//! with respect to each other on the multi-threaded runtime.

use crate::error::{Error, Result};
use crate::insights::types::{CommunityInsight, SubmitInsightRequest};
use tokio::sync::RwLock;

/// Message returned when a vote targets a missing insight
pub const INVALID_INDEX: &str = "Invalid insight index";

/// Ordered, append-only store of community insights
pub struct InsightStore {
    insights: RwLock<Vec<CommunityInsight>>,
}

impl InsightStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            insights: RwLock::new(Vec::new()),
        }
    }

    /// Append a new insight dated today with zero votes
    pub async fn submit(&self, req: SubmitInsightRequest) -> CommunityInsight {
        let insight = CommunityInsight {
            name: req.name,
            title: req.title,
            inspiration: req.inspiration,
            description: req.description,
            date: today(),
            votes: 0,
        };

        let index = {
            let mut insights = self.insights.write().await;
            insights.push(insight.clone());
            insights.len() - 1
        };

        tracing::info!(index, title = %insight.title, "Community insight submitted");
        insight
    }

    /// Increment the votes of the insight at `index`, returning the new count
    pub async fn vote(&self, index: usize) -> Result<u64> {
        let mut insights = self.insights.write().await;
        let insight = insights
            .get_mut(index)
            .ok_or_else(|| Error::NotFound(INVALID_INDEX.to_string()))?;
        insight.votes += 1;
        tracing::debug!(index, votes = insight.votes, "Insight upvoted");
        Ok(insight.votes)
    }

    /// All insights in submission order
    pub async fn list_all(&self) -> Vec<CommunityInsight> {
        self.insights.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.insights.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.insights.read().await.is_empty()
    }
}

impl Default for InsightStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Current local date as `YYYY-MM-DD`
fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
