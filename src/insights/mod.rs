//! Community insights — user-submitted ideas with upvoting
//!
//! Insights live in process memory only and are addressed by their
//! zero-based position in submission order.

pub mod handler;
pub mod store;
pub mod types;

pub use handler::{insights_router, InsightsState};
pub use store::InsightStore;
pub use types::{CommunityInsight, SubmitInsightRequest};
