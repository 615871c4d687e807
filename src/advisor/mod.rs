//! AI insight gateway — biomimicry answers from a text generation service
//!
//! ## Architecture
//!
//! ```text
//! query → InsightGateway::build_prompt → dyn TextGenerator → raw text
//!                                              │
//!                                  GeminiClient (production)
//!                                  stub generators (tests)
//! ```
//!
//! A call is made exactly once per query. Nothing is retried or cached, and
//! every failure is reported as [`Error::Upstream`] with its text intact.

pub mod gemini;
pub mod handler;

pub use gemini::GeminiClient;
pub use handler::{advisor_router, AdvisorState};

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Text-in/text-out generation backend
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Backend name for logs
    fn name(&self) -> &str;
}

/// Wraps a generator with the biomimicry prompt template
#[derive(Clone)]
pub struct InsightGateway {
    generator: Arc<dyn TextGenerator>,
}

impl InsightGateway {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Embed the caller's query verbatim into the prompt template
    pub fn build_prompt(query: &str) -> String {
        format!(
            "Based on biomimicry principles, provide insights about how nature's solutions could be applied to this health challenge: {query}\n    \
             Focus on specific examples from nature and their practical applications in healthcare. \n    \
             Include: \n    \
             1. Natural phenomenon\n    \
             2. How it works\n    \
             3. Potential health applications\n    \
             4. Implementation considerations"
        )
    }

    /// Ask the generator for a nature-inspired answer to `query`
    pub async fn get_insight(&self, query: &str) -> Result<String> {
        let prompt = Self::build_prompt(query);
        tracing::debug!(
            backend = self.generator.name(),
            query_len = query.len(),
            "Requesting nature insight"
        );

        self.generator.generate(&prompt).await.map_err(|e| {
            tracing::warn!(backend = self.generator.name(), error = %e, "Insight generation failed");
            match e {
                Error::Upstream(msg) => Error::Upstream(msg),
                other => Error::Upstream(other.to_string()),
            }
        })
    }
}
