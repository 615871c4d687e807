//! Verdant - Nature-Inspired Healthcare Showcase
//!
//! Verdant serves curated biomimicry content for healthcare, collects
//! community insights with upvoting, exposes chart datasets, and answers
//! free-text health questions through a generative text service.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                       axum Router (api)                        │
//! │   /        /submit_insight   /vote_insight/:i   /api/...       │
//! └──────┬──────────────┬──────────────────┬──────────────┬───────┘
//!        │              │                  │              │
//!  ┌─────▼──────┐ ┌─────▼───────┐  ┌───────▼──────┐ ┌─────▼─────┐
//!  │  Content   │ │   Insight   │  │   Metrics    │ │  Insight  │
//!  │  Catalog   │ │    Store    │  │   Provider   │ │  Gateway  │
//!  │ (read-only)│ │ (RwLock Vec)│  │ (constants)  │ │           │
//!  └────────────┘ └─────────────┘  └──────────────┘ └─────┬─────┘
//!                                                         │ HTTPS
//!                                                ┌────────▼────────┐
//!                                                │ Generative      │
//!                                                │ Language API    │
//!                                                └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`]: Router assembly, landing page, health probe
//! - [`catalog`]: Curated solutions, research papers, case studies
//! - [`insights`]: Community insight store and handlers
//! - [`metrics`]: Fixed chart datasets
//! - [`advisor`]: Prompt building and the text generation client
//! - [`config`]: Configuration management

pub mod advisor;
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod insights;
pub mod metrics;

pub use config::VerdantConfig;
pub use error::{Error, Result};
