//! Catalog record types
//!
//! Field names serialize in snake_case, matching the landing page contract.

use serde::{Deserialize, Serialize};

/// A nature-inspired healthcare solution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub title: String,
    /// Natural phenomenon the solution draws on
    pub inspiration: String,
    pub description: String,
    pub application: String,
    /// Image asset name
    pub visualization: String,
}

/// A published research paper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchPaper {
    pub title: String,
    pub authors: String,
    pub year: String,
    pub key_findings: String,
    pub impact: String,
}

/// A real-world case study with measured results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub title: String,
    pub location: String,
    pub year: String,
    pub challenge: String,
    pub solution: String,
    pub results: Vec<String>,
}
