//! Content catalog — curated solutions, research papers, and case studies
//!
//! The catalog is built once at startup from builtin data and is read-only
//! afterwards. It backs the landing page.

pub mod builtin;
pub mod types;

pub use types::{CaseStudy, ResearchPaper, Solution};

use std::collections::BTreeMap;

/// Immutable keyed collections of curated content
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    solutions: BTreeMap<String, Solution>,
    papers: BTreeMap<String, ResearchPaper>,
    case_studies: BTreeMap<String, CaseStudy>,
}

impl ContentCatalog {
    /// Build the catalog from the builtin content
    pub fn builtin() -> Self {
        Self {
            solutions: builtin::solutions().into_iter().collect(),
            papers: builtin::research_papers().into_iter().collect(),
            case_studies: builtin::case_studies().into_iter().collect(),
        }
    }

    pub fn get_all_solutions(&self) -> &BTreeMap<String, Solution> {
        &self.solutions
    }

    pub fn get_all_papers(&self) -> &BTreeMap<String, ResearchPaper> {
        &self.papers
    }

    pub fn get_all_case_studies(&self) -> &BTreeMap<String, CaseStudy> {
        &self.case_studies
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
