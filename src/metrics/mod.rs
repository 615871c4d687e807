//! Metrics provider — fixed chart datasets for the dashboard
//!
//! Both snapshots are literal constants. Struct field order fixes the JSON
//! key order, so repeated serializations are byte-identical.

pub mod handler;

pub use handler::metrics_router;

use serde::Serialize;

/// Per-category scores, parallel arrays aligned by position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualizationSnapshot {
    pub categories: Vec<&'static str>,
    pub effectiveness: Vec<u32>,
    pub implementation_cost: Vec<u32>,
    pub user_satisfaction: Vec<u32>,
}

/// A labeled series, `labels[i]` pairs with `data[i]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledSeries {
    pub labels: Vec<&'static str>,
    pub data: Vec<u32>,
}

impl LabeledSeries {
    fn new(labels: &[&'static str], data: &[u32]) -> Self {
        debug_assert_eq!(labels.len(), data.len());
        Self {
            labels: labels.to_vec(),
            data: data.to_vec(),
        }
    }
}

/// Research statistics, three independent series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResearchSnapshot {
    pub publications: LabeledSeries,
    pub success_rates: LabeledSeries,
    pub global_impact: LabeledSeries,
}

/// Effectiveness, cost and satisfaction per solution category
pub fn visualization_snapshot() -> VisualizationSnapshot {
    VisualizationSnapshot {
        categories: vec![
            "Immune System",
            "Stress Relief",
            "Healing",
            "Sleep",
            "Mental Clarity",
        ],
        effectiveness: vec![85, 92, 78, 88, 90],
        implementation_cost: vec![65, 45, 80, 40, 55],
        user_satisfaction: vec![90, 88, 75, 92, 85],
    }
}

/// Publication counts, success rates and regional impact
pub fn research_snapshot() -> ResearchSnapshot {
    ResearchSnapshot {
        publications: LabeledSeries::new(
            &["2020", "2021", "2022", "2023", "2024"],
            &[45, 68, 92, 128, 156],
        ),
        success_rates: LabeledSeries::new(
            &[
                "Clinical Trials",
                "Patient Adoption",
                "Hospital Implementation",
                "Cost Effectiveness",
            ],
            &[78, 85, 72, 90],
        ),
        global_impact: LabeledSeries::new(
            &["North America", "Europe", "Asia", "Africa", "South America"],
            &[35, 28, 25, 15, 12],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visualization_values() {
        let snap = visualization_snapshot();
        assert_eq!(
            snap.categories,
            vec!["Immune System", "Stress Relief", "Healing", "Sleep", "Mental Clarity"]
        );
        assert_eq!(snap.effectiveness, vec![85, 92, 78, 88, 90]);
        assert_eq!(snap.implementation_cost, vec![65, 45, 80, 40, 55]);
        assert_eq!(snap.user_satisfaction, vec![90, 88, 75, 92, 85]);
    }

    #[test]
    fn test_visualization_arrays_are_parallel() {
        let snap = visualization_snapshot();
        let n = snap.categories.len();
        assert_eq!(snap.effectiveness.len(), n);
        assert_eq!(snap.implementation_cost.len(), n);
        assert_eq!(snap.user_satisfaction.len(), n);
    }

    #[test]
    fn test_research_values() {
        let snap = research_snapshot();
        assert_eq!(snap.publications.labels, vec!["2020", "2021", "2022", "2023", "2024"]);
        assert_eq!(snap.publications.data, vec![45, 68, 92, 128, 156]);
        assert_eq!(snap.success_rates.data, vec![78, 85, 72, 90]);
        assert_eq!(snap.global_impact.labels[4], "South America");
        assert_eq!(snap.global_impact.data, vec![35, 28, 25, 15, 12]);
    }

    #[test]
    fn test_snapshots_do_not_drift() {
        assert_eq!(visualization_snapshot(), visualization_snapshot());
        assert_eq!(
            serde_json::to_string(&research_snapshot()).unwrap(),
            serde_json::to_string(&research_snapshot()).unwrap()
        );
    }

    #[test]
    fn test_visualization_json_shape() {
        let json = serde_json::to_string(&visualization_snapshot()).unwrap();
        assert!(json.starts_with(r#"{"categories":["Immune System""#));
        assert!(json.contains(r#""implementation_cost":[65,45,80,40,55]"#));
    }
}
