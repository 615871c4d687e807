//! Builtin catalog content shipped with Verdant

use super::types::{CaseStudy, ResearchPaper, Solution};

fn solution(
    title: &str,
    inspiration: &str,
    description: &str,
    application: &str,
    visualization: &str,
) -> Solution {
    Solution {
        title: title.to_string(),
        inspiration: inspiration.to_string(),
        description: description.to_string(),
        application: application.to_string(),
        visualization: visualization.to_string(),
    }
}

fn paper(title: &str, authors: &str, year: &str, key_findings: &str, impact: &str) -> ResearchPaper {
    ResearchPaper {
        title: title.to_string(),
        authors: authors.to_string(),
        year: year.to_string(),
        key_findings: key_findings.to_string(),
        impact: impact.to_string(),
    }
}

fn case_study(
    title: &str,
    location: &str,
    year: &str,
    challenge: &str,
    solution: &str,
    results: [&str; 4],
) -> CaseStudy {
    CaseStudy {
        title: title.to_string(),
        location: location.to_string(),
        year: year.to_string(),
        challenge: challenge.to_string(),
        solution: solution.to_string(),
        results: results.iter().map(|r| r.to_string()).collect(),
    }
}

/// Builtin nature-inspired solutions keyed by topic
pub fn solutions() -> Vec<(String, Solution)> {
    vec![
        (
            "immune_system".to_string(),
            solution(
                "Immune System Enhancement",
                "Mangrove Trees",
                "Like mangrove trees that filter salt water, our solution focuses on natural body detoxification.",
                "Natural supplement program inspired by mangrove filtration systems",
                "mangrove_system.jpg",
            ),
        ),
        (
            "stress_relief".to_string(),
            solution(
                "Stress Management",
                "Forest Ecosystems",
                "Based on forest bathing (Shinrin-yoku) principles, utilizing nature's calming effects.",
                "Biophilic design for stress reduction in urban spaces",
                "forest_therapy.jpg",
            ),
        ),
        (
            "healing".to_string(),
            solution(
                "Wound Healing",
                "Spider Silk",
                "Inspired by spider silk's strength and flexibility for advanced wound care.",
                "Biomimetic bandages using nature-inspired materials",
                "spider_silk.jpg",
            ),
        ),
        (
            "sleep_improvement".to_string(),
            solution(
                "Sleep Enhancement",
                "Butterfly Chrysalis",
                "Learning from the metamorphosis process in butterflies for better sleep cycles.",
                "Natural sleep optimization techniques and environment design",
                "butterfly_sleep.jpg",
            ),
        ),
        (
            "mental_clarity".to_string(),
            solution(
                "Mental Focus",
                "Honeybee Colonies",
                "Inspired by honeybee communication and collective intelligence.",
                "Cognitive enhancement techniques based on nature's patterns",
                "honeybee_mind.jpg",
            ),
        ),
    ]
}

/// Builtin research papers keyed by topic
pub fn research_papers() -> Vec<(String, ResearchPaper)> {
    vec![
        (
            "lotus_effect".to_string(),
            paper(
                "Self-Cleaning Surfaces: Learning from the Lotus Leaf",
                "Dr. Sarah Chen, Dr. Michael Roberts",
                "2024",
                "Development of antimicrobial surfaces for medical equipment based on lotus leaf structure",
                "Reduced hospital-acquired infections by 47% in trial studies",
            ),
        ),
        (
            "shark_skin".to_string(),
            paper(
                "Shark Skin Biomimicry in Medical Devices",
                "Dr. James Wilson, Dr. Emily Parker",
                "2023",
                "New material design reducing bacterial adhesion by 67%",
                "Applied in catheter design, reducing infection rates significantly",
            ),
        ),
        (
            "plant_healing".to_string(),
            paper(
                "Plant Cell Regeneration Models in Wound Care",
                "Dr. Lisa Zhang, Dr. Robert Brown",
                "2024",
                "Novel hydrogel development mimicking plant cell wall repair",
                "Accelerated wound healing by 35% in clinical trials",
            ),
        ),
    ]
}

/// Builtin case studies keyed by topic
pub fn case_studies() -> Vec<(String, CaseStudy)> {
    vec![
        (
            "hospital_design".to_string(),
            case_study(
                "Biophilic Hospital Design",
                "Singapore General Hospital",
                "2024",
                "High patient stress levels and slow recovery times in traditional hospital environments",
                "Implementation of nature-inspired architecture including: healing gardens, natural light optimization, and biomimetic patterns in interior design",
                [
                    "28% reduction in patient stress levels measured through cortisol tests",
                    "15% faster recovery times for post-surgery patients",
                    "42% improvement in staff satisfaction and reduced burnout",
                    "Decreased use of pain medication by 22%",
                ],
            ),
        ),
        (
            "mental_health".to_string(),
            case_study(
                "Forest-Inspired Therapy Spaces",
                "Mental Health Center, Stockholm",
                "2023",
                "Traditional therapy environments lacking engagement and showing limited effectiveness for anxiety treatment",
                "Creation of forest-mimicking therapeutic spaces using fractal patterns, natural materials, and soundscapes based on forest acoustics",
                [
                    "39% increase in therapy session effectiveness",
                    "45% improvement in patient mood scores",
                    "31% reduction in anxiety levels",
                    "Increased patient engagement by 58%",
                ],
            ),
        ),
        (
            "rehabilitation".to_string(),
            case_study(
                "Coral Reef-Inspired Rehabilitation Center",
                "Miami Medical Center",
                "2024",
                "Monotonous rehabilitation exercises leading to patient disengagement and slower recovery",
                "Development of an interactive rehabilitation space inspired by coral reef ecosystems, featuring dynamic color changes and adaptive exercise patterns",
                [
                    "47% increase in patient exercise adherence",
                    "33% improvement in rehabilitation outcomes",
                    "52% higher patient satisfaction scores",
                    "Reduced rehabilitation time by 25%",
                ],
            ),
        ),
        (
            "pediatric_care".to_string(),
            case_study(
                "Butterfly Garden Pediatric Ward",
                "Children's Hospital, Toronto",
                "2023",
                "Children experiencing high anxiety and stress during hospital stays",
                "Creation of a butterfly-inspired healing environment with metamorphosis-themed recovery journey and interactive nature elements",
                [
                    "41% decrease in reported anxiety levels",
                    "37% reduction in pain medication requirements",
                    "63% increase in physical activity during recovery",
                    "Improved sleep quality in 78% of patients",
                ],
            ),
        ),
        (
            "elderly_care".to_string(),
            case_study(
                "Hive-Inspired Senior Living",
                "Elderly Care Center, Vancouver",
                "2024",
                "Social isolation and reduced mobility in traditional elderly care facilities",
                "Implementation of a honeycomb-inspired living space design that promotes natural movement patterns and social interaction",
                [
                    "56% increase in social interactions among residents",
                    "44% improvement in mobility assessments",
                    "39% reduction in depression symptoms",
                    "Enhanced cognitive function in 48% of residents",
                ],
            ),
        ),
    ]
}
