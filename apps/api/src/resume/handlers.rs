//! Axum route handlers for the resume endpoints.
//!
//! Two failure policies coexist here, per endpoint:
//! - `ats-analysis` gates further user action, so provider failures surface
//!   as HTTP 500.
//! - `ats-pdf`, `generate-summary`, `improve-experience`, and `suggest-skills`
//!   sit inside the interactive editing flow; they degrade to HTTP 200 with a
//!   static fallback payload plus an `error` field rather than breaking the UI.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::resume::{ExperienceEntry, ResumeData};
use crate::resume::ats::{fallback_ats_analysis, AtsAnalysis};
use crate::resume::prompts::{
    ATS_PROMPT_TEMPLATE, ATS_SYSTEM, IMPROVE_PROMPT_TEMPLATE, IMPROVE_SYSTEM,
    SKILLS_PROMPT_TEMPLATE, SKILLS_SYSTEM, SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM,
};
use crate::state::AppState;

/// Fallback summary substituted when live generation fails.
const FALLBACK_SUMMARY: &str = "Dedicated professional with a track record of delivering \
    results in collaborative environments. Combines hands-on technical skills with strong \
    communication to drive projects from concept to completion. Eager to bring proven \
    problem-solving ability to a new challenge.";

/// Fallback rewritten experience substituted when live rewriting fails.
const FALLBACK_EXPERIENCE: &str = "\
• Delivered key responsibilities consistently and to a high standard\n\
• Collaborated with cross-functional teammates to meet project goals\n\
• Identified and resolved day-to-day issues to keep work on track";

/// Fallback skill suggestions substituted when live suggestion fails.
fn fallback_skills() -> Vec<String> {
    [
        "Communication",
        "Problem Solving",
        "Team Collaboration",
        "Time Management",
        "Project Management",
        "Adaptability",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysisRequest {
    pub resume_data: Option<ResumeData>,
    #[serde(default)]
    pub target_job_title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsPdfRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AtsPdfResponse {
    #[serde(flatten)]
    pub analysis: AtsAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImproveExperienceRequest {
    pub description: String,
    pub position: String,
    pub company: String,
}

#[derive(Debug, Serialize)]
pub struct ImproveExperienceResponse {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestSkillsRequest {
    pub experience: Vec<ExperienceEntry>,
    pub current_skills: Vec<String>,
}

/// Shape the skill-suggestion LLM call must return.
#[derive(Debug, Deserialize)]
struct SkillSuggestions {
    skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestSkillsResponse {
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resume/ats-analysis
///
/// Scores a structured resume for ATS compatibility. Provider failure is a
/// hard error: the caller is gating navigation on a real result.
pub async fn handle_ats_analysis(
    State(state): State<AppState>,
    Json(request): Json<AtsAnalysisRequest>,
) -> Result<Json<AtsAnalysis>, AppError> {
    let resume = request
        .resume_data
        .filter(|r| !r.is_empty())
        .ok_or_else(|| AppError::Validation("Resume data is required for ATS analysis".to_string()))?;

    let target_role = request
        .target_job_title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| "the candidate's target role".to_string());

    let prompt = ATS_PROMPT_TEMPLATE
        .replace("{target_role}", &target_role)
        .replace("{resume_text}", &resume.to_prompt_text());

    let analysis: AtsAnalysis = state
        .llm
        .call_json(&prompt, ATS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("ATS analysis failed: {e}")))?;

    Ok(Json(analysis.sanitize()))
}

/// POST /api/resume/ats-pdf
///
/// Scores raw resume text (typically extracted from an uploaded PDF).
/// Always answers 200 once validation passes; a static fallback result stands
/// in when the provider fails.
pub async fn handle_ats_pdf(
    State(state): State<AppState>,
    Json(request): Json<AtsPdfRequest>,
) -> Result<Json<AtsPdfResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("Resume text is required".to_string()));
    }

    let target_role = request
        .job_description
        .filter(|jd| !jd.trim().is_empty())
        .map(|jd| format!("the role described below:\n{jd}"))
        .unwrap_or_else(|| "the candidate's target role".to_string());

    let prompt = ATS_PROMPT_TEMPLATE
        .replace("{target_role}", &target_role)
        .replace("{resume_text}", &request.resume_text);

    match state.llm.call_json::<AtsAnalysis>(&prompt, ATS_SYSTEM).await {
        Ok(analysis) => Ok(Json(AtsPdfResponse {
            analysis: analysis.sanitize(),
            error: None,
        })),
        Err(e) => {
            error!("ats-pdf analysis failed, serving fallback: {e}");
            Ok(Json(AtsPdfResponse {
                analysis: fallback_ats_analysis(),
                error: Some("Live analysis unavailable; showing estimated scores".to_string()),
            }))
        }
    }
}

/// POST /api/resume/generate-summary
///
/// Generates a professional summary from the resume body. No required fields;
/// always answers 200, with a canned summary if the provider fails.
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    Json(resume): Json<ResumeData>,
) -> Json<SummaryResponse> {
    let prompt = SUMMARY_PROMPT_TEMPLATE.replace("{resume_text}", &resume.to_prompt_text());

    match state.llm.call(&prompt, SUMMARY_SYSTEM).await {
        Ok(summary) if !summary.trim().is_empty() => Json(SummaryResponse {
            summary: summary.trim().to_string(),
            error: None,
        }),
        Ok(_) => {
            error!("generate-summary returned empty content, serving fallback");
            Json(SummaryResponse {
                summary: FALLBACK_SUMMARY.to_string(),
                error: Some("Failed to generate summary".to_string()),
            })
        }
        Err(e) => {
            error!("generate-summary failed, serving fallback: {e}");
            Json(SummaryResponse {
                summary: FALLBACK_SUMMARY.to_string(),
                error: Some("Failed to generate summary".to_string()),
            })
        }
    }
}

/// POST /api/resume/improve-experience
///
/// Rewrites one experience description as achievement-focused bullets.
/// Always answers 200.
pub async fn handle_improve_experience(
    State(state): State<AppState>,
    Json(request): Json<ImproveExperienceRequest>,
) -> Json<ImproveExperienceResponse> {
    let prompt = IMPROVE_PROMPT_TEMPLATE
        .replace("{position}", &request.position)
        .replace("{company}", &request.company)
        .replace("{description}", &request.description);

    let result = state.llm.call(&prompt, IMPROVE_SYSTEM).await;
    match result {
        Ok(improved) if !improved.trim().is_empty() => Json(ImproveExperienceResponse {
            description: improved.trim().to_string(),
            error: None,
        }),
        other => {
            match other {
                Ok(_) => error!("improve-experience returned empty content, serving fallback"),
                Err(e) => error!("improve-experience failed, serving fallback: {e}"),
            }
            Json(ImproveExperienceResponse {
                description: FALLBACK_EXPERIENCE.to_string(),
                error: Some("Failed to improve experience description".to_string()),
            })
        }
    }
}

/// POST /api/resume/suggest-skills
///
/// Suggests additional skills from the candidate's experience. Always answers
/// 200; suggestions already on the resume are filtered out of the live result.
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Json(request): Json<SuggestSkillsRequest>,
) -> Json<SuggestSkillsResponse> {
    let experience_text = if request.experience.is_empty() {
        "(no experience provided)".to_string()
    } else {
        request
            .experience
            .iter()
            .map(|e| format!("- {} at {}: {}", e.position, e.company, e.description))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let prompt = SKILLS_PROMPT_TEMPLATE
        .replace("{experience_text}", &experience_text)
        .replace("{current_skills}", &request.current_skills.join(", "));

    match state
        .llm
        .call_json::<SkillSuggestions>(&prompt, SKILLS_SYSTEM)
        .await
    {
        Ok(suggestions) => {
            let skills = dedup_against_current(suggestions.skills, &request.current_skills);
            info!("suggest-skills returned {} suggestions", skills.len());
            Json(SuggestSkillsResponse {
                skills,
                error: None,
            })
        }
        Err(e) => {
            error!("suggest-skills failed, serving fallback: {e}");
            Json(SuggestSkillsResponse {
                skills: fallback_skills(),
                error: Some("Failed to suggest skills".to_string()),
            })
        }
    }
}

/// Drops suggestions the resume already lists, comparing case-insensitively.
fn dedup_against_current(suggested: Vec<String>, current: &[String]) -> Vec<String> {
    let current_lower: Vec<String> = current.iter().map(|s| s.trim().to_lowercase()).collect();
    suggested
        .into_iter()
        .filter(|s| !current_lower.contains(&s.trim().to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_against_current_is_case_insensitive() {
        let suggested = vec![
            "Rust".to_string(),
            "Kubernetes".to_string(),
            "communication".to_string(),
        ];
        let current = vec!["rust".to_string(), "Communication".to_string()];
        let result = dedup_against_current(suggested, &current);
        assert_eq!(result, vec!["Kubernetes"]);
    }

    #[test]
    fn test_ats_request_deserializes_camel_case() {
        let json = r#"{
            "resumeData": {"skills": ["Rust"]},
            "targetJobTitle": "Backend Engineer"
        }"#;
        let request: AtsAnalysisRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.target_job_title.as_deref(), Some("Backend Engineer"));
        assert!(!request.resume_data.unwrap().is_empty());
    }

    #[test]
    fn test_ats_pdf_request_defaults_missing_fields() {
        let request: AtsPdfRequest = serde_json::from_str("{}").unwrap();
        assert!(request.resume_text.is_empty());
        assert!(request.job_description.is_none());
    }

    #[test]
    fn test_suggest_skills_request_defaults() {
        let request: SuggestSkillsRequest = serde_json::from_str("{}").unwrap();
        assert!(request.experience.is_empty());
        assert!(request.current_skills.is_empty());
    }

    #[test]
    fn test_summary_response_omits_error_field_on_success() {
        let response = SummaryResponse {
            summary: "A fine summary.".to_string(),
            error: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("error"));
    }

    #[test]
    fn test_ats_pdf_fallback_response_carries_error_marker() {
        let response = AtsPdfResponse {
            analysis: crate::resume::ats::fallback_ats_analysis(),
            error: Some("Live analysis unavailable; showing estimated scores".to_string()),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("overallScore").is_some());
        assert!(value.get("error").is_some());
    }

    #[test]
    fn test_fallback_experience_is_bulleted() {
        assert!(FALLBACK_EXPERIENCE.starts_with("• "));
        assert!(FALLBACK_EXPERIENCE.lines().count() >= 2);
    }
}
