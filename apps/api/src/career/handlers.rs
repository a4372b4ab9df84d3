//! Axum route handler for career-path analysis.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::career::prompts::{ANALYZE_PROMPT_TEMPLATE, ANALYZE_SYSTEM};
use crate::errors::AppError;
use crate::models::resume::{EducationEntry, ExperienceEntry};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerAnalyzeRequest {
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub target_roles: Vec<String>,
    pub career_status: String,
}

/// One recommended career path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub role: String,
    pub match_score: u32,
    pub reason: String,
    pub required_skills: Vec<String>,
}

/// Full career-path analysis returned to the client.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerAnalysis {
    pub current_assessment: String,
    pub recommended_paths: Vec<CareerPath>,
    pub skill_gaps: Vec<String>,
    pub next_steps: Vec<String>,
}

impl CareerAnalysis {
    /// Clamps match scores into [0, 100]; LLM output is parsed, not verified.
    fn sanitize(mut self) -> Self {
        for path in &mut self.recommended_paths {
            path.match_score = path.match_score.min(100);
        }
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/career/analyze
///
/// Maps the candidate's skills and history onto recommended career paths.
/// Provider failure is a hard error: the career view blocks on a real result.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<CareerAnalyzeRequest>,
) -> Result<Json<CareerAnalysis>, AppError> {
    if request.skills.iter().all(|s| s.trim().is_empty()) {
        return Err(AppError::Validation(
            "Skills are required for career path analysis".to_string(),
        ));
    }

    let prompt = ANALYZE_PROMPT_TEMPLATE
        .replace("{skills}", &request.skills.join(", "))
        .replace("{career_status}", status_or_default(&request.career_status))
        .replace("{target_roles}", &target_roles_text(&request.target_roles))
        .replace("{experience}", &experience_text(&request.experience))
        .replace("{education}", &education_text(&request.education));

    let analysis: CareerAnalysis = state
        .llm
        .call_json(&prompt, ANALYZE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Career analysis failed: {e}")))?;

    let analysis = analysis.sanitize();
    info!(
        "Career analysis produced {} recommended path(s)",
        analysis.recommended_paths.len()
    );

    Ok(Json(analysis))
}

fn status_or_default(status: &str) -> &str {
    if status.trim().is_empty() {
        "(not stated)"
    } else {
        status
    }
}

fn target_roles_text(roles: &[String]) -> String {
    if roles.is_empty() {
        "(none stated; recommend freely)".to_string()
    } else {
        roles.join(", ")
    }
}

fn experience_text(entries: &[ExperienceEntry]) -> String {
    if entries.is_empty() {
        return "(no experience provided)".to_string();
    }
    entries
        .iter()
        .map(|e| {
            format!(
                "- {} at {} ({} - {}): {}",
                e.position, e.company, e.start_date, e.end_date, e.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn education_text(entries: &[EducationEntry]) -> String {
    if entries.is_empty() {
        return "(no education provided)".to_string();
    }
    entries
        .iter()
        .map(|e| format!("- {} in {} from {} ({})", e.degree, e.field, e.school, e.year))
        .collect::<Vec<_>>()
        .join("\n")
}
