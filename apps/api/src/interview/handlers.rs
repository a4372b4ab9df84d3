//! Axum route handlers for the interview endpoints.
//!
//! All three endpoints gate further user action (the UI blocks on a real
//! result), so provider failures surface as HTTP 500 rather than a fallback.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::interview::prompts::{
    ANALYZE_PROMPT_TEMPLATE, ANALYZE_SYSTEM, FEEDBACK_PROMPT_TEMPLATE, FEEDBACK_SYSTEM,
    GENERATE_PROMPT_TEMPLATE, GENERATE_SYSTEM,
};
use crate::state::AppState;

/// Questions generated per session when the client does not ask for a count.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub role: String,
    #[serde(default = "default_interview_type")]
    pub interview_type: String,
    #[serde(default = "default_question_count")]
    pub count: usize,
}

fn default_interview_type() -> String {
    "technical".to_string()
}

fn default_question_count() -> usize {
    DEFAULT_QUESTION_COUNT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub category: String,
    pub difficulty: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackRequest {
    pub question: String,
    pub answer: String,
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFeedback {
    pub score: u32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub suggested_answer: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeRequest {
    pub questions: Vec<String>,
    pub answers: Vec<String>,
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionReview {
    pub question: String,
    pub score: u32,
    pub comment: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAnalysis {
    pub overall_score: u32,
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub per_question: Vec<QuestionReview>,
}

impl SessionAnalysis {
    /// Clamps scores into [0, 100]; LLM output is parsed, not verified.
    fn sanitize(mut self) -> Self {
        self.overall_score = self.overall_score.min(100);
        for review in &mut self.per_question {
            review.score = review.score.min(100);
        }
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/interview/generate
///
/// Generates interview questions for a role. `count` defaults to 5 and the
/// result is truncated to it when the model over-delivers.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.role.trim().is_empty() {
        return Err(AppError::Validation(
            "Role is required to generate interview questions".to_string(),
        ));
    }

    let prompt = GENERATE_PROMPT_TEMPLATE
        .replace("{count}", &request.count.to_string())
        .replace("{role}", &request.role)
        .replace("{interview_type}", &request.interview_type);

    let mut response: GenerateResponse = state
        .llm
        .call_json(&prompt, GENERATE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))?;

    if response.questions.is_empty() {
        return Err(AppError::Llm(
            "Question generation returned no questions".to_string(),
        ));
    }
    response.questions.truncate(request.count);

    info!(
        "Generated {} {} questions for role '{}'",
        response.questions.len(),
        request.interview_type,
        request.role
    );

    Ok(Json(response))
}

/// POST /api/interview/feedback
///
/// Scores a single answer and returns structured feedback.
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<AnswerFeedback>, AppError> {
    if request.question.trim().is_empty() || request.answer.trim().is_empty() {
        return Err(AppError::Validation(
            "Question and answer are required for feedback".to_string(),
        ));
    }

    let role = if request.role.trim().is_empty() {
        "the position".to_string()
    } else {
        request.role.clone()
    };

    let prompt = FEEDBACK_PROMPT_TEMPLATE
        .replace("{role}", &role)
        .replace("{question}", &request.question)
        .replace("{answer}", &request.answer);

    let mut feedback: AnswerFeedback = state
        .llm
        .call_json(&prompt, FEEDBACK_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Answer feedback failed: {e}")))?;

    feedback.score = feedback.score.min(100);

    Ok(Json(feedback))
}

/// POST /api/interview/analyze
///
/// Reviews a full mock-interview session. Questions and answers are paired by
/// index; unanswered trailing questions are sent as explicit blanks so the
/// model can score the omission.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<SessionAnalysis>, AppError> {
    if request.questions.is_empty() || request.answers.is_empty() {
        return Err(AppError::Validation(
            "Questions and answers are required for interview analysis".to_string(),
        ));
    }

    let role = if request.role.trim().is_empty() {
        "the position".to_string()
    } else {
        request.role.clone()
    };

    let prompt = ANALYZE_PROMPT_TEMPLATE
        .replace("{role}", &role)
        .replace("{qa_pairs}", &format_transcript(&request.questions, &request.answers));

    let analysis: SessionAnalysis = state
        .llm
        .call_json(&prompt, ANALYZE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Interview analysis failed: {e}")))?;

    Ok(Json(analysis.sanitize()))
}

/// Renders the Q/A pairs into the transcript block embedded in the analysis
/// prompt. Deterministic: same input, same text.
fn format_transcript(questions: &[String], answers: &[String]) -> String {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let answer = answers
                .get(i)
                .map(String::as_str)
                .filter(|a| !a.trim().is_empty())
                .unwrap_or("(no answer given)");
            format!("Q{n}: {q}\nA{n}: {answer}", n = i + 1)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_count_defaults_to_5() {
        let json = r#"{"role": "Software Engineer"}"#;
        let request: GenerateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.count, 5);
        assert_eq!(request.interview_type, "technical");
    }

    #[test]
    fn test_generate_request_honours_explicit_count() {
        let json = r#"{"role": "Data Scientist", "interviewType": "behavioral", "count": 8}"#;
        let request: GenerateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.count, 8);
        assert_eq!(request.interview_type, "behavioral");
    }

    #[test]
    fn test_generate_response_deserializes_llm_shape() {
        let json = r#"{
            "questions": [
                {"question": "Explain ownership in Rust.", "category": "technical", "difficulty": "medium"}
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.questions.len(), 1);
        assert_eq!(response.questions[0].difficulty, "medium");
    }

    #[test]
    fn test_format_transcript_pairs_by_index() {
        let questions = vec!["Why us?".to_string(), "Biggest weakness?".to_string()];
        let answers = vec!["Because of the mission.".to_string()];
        let transcript = format_transcript(&questions, &answers);
        assert!(transcript.contains("Q1: Why us?"));
        assert!(transcript.contains("A1: Because of the mission."));
        assert!(transcript.contains("A2: (no answer given)"));
    }

    #[test]
    fn test_session_analysis_sanitize_clamps_scores() {
        let analysis = SessionAnalysis {
            overall_score: 250,
            summary: "ok".to_string(),
            strengths: vec![],
            improvements: vec![],
            per_question: vec![QuestionReview {
                question: "q".to_string(),
                score: 101,
                comment: "c".to_string(),
            }],
        }
        .sanitize();
        assert_eq!(analysis.overall_score, 100);
        assert_eq!(analysis.per_question[0].score, 100);
    }

    #[test]
    fn test_answer_feedback_deserializes_camel_case() {
        let json = r#"{
            "score": 74,
            "strengths": ["Clear structure"],
            "improvements": ["Add an example"],
            "suggestedAnswer": "A model answer."
        }"#;
        let feedback: AnswerFeedback = serde_json::from_str(json).unwrap();
        assert_eq!(feedback.score, 74);
        assert_eq!(feedback.suggested_answer, "A model answer.");
    }
}
