pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::career;
use crate::interview;
use crate::jobs;
use crate::resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career
        .route("/api/career/analyze", post(career::handlers::handle_analyze))
        // Interview
        .route(
            "/api/interview/analyze",
            post(interview::handlers::handle_analyze),
        )
        .route(
            "/api/interview/feedback",
            post(interview::handlers::handle_feedback),
        )
        .route(
            "/api/interview/generate",
            post(interview::handlers::handle_generate),
        )
        // Jobs
        .route("/api/jobs/search", get(jobs::handlers::handle_search))
        // Resume
        .route(
            "/api/resume/ats-analysis",
            post(resume::handlers::handle_ats_analysis),
        )
        .route("/api/resume/ats-pdf", post(resume::handlers::handle_ats_pdf))
        .route(
            "/api/resume/generate-summary",
            post(resume::handlers::handle_generate_summary),
        )
        .route(
            "/api/resume/improve-experience",
            post(resume::handlers::handle_improve_experience),
        )
        .route("/api/resume/parse-pdf", post(resume::pdf::handle_parse_pdf))
        .route(
            "/api/resume/suggest-skills",
            post(resume::handlers::handle_suggest_skills),
        )
        .with_state(state)
}
