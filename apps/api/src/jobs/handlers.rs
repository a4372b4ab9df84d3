//! Axum route handler for the job-search proxy.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::jobs::types::{DatePosted, JobQuery};
use crate::state::AppState;

const DEFAULT_QUERY: &str = "software developer";
const DEFAULT_LOCATION: &str = "India";

/// Raw query-string parameters. Everything is optional; defaults are applied
/// before the provider is called.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSearchParams {
    pub query: Option<String>,
    pub location: Option<String>,
    pub page: Option<u32>,
    pub date_posted: Option<String>,
    pub remote_only: Option<bool>,
}

impl JobSearchParams {
    /// Applies the documented defaults and normalizes the date filter.
    pub fn into_query(self) -> JobQuery {
        JobQuery {
            query: self
                .query
                .filter(|q| !q.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_QUERY.to_string()),
            location: self
                .location
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            page: self.page.filter(|p| *p >= 1).unwrap_or(1),
            date_posted: DatePosted::parse(self.date_posted.as_deref()),
            remote_only: self.remote_only.unwrap_or(false),
        }
    }
}

/// GET /api/jobs/search
///
/// Proxies the query to the listings provider. Provider failure answers 500
/// but still carries a well-formed empty result so the caller's parsing code
/// stays uniform.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<JobSearchParams>,
) -> Response {
    let query = params.into_query();

    match state.job_search.search(&query).await {
        Ok(results) => Json(results).into_response(),
        Err(e) => {
            error!("Job search failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "jobs": [],
                    "totalJobs": 0,
                    "error": "Failed to fetch job listings"
                })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_when_params_absent() {
        let query = JobSearchParams::default().into_query();
        assert_eq!(query.query, "software developer");
        assert_eq!(query.location, "India");
        assert_eq!(query.page, 1);
        assert_eq!(query.date_posted, DatePosted::Month);
        assert!(!query.remote_only);
    }

    #[test]
    fn test_explicit_params_respected() {
        let params = JobSearchParams {
            query: Some("rust engineer".to_string()),
            location: Some("Berlin".to_string()),
            page: Some(3),
            date_posted: Some("today".to_string()),
            remote_only: Some(true),
        };
        let query = params.into_query();
        assert_eq!(query.query, "rust engineer");
        assert_eq!(query.location, "Berlin");
        assert_eq!(query.page, 3);
        assert_eq!(query.date_posted, DatePosted::Today);
        assert!(query.remote_only);
    }

    #[test]
    fn test_blank_and_zero_params_fall_back_to_defaults() {
        let params = JobSearchParams {
            query: Some("   ".to_string()),
            location: Some("".to_string()),
            page: Some(0),
            date_posted: Some("fortnight".to_string()),
            remote_only: None,
        };
        let query = params.into_query();
        assert_eq!(query.query, "software developer");
        assert_eq!(query.location, "India");
        assert_eq!(query.page, 1);
        assert_eq!(query.date_posted, DatePosted::Month);
    }

    #[test]
    fn test_params_deserialize_camel_case_query_string() {
        let params: JobSearchParams =
            serde_json::from_str(r#"{"datePosted": "week", "remoteOnly": true}"#).unwrap();
        assert_eq!(params.date_posted.as_deref(), Some("week"));
        assert_eq!(params.remote_only, Some(true));
    }
}
