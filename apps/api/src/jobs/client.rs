//! Job-search provider seam and the JSearch-backed implementation.
//!
//! `AppState` holds an `Arc<dyn JobSearchProvider>` so the backend can be
//! swapped without touching the handler.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};

use crate::jobs::types::{JSearchResponse, JobQuery, JobSearchResults};

const JSEARCH_API_URL: &str = "https://jsearch.p.rapidapi.com/search";
const JSEARCH_API_HOST: &str = "jsearch.p.rapidapi.com";

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("RAPIDAPI_KEY is not configured")]
    MissingApiKey,
}

/// The job-search provider trait. Implement this to swap listing backends
/// without touching the endpoint or handler code.
#[async_trait]
pub trait JobSearchProvider: Send + Sync {
    async fn search(&self, query: &JobQuery) -> Result<JobSearchResults, JobSearchError>;
}

/// JSearch (RapidAPI) backed provider. One attempt per call, no retry; a
/// failure is the handler's cue to answer with the empty-result error shape.
pub struct JSearchClient {
    client: Client,
    api_key: String,
}

impl JSearchClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl JobSearchProvider for JSearchClient {
    async fn search(&self, query: &JobQuery) -> Result<JobSearchResults, JobSearchError> {
        if self.api_key.is_empty() {
            return Err(JobSearchError::MissingApiKey);
        }

        let combined_query = format!("{} in {}", query.query, query.location);
        debug!(
            "Job search: '{}' page={} date_posted={} remote_only={}",
            combined_query,
            query.page,
            query.date_posted.as_provider_param(),
            query.remote_only
        );

        let page = query.page.to_string();
        let mut request = self
            .client
            .get(JSEARCH_API_URL)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", JSEARCH_API_HOST)
            .query(&[
                ("query", combined_query.as_str()),
                ("page", page.as_str()),
                ("num_pages", "1"),
                ("date_posted", query.date_posted.as_provider_param()),
            ]);

        if query.remote_only {
            request = request.query(&[("remote_jobs_only", "true")]);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(JobSearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let provider_response: JSearchResponse = response.json().await?;

        let jobs: Vec<_> = provider_response
            .data
            .into_iter()
            .map(|j| j.normalize())
            .collect();

        info!("Job search returned {} listing(s)", jobs.len());

        Ok(JobSearchResults {
            total_jobs: jobs.len(),
            jobs,
        })
    }
}
