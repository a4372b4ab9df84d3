use std::sync::Arc;

use crate::jobs::client::JobSearchProvider;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. No request-to-request state lives here: both clients are
/// plain HTTP connection pools.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable listings backend. Default: JSearchClient.
    pub job_search: Arc<dyn JobSearchProvider>,
}
