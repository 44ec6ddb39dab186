use serde::Serialize;
use utoipa::ToSchema;

/// Health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status, always "ok" once the stores are loaded.
    pub status: String,
    /// Number of words currently available.
    pub words: usize,
    /// Number of scores recorded so far.
    pub scores: usize,
}

impl HealthResponse {
    /// Create a health response indicating the system is operational.
    pub fn ok(words: usize, scores: usize) -> Self {
        Self {
            status: "ok".to_string(),
            words,
            scores,
        }
    }
}
