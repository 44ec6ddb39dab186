use crate::{dto::health::HealthResponse, state::SharedState};

/// Report the service as healthy along with the size of each store.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    HealthResponse::ok(state.words().len().await, state.scores().len().await)
}
