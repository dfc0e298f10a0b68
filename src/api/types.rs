use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a 404 and of server-side failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of a 400: every problem found with the request.
#[derive(Debug, Serialize)]
pub struct ErrorsResponse {
    pub errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAppearanceRequest {
    /// Kept as raw JSON so a non-numeric rating reaches model validation
    /// instead of failing deserialization.
    #[serde(default)]
    pub rating: Value,
    /// Wider than any stored id so an out-of-range value reads as a missing reference.
    pub episode_id: i64,
    pub guest_id: i64,
}
