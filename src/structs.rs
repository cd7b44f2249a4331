pub use serde::{Deserialize, Serialize};

/// Request body for POST /shorten.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShortenRequest {
    pub url: String,
    #[serde(default)]
    pub shortcode: Option<String>,
}

/// Response body for a created shortcode.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShortenResponse {
    pub shortcode: String,
}

/// Response body for per-code statistics.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StatsResponse {
    #[serde(rename = "startDate")]
    pub start_date: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "lastSeenDate")]
    pub last_seen_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "redirectCount")]
    pub redirect_count: u64,
}

/// JSON error body.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
