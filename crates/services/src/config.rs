use std::env;
use std::time::Duration;

/// Every request is bounded by the same fixed timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const BASE_URL_ENV: &str = "PREP_API_URL";
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the Smart Exam Prep backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `PREP_API_URL`, falling back to the local development host.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
