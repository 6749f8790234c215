use anyhow::{Context, Result};

/// Default endpoint matches the backend this client was written against.
const DEFAULT_SCORING_URL: &str = "http://localhost:8080/api/resume/score";

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare invocation works against a local
/// scoring backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the multipart score request is POSTed.
    pub scoring_url: String,
    /// Transport timeout in seconds. The controller itself enforces no timeout;
    /// this is the only deadline on a score request.
    pub request_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            scoring_url: std::env::var("SCORING_URL")
                .unwrap_or_else(|_| DEFAULT_SCORING_URL.to_string()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
