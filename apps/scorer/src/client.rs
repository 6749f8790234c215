//! Scoring client — the single point of contact with the remote scoring
//! endpoint. All scoring intelligence lives on the other side of this call;
//! this module only ships the two files across and relays the answer.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, error};

use crate::config::Config;
use crate::errors::ScoreError;
use crate::files::SelectedFile;

/// The scoring backend trait. The form's state machine talks to this, not to
/// HTTP directly, so it can be exercised without a network.
#[async_trait]
pub trait ScoreBackend: Send + Sync {
    async fn score(
        &self,
        resume: &SelectedFile,
        job_desc: &SelectedFile,
    ) -> Result<String, ScoreError>;
}

/// HTTP implementation: one multipart POST per score request, no retries —
/// a failed attempt surfaces immediately and the user resubmits.
pub struct HttpScorer {
    client: Client,
    endpoint: String,
}

impl HttpScorer {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: config.scoring_url.clone(),
        }
    }
}

#[async_trait]
impl ScoreBackend for HttpScorer {
    async fn score(
        &self,
        resume: &SelectedFile,
        job_desc: &SelectedFile,
    ) -> Result<String, ScoreError> {
        let form = Form::new()
            .part("resume", file_part(resume)?)
            .part("jobDesc", file_part(job_desc)?);

        debug!(
            "Scoring '{}' ({} bytes) against '{}' ({} bytes) via {}",
            resume.name(),
            resume.size(),
            job_desc.name(),
            job_desc.size(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Score request failed to reach {}: {e}", self.endpoint);
                ScoreError::RemoteScoring {
                    detail: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                "Scoring endpoint returned {}: {}",
                status,
                error_detail(&body)
            );
            return Err(ScoreError::RemoteScoring {
                detail: format!("status {status}: {body}"),
            });
        }

        // The body is the score text; render it verbatim, whitespace included.
        response.text().await.map_err(|e| {
            error!("Could not read scoring response body: {e}");
            ScoreError::RemoteScoring {
                detail: e.to_string(),
            }
        })
    }
}

fn file_part(file: &SelectedFile) -> Result<Part, ScoreError> {
    Part::bytes(file.bytes().to_vec())
        .file_name(file.name().to_string())
        .mime_str(file.content_type())
        .map_err(|e| ScoreError::RemoteScoring {
            detail: format!("invalid content type '{}': {e}", file.content_type()),
        })
}

/// Pulls the message out of a JSON error envelope if the backend sent one.
/// Diagnostics only; the user always sees the generic message.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .or_else(|| v.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| body.to_string())
}
