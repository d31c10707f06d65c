//! Forwarder — relays normalized records to the workflow webhook.
//!
//! Exactly one delivery attempt per record: no retry, no backoff, no
//! idempotency key. Deduplication is the downstream list's concern.

use crate::config::{IntakeConfig, MAX_DETAIL_LEN};
use crate::demand::model::NormalizedRecord;
use crate::demand::schema;
use crate::error::{ConfigError, ForwardError, IntakeError};

/// Outcome of a successful relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardResult {
    /// Status echoed by the downstream webhook, for diagnostics.
    pub downstream_status: u16,
}

/// Relays records to the configured workflow-automation endpoint.
///
/// The destination is injected at construction so tests can substitute
/// it without touching process environment state.
pub struct Forwarder {
    client: reqwest::Client,
    flow_url: Option<String>,
}

impl Forwarder {
    pub fn new(config: &IntakeConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.forward_timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            flow_url: config.flow_url.clone(),
        }
    }

    /// Attempt exactly one delivery of `record`.
    ///
    /// An unset destination fails with a configuration error before
    /// any network I/O. Non-2xx downstream answers surface the status
    /// and a bounded body excerpt; transport failures are reported
    /// separately.
    pub async fn forward(&self, record: &NormalizedRecord) -> Result<ForwardResult, IntakeError> {
        let Some(flow_url) = self.flow_url.as_deref() else {
            tracing::error!("POWER_AUTOMATE_URL not configured; refusing to forward");
            return Err(ConfigError::MissingEnvVar("POWER_AUTOMATE_URL".into()).into());
        };

        let payload = schema::to_external_payload(record);

        let resp = self
            .client
            .post(flow_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ForwardError::Transport(e.to_string()))?;

        let status = resp.status();
        // Read the body even on failure to preserve diagnostic detail.
        let body = resp
            .text()
            .await
            .map_err(|e| ForwardError::Transport(e.to_string()))?;

        if status.is_success() {
            tracing::info!(status = status.as_u16(), "Demand forwarded to workflow");
            Ok(ForwardResult {
                downstream_status: status.as_u16(),
            })
        } else {
            tracing::warn!(status = status.as_u16(), "Workflow webhook rejected demand");
            Err(ForwardError::Rejected {
                status: status.as_u16(),
                detail: truncate_detail(&body, MAX_DETAIL_LEN),
            }
            .into())
        }
    }
}

/// Truncate a downstream body excerpt to `max` bytes on a char boundary.
fn truncate_detail(body: &str, max: usize) -> String {
    if body.len() <= max {
        return body.to_string();
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}
