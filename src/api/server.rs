//! HTTP client for the time-record reporting server.
//!
//! One payload per completed record, fire-and-forget: a single POST with a
//! bounded timeout, no retries and no queue. A failed submission is surfaced
//! to the caller and discarded; the daily log on disk stays the durable
//! source of truth and can be re-submitted at any time.

use crate::libs::config::ServerConfig;
use anyhow::Result;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Upload timeout. The tracker never waits on this; uploads run in their
/// own task and report back over a channel.
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(15);

/// Wire payload for one daily time record.
#[derive(Debug, Clone, Serialize)]
pub struct UploadPayload {
    pub user_id: i64,
    pub task_id: i64,
    /// Calendar date of the record, "YYYY-MM-DD".
    pub date: String,
    pub total_seconds: i64,
    pub inactive_seconds: i64,
}

impl UploadPayload {
    pub fn new(user_id: i64, task_id: i64, date: NaiveDate, total_seconds: i64, inactive_seconds: i64) -> Self {
        Self {
            user_id,
            task_id,
            date: date.format("%Y-%m-%d").to_string(),
            total_seconds,
            inactive_seconds,
        }
    }
}

/// Client for the reporting endpoint.
#[derive(Clone)]
pub struct Server {
    client: Client,
    api_url: String,
}

impl Server {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = Client::builder().timeout(UPLOAD_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// Submits one payload. Returns `(success, body_or_error)`: the response
    /// body on 2xx, a status-tagged body on other statuses and the transport
    /// error message when the request never completed.
    pub async fn upload(&self, payload: &UploadPayload) -> (bool, String) {
        let response = match self.client.post(&self.api_url).json(payload).send().await {
            Ok(response) => response,
            Err(e) => return (false, e.to_string()),
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if status.is_success() {
            (true, body)
        } else {
            (false, format!("HTTP {}: {}", status, body))
        }
    }
}
