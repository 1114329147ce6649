//! Datastore abstraction for the remote request logger
//!
//! The logger only knows how to build a [`PromptRecord`] and hand it to a
//! [`RecordSink`]. [`SupabaseSink`] talks to a hosted Supabase/PostgREST
//! endpoint; anything else can be plugged in through the trait.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Row written for every logged request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub id: String,
    pub prompt: Option<String>,
    /// RFC 3339 UTC timestamp, e.g. `2024-05-01T12:00:00.123456Z`
    pub created_at: String,
}

impl PromptRecord {
    pub fn new(id: impl Into<String>, prompt: Option<String>) -> Self {
        Self::at(id, prompt, Utc::now())
    }

    pub fn at(id: impl Into<String>, prompt: Option<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            prompt,
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// Something a [`PromptRecord`] can be inserted into
#[async_trait]
pub trait RecordSink: Send + Sync + 'static {
    /// Sink name used in log fields (e.g. "supabase")
    fn name(&self) -> &str;

    async fn insert(&self, table: &str, record: &PromptRecord) -> Result<(), AppError>;
}

/// Supabase REST (PostgREST) sink
pub struct SupabaseSink {
    client: Client,
    base_url: Url,
    key: String,
}

impl SupabaseSink {
    /// Build a sink for `url` authenticated with `key`
    ///
    /// Fails if the URL is not http(s), the key is empty, or the HTTP client
    /// cannot be created.
    pub fn new(url: &str, key: &str, timeout: Duration) -> Result<Self, AppError> {
        let base_url = Url::parse(url)?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(AppError::ConfigError(format!(
                "unsupported URL scheme '{}'",
                base_url.scheme()
            )));
        }
        if key.is_empty() {
            return Err(AppError::ConfigError("datastore key is empty".to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            key: key.to_string(),
        })
    }

    /// `{base}/rest/v1/{table}`, with `table` percent-encoded as a single segment
    pub fn table_url(&self, table: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["rest", "v1", table]);
        }
        url
    }
}

/// Reject table names that would leave the `/rest/v1/` path
///
/// Empty names, `.` and `..`, and names containing `/`, `\`, `?`, `#`, `%` or
/// control characters are refused.
pub fn validate_table_name(table: &str) -> Result<(), AppError> {
    if table.is_empty() {
        return Err(AppError::ConfigError("table name is empty".to_string()));
    }
    if table == "." || table == ".." {
        return Err(AppError::ConfigError(format!("invalid table name '{}'", table)));
    }
    if let Some(c) = table
        .chars()
        .find(|c| matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_control())
    {
        return Err(AppError::ConfigError(format!(
            "table name '{}' contains forbidden character {:?}",
            table, c
        )));
    }

    Ok(())
}

#[async_trait]
impl RecordSink for SupabaseSink {
    fn name(&self) -> &str {
        "supabase"
    }

    async fn insert(&self, table: &str, record: &PromptRecord) -> Result<(), AppError> {
        validate_table_name(table)?;

        let response = self
            .client
            .post(self.table_url(table))
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        Err(AppError::UpstreamError { status, message })
    }
}
