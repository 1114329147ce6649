use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config::{RemoteLoggerConfig, DEFAULT_REMOTE_TIMEOUT_SECONDS};
use crate::error::AppError;

use super::record_sink::{validate_table_name, PromptRecord, RecordSink, SupabaseSink};

/// Best-effort request logger backed by a hosted datastore
///
/// Every call inserts one `{id, prompt, created_at}` row. Insert failures are
/// reported through `tracing::error!` and never returned to the caller.
#[derive(Clone)]
pub struct RemoteRequestLogger {
    sink: Arc<dyn RecordSink>,
    table_name: String,
}

impl RemoteRequestLogger {
    /// Create a logger writing to `table_name` on the Supabase project at `url`
    pub fn new(url: &str, key: &str, table_name: &str) -> Result<Self, AppError> {
        let sink = SupabaseSink::new(
            url,
            key,
            Duration::from_secs(DEFAULT_REMOTE_TIMEOUT_SECONDS),
        )?;
        Self::with_sink(Arc::new(sink), table_name)
    }

    pub fn from_config(config: &RemoteLoggerConfig) -> Result<Self, AppError> {
        let sink = SupabaseSink::new(
            &config.url,
            &config.key,
            Duration::from_secs(config.timeout_seconds),
        )?;
        Self::with_sink(Arc::new(sink), &config.table_name)
    }

    /// Use an arbitrary sink instead of Supabase
    pub fn with_sink(sink: Arc<dyn RecordSink>, table_name: &str) -> Result<Self, AppError> {
        validate_table_name(table_name)?;

        Ok(Self {
            sink,
            table_name: table_name.to_string(),
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Insert one row for this request, logging (not returning) any failure
    pub async fn log_inputs(&self, request_id: &str, prompt: Option<&str>) {
        let record = PromptRecord::new(request_id, prompt.map(str::to_string));

        match self.sink.insert(&self.table_name, &record).await {
            Ok(()) => {
                tracing::debug!(
                    request_id = %request_id,
                    table = %self.table_name,
                    sink = self.sink.name(),
                    "Request logged to datastore"
                );
            }
            Err(e) => {
                tracing::error!(
                    request_id = %request_id,
                    table = %self.table_name,
                    error_type = e.type_name(),
                    error = %e,
                    "Failed to log to Supabase"
                );
            }
        }
    }

    /// Same as [`log_inputs`](Self::log_inputs), on a detached task
    pub fn spawn_log_inputs(self: &Arc<Self>, request_id: &str, prompt: Option<&str>) -> JoinHandle<()> {
        let logger = Arc::clone(self);
        let request_id = request_id.to_string();
        let prompt = prompt.map(str::to_string);

        tokio::spawn(async move {
            logger.log_inputs(&request_id, prompt.as_deref()).await;
        })
    }
}
