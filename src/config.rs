use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default timeout for datastore inserts
pub const DEFAULT_REMOTE_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub remote: Option<RemoteLoggerConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter directive, e.g. "info" or "request_log=debug"
    pub level: String,
    /// "text" or "json"
    pub format: String,
    /// Truncate logged prompts and token ids to this many leading elements
    pub max_log_len: Option<usize>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            max_log_len: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteLoggerConfig {
    pub url: String,
    pub key: String,
    pub table_name: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_REMOTE_TIMEOUT_SECONDS
}

/// Load configuration from `path` (if it exists) overlaid with `REQUEST_LOG__*` env vars
///
/// e.g. `REQUEST_LOG__LOGGING__MAX_LOG_LEN=256`, `REQUEST_LOG__REMOTE__KEY=...`
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("REQUEST_LOG")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    match cfg.logging.format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}', expected 'text' or 'json'", other),
    }

    if let Err(e) = tracing_subscriber::EnvFilter::try_new(&cfg.logging.level) {
        anyhow::bail!("Invalid log level '{}': {}", cfg.logging.level, e);
    }

    if let Some(remote) = &cfg.remote {
        validate_remote(remote)?;
    }

    Ok(())
}

fn validate_remote(remote: &RemoteLoggerConfig) -> anyhow::Result<()> {
    let url = match url::Url::parse(&remote.url) {
        Ok(url) => url,
        Err(e) => anyhow::bail!("Remote logger URL '{}' is invalid: {}", remote.url, e),
    };
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("Remote logger URL must use http or https, got '{}'", url.scheme());
    }
    if remote.key.is_empty() {
        anyhow::bail!("Remote logger key cannot be empty");
    }
    if remote.table_name.is_empty() {
        anyhow::bail!("Remote logger table name cannot be empty");
    }
    if let Err(e) = crate::observability::record_sink::validate_table_name(&remote.table_name) {
        anyhow::bail!("Remote logger table name rejected: {}", e);
    }
    if remote.timeout_seconds == 0 {
        anyhow::bail!("Remote logger timeout must be greater than zero");
    }

    Ok(())
}
