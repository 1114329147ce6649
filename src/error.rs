use reqwest::StatusCode;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// HTTP request error (connection refused, DNS, timeout, ...)
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),
    /// Datastore answered with a non-success status
    #[error("Upstream error ({status}): {message}")]
    UpstreamError { status: StatusCode, message: String },
    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Short machine-readable name, used as a log field
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "config_error",
            Self::HttpRequest(_) => "http_request_error",
            Self::UpstreamError { .. } => "upstream_error",
            Self::InternalError(_) => "internal_error",
        }
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        Self::ConfigError(format!("invalid URL: {}", err))
    }
}
