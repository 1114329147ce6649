use crate::config::LoggingConfig;
use crate::logging::{truncate_prompt, truncate_token_ids};

use super::params::{LoraRequest, PromptAdapterRequest, RequestParams};

/// Logs incoming inference requests to the process-wide tracing sink
///
/// Prompt text and prompt token ids are cut to `max_log_len` leading
/// characters / elements before they are written.
#[derive(Debug, Clone, Default)]
pub struct RequestLogger {
    max_log_len: Option<usize>,
}

impl RequestLogger {
    pub fn new(max_log_len: Option<usize>) -> Self {
        Self { max_log_len }
    }

    pub fn from_config(config: &LoggingConfig) -> Self {
        Self::new(config.max_log_len)
    }

    pub fn max_log_len(&self) -> Option<usize> {
        self.max_log_len
    }

    /// Emit one INFO event describing the request
    pub fn log_inputs(
        &self,
        request_id: &str,
        prompt: Option<&str>,
        prompt_token_ids: Option<&[u32]>,
        params: Option<&RequestParams>,
        lora_request: Option<&LoraRequest>,
        prompt_adapter_request: Option<&PromptAdapterRequest>,
    ) {
        let prompt = prompt.map(|p| truncate_prompt(p, self.max_log_len));
        let prompt_token_ids = prompt_token_ids.map(|ids| truncate_token_ids(ids, self.max_log_len));

        tracing::info!(
            request_id = %request_id,
            prompt = ?prompt,
            params = ?params,
            prompt_token_ids = ?prompt_token_ids,
            lora_request = ?lora_request,
            prompt_adapter_request = ?prompt_adapter_request,
            "Received request"
        );
    }
}
