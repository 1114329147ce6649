//! Request metadata that accompanies a prompt
//!
//! The loggers treat all of these as opaque and only render them with `Debug`.

use serde::{Deserialize, Serialize};

/// Sampling parameters for a generate request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub n: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            n: 1,
            temperature: None,
            top_p: None,
            top_k: None,
            max_tokens: None,
            stop: Vec::new(),
            seed: None,
        }
    }
}

/// Parameters for an embedding / pooling request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<serde_json::Value>,
}

/// Parameters for beam search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSearchParams {
    pub beam_width: u32,
    pub max_tokens: u32,
    #[serde(default)]
    pub ignore_eos: bool,
    #[serde(default)]
    pub temperature: f32,
    #[serde(default = "default_length_penalty")]
    pub length_penalty: f32,
}

fn default_length_penalty() -> f32 {
    1.0
}

/// Any of the per-request parameter kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestParams {
    Sampling(SamplingParams),
    Pooling(PoolingParams),
    BeamSearch(BeamSearchParams),
}

impl From<SamplingParams> for RequestParams {
    fn from(params: SamplingParams) -> Self {
        Self::Sampling(params)
    }
}

impl From<PoolingParams> for RequestParams {
    fn from(params: PoolingParams) -> Self {
        Self::Pooling(params)
    }
}

impl From<BeamSearchParams> for RequestParams {
    fn from(params: BeamSearchParams) -> Self {
        Self::BeamSearch(params)
    }
}

/// LoRA adapter applied to a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoraRequest {
    pub lora_name: String,
    pub lora_int_id: u32,
    pub lora_path: String,
}

/// Prompt adapter applied to a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptAdapterRequest {
    pub prompt_adapter_name: String,
    pub prompt_adapter_id: u32,
    pub prompt_adapter_local_path: String,
    pub prompt_adapter_num_virtual_tokens: u32,
}
