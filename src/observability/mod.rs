//! Request logging for the inference server
//!
//! - [`RequestLogger`] writes truncated request metadata to the tracing sink.
//! - [`RemoteRequestLogger`] stores `{id, prompt, created_at}` rows in a hosted datastore.

pub mod params;
pub mod record_sink;
pub mod remote_logger;
pub mod request_logger;

pub use params::{
    BeamSearchParams, LoraRequest, PoolingParams, PromptAdapterRequest, RequestParams,
    SamplingParams,
};
pub use record_sink::{PromptRecord, RecordSink, SupabaseSink};
pub use remote_logger::RemoteRequestLogger;
pub use request_logger::RequestLogger;
