use anyhow::Result;
use request_log::config::Config;
use request_log::observability::{
    LoraRequest, RemoteRequestLogger, RequestLogger, RequestParams, SamplingParams,
};

use crate::cli::LogArgs;

/// Execute the log command
///
/// Runs the local logger, then the remote logger when `[remote]` is configured.
pub async fn execute(cfg: &Config, args: LogArgs) -> Result<()> {
    let request_id = args
        .request_id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let max_log_len = args.max_log_len.or(cfg.logging.max_log_len);
    let local = RequestLogger::new(max_log_len);

    let params = sampling_params(&args);
    let lora_request = lora_request(&args);

    local.log_inputs(
        &request_id,
        args.prompt.as_deref(),
        args.token_ids.as_deref(),
        params.as_ref(),
        lora_request.as_ref(),
        None,
    );

    match (&cfg.remote, args.no_remote) {
        (Some(remote_cfg), false) => {
            let remote = RemoteRequestLogger::from_config(remote_cfg)?;
            remote.log_inputs(&request_id, args.prompt.as_deref()).await;
        }
        (Some(_), true) => tracing::debug!("Remote logger skipped (--no-remote)"),
        (None, _) => tracing::debug!("Remote logger not configured"),
    }

    println!("{}", request_id);
    Ok(())
}

fn sampling_params(args: &LogArgs) -> Option<RequestParams> {
    if args.temperature.is_none() && args.max_tokens.is_none() {
        return None;
    }

    Some(RequestParams::Sampling(SamplingParams {
        temperature: args.temperature,
        max_tokens: args.max_tokens,
        ..Default::default()
    }))
}

fn lora_request(args: &LogArgs) -> Option<LoraRequest> {
    match (&args.lora_name, args.lora_id, &args.lora_path) {
        (Some(name), Some(id), Some(path)) => Some(LoraRequest {
            lora_name: name.clone(),
            lora_int_id: id,
            lora_path: path.clone(),
        }),
        _ => None,
    }
}
