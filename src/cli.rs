use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "request-log", version, about = "Inference request logger")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Test configuration file validity (default)
    Test,

    /// Log one request through the configured loggers
    Log(LogArgs),

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    /// Request id (random UUID if omitted)
    #[arg(long)]
    pub request_id: Option<String>,

    /// Prompt text
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Prompt token ids, comma separated
    #[arg(long, value_delimiter = ',')]
    pub token_ids: Option<Vec<u32>>,

    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// LoRA adapter name
    #[arg(long, requires_all = ["lora_id", "lora_path"])]
    pub lora_name: Option<String>,

    /// LoRA adapter integer id
    #[arg(long)]
    pub lora_id: Option<u32>,

    /// LoRA adapter path
    #[arg(long)]
    pub lora_path: Option<String>,

    /// Override `logging.max_log_len`
    #[arg(long)]
    pub max_log_len: Option<usize>,

    /// Skip the remote datastore even if configured
    #[arg(long)]
    pub no_remote: bool,
}

impl Cli {
    /// Get the command to execute, defaulting to Test if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Test)
    }
}
