use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use request_log::{config, init_tracing, init_tracing_with};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    match args.get_command() {
        cli::Commands::Test => {
            init_tracing();
            commands::test::execute(&args.config)?;
        }
        cli::Commands::Log(log_args) => {
            // Tracing honors the config file for this command
            let cfg = config::load_config(&args.config)?;
            init_tracing_with(&cfg.logging);
            commands::log::execute(&cfg, log_args).await?;
        }
        cli::Commands::Version => {
            println!("request-log v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
