use clap::Parser;
use config::cli::Cli;
use config::AcommitConfig;
use error::AcommitError;
use std::process;
use tracing_subscriber::EnvFilter;

mod ai_prompt;
mod command;
mod config;
mod diff;
mod error;
mod prompt;
mod provider;
mod vcs;

const LOG_ENV: &str = "ACOMMIT_LOG";

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        tracing::debug!(stage = ?e.stage(), "run failed");
        eprintln!("\x1b[91m\rerror:\x1b[0m {e}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<(), AcommitError> {
    let cli = Cli::parse();
    let config = AcommitConfig::build(&cli);

    let provider = provider::OpenAIProvider::new(
        reqwest::Client::new(),
        provider::OpenAIConfig::new(config.api_key, config.max_tokens),
    );
    let prompt_file = config.prompt_path.map(prompt::PromptFile::new);
    let command = command::CommitCommand::new(provider, prompt_file);

    command.execute(&vcs::GitBackend::new()).await
}
