// SPDX-License-Identifier: MIT
// Console host for the assist commands — reads the "selection" from
// stdin, runs one command against the configured service, and prints
// the replacement (if any) to stdout.

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::io::Read;

use mori::config::AssistConfig;
use mori::host::ConsoleHost;
use mori::service::HttpClient;
use mori::{run_command, Endpoint};

#[derive(Parser)]
#[command(
    name = "mori",
    about = "Send selected code to the Mori assist service",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the assist service
    #[arg(long, env = "MORI_SERVICE_URL")]
    url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "MORI_TIMEOUT_SECS")]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "MORI_LOG")]
    log: Option<String>,

    /// Data directory holding config.toml
    #[arg(long, env = "MORI_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,

    /// Accept confirmation prompts (the auto-fix replacement applies
    /// without asking)
    #[arg(long, short = 'y', global = true)]
    yes: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Refactor the selection and print the replacement.
    Refactor,
    /// Detect errors in the selection and offer an auto-fix.
    Fix,
    /// Fetch refactoring suggestions for the selection.
    Suggest,
    /// Summarize the selection.
    Summarize,
    /// Complete the selection and print the replacement.
    Complete,
}

impl Command {
    fn endpoint(&self) -> Endpoint {
        match self {
            Command::Refactor => Endpoint::Refactor,
            Command::Fix => Endpoint::DetectAndFix,
            Command::Suggest => Endpoint::Suggest,
            Command::Summarize => Endpoint::Summarize,
            Command::Complete => Endpoint::Complete,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = AssistConfig::new(args.url, args.timeout, args.log, args.data_dir);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut selection = String::new();
    std::io::stdin()
        .read_to_string(&mut selection)
        .context("failed to read selection from stdin")?;

    let client = HttpClient::new(&config)?;
    let host = ConsoleHost::new(Some(selection), args.yes);

    run_command(args.command.endpoint(), &client, &host).await
}
