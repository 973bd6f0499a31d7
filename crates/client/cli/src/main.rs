//! Headless heist driver.
//!
//! Plays a level from a scripted action list, replays a recorded action log,
//! or walks through the bundled tutorial, then prints a one-line summary.
mod commands;
mod config;
mod report;
mod script;

use anyhow::Result;
use clap::Parser;
use commands::{Replay, Run, Tutorial};
use config::CliConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Headless driver for the heist simulation
#[derive(Parser)]
#[command(name = "heist-cli")]
#[command(about = "Play, record and verify heist runs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Play a level with a scripted action list
    Run(Run),

    /// Verify a recorded action log against a level
    Replay(Replay),

    /// Play the bundled tutorial along a scripted route
    Tutorial(Tutorial),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();
    let config = CliConfig::from_env();

    match Cli::parse().command {
        Command::Run(cmd) => cmd.execute(&config),
        Command::Replay(cmd) => cmd.execute(&config),
        Command::Tutorial(cmd) => cmd.execute(&config),
    }
}

/// Logs to stderr so stdout carries only the summary. `RUST_LOG` overrides
/// the default `info` level.
fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
