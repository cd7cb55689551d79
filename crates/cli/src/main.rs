//! Command-line driver for the arena decision engine.
//!
//! Reads a host snapshot from disk and runs the decision policy on it.
//!
//! ```bash
//! arena decide snapshot.json --explain
//! arena --strategy adventurer decide snapshot.json --format json
//! arena area snapshot.json
//! ```
//!
//! `ARENA_CONFIG` and `ARENA_STRATEGY` (also read from `.env`) stand in for
//! `--config` and `--strategy`. Logs go to stderr, filtered by `RUST_LOG`.

mod commands;
mod settings;

use anyhow::Result;
use clap::Parser;
use commands::{Area, Decide};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use settings::PolicyArgs;

/// Arena hero decision engine
#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Pick the active hero's move from a game snapshot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    policy: PolicyArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Choose the move for a snapshot
    Decide(Decide),

    /// Print the local-area scan around the active hero
    Area(Area),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    setup_logging()?;

    let config = cli.policy.resolve()?;

    match cli.command {
        Command::Decide(cmd) => cmd.execute(config),
        Command::Area(cmd) => cmd.execute(config),
    }
}

/// Logs to stderr so stdout carries only the answer.
fn setup_logging() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "arena",
            "decide",
            "turn.json",
            "--strategy",
            "adventurer",
            "--explain",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Decide(_)));
        assert_eq!(
            cli.policy.strategy,
            Some(arena_core::Strategy::Adventurer)
        );
    }

    #[test]
    fn rejects_unknown_strategy() {
        let result = Cli::try_parse_from(["arena", "--strategy", "berserker", "area", "turn.json"]);
        assert!(result.is_err());
    }
}
