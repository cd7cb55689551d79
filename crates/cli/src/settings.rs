//! Policy configuration from flags, environment and config file.

use std::path::PathBuf;

use anyhow::Result;
use arena_content::ConfigLoader;
use arena_core::{PolicyConfig, Strategy};
use clap::Args;

/// Flags shared by every command.
#[derive(Args)]
pub struct PolicyArgs {
    /// TOML policy configuration file
    #[arg(long, global = true, env = "ARENA_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Rule chain to run (tactician or adventurer); overrides the config file
    #[arg(
        long,
        global = true,
        env = "ARENA_STRATEGY",
        value_name = "NAME",
        value_parser = parse_strategy
    )]
    pub strategy: Option<Strategy>,
}

impl PolicyArgs {
    /// Defaults, then the config file, then the strategy flag.
    pub fn resolve(&self) -> Result<PolicyConfig> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => PolicyConfig::default(),
        };

        if let Some(strategy) = self.strategy {
            config = config.with_strategy(strategy);
        }

        tracing::debug!(strategy = %config.strategy, depth = config.scan_depth, "policy configured");
        Ok(config)
    }
}

fn parse_strategy(value: &str) -> Result<Strategy, String> {
    value
        .parse()
        .map_err(|_| format!("unknown strategy `{value}` (expected tactician or adventurer)"))
}
