//! Choose the active hero's move for one snapshot.

use std::path::PathBuf;

use anyhow::{Context, Result};
use arena_content::SnapshotLoader;
use arena_core::PolicyConfig;
use arena_runtime::{Decision, PolicyProvider};
use clap::Parser;

/// Choose the move for a snapshot
#[derive(Parser)]
pub struct Decide {
    /// Snapshot JSON in the host's format
    #[arg(value_name = "SNAPSHOT")]
    snapshot: PathBuf,

    /// Also print which rule chose the move
    #[arg(short, long)]
    explain: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// The move label, e.g. `North`
    Text,
    /// `{"move": ..., "rule": ...}`
    Json,
}

impl Decide {
    pub fn execute(self, config: PolicyConfig) -> Result<()> {
        let snapshot = SnapshotLoader::load(&self.snapshot)?;
        let decision = PolicyProvider::new(config).decide(&snapshot);

        println!("{}", self.render(decision)?);
        Ok(())
    }

    fn render(&self, decision: Decision) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string(&decision).context("Failed to serialize decision")
            }
            OutputFormat::Text if self.explain => {
                Ok(format!("{} ({})", decision.mv, decision.rule))
            }
            OutputFormat::Text => Ok(decision.mv.to_string()),
        }
    }
}
