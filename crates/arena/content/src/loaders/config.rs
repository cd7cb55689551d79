//! Policy configuration loader.

use std::path::Path;

use arena_core::PolicyConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for policy configuration from TOML files.
///
/// Every field is optional; anything the file leaves out keeps its default.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`PolicyConfig`] from a TOML file.
    pub fn load(path: &Path) -> LoadResult<PolicyConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::debug!(path = %path.display(), strategy = %config.strategy, "loaded policy config");
        Ok(config)
    }

    /// Parse a [`PolicyConfig`] from TOML text.
    pub fn parse(content: &str) -> LoadResult<PolicyConfig> {
        let config: PolicyConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.scan_depth == 0 {
            anyhow::bail!("scan_depth must be at least 1");
        }

        Ok(config)
    }
}
