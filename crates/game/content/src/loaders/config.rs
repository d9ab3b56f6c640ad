//! Fight configuration loader.

use std::path::Path;

use fight_core::FightConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for balance constants from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys absent from the file keep their compiled-in defaults.
    pub fn load(path: &Path) -> LoadResult<FightConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<FightConfig> {
        let config: FightConfig = toml::from_str(content)?;
        Ok(config)
    }
}
