//! Content factory for loading fight content from a data directory.

use std::path::{Path, PathBuf};

use fight_core::FightConfig;

use crate::character::Character;
use crate::loaders::{CharacterLoader, ConfigLoader, LoadResult};

/// Content factory that loads all fight content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── characters/
///     ├── kfm.ron
///     └── suave.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load balance constants from `config.toml`.
    ///
    /// A missing file yields [`FightConfig::default`]; a present but invalid
    /// file is an error.
    pub fn load_config(&self) -> LoadResult<FightConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(FightConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a character from `characters/{name}.ron`.
    pub fn load_character(&self, name: &str) -> LoadResult<Character> {
        CharacterLoader::load(&self.character_path(name))
    }

    /// Names of every character file in `characters/`, sorted.
    pub fn character_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.data_dir.join("characters");
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "ron") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn character_path(&self, name: &str) -> PathBuf {
        self.data_dir
            .join("characters")
            .join(format!("{}.ron", name))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
