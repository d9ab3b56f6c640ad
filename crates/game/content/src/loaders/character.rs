//! Character definition loader.

use std::path::Path;

use anyhow::Context;

use crate::character::{Character, CharacterDef};
use crate::loaders::{LoadResult, read_file};

/// Loader for character definitions from RON files.
pub struct CharacterLoader;

impl CharacterLoader {
    /// Load and validate a character from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a `CharacterDef`
    pub fn load(path: &Path) -> LoadResult<Character> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid character {}", path.display()))
    }

    /// Parse and validate a character from RON text.
    pub fn parse(content: &str) -> LoadResult<Character> {
        let def: CharacterDef = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character RON: {}", e))?;
        Ok(def.build()?)
    }
}
