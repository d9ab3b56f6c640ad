//! Content loaders for reading fight data from files.
//!
//! Loaders turn RON/TOML files into validated core types. Parse and
//! validation failures carry the offending path so content authors can find
//! the broken file.

pub mod character;
pub mod config;
pub mod factory;

pub use character::CharacterLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
