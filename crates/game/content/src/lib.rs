//! Data-driven fight content and loaders.
//!
//! This crate turns authored data into validated core types:
//! - Character definitions (frame scripts, collision boxes, sprite list) via RON
//! - Balance configuration via TOML
//!
//! Content is consumed by the runtime as immutable fighter assets and never
//! appears in fight state.

pub mod character;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use character::{
    ActionDef, BoxDef, Character, CharacterDef, FrameDef, SpriteDef, ValidationError,
};

#[cfg(feature = "loaders")]
pub use loaders::{CharacterLoader, ConfigLoader, ContentFactory, LoadResult};
