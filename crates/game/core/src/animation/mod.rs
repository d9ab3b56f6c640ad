//! Animation playback: cursor advancement and sprite resolution.

mod cursor;
mod sprite;

pub use cursor::{AnimationCursor, advance};
pub use sprite::{SpriteRef, resolve_sprite};
