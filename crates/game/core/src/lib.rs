//! Deterministic fighting-game simulation core.
//!
//! `fight-core` owns the canonical round rules: frame-table animation playback,
//! facing-aware collision boxes, hit resolution and the fixed-order tick
//! pipeline. It performs no I/O and has no clock; loaders, decision sources
//! and presentation live in downstream crates and talk to the core through
//! the oracle traits in [`env`] and the types re-exported here.
//!
//! All state mutation flows through [`engine::FightEngine`].
pub mod animation;
pub mod collision;
pub mod combat;
pub mod config;
pub mod decision;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use animation::{AnimationCursor, SpriteRef, advance, resolve_sprite};
pub use collision::{
    BoxContact, CollisionBox, ResolvedBoxes, WorldBox, detect, detect_first, resolve_boxes,
};
pub use combat::{CombatState, HitEvent, apply_hit};
pub use config::FightConfig;
pub use decision::{Decision, MovementIntent, apply_decision};
pub use engine::{FightEngine, TickError, TickOutcome, TickPhase, fighter_boxes};
pub use env::{
    Action, ActionId, AnimationOracle, FightEnv, FighterAssets, Frame, FrameTable,
    FrameTableError, LookupError, PcgRng, RngOracle, SpriteEntry, SpriteIndex, SpriteOracle,
    compute_seed,
};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use state::{
    Facing, FightState, Fighter, FighterBuilder, FighterId, FighterSpec, FighterState, Health,
    InitializationError, Position, Tick,
};
