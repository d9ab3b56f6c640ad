//! Combat resolution.
//!
//! Pure functions that turn a detected overlap into health and position
//! changes. [`CombatState`] is the health subset of [`FighterState`]; defeat
//! is always derived from it, never stored.
//!
//! [`FighterState`]: crate::state::FighterState

pub mod hit;

pub use hit::{HitEvent, apply_hit};

/// Health-and-defeat view of a fighter.
pub type CombatState = crate::state::Health;
