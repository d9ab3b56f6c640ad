//! Lightweight behavior tree evaluated once per simulation tick.
//!
//! Built for fighting-game opponents that pick a fresh decision every few
//! ticks from a small blackboard (distance to the opponent, health, a
//! deterministic roll source):
//!
//! - **No delta time**: a tree evaluation completes within the tick it runs in
//! - **No Running state**: nodes either succeed or fail immediately
//! - **Closure leaves**: conditions and actions are plain functions of the context
//! - **Zero dependencies**: pure Rust with no external crates
//!
//! # Nodes
//!
//! Every node implements [`Behavior`] over a caller-defined context `C` and
//! returns a [`Status`]. Leaves ([`Condition`], [`Act`]) wrap closures;
//! [`Sequence`] and [`Selector`] combine children; [`Inverter`] flips a
//! child's result. The [`builder`] functions box nodes for tree literals.

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod leaf;
pub mod status;

pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use decorator::Inverter;
pub use leaf::{Act, Condition};
pub use status::Status;
