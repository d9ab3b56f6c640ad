//! Match orchestration on top of the deterministic fight core.
//!
//! This crate wires decision sources, rule-based opponents and the event
//! transcript around [`fight_core::FightEngine`]. Consumers load characters
//! with `fight-content`, spawn fighters with [`spawn_fighters`] and drive a
//! [`Match`] or individual [`Round`]s.
//!
//! Modules are organized by responsibility:
//! - [`decision`] defines the decision-source seam and its combinators
//! - [`ai`] hosts the behavior-tree opponents
//! - [`round`] and [`arena`] run rounds and best-of-N matches
//! - [`log`] records the match transcript
//!
//! Everything here is synchronous: a round never waits on a source, it reuses
//! the fighter's previous decision instead.
pub mod ai;
pub mod arena;
pub mod decision;
pub mod error;
pub mod log;
pub mod round;

pub use ai::{ActionMap, Personality, RuleBasedAi};
pub use arena::{Match, MatchResult, MatchSettings, RoundResult};
pub use decision::{
    Constant, DecisionCache, DecisionSource, Observation, Scripted, Throttled, WithFallback,
};
pub use error::{DecisionError, Result, RuntimeError};
pub use log::{EventSink, FightEvent, JsonLinesLog, LogError, MemoryLog, NullSink, read_transcript};
pub use round::{Round, RoundOutcome, RoundSettings, placement, spawn_fighters};
