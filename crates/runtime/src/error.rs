//! Unified error types surfaced by the runtime API.
//!
//! Wraps tick failures, fighter setup failures and event-log failures so the
//! binary can bubble them up with consistent context.
use fight_core::{InitializationError, TickError};
use thiserror::Error;

use crate::log::LogError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("round {round} halted")]
    Tick {
        round: u32,
        #[source]
        source: TickError,
    },

    #[error("failed to set up fighter")]
    Setup(#[from] InitializationError),

    #[error(transparent)]
    Log(#[from] LogError),

    #[error("a match needs at least one round")]
    NoRounds,
}

/// Failure of a decision source to produce a decision this tick.
///
/// The round logs it and keeps the fighter's previous decision.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// The source cannot answer right now (e.g. a remote model timed out).
    #[error("decision source unavailable: {0}")]
    Unavailable(String),

    /// The source answered with something it could not turn into a decision.
    #[error("decision source returned an invalid decision: {0}")]
    Invalid(String),
}
