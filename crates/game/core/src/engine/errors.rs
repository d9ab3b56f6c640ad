//! Error types for the tick pipeline.

use crate::env::LookupError;
use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::{FighterId, Tick};

/// Identifies which stage of the tick produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickPhase {
    /// Advancing the animation cursor.
    Animate,
    /// Resolving the current frame's collision boxes.
    Collide,
}

/// A fighter's assets could not serve the tick.
///
/// The state is left exactly as it was before the tick; the caller decides
/// whether to halt the match, reset the fighter, or skip.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("tick {} {phase} failed for {fighter}: {source}", .context.tick)]
pub struct TickError {
    pub phase: TickPhase,
    pub fighter: FighterId,
    pub context: ErrorContext,
    #[source]
    pub source: LookupError,
}

impl TickError {
    pub(crate) fn new(
        phase: TickPhase,
        fighter: FighterId,
        tick: Tick,
        source: LookupError,
    ) -> Self {
        let mut context = ErrorContext::new(tick).with_fighter(fighter);
        if let LookupError::ActionNotFound { action } | LookupError::FrameOutOfRange { action, .. } =
            &source
        {
            context = context.with_action(*action);
        }
        Self {
            phase,
            fighter,
            context,
            source,
        }
    }
}

impl GameError for TickError {
    fn severity(&self) -> ErrorSeverity {
        self.source.severity()
    }

    fn context(&self) -> Option<&ErrorContext> {
        Some(&self.context)
    }

    fn error_code(&self) -> &'static str {
        self.source.error_code()
    }
}
