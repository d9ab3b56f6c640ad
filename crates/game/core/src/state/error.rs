//! Fighter construction errors.

use crate::env::ActionId;
use crate::error::{ErrorSeverity, GameError};
use crate::state::FighterId;

/// Errors raised while assembling a fighter from loaded assets.
///
/// Construction fails fast: any missing required field or inconsistent asset
/// reference is reported before a round can start.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    /// A required builder field was never set.
    #[error("fighter {fighter}: missing required field `{field}`")]
    MissingField {
        fighter: FighterId,
        field: &'static str,
    },

    /// The frame table has no standing/idle action to start a round in.
    #[error("fighter {fighter}: frame table has no idle action ({action})")]
    IdleActionMissing { fighter: FighterId, action: ActionId },

    /// A frame references a sprite the sprite index does not contain.
    #[error("fighter {fighter}: action {action} references missing sprite ({group}, {image})")]
    UnknownSprite {
        fighter: FighterId,
        action: ActionId,
        group: i32,
        image: i32,
    },

    /// Maximum health must be positive.
    #[error("fighter {fighter}: max health must be greater than zero")]
    ZeroMaxHealth { fighter: FighterId },
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use InitializationError::*;
        match self {
            MissingField { .. } => "INIT_MISSING_FIELD",
            IdleActionMissing { .. } => "INIT_IDLE_ACTION_MISSING",
            UnknownSprite { .. } => "INIT_UNKNOWN_SPRITE",
            ZeroMaxHealth { .. } => "INIT_ZERO_MAX_HEALTH",
        }
    }
}
