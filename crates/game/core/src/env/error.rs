//! Oracle access errors.

use crate::env::ActionId;
use crate::error::{ErrorSeverity, GameError};

/// A fighter's cursor points at data its loaded assets do not have.
///
/// Lookup failures are asset-integrity failures: the engine never substitutes
/// a default action or frame, it propagates the error to the caller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LookupError {
    /// The current action id is not present in the frame table.
    #[error("action {action} not found in frame table")]
    ActionNotFound { action: ActionId },

    /// The frame index is past the end of the action's frame list.
    #[error("frame {index} out of range for action {action} ({len} frames)")]
    FrameOutOfRange {
        action: ActionId,
        index: usize,
        len: usize,
    },

    /// The sprite referenced by a frame is not in the sprite index.
    #[error("sprite ({group}, {image}) not found in sprite index")]
    SpriteNotFound { group: i32, image: i32 },
}

impl GameError for LookupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use LookupError::*;
        match self {
            ActionNotFound { .. } => "LOOKUP_ACTION_NOT_FOUND",
            FrameOutOfRange { .. } => "LOOKUP_FRAME_OUT_OF_RANGE",
            SpriteNotFound { .. } => "LOOKUP_SPRITE_NOT_FOUND",
        }
    }
}

/// Errors raised while assembling a frame table.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameTableError {
    #[error("action {0} has no frames")]
    EmptyAction(ActionId),

    #[error("action {0} is defined more than once")]
    DuplicateAction(ActionId),
}

impl GameError for FrameTableError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            FrameTableError::EmptyAction(_) => "FRAMES_EMPTY_ACTION",
            FrameTableError::DuplicateAction(_) => "FRAMES_DUPLICATE_ACTION",
        }
    }
}
