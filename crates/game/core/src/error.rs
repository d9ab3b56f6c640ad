//! Error classification shared by every fight-core error.
//!
//! Concrete errors ([`LookupError`](crate::env::LookupError),
//! [`TickError`](crate::engine::TickError), ...) sit next to the code that
//! raises them and implement [`GameError`] so drivers can log and route them
//! uniformly.

use crate::env::ActionId;
use crate::state::{FighterId, Tick};

/// How a driver should treat an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Continuing the match is safe.
    Recoverable,
    /// Bad input, e.g. a fighter spec missing a field. Fix and rebuild.
    Validation,
    /// A broken internal assumption.
    Internal,
    /// Assets cannot serve the tick, e.g. the current action is absent from
    /// the frame table. The round cannot continue for that fighter.
    Fatal,
}

impl ErrorSeverity {
    /// True for severities after which the round must stop.
    pub const fn halts_round(self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Where in the simulation an error was raised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    pub tick: Tick,
    pub fighter: Option<FighterId>,
    pub action: Option<ActionId>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(tick: Tick) -> Self {
        Self {
            tick,
            fighter: None,
            action: None,
        }
    }

    #[must_use]
    pub const fn with_fighter(mut self, fighter: FighterId) -> Self {
        self.fighter = Some(fighter);
        self
    }

    #[must_use]
    pub const fn with_action(mut self, action: ActionId) -> Self {
        self.action = Some(action);
        self
    }
}

/// Implemented by every error the core raises.
///
/// Implementors derive `thiserror::Error` for the message and return a
/// stable upper-case `error_code` that log filters can match on.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_internal_and_fatal_halt_the_round() {
        assert!(!ErrorSeverity::Recoverable.halts_round());
        assert!(!ErrorSeverity::Validation.halts_round());
        assert!(ErrorSeverity::Internal.halts_round());
        assert!(ErrorSeverity::Fatal.halts_round());
        assert_eq!(ErrorSeverity::Fatal.to_string(), "fatal");
    }

    #[test]
    fn context_builder_records_fighter_and_action() {
        let context = ErrorContext::new(Tick(7))
            .with_fighter(FighterId::P2)
            .with_action(ActionId(200));
        assert_eq!(context.tick, Tick(7));
        assert_eq!(context.fighter, Some(FighterId::P2));
        assert_eq!(context.action, Some(ActionId(200)));
    }
}
