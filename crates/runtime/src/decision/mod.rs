//! Decision sources: where each fighter's intent comes from.
//!
//! Rounds plug in [`DecisionSource`] implementations so a fight can run
//! against rule-based opponents, scripted fixtures, replays or any external
//! policy. Sources are polled once per tick before the engine runs; a source
//! with nothing new returns `Ok(None)` and the fighter keeps its previous
//! decision.

mod fallback;
mod scripted;
mod throttle;

pub use fallback::WithFallback;
pub use scripted::{Constant, Scripted};
pub use throttle::Throttled;

use fight_core::{Decision, FighterId, FighterState, Tick};

use crate::error::DecisionError;

/// Read-only view of the round handed to a decision source.
#[derive(Clone, Copy, Debug)]
pub struct Observation<'a> {
    pub round: u32,
    pub tick: Tick,
    pub me: &'a FighterState,
    pub opponent: &'a FighterState,
}

impl Observation<'_> {
    pub fn fighter(&self) -> FighterId {
        self.me.id
    }

    /// Horizontal distance between the two anchors.
    pub fn distance(&self) -> i32 {
        self.me.position.distance_x(self.opponent.position)
    }
}

/// Trait for producing a fighter's decision from the current round.
///
/// Different implementations can handle:
/// - Rule-based opponents
/// - Scripted or replayed inputs
/// - Testing fixtures
/// - Adapters to policies living outside the process
pub trait DecisionSource: Send {
    /// Returns a new decision, `Ok(None)` to keep the current one, or an
    /// error the round logs before keeping the current one.
    fn poll(&mut self, view: &Observation<'_>) -> Result<Option<Decision>, DecisionError>;

    /// Short label used in logs.
    fn label(&self) -> &str {
        "source"
    }
}

impl<S: DecisionSource + ?Sized> DecisionSource for Box<S> {
    fn poll(&mut self, view: &Observation<'_>) -> Result<Option<Decision>, DecisionError> {
        (**self).poll(view)
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}

/// Last resolved decision of each fighter.
///
/// Starts at [`Decision::IDLE`] for both fighters and only changes when a
/// source yields a new decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecisionCache {
    current: [Decision; 2],
}

impl DecisionCache {
    pub const fn new() -> Self {
        Self {
            current: [Decision::IDLE; 2],
        }
    }

    pub fn get(&self, fighter: FighterId) -> Decision {
        self.current[fighter.index()]
    }

    pub fn all(&self) -> &[Decision; 2] {
        &self.current
    }

    /// Applies a poll result and returns the decision to play this tick.
    pub fn resolve(
        &mut self,
        fighter: FighterId,
        polled: Result<Option<Decision>, DecisionError>,
        label: &str,
    ) -> Decision {
        match polled {
            Ok(Some(decision)) => self.current[fighter.index()] = decision,
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(%fighter, source = label, "{err}; keeping previous decision");
            }
        }
        self.get(fighter)
    }
}

impl Default for DecisionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fight_core::{ActionId, MovementIntent};

    #[test]
    fn cache_keeps_previous_decision_on_none_and_error() {
        let mut cache = DecisionCache::new();
        let punch = Decision::new(ActionId(200), MovementIntent::None);

        assert_eq!(cache.resolve(FighterId::P1, Ok(Some(punch)), "test"), punch);
        assert_eq!(cache.resolve(FighterId::P1, Ok(None), "test"), punch);
        assert_eq!(
            cache.resolve(
                FighterId::P1,
                Err(DecisionError::Unavailable("timeout".into())),
                "test"
            ),
            punch
        );
        assert_eq!(cache.get(FighterId::P2), Decision::IDLE);
    }
}
