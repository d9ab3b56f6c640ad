use fight_core::Decision;

use super::{DecisionSource, Observation};
use crate::error::DecisionError;

/// Polls the inner source only on every `every`-th tick of a round.
///
/// In between it yields `Ok(None)`, so the fighter repeats its last decision.
/// Tick 0 of each round always polls.
pub struct Throttled<S> {
    inner: S,
    every: u64,
}

impl<S> Throttled<S> {
    /// Client default: one decision every 10 ticks. Use `1` for a fresh
    /// decision on every tick.
    pub const DEFAULT_DELAY: u64 = 10;

    /// `every` of 0 is treated as 1 (poll every tick).
    pub fn new(inner: S, every: u64) -> Self {
        Self {
            inner,
            every: every.max(1),
        }
    }

    pub fn every(&self) -> u64 {
        self.every
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: DecisionSource> DecisionSource for Throttled<S> {
    fn poll(&mut self, view: &Observation<'_>) -> Result<Option<Decision>, DecisionError> {
        if view.tick.0 % self.every != 0 {
            return Ok(None);
        }
        self.inner.poll(view)
    }

    fn label(&self) -> &str {
        self.inner.label()
    }
}
