use std::collections::BTreeMap;

use fight_core::{Decision, Tick};

use super::{DecisionSource, Observation};
use crate::error::DecisionError;

/// Always yields the same decision.
#[derive(Clone, Copy, Debug)]
pub struct Constant {
    decision: Decision,
}

impl Constant {
    pub const fn new(decision: Decision) -> Self {
        Self { decision }
    }
}

impl DecisionSource for Constant {
    fn poll(&mut self, _view: &Observation<'_>) -> Result<Option<Decision>, DecisionError> {
        Ok(Some(self.decision))
    }

    fn label(&self) -> &str {
        "constant"
    }
}

/// Yields preset decisions on preset ticks, and nothing otherwise.
///
/// Keyed by round tick, so the same script plays out in every round. Useful
/// for fixtures and for replaying a recorded input track.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    steps: BTreeMap<Tick, Decision>,
}

impl Scripted {
    pub fn new(steps: impl IntoIterator<Item = (Tick, Decision)>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }
}

impl DecisionSource for Scripted {
    fn poll(&mut self, view: &Observation<'_>) -> Result<Option<Decision>, DecisionError> {
        Ok(self.steps.get(&view.tick).copied())
    }

    fn label(&self) -> &str {
        "scripted"
    }
}
