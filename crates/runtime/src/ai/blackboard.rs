//! Per-decision blackboard shared by the personality trees.

use fight_core::{
    ActionId, Decision, FighterId, MovementIntent, PcgRng, RngOracle, Tick, compute_seed,
};

use super::ActionMap;

/// What a personality tree sees and writes during one evaluation.
pub struct Blackboard {
    pub distance: i32,
    pub actions: ActionMap,
    decision: Option<Decision>,
    rolls: Rolls,
}

impl Blackboard {
    pub(crate) fn new(
        distance: i32,
        actions: ActionMap,
        seed: u64,
        tick: Tick,
        fighter: FighterId,
    ) -> Self {
        Self {
            distance,
            actions,
            decision: None,
            rolls: Rolls {
                seed,
                tick,
                fighter,
                next: 0,
            },
        }
    }

    /// Records the tree's decision.
    pub fn decide(&mut self, action: ActionId, movement: MovementIntent) {
        self.decision = Some(Decision::new(action, movement));
    }

    /// Deterministic coin with `percent` chance of `true`.
    ///
    /// Each call within one evaluation draws an independent roll.
    pub fn chance(&mut self, percent: u32) -> bool {
        self.rolls.chance(percent)
    }

    pub fn decision(&self) -> Option<Decision> {
        self.decision
    }
}

struct Rolls {
    seed: u64,
    tick: Tick,
    fighter: FighterId,
    next: u32,
}

impl Rolls {
    fn chance(&mut self, percent: u32) -> bool {
        let seed = compute_seed(self.seed, self.tick.0, self.fighter.0, self.next);
        self.next += 1;
        PcgRng.chance(seed, percent)
    }
}
