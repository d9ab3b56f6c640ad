//! Rule-based opponents.
//!
//! A [`RuleBasedAi`] evaluates its [`Personality`]'s behavior tree against
//! the distance to the opponent. Random choices draw from the deterministic
//! RNG keyed by match seed, round, tick and fighter, so the same match replays
//! identically.

mod blackboard;
pub mod trees;

pub use blackboard::Blackboard;

use behavior_tree::Behavior;
use fight_core::{ActionId, Decision};

use crate::decision::{DecisionSource, Observation};
use crate::error::DecisionError;

/// Fighting style of a rule-based opponent.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    /// Walks in until within reach, then attacks.
    Aggressive,
    /// Blocks and backs off when crowded, otherwise idles.
    Defensive,
    /// Closes distance from afar, mixes attacks and blocks up close.
    #[default]
    Balanced,
}

/// Which of a character's actions the AI treats as idle, attack and block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActionMap {
    pub idle: ActionId,
    pub attack: ActionId,
    pub block: ActionId,
}

impl ActionMap {
    pub const STANDARD: Self = Self {
        idle: ActionId::IDLE,
        attack: ActionId(200),
        block: ActionId(130),
    };
}

impl Default for ActionMap {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// [`DecisionSource`] backed by a personality tree. Always decides.
pub struct RuleBasedAi {
    personality: Personality,
    actions: ActionMap,
    seed: u64,
    tree: Box<dyn Behavior<Blackboard>>,
}

impl RuleBasedAi {
    pub fn new(personality: Personality, seed: u64) -> Self {
        Self {
            personality,
            actions: ActionMap::default(),
            seed,
            tree: trees::build(personality),
        }
    }

    pub fn with_actions(mut self, actions: ActionMap) -> Self {
        self.actions = actions;
        self
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    /// Evaluates the tree for one observation.
    pub fn decide(&self, view: &Observation<'_>) -> Decision {
        let seed = self.seed ^ u64::from(view.round).rotate_left(32);
        let mut board = Blackboard::new(
            view.distance(),
            self.actions,
            seed,
            view.tick,
            view.fighter(),
        );
        self.tree.tick(&mut board);
        board.decision().unwrap_or(Decision::new(self.actions.idle, Default::default()))
    }
}

impl DecisionSource for RuleBasedAi {
    fn poll(&mut self, view: &Observation<'_>) -> Result<Option<Decision>, DecisionError> {
        Ok(Some(self.decide(view)))
    }

    fn label(&self) -> &str {
        match self.personality {
            Personality::Aggressive => "ai:aggressive",
            Personality::Defensive => "ai:defensive",
            Personality::Balanced => "ai:balanced",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fight_core::{Facing, FighterId, FighterState, MovementIntent, Position, Tick};
    use std::collections::HashSet;
    use std::str::FromStr;

    const PUNCH: ActionId = ActionId(200);
    const GUARD: ActionId = ActionId(130);

    fn decide_at(ai: &RuleBasedAi, distance: i32, tick: u64) -> Decision {
        let me = FighterState::new(FighterId::P1, Position::new(0, 0), Facing::Right, 100);
        let opponent =
            FighterState::new(FighterId::P2, Position::new(distance, 0), Facing::Left, 100);
        ai.decide(&Observation {
            round: 1,
            tick: Tick(tick),
            me: &me,
            opponent: &opponent,
        })
    }

    #[test]
    fn aggressive_approaches_then_attacks() {
        let ai = RuleBasedAi::new(Personality::Aggressive, 7);

        assert_eq!(
            decide_at(&ai, 101, 0),
            Decision::new(ActionId::IDLE, MovementIntent::Forward)
        );
        assert_eq!(
            decide_at(&ai, 100, 0),
            Decision::new(PUNCH, MovementIntent::None)
        );
        assert_eq!(decide_at(&ai, 0, 0), Decision::new(PUNCH, MovementIntent::None));
    }

    #[test]
    fn defensive_blocks_and_retreats_when_crowded() {
        let ai = RuleBasedAi::new(Personality::Defensive, 7);

        assert_eq!(
            decide_at(&ai, 49, 0),
            Decision::new(GUARD, MovementIntent::Backward)
        );
        assert_eq!(decide_at(&ai, 50, 0), Decision::IDLE);
    }

    #[test]
    fn balanced_closes_distance_from_far() {
        let ai = RuleBasedAi::new(Personality::Balanced, 7);
        for tick in 0..20 {
            assert_eq!(
                decide_at(&ai, 151, tick),
                Decision::new(ActionId::IDLE, MovementIntent::Forward)
            );
        }
    }

    #[test]
    fn balanced_up_close_mixes_attack_and_block() {
        let ai = RuleBasedAi::new(Personality::Balanced, 7);
        let seen: HashSet<Decision> = (0..200).map(|t| decide_at(&ai, 20, t)).collect();

        for decision in &seen {
            assert!(matches!(decision.action, PUNCH | GUARD));
            assert!(matches!(
                decision.movement,
                MovementIntent::Backward | MovementIntent::None
            ));
        }
        assert_eq!(seen.len(), 4, "all four combinations should occur");
    }

    #[test]
    fn balanced_mid_range_attacks_sometimes() {
        let ai = RuleBasedAi::new(Personality::Balanced, 7);
        let decisions: Vec<Decision> = (0..1000).map(|t| decide_at(&ai, 100, t)).collect();

        let attacks = decisions.iter().filter(|d| d.action == PUNCH).count();
        assert!((200..400).contains(&attacks), "attacked {attacks} times");
        assert!(decisions.iter().all(|d| matches!(
            d.movement,
            MovementIntent::Forward | MovementIntent::None
        )));
        assert!(decisions.iter().all(|d| d.action != GUARD));
    }

    #[test]
    fn same_seed_replays_identically() {
        let a = RuleBasedAi::new(Personality::Balanced, 42);
        let b = RuleBasedAi::new(Personality::Balanced, 42);
        for tick in 0..100 {
            assert_eq!(decide_at(&a, 30, tick), decide_at(&b, 30, tick));
        }
    }

    #[test]
    fn custom_action_map_is_used() {
        let actions = ActionMap {
            idle: ActionId(0),
            attack: ActionId(210),
            block: ActionId(120),
        };
        let ai = RuleBasedAi::new(Personality::Aggressive, 1).with_actions(actions);
        assert_eq!(decide_at(&ai, 10, 0).action, ActionId(210));
    }

    #[test]
    fn personality_parses_from_snake_case() {
        assert_eq!(Personality::from_str("defensive"), Ok(Personality::Defensive));
        assert_eq!(Personality::Aggressive.to_string(), "aggressive");
        assert!(Personality::from_str("reckless").is_err());
    }
}
