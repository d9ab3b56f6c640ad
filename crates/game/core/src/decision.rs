//! Abstract decisions produced by a decision source (rule-based AI, a remote
//! model, a replay) and their application to a fighter.

use crate::config::FightConfig;
use crate::env::ActionId;
use crate::state::FighterState;

/// Movement half of a decision.
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
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MovementIntent {
    Forward,
    Backward,
    /// Accepted but has no positional effect yet.
    Jump,
    /// Accepted but has no positional effect yet.
    Crouch,
    #[default]
    None,
}

impl MovementIntent {
    /// Horizontal displacement for one tick, relative to the fighter's facing.
    pub fn delta_x(self, config: &FightConfig) -> i32 {
        match self {
            MovementIntent::Forward => config.forward_speed,
            MovementIntent::Backward => config.backward_speed.saturating_neg(),
            MovementIntent::Jump | MovementIntent::Crouch | MovementIntent::None => 0,
        }
    }
}

/// An action to play plus a movement intent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub action: ActionId,
    pub movement: MovementIntent,
}

impl Decision {
    /// Standing still in the idle action.
    pub const IDLE: Self = Self::new(ActionId::IDLE, MovementIntent::None);

    pub const fn new(action: ActionId, movement: MovementIntent) -> Self {
        Self { action, movement }
    }
}

/// Applies a decision before the tick's animation and collision steps.
///
/// Moves the fighter by the intent scaled by its facing and switches to the
/// decided action (playback restarts only when the action changes). The
/// action id is not validated here; a missing id surfaces as a lookup error
/// when the tick advances the cursor.
pub fn apply_decision(fighter: &mut FighterState, decision: &Decision, config: &FightConfig) {
    let dx = decision
        .movement
        .delta_x(config)
        .saturating_mul(fighter.facing.sign());
    fighter.position.x = fighter.position.x.saturating_add(dx);
    fighter.cursor.set_action(decision.action);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Facing, FighterId, Position};
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn fighter(facing: Facing) -> FighterState {
        FighterState::new(FighterId::P1, Position::new(100, 0), facing, 100)
    }

    #[test]
    fn forward_and_backward_follow_facing() {
        let config = FightConfig::default();

        let mut right = fighter(Facing::Right);
        apply_decision(&mut right, &Decision::new(ActionId::IDLE, MovementIntent::Forward), &config);
        assert_eq!(right.position.x, 105);
        apply_decision(&mut right, &Decision::new(ActionId::IDLE, MovementIntent::Backward), &config);
        assert_eq!(right.position.x, 102);

        let mut left = fighter(Facing::Left);
        apply_decision(&mut left, &Decision::new(ActionId::IDLE, MovementIntent::Forward), &config);
        assert_eq!(left.position.x, 95);
        apply_decision(&mut left, &Decision::new(ActionId::IDLE, MovementIntent::Backward), &config);
        assert_eq!(left.position.x, 98);
    }

    #[test]
    fn movement_clamps_at_the_coordinate_range() {
        let config = FightConfig {
            backward_speed: i32::MAX,
            ..FightConfig::default()
        };
        let mut f = fighter(Facing::Right);
        f.position.x = i32::MIN + 1;
        apply_decision(&mut f, &Decision::new(ActionId::IDLE, MovementIntent::Backward), &config);
        assert_eq!(f.position.x, i32::MIN);

        let mut f = fighter(Facing::Right);
        f.position.x = i32::MAX - 2;
        apply_decision(&mut f, &Decision::new(ActionId::IDLE, MovementIntent::Forward), &config);
        assert_eq!(f.position.x, i32::MAX);

        let negated = FightConfig {
            backward_speed: i32::MIN,
            ..FightConfig::default()
        };
        assert_eq!(MovementIntent::Backward.delta_x(&negated), i32::MAX);
    }

    #[test]
    fn jump_and_crouch_do_not_move() {
        let config = FightConfig::default();
        let mut f = fighter(Facing::Right);
        for intent in [MovementIntent::Jump, MovementIntent::Crouch, MovementIntent::None] {
            apply_decision(&mut f, &Decision::new(ActionId::IDLE, intent), &config);
        }
        assert_eq!(f.position, Position::new(100, 0));
    }

    #[test]
    fn new_action_restarts_playback() {
        let config = FightConfig::default();
        let mut f = fighter(Facing::Right);
        f.cursor.frame_index = 2;
        f.cursor.ticks_in_frame = 1;

        apply_decision(&mut f, &Decision::IDLE, &config);
        assert_eq!(f.cursor.frame_index, 2);

        apply_decision(&mut f, &Decision::new(ActionId(200), MovementIntent::None), &config);
        assert_eq!(f.action(), ActionId(200));
        assert_eq!((f.cursor.frame_index, f.cursor.ticks_in_frame), (0, 0));
    }

    #[test]
    fn intents_parse_from_snake_case() {
        for intent in MovementIntent::iter() {
            assert_eq!(MovementIntent::from_str(&intent.to_string()), Ok(intent));
        }
        assert_eq!(MovementIntent::from_str("backward"), Ok(MovementIntent::Backward));
        assert!(MovementIntent::from_str("dash").is_err());
    }
}
