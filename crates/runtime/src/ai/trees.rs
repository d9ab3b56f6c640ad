//! Behavior trees for each personality.
//!
//! Every tree ends in an unconditional branch, so an evaluation always
//! decides.

use behavior_tree::Behavior;
use behavior_tree::Status;
use behavior_tree::builder::{act, condition, guard, inverter, selector};
use fight_core::MovementIntent;

use super::{Blackboard, Personality};

/// Opponent is close enough for an aggressive fighter to start swinging.
pub const AGGRESSIVE_REACH: i32 = 100;
/// Opponent is close enough that a defensive or balanced fighter reacts.
pub const CLOSE_RANGE: i32 = 50;
/// Beyond this a balanced fighter closes the distance.
pub const FAR_RANGE: i32 = 150;

/// Chance a balanced fighter attacks from mid range.
pub const MID_RANGE_ATTACK_PERCENT: u32 = 30;

type Tree = Box<dyn Behavior<Blackboard>>;

pub fn build(personality: Personality) -> Tree {
    match personality {
        Personality::Aggressive => aggressive(),
        Personality::Defensive => defensive(),
        Personality::Balanced => balanced(),
    }
}

fn aggressive() -> Tree {
    selector(vec![
        guard(
            inverter(condition(|b: &Blackboard| b.distance <= AGGRESSIVE_REACH)),
            decide(|b| (b.actions.idle, MovementIntent::Forward)),
        ),
        decide(|b| (b.actions.attack, MovementIntent::None)),
    ])
}

fn defensive() -> Tree {
    selector(vec![
        guard(
            condition(|b: &Blackboard| b.distance < CLOSE_RANGE),
            decide(|b| (b.actions.block, MovementIntent::Backward)),
        ),
        decide(|b| (b.actions.idle, MovementIntent::None)),
    ])
}

fn balanced() -> Tree {
    selector(vec![
        guard(
            condition(|b: &Blackboard| b.distance > FAR_RANGE),
            decide(|b| (b.actions.idle, MovementIntent::Forward)),
        ),
        guard(
            condition(|b: &Blackboard| b.distance < CLOSE_RANGE),
            decide(|b| {
                let action = if b.chance(50) {
                    b.actions.attack
                } else {
                    b.actions.block
                };
                let movement = if b.chance(50) {
                    MovementIntent::Backward
                } else {
                    MovementIntent::None
                };
                (action, movement)
            }),
        ),
        decide(|b| {
            let action = if b.chance(MID_RANGE_ATTACK_PERCENT) {
                b.actions.attack
            } else {
                b.actions.idle
            };
            let movement = if b.chance(50) {
                MovementIntent::Forward
            } else {
                MovementIntent::None
            };
            (action, movement)
        }),
    ])
}

fn decide<F>(choose: F) -> Tree
where
    F: Fn(&mut Blackboard) -> (fight_core::ActionId, MovementIntent) + Send + Sync + 'static,
{
    act(move |b: &mut Blackboard| {
        let (action, movement) = choose(b);
        b.decide(action, movement);
        Status::Success
    })
}
