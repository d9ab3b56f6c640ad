//! The per-tick simulation step.
//!
//! [`FightEngine`] is the only writer of [`FightState`]. One call to
//! [`FightEngine::tick`] runs, in order:
//!
//! 1. apply each fighter's resolved decision (movement, then action switch)
//! 2. advance each fighter's animation cursor
//! 3. resolve both fighters' world-space boxes for the new frames
//! 4. check P1 → P2 and P2 → P1 against that snapshot, applying hits in
//!    that order
//!
//! The tick is all-or-nothing: it runs on a working copy that replaces the
//! state only when every lookup succeeded.

mod errors;

pub use errors::{TickError, TickPhase};

use crate::animation::AnimationCursor;
use crate::collision::{ResolvedBoxes, detect_first, resolve_boxes};
use crate::combat::{HitEvent, apply_hit};
use crate::decision::{Decision, apply_decision};
use crate::env::{AnimationOracle, FightEnv, LookupError};
use crate::state::{FightState, FighterId, FighterState, Tick};

/// Everything a completed tick produced for the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickOutcome {
    /// The tick that was simulated.
    pub tick: Tick,
    /// Hits landed this tick, attacker P1 first.
    pub hits: Vec<HitEvent>,
    /// World-space boxes each fighter had this tick, indexed by fighter slot.
    pub boxes: [ResolvedBoxes; 2],
}

/// Tick reducer over a borrowed [`FightState`].
pub struct FightEngine<'a> {
    state: &'a mut FightState,
}

impl<'a> FightEngine<'a> {
    pub fn new(state: &'a mut FightState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &FightState {
        self.state
    }

    /// Runs one simulation tick.
    ///
    /// # Errors
    ///
    /// [`TickError`] when a fighter's current action or frame is missing from
    /// its frame table. The state is not modified in that case.
    pub fn tick(
        &mut self,
        env: &FightEnv<'_>,
        decisions: &[Decision; 2],
    ) -> Result<TickOutcome, TickError> {
        let tick = self.state.tick;
        let config = env.config();
        let mut next = self.state.clone();

        for id in FighterId::BOTH {
            apply_decision(next.fighter_mut(id), &decisions[id.index()], config);
        }

        for id in FighterId::BOTH {
            let fighter = next.fighter_mut(id);
            fighter.cursor = fighter
                .cursor
                .advanced(env.animations(id))
                .map_err(|e| TickError::new(TickPhase::Animate, id, tick, e))?;
        }

        let boxes = [
            fighter_boxes(env.animations(FighterId::P1), next.fighter(FighterId::P1))
                .map_err(|e| TickError::new(TickPhase::Collide, FighterId::P1, tick, e))?,
            fighter_boxes(env.animations(FighterId::P2), next.fighter(FighterId::P2))
                .map_err(|e| TickError::new(TickPhase::Collide, FighterId::P2, tick, e))?,
        ];

        let mut hits = Vec::new();
        for attacker in FighterId::BOTH {
            let defender = attacker.opponent();
            let contact = detect_first(
                &boxes[attacker.index()].attack,
                &boxes[defender.index()].defense,
            );
            if let Some(contact) = contact {
                let (att, def) = next.attacker_and_defender(attacker);
                let mut event = apply_hit(att, def, config, tick);
                event.contact = Some(contact);
                hits.push(event);
            }
        }

        next.tick = tick.next();
        *self.state = next;

        Ok(TickOutcome { tick, hits, boxes })
    }
}

/// Resolves a fighter's boxes for the frame its cursor points at.
pub fn fighter_boxes<A>(frames: &A, fighter: &FighterState) -> Result<ResolvedBoxes, LookupError>
where
    A: AnimationOracle + ?Sized,
{
    let cursor: &AnimationCursor = &fighter.cursor;
    let action = frames.lookup(cursor.action)?;
    let frame = cursor.current_frame(frames)?;
    Ok(resolve_boxes(
        frame,
        action.default_defense(),
        fighter.position,
        fighter.facing,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::CollisionBox;
    use crate::config::FightConfig;
    use crate::decision::MovementIntent;
    use crate::env::{Action, ActionId, Frame, FrameTable};
    use crate::state::{Facing, Position};
    use std::num::NonZeroU32;

    const PUNCH: ActionId = ActionId(200);

    fn ticks(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    /// Idle: one long frame with a default body box.
    /// Punch: wind-up frame (no attack) then an active frame.
    fn table() -> FrameTable {
        let body = vec![CollisionBox::new(-5, 0, 5, 10)];
        let idle = Action::new(ActionId::IDLE, vec![Frame::new(0, 0, ticks(60))], body.clone())
            .unwrap();
        let punch = Action::new(
            PUNCH,
            vec![
                Frame::new(200, 0, ticks(1)),
                Frame::new(200, 1, ticks(3)).with_attack_boxes([CollisionBox::new(0, 0, 10, 10)]),
            ],
            body,
        )
        .unwrap();
        FrameTable::from_actions([idle, punch]).unwrap()
    }

    fn state(p2_x: i32) -> FightState {
        FightState::new(
            FighterState::new(FighterId::P1, Position::new(0, 0), Facing::Right, 100),
            FighterState::new(FighterId::P2, Position::new(p2_x, 0), Facing::Left, 100),
        )
    }

    fn punch() -> Decision {
        Decision::new(PUNCH, MovementIntent::None)
    }

    #[test]
    fn active_frame_in_range_lands_a_hit() {
        let table = table();
        let config = FightConfig::default();
        let env = FightEnv::new(&table, &table, &config);
        let mut state = state(5);
        let mut engine = FightEngine::new(&mut state);

        // Tick 0: switch into punch and advance past the 1-tick wind-up.
        let outcome = engine.tick(&env, &[punch(), Decision::IDLE]).unwrap();
        assert_eq!(outcome.tick, Tick(0));
        assert_eq!(outcome.hits.len(), 1);

        let hit = outcome.hits[0];
        assert_eq!((hit.attacker, hit.defender), (FighterId::P1, FighterId::P2));
        assert_eq!(hit.damage, config.hit_damage);
        assert_eq!(hit.knockback, config.knockback);

        let p2 = state.fighter(FighterId::P2);
        assert_eq!(p2.health.current, 95);
        assert_eq!(p2.position.x, 15);
        assert_eq!(state.tick, Tick(1));
    }

    #[test]
    fn out_of_range_punch_whiffs() {
        let table = table();
        let config = FightConfig::default();
        let env = FightEnv::new(&table, &table, &config);
        let mut state = state(200);
        let mut engine = FightEngine::new(&mut state);

        let outcome = engine.tick(&env, &[punch(), Decision::IDLE]).unwrap();
        assert!(outcome.hits.is_empty());
        assert_eq!(state.fighter(FighterId::P2).health.current, 100);
        assert_eq!(state.fighter(FighterId::P2).position.x, 200);
    }

    #[test]
    fn overlap_on_consecutive_ticks_hits_every_tick() {
        let table = table();
        let config = FightConfig {
            knockback: 0,
            ..FightConfig::default()
        };
        let env = FightEnv::new(&table, &table, &config);
        let mut state = state(5);
        let mut engine = FightEngine::new(&mut state);

        let decisions = [punch(), Decision::IDLE];
        let landed: usize = (0..3)
            .map(|_| engine.tick(&env, &decisions).unwrap().hits.len())
            .sum();

        assert_eq!(landed, 3);
        assert_eq!(state.fighter(FighterId::P2).health.current, 85);
    }

    #[test]
    fn both_directions_are_checked_against_the_same_snapshot() {
        let table = table();
        let config = FightConfig::default();
        let env = FightEnv::new(&table, &table, &config);
        let mut state = state(5);
        let mut engine = FightEngine::new(&mut state);

        let outcome = engine.tick(&env, &[punch(), punch()]).unwrap();

        assert_eq!(outcome.hits.len(), 2);
        assert_eq!(outcome.hits[0].attacker, FighterId::P1);
        assert_eq!(outcome.hits[1].attacker, FighterId::P2);
        assert_eq!(state.fighter(FighterId::P1).health.current, 95);
        assert_eq!(state.fighter(FighterId::P2).health.current, 95);
        assert_eq!(state.fighter(FighterId::P1).position.x, -10);
        assert_eq!(state.fighter(FighterId::P2).position.x, 15);
    }

    #[test]
    fn fighter_at_the_coordinate_edge_ticks_without_overflow() {
        let table = table();
        let config = FightConfig::default();
        let env = FightEnv::new(&table, &table, &config);
        let mut state = state(i32::MAX - 2);
        let mut engine = FightEngine::new(&mut state);

        let outcome = engine.tick(&env, &[Decision::IDLE, Decision::IDLE]).unwrap();

        let body = outcome.boxes[FighterId::P2.index()].defense[0];
        assert_eq!((body.x1, body.x2), (i32::MAX - 7, i32::MAX));
        assert!(outcome.hits.is_empty());
        assert_eq!(state.fighter(FighterId::P2).position.x, i32::MAX - 2);
    }

    #[test]
    fn missing_action_fails_without_touching_state() {
        let table = table();
        let config = FightConfig::default();
        let env = FightEnv::new(&table, &table, &config);
        let mut state = state(5);
        let before = state.clone();
        let mut engine = FightEngine::new(&mut state);

        let bogus = Decision::new(ActionId(4242), MovementIntent::Forward);
        let err = engine.tick(&env, &[Decision::IDLE, bogus]).unwrap_err();

        assert_eq!(err.fighter, FighterId::P2);
        assert_eq!(err.phase, TickPhase::Animate);
        assert_eq!(
            err.source,
            LookupError::ActionNotFound {
                action: ActionId(4242)
            }
        );
        assert_eq!(err.context.action, Some(ActionId(4242)));
        assert_eq!(state, before);
    }
}
