//! Authoritative round state.
//!
//! Each fighter's position, action, frame and health are owned by the
//! simulation loop between ticks and mutated exclusively through
//! [`FightEngine`](crate::engine::FightEngine).
mod common;
mod error;
mod fighter;

pub use common::{Facing, FighterId, Health, Position, Tick};
pub use error::InitializationError;
pub use fighter::{Fighter, FighterBuilder, FighterSpec, FighterState};

use crate::animation::{SpriteRef, resolve_sprite};
use crate::env::{FighterAssets, LookupError};

/// Canonical snapshot of a round in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightState {
    /// Number of completed ticks since round start.
    pub tick: Tick,
    fighters: [FighterState; 2],
}

impl FightState {
    /// Creates round-start state. Fighters are stored by their id slot.
    pub fn new(p1: FighterState, p2: FighterState) -> Self {
        debug_assert_eq!(p1.id, FighterId::P1);
        debug_assert_eq!(p2.id, FighterId::P2);
        Self {
            tick: Tick::ZERO,
            fighters: [p1, p2],
        }
    }

    /// Spawns both fighters from their validated specs.
    pub fn from_specs(specs: &[FighterSpec; 2]) -> Self {
        Self::new(specs[0].spawn(), specs[1].spawn())
    }

    pub fn fighter(&self, id: FighterId) -> &FighterState {
        &self.fighters[id.index()]
    }

    pub fn fighter_mut(&mut self, id: FighterId) -> &mut FighterState {
        &mut self.fighters[id.index()]
    }

    pub fn fighters(&self) -> &[FighterState; 2] {
        &self.fighters
    }

    /// Sprite the presentation layer should draw for `id` this tick.
    ///
    /// # Errors
    ///
    /// [`LookupError`] when the fighter's current frame or its sprite pair is
    /// missing from `assets`.
    pub fn sprite_ref(
        &self,
        id: FighterId,
        assets: &FighterAssets,
    ) -> Result<SpriteRef, LookupError> {
        let fighter = self.fighter(id);
        resolve_sprite(&fighter.cursor, &assets.frames, &assets.sprites, fighter.facing)
    }

    /// Borrows the attacker immutably and its opponent mutably.
    pub fn attacker_and_defender(
        &mut self,
        attacker: FighterId,
    ) -> (&FighterState, &mut FighterState) {
        let [p1, p2] = &mut self.fighters;
        if attacker == FighterId::P1 {
            (&*p1, p2)
        } else {
            (&*p2, p1)
        }
    }
}
