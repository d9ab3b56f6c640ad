//! Hit application.

use crate::collision::BoxContact;
use crate::config::FightConfig;
use crate::state::{FighterId, FighterState, Tick};

/// Report of one landed hit, handed to the caller for presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitEvent {
    pub tick: Tick,
    pub attacker: FighterId,
    pub defender: FighterId,
    /// Health actually removed (less than the configured damage near zero).
    pub damage: u32,
    /// Defender health after the hit.
    pub defender_health: u32,
    /// Signed horizontal displacement applied to the defender.
    pub knockback: i32,
    /// Which attack/defense boxes met, when the hit came from box overlap.
    pub contact: Option<BoxContact>,
}

impl HitEvent {
    /// True when this hit brought the defender to zero health.
    pub fn is_knockout(&self) -> bool {
        self.defender_health == 0
    }
}

/// Applies a hit from `attacker` to `defender`.
///
/// Damage is the fixed configured amount, clamped so health stays at or above
/// zero. Knockback pushes the defender along the attacker's facing, whatever
/// way the defender faces. There is no hit-stun or invulnerability window:
/// calling this on consecutive ticks lands every hit.
pub fn apply_hit(
    attacker: &FighterState,
    defender: &mut FighterState,
    config: &FightConfig,
    tick: Tick,
) -> HitEvent {
    let damage = defender.take_damage(config.hit_damage);
    let knockback = config.knockback.saturating_mul(attacker.facing.sign());
    defender.position.x = defender.position.x.saturating_add(knockback);

    HitEvent {
        tick,
        attacker: attacker.id,
        defender: defender.id,
        damage,
        defender_health: defender.health.current,
        knockback,
        contact: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Facing, Position};

    fn fighters(attacker_facing: Facing) -> (FighterState, FighterState) {
        (
            FighterState::new(FighterId::P1, Position::new(0, 0), attacker_facing, 100),
            FighterState::new(FighterId::P2, Position::new(5, 0), Facing::Left, 100),
        )
    }

    #[test]
    fn hit_damages_and_pushes_along_attacker_facing() {
        let config = FightConfig::default();
        let (attacker, mut defender) = fighters(Facing::Right);

        let event = apply_hit(&attacker, &mut defender, &config, Tick(3));

        assert_eq!(defender.health.current, 95);
        assert_eq!(defender.position.x, 15);
        assert_eq!(event.damage, 5);
        assert_eq!(event.defender_health, 95);
        assert_eq!(event.knockback, 10);
        assert_eq!((event.attacker, event.defender), (FighterId::P1, FighterId::P2));
    }

    #[test]
    fn left_facing_attacker_pushes_left() {
        let config = FightConfig::default();
        let (attacker, mut defender) = fighters(Facing::Left);

        apply_hit(&attacker, &mut defender, &config, Tick::ZERO);
        assert_eq!(defender.position.x, -5);
    }

    #[test]
    fn repeated_hits_land_every_call_and_clamp_at_zero() {
        let config = FightConfig::default();
        let (attacker, mut defender) = fighters(Facing::Right);
        defender.health.current = 12;

        let hits: Vec<_> = (0..3)
            .map(|t| apply_hit(&attacker, &mut defender, &config, Tick(t)))
            .collect();

        assert_eq!(hits.iter().map(|h| h.damage).collect::<Vec<_>>(), vec![5, 5, 2]);
        assert!(hits[2].is_knockout());
        assert!(defender.is_defeated());
        assert_eq!(defender.position.x, 35);
    }
}
