//! Attacker-vs-defender overlap detection.

use crate::collision::WorldBox;

/// The first overlapping pair found, as indices into the authored box lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxContact {
    pub attack_index: usize,
    pub defense_index: usize,
}

/// Finds the first attack/defense pair that overlaps.
///
/// Attacker boxes are the outer loop and defender boxes the inner loop, both
/// in authored order; the scan stops at the first match. An empty list on
/// either side never collides.
pub fn detect_first(attack: &[WorldBox], defense: &[WorldBox]) -> Option<BoxContact> {
    attack.iter().enumerate().find_map(|(attack_index, a)| {
        defense
            .iter()
            .position(|d| a.overlaps(d))
            .map(|defense_index| BoxContact {
                attack_index,
                defense_index,
            })
    })
}

/// True iff any attacker box overlaps any defender box.
pub fn detect(attack: &[WorldBox], defense: &[WorldBox]) -> bool {
    detect_first(attack, defense).is_some()
}
