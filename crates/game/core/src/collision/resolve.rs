//! Frame-local → world-space box resolution.
//!
//! One precedence function per box kind keeps the fallback rules in a single
//! place:
//!
//! - attack boxes come from the frame only; no fallback
//! - defense boxes come from the action default when it is non-empty,
//!   otherwise from the frame, otherwise nothing is hittable
//!
//! The action default is consulted FIRST. A frame that authors its own
//! defense boxes does not override a defined default.

use crate::collision::{CollisionBox, WorldBox};
use crate::env::Frame;
use crate::state::{Facing, Position};

/// World-space boxes of one fighter for the current tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedBoxes {
    pub attack: Vec<WorldBox>,
    pub defense: Vec<WorldBox>,
}

/// Attack boxes of a frame. A frame without attack boxes throws no punches.
pub fn attack_boxes_for(frame: &Frame) -> &[CollisionBox] {
    &frame.attack_boxes
}

/// Defense boxes in effect for a frame of an action.
pub fn defense_boxes_for<'a>(
    frame: &'a Frame,
    default_defense: &'a [CollisionBox],
) -> &'a [CollisionBox] {
    if !default_defense.is_empty() {
        default_defense
    } else {
        &frame.defense_boxes
    }
}

/// Maps a frame-local box into world space.
///
/// `x` is mirrored by the facing sign around the anchor, `y` is only
/// translated. Corners are re-normalized after mirroring so a left-facing box
/// keeps a positive width. Coordinates saturate at the `i32` range, matching
/// how movement and knockback clamp positions.
pub fn to_world(local: &CollisionBox, position: Position, facing: Facing) -> WorldBox {
    let sign = facing.sign();
    let x = |offset: i32| position.x.saturating_add(offset.saturating_mul(sign));
    WorldBox::from_corners(
        x(local.x1()),
        position.y.saturating_add(local.y1()),
        x(local.x2()),
        position.y.saturating_add(local.y2()),
    )
}

/// Resolves a frame's attack and defense boxes into world space.
pub fn resolve_boxes(
    frame: &Frame,
    default_defense: &[CollisionBox],
    position: Position,
    facing: Facing,
) -> ResolvedBoxes {
    let project = |boxes: &[CollisionBox]| -> Vec<WorldBox> {
        boxes
            .iter()
            .map(|local| to_world(local, position, facing))
            .collect()
    };

    ResolvedBoxes {
        attack: project(attack_boxes_for(frame)),
        defense: project(defense_boxes_for(frame, default_defense)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    fn frame() -> Frame {
        Frame::new(0, 0, NonZeroU32::new(4).unwrap())
    }

    #[test]
    fn action_default_beats_frame_defense() {
        let default = [CollisionBox::new(-5, -60, 5, 0)];
        let frame = frame().with_defense_boxes([CollisionBox::new(-30, -30, 30, 0)]);

        let resolved = resolve_boxes(&frame, &default, Position::ORIGIN, Facing::Right);
        assert_eq!(resolved.defense, vec![WorldBox::from_corners(-5, -60, 5, 0)]);
    }

    #[test]
    fn frame_defense_used_without_default() {
        let frame = frame().with_defense_boxes([CollisionBox::new(-30, -30, 30, 0)]);

        let resolved = resolve_boxes(&frame, &[], Position::new(100, 0), Facing::Right);
        assert_eq!(resolved.defense, vec![WorldBox::from_corners(70, -30, 130, 0)]);
    }

    #[test]
    fn no_defense_anywhere_is_unhittable() {
        let resolved = resolve_boxes(&frame(), &[], Position::ORIGIN, Facing::Left);
        assert!(resolved.defense.is_empty());
        assert!(resolved.attack.is_empty());
    }

    #[test]
    fn attack_boxes_have_no_fallback() {
        let default = [CollisionBox::new(-5, -60, 5, 0)];
        let resolved = resolve_boxes(&frame(), &default, Position::ORIGIN, Facing::Right);
        assert!(resolved.attack.is_empty());
        assert_eq!(resolved.defense.len(), 1);
    }

    #[test]
    fn left_facing_mirrors_and_normalizes() {
        let frame = frame().with_attack_boxes([CollisionBox::new(10, -70, 40, -50)]);

        let resolved = resolve_boxes(&frame, &[], Position::new(200, 180), Facing::Left);
        let hit = resolved.attack[0];
        assert_eq!(hit, WorldBox::from_corners(160, 110, 190, 130));
        assert!(hit.x1 <= hit.x2 && hit.y1 <= hit.y2);
        assert_eq!(hit.width(), 30);
    }

    #[test]
    fn normalization_holds_for_both_facings() {
        let boxes = [
            CollisionBox::new(-20, -90, 15, 0),
            CollisionBox::new(5, -40, 60, -20),
            CollisionBox::new(-70, -10, -30, 10),
            CollisionBox::new(0, 0, 0, 0),
        ];
        let frame = frame()
            .with_attack_boxes(boxes)
            .with_defense_boxes(boxes);

        for facing in [Facing::Right, Facing::Left] {
            for x in [-300, 0, 17, 640] {
                let resolved = resolve_boxes(&frame, &[], Position::new(x, 200), facing);
                for b in resolved.attack.iter().chain(resolved.defense.iter()) {
                    assert!(b.x1 <= b.x2, "{facing:?} at {x}: {b:?}");
                    assert!(b.y1 <= b.y2, "{facing:?} at {x}: {b:?}");
                }
            }
        }
    }

    #[test]
    fn boxes_at_the_edge_of_the_coordinate_range_clamp() {
        let body = CollisionBox::new(-5, 0, 5, 10);

        let right = to_world(&body, Position::new(i32::MAX - 2, 0), Facing::Right);
        assert_eq!(right, WorldBox::from_corners(i32::MAX - 7, 0, i32::MAX, 10));

        let left = to_world(&body, Position::new(i32::MIN + 2, i32::MAX), Facing::Left);
        assert_eq!((left.x1, left.x2), (i32::MIN, i32::MIN + 7));
        assert_eq!((left.y1, left.y2), (i32::MAX, i32::MAX));
    }

    #[test]
    fn y_is_never_mirrored() {
        let local = CollisionBox::new(-10, -80, 10, -20);
        let right = to_world(&local, Position::new(50, 100), Facing::Right);
        let left = to_world(&local, Position::new(50, 100), Facing::Left);
        assert_eq!((right.y1, right.y2), (20, 80));
        assert_eq!((left.y1, left.y2), (20, 80));
    }
}
