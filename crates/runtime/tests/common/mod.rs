#![allow(dead_code)]

use std::num::NonZeroU32;
use std::path::PathBuf;

use fight_content::ContentFactory;
use fight_core::{
    Action, ActionId, CollisionBox, Decision, Facing, Fighter, FighterId, Frame, FrameTable,
    MovementIntent, Position, SpriteEntry, SpriteIndex,
};

pub const PUNCH: ActionId = ActionId(200);

pub fn shipped_content() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../game/content/data"))
}

pub fn punch() -> Decision {
    Decision::new(PUNCH, MovementIntent::None)
}

/// A minimal fighter: idle with a body box, and a punch whose every frame
/// is active, placed `x` units from the origin.
pub fn test_fighter(id: FighterId, x: i32, facing: Facing, max_health: u32) -> Fighter {
    let ticks = |n| NonZeroU32::new(n).unwrap();
    let body = vec![CollisionBox::new(-5, 0, 5, 10)];
    let idle = Action::new(ActionId::IDLE, vec![Frame::new(0, 0, ticks(60))], body.clone()).unwrap();
    let punch = Action::new(
        PUNCH,
        vec![Frame::new(200, 0, ticks(2)).with_attack_boxes([CollisionBox::new(0, 0, 10, 10)])],
        body,
    )
    .unwrap();

    Fighter::builder(id)
        .name(format!("dummy-{id}"))
        .frames(FrameTable::from_actions([idle, punch]).unwrap())
        .sprites(SpriteIndex::new(vec![
            SpriteEntry::new(0, 0, 0, 0),
            SpriteEntry::new(200, 0, 0, 0),
        ]))
        .position(Position::new(x, 0))
        .facing(facing)
        .max_health(max_health)
        .build()
        .unwrap()
}

/// P1 at the origin facing right, P2 five units away facing left.
pub fn adjacent_pair(max_health: u32) -> [Fighter; 2] {
    [
        test_fighter(FighterId::P1, 0, Facing::Right, max_health),
        test_fighter(FighterId::P2, 5, Facing::Left, max_health),
    ]
}
