//! Collision boxes: resolution into world space and overlap detection.
//!
//! All functions here are pure. The engine resolves both fighters' boxes for
//! a tick, then checks each direction (attacker → defender) independently.

mod boxes;
mod detect;
mod resolve;

pub use boxes::{CollisionBox, WorldBox};
pub use detect::{BoxContact, detect, detect_first};
pub use resolve::{ResolvedBoxes, attack_boxes_for, defense_boxes_for, resolve_boxes, to_world};
