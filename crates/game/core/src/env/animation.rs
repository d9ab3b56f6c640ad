//! Frame tables: the per-character action → frames data the engine replays.

use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroU32;

use crate::collision::CollisionBox;
use crate::env::{FrameTableError, LookupError};

/// Numeric identifier of an action (animation/behavior state).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionId(pub u32);

impl ActionId {
    /// Standing/idle action every character must define.
    pub const IDLE: Self = Self(0);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One step of an action: a sprite reference, a display time, and its boxes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub sprite_group: i32,
    pub sprite_image: i32,
    pub duration: NonZeroU32,
    /// Offensive boxes (authored order is preserved).
    pub attack_boxes: Vec<CollisionBox>,
    /// Frame-specific hittable surface; may be empty.
    pub defense_boxes: Vec<CollisionBox>,
}

impl Frame {
    pub fn new(sprite_group: i32, sprite_image: i32, duration: NonZeroU32) -> Self {
        Self {
            sprite_group,
            sprite_image,
            duration,
            attack_boxes: Vec::new(),
            defense_boxes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attack_boxes(mut self, boxes: impl IntoIterator<Item = CollisionBox>) -> Self {
        self.attack_boxes = boxes.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_defense_boxes(mut self, boxes: impl IntoIterator<Item = CollisionBox>) -> Self {
        self.defense_boxes = boxes.into_iter().collect();
        self
    }

    /// Display time in ticks.
    #[inline]
    pub fn ticks(&self) -> u32 {
        self.duration.get()
    }
}

/// An ordered, non-empty frame sequence plus an optional default defense set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    id: ActionId,
    frames: Vec<Frame>,
    default_defense: Vec<CollisionBox>,
}

impl Action {
    /// Builds an action, rejecting an empty frame list.
    pub fn new(
        id: ActionId,
        frames: Vec<Frame>,
        default_defense: Vec<CollisionBox>,
    ) -> Result<Self, FrameTableError> {
        if frames.is_empty() {
            return Err(FrameTableError::EmptyAction(id));
        }
        Ok(Self {
            id,
            frames,
            default_defense,
        })
    }

    pub fn id(&self) -> ActionId {
        self.id
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames; always at least one.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn default_defense(&self) -> &[CollisionBox] {
        &self.default_defense
    }

    /// Sum of all frame durations: the length of one loop in ticks.
    pub fn loop_ticks(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.ticks())).sum()
    }
}

/// Oracle providing a character's immutable action table.
///
/// Implementations are loaded once per character asset and never change
/// for the character's lifetime.
pub trait AnimationOracle: Send + Sync {
    fn action(&self, id: ActionId) -> Option<&Action>;

    /// Looks up an action, failing with [`LookupError::ActionNotFound`].
    fn lookup(&self, id: ActionId) -> Result<&Action, LookupError> {
        self.action(id)
            .ok_or(LookupError::ActionNotFound { action: id })
    }

    /// Looks up a frame of an action by index.
    fn frame_at(&self, id: ActionId, index: usize) -> Result<&Frame, LookupError> {
        let action = self.lookup(id)?;
        action.frame(index).ok_or(LookupError::FrameOutOfRange {
            action: id,
            index,
            len: action.frame_count(),
        })
    }
}

/// In-memory [`AnimationOracle`] keyed by action id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameTable {
    actions: BTreeMap<ActionId, Action>,
}

impl FrameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from actions, rejecting duplicate ids.
    pub fn from_actions(actions: impl IntoIterator<Item = Action>) -> Result<Self, FrameTableError> {
        let mut table = Self::new();
        for action in actions {
            table.insert(action)?;
        }
        Ok(table)
    }

    pub fn insert(&mut self, action: Action) -> Result<(), FrameTableError> {
        let id = action.id();
        if self.actions.contains_key(&id) {
            return Err(FrameTableError::DuplicateAction(id));
        }
        self.actions.insert(id, action);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.values()
    }
}

impl AnimationOracle for FrameTable {
    fn action(&self, id: ActionId) -> Option<&Action> {
        self.actions.get(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn empty_action_is_rejected() {
        let err = Action::new(ActionId(7), Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(err, FrameTableError::EmptyAction(ActionId(7)));
    }

    #[test]
    fn duplicate_action_is_rejected() {
        let idle = Action::new(ActionId::IDLE, vec![Frame::new(0, 0, ticks(1))], Vec::new()).unwrap();
        let err = FrameTable::from_actions([idle.clone(), idle]).unwrap_err();
        assert_eq!(err, FrameTableError::DuplicateAction(ActionId::IDLE));
    }

    #[test]
    fn frame_lookup_reports_missing_action_and_index() {
        let idle = Action::new(
            ActionId::IDLE,
            vec![Frame::new(0, 0, ticks(3)), Frame::new(0, 1, ticks(4))],
            Vec::new(),
        )
        .unwrap();
        let table = FrameTable::from_actions([idle]).unwrap();

        assert_eq!(table.frame_at(ActionId::IDLE, 1).unwrap().sprite_image, 1);
        assert_eq!(
            table.frame_at(ActionId(200), 0),
            Err(LookupError::ActionNotFound {
                action: ActionId(200)
            })
        );
        assert_eq!(
            table.frame_at(ActionId::IDLE, 2),
            Err(LookupError::FrameOutOfRange {
                action: ActionId::IDLE,
                index: 2,
                len: 2
            })
        );
        assert_eq!(table.lookup(ActionId::IDLE).unwrap().loop_ticks(), 7);
    }
}
