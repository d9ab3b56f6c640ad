//! Character definitions: the parsed, engine-ready form of a fighter's
//! frame scripts and sprite archive metadata.
//!
//! A [`CharacterDef`] is plain data. [`CharacterDef::build`] validates it and
//! produces the immutable [`FighterAssets`] the core consumes, so malformed
//! content fails here instead of mid-round.

use std::collections::HashSet;
use std::num::NonZeroU32;

use fight_core::{
    Action, ActionId, AnimationOracle, CollisionBox, FighterAssets, Frame, FrameTable,
    FrameTableError, SpriteEntry, SpriteIndex,
};

/// Authored box corners `(x1, y1, x2, y2)`. Either corner order is accepted.
pub type BoxDef = (i32, i32, i32, i32);

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterDef {
    pub name: String,
    /// Overrides the configured starting health when set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_health: Option<u32>,
    pub sprites: Vec<SpriteDef>,
    pub actions: Vec<ActionDef>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteDef {
    pub group: i32,
    pub image: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub axis_x: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub axis_y: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionDef {
    pub id: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_defense: Vec<BoxDef>,
    pub frames: Vec<FrameDef>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameDef {
    pub group: i32,
    pub image: i32,
    /// Duration in ticks.
    pub time: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack: Vec<BoxDef>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense: Vec<BoxDef>,
}

/// Validated character content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    pub assets: FighterAssets,
    pub max_health: Option<u32>,
}

/// Content that cannot be turned into fighter assets.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("character '{name}' has no idle action (id 0)")]
    IdleActionMissing { name: String },

    #[error("character '{name}': {source}")]
    FrameTable {
        name: String,
        #[source]
        source: FrameTableError,
    },

    #[error("character '{name}': action {action} frame {frame} has zero duration")]
    ZeroDuration {
        name: String,
        action: ActionId,
        frame: usize,
    },

    #[error(
        "character '{name}': action {action} frame {frame} uses sprite ({group}, {image}) which is not in the sprite list"
    )]
    UnknownSprite {
        name: String,
        action: ActionId,
        frame: usize,
        group: i32,
        image: i32,
    },

    #[error("character '{name}': sprite ({group}, {image}) is listed more than once")]
    DuplicateSprite { name: String, group: i32, image: i32 },

    #[error("character '{name}' declares max_health 0")]
    ZeroMaxHealth { name: String },
}

impl CharacterDef {
    /// Validates the definition and builds the fighter's assets.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found. Checks cover duplicate or
    /// empty actions, a missing idle action, zero-length frames, sprite pairs
    /// listed twice and frames naming sprites that are not listed.
    pub fn build(&self) -> Result<Character, ValidationError> {
        let name = &self.name;

        if self.max_health == Some(0) {
            return Err(ValidationError::ZeroMaxHealth { name: name.clone() });
        }

        let mut pairs = HashSet::with_capacity(self.sprites.len());
        for sprite in &self.sprites {
            if !pairs.insert((sprite.group, sprite.image)) {
                return Err(ValidationError::DuplicateSprite {
                    name: name.clone(),
                    group: sprite.group,
                    image: sprite.image,
                });
            }
        }

        let mut table = FrameTable::new();
        for def in &self.actions {
            let action = build_action(name, def, &pairs)?;
            table
                .insert(action)
                .map_err(|source| ValidationError::FrameTable {
                    name: name.clone(),
                    source,
                })?;
        }

        if table.action(ActionId::IDLE).is_none() {
            return Err(ValidationError::IdleActionMissing { name: name.clone() });
        }

        let sprites = self
            .sprites
            .iter()
            .map(|s| SpriteEntry::new(s.group, s.image, s.axis_x, s.axis_y))
            .collect();

        Ok(Character {
            assets: FighterAssets::new(name.clone(), table, SpriteIndex::new(sprites)),
            max_health: self.max_health,
        })
    }
}

fn build_action(
    name: &str,
    def: &ActionDef,
    sprites: &HashSet<(i32, i32)>,
) -> Result<Action, ValidationError> {
    let id = ActionId(def.id);
    let mut frames = Vec::with_capacity(def.frames.len());

    for (index, frame) in def.frames.iter().enumerate() {
        let duration = NonZeroU32::new(frame.time).ok_or_else(|| ValidationError::ZeroDuration {
            name: name.to_owned(),
            action: id,
            frame: index,
        })?;
        if !sprites.contains(&(frame.group, frame.image)) {
            return Err(ValidationError::UnknownSprite {
                name: name.to_owned(),
                action: id,
                frame: index,
                group: frame.group,
                image: frame.image,
            });
        }
        frames.push(
            Frame::new(frame.group, frame.image, duration)
                .with_attack_boxes(frame.attack.iter().map(to_box))
                .with_defense_boxes(frame.defense.iter().map(to_box)),
        );
    }

    let default_defense = def.default_defense.iter().map(to_box).collect();
    Action::new(id, frames, default_defense).map_err(|source| ValidationError::FrameTable {
        name: name.to_owned(),
        source,
    })
}

fn to_box(&(x1, y1, x2, y2): &BoxDef) -> CollisionBox {
    CollisionBox::new(x1, y1, x2, y2)
}
