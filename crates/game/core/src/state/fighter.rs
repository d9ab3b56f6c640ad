use crate::animation::AnimationCursor;
use crate::env::{ActionId, AnimationOracle, FighterAssets, FrameTable, SpriteIndex};
use crate::state::{Facing, FighterId, Health, InitializationError, Position};

/// Combat-facing state of one fighter, mutated only by the simulation tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterState {
    pub id: FighterId,
    pub position: Position,
    pub facing: Facing,
    pub cursor: AnimationCursor,
    pub health: Health,
}

impl FighterState {
    /// Fresh state: idle action, first frame, full health.
    pub fn new(id: FighterId, position: Position, facing: Facing, max_health: u32) -> Self {
        Self {
            id,
            position,
            facing,
            cursor: AnimationCursor::new(ActionId::IDLE),
            health: Health::full(max_health),
        }
    }

    /// Defeat is derived from health; no "dying" state is stored.
    pub fn is_defeated(&self) -> bool {
        self.health.is_depleted()
    }

    /// Applies damage (saturating at zero) and returns the amount removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health.take(amount)
    }

    /// Restores health up to the maximum, even after defeat.
    pub fn heal(&mut self, amount: u32) {
        self.health.restore(amount);
    }

    pub fn action(&self) -> ActionId {
        self.cursor.action
    }
}

/// Validated starting placement of a fighter; recreates state at each reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterSpec {
    pub id: FighterId,
    pub position: Position,
    pub facing: Facing,
    pub max_health: u32,
}

impl FighterSpec {
    /// Creates round-start state from this placement.
    pub fn spawn(&self) -> FighterState {
        FighterState::new(self.id, self.position, self.facing, self.max_health)
    }
}

/// A fighter's immutable assets together with its validated placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fighter {
    pub assets: FighterAssets,
    pub spec: FighterSpec,
}

impl Fighter {
    pub fn builder(id: FighterId) -> FighterBuilder {
        FighterBuilder::new(id)
    }

    pub fn spawn(&self) -> FighterState {
        self.spec.spawn()
    }
}

/// Explicit construction of a [`Fighter`].
///
/// Enumerates exactly what the engine needs (frame table, sprite index,
/// placement, facing, health) and rejects anything missing in `build`.
#[derive(Clone, Debug)]
pub struct FighterBuilder {
    id: FighterId,
    name: Option<String>,
    frames: Option<FrameTable>,
    sprites: Option<SpriteIndex>,
    position: Option<Position>,
    facing: Option<Facing>,
    max_health: Option<u32>,
}

impl FighterBuilder {
    pub fn new(id: FighterId) -> Self {
        Self {
            id,
            name: None,
            frames: None,
            sprites: None,
            position: None,
            facing: None,
            max_health: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn frames(mut self, frames: FrameTable) -> Self {
        self.frames = Some(frames);
        self
    }

    pub fn sprites(mut self, sprites: SpriteIndex) -> Self {
        self.sprites = Some(sprites);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn facing(mut self, facing: Facing) -> Self {
        self.facing = Some(facing);
        self
    }

    pub fn max_health(mut self, max_health: u32) -> Self {
        self.max_health = Some(max_health);
        self
    }

    /// Validates the collected fields.
    ///
    /// # Errors
    ///
    /// - [`InitializationError::MissingField`] for any unset required field
    /// - [`InitializationError::ZeroMaxHealth`] when `max_health` is 0
    /// - [`InitializationError::IdleActionMissing`] when action 0 is absent
    /// - [`InitializationError::UnknownSprite`] when a frame's sprite is absent
    pub fn build(self) -> Result<Fighter, InitializationError> {
        let fighter = self.id;
        let missing = |field| InitializationError::MissingField { fighter, field };

        let frames = self.frames.ok_or_else(|| missing("frames"))?;
        let sprites = self.sprites.ok_or_else(|| missing("sprites"))?;
        let position = self.position.ok_or_else(|| missing("position"))?;
        let facing = self.facing.ok_or_else(|| missing("facing"))?;
        let max_health = self.max_health.ok_or_else(|| missing("max_health"))?;

        if max_health == 0 {
            return Err(InitializationError::ZeroMaxHealth { fighter });
        }
        if frames.action(ActionId::IDLE).is_none() {
            return Err(InitializationError::IdleActionMissing {
                fighter,
                action: ActionId::IDLE,
            });
        }
        for action in frames.actions() {
            for frame in action.frames() {
                if !sprites.contains(frame.sprite_group, frame.sprite_image) {
                    return Err(InitializationError::UnknownSprite {
                        fighter,
                        action: action.id(),
                        group: frame.sprite_group,
                        image: frame.sprite_image,
                    });
                }
            }
        }

        let name = self.name.unwrap_or_else(|| fighter.to_string());
        Ok(Fighter {
            assets: FighterAssets::new(name, frames, sprites),
            spec: FighterSpec {
                id: fighter,
                position,
                facing,
                max_health,
            },
        })
    }
}
