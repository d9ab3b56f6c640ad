//! Traits describing read-only character data.
//!
//! Oracles expose each fighter's frame table and sprite index plus the
//! deterministic RNG. The [`FightEnv`] aggregate bundles what a tick needs so
//! the engine never couples to concrete loaders.
mod animation;
mod error;
mod rng;
mod sprites;

pub use animation::{Action, ActionId, AnimationOracle, Frame, FrameTable};
pub use error::{FrameTableError, LookupError};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use sprites::{SpriteEntry, SpriteIndex, SpriteOracle};

use crate::config::FightConfig;
use crate::state::FighterId;

/// Immutable assets of one character: loaded once, shared across rounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FighterAssets {
    pub name: String,
    pub frames: FrameTable,
    pub sprites: SpriteIndex,
}

impl FighterAssets {
    pub fn new(name: impl Into<String>, frames: FrameTable, sprites: SpriteIndex) -> Self {
        Self {
            name: name.into(),
            frames,
            sprites,
        }
    }
}

/// Read-only inputs of a tick: both fighters' animation data and the config.
#[derive(Clone, Copy)]
pub struct FightEnv<'a> {
    animations: [&'a dyn AnimationOracle; 2],
    config: &'a FightConfig,
}

impl<'a> FightEnv<'a> {
    pub fn new(
        p1: &'a dyn AnimationOracle,
        p2: &'a dyn AnimationOracle,
        config: &'a FightConfig,
    ) -> Self {
        Self {
            animations: [p1, p2],
            config,
        }
    }

    /// Builds an environment backed by loaded assets.
    pub fn from_assets(assets: &'a [FighterAssets; 2], config: &'a FightConfig) -> Self {
        Self::new(&assets[0].frames, &assets[1].frames, config)
    }

    /// Returns the animation oracle of the given fighter.
    pub fn animations(&self, fighter: FighterId) -> &'a dyn AnimationOracle {
        self.animations[fighter.index()]
    }

    pub fn config(&self) -> &'a FightConfig {
        self.config
    }
}

impl std::fmt::Debug for FightEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FightEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
