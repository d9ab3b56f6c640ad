/// Balance constants and stage geometry used by the simulation.
///
/// Every value has a compile-time default matching the engine's reference
/// tuning. Damage is a single constant for every attacking action: the engine
/// does not vary damage by action type yet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FightConfig {
    /// Health removed from the defender on every landed hit.
    pub hit_damage: u32,
    /// Horizontal push applied to the defender, signed by the attacker's facing.
    pub knockback: i32,
    /// Per-tick displacement for [`MovementIntent::Forward`](crate::MovementIntent::Forward).
    pub forward_speed: i32,
    /// Per-tick displacement for [`MovementIntent::Backward`](crate::MovementIntent::Backward).
    pub backward_speed: i32,
    /// Health a fighter starts each round with unless its spec overrides it.
    pub max_health: u32,
    /// Width of the stage in world units; fighters spawn around its centre.
    pub stage_width: i32,
    /// Distance from the stage centre at which each fighter spawns.
    pub start_offset: i32,
    /// Ground line (world y of a fighter's anchor at round start).
    pub ground_y: i32,
}

impl FightConfig {
    pub const DEFAULT_HIT_DAMAGE: u32 = 5;
    pub const DEFAULT_KNOCKBACK: i32 = 10;
    pub const DEFAULT_FORWARD_SPEED: i32 = 5;
    pub const DEFAULT_BACKWARD_SPEED: i32 = 3;
    pub const DEFAULT_MAX_HEALTH: u32 = 100;
    pub const DEFAULT_STAGE_WIDTH: i32 = 640;
    pub const DEFAULT_START_OFFSET: i32 = 200;
    pub const DEFAULT_GROUND_Y: i32 = 200;

    pub const fn new() -> Self {
        Self {
            hit_damage: Self::DEFAULT_HIT_DAMAGE,
            knockback: Self::DEFAULT_KNOCKBACK,
            forward_speed: Self::DEFAULT_FORWARD_SPEED,
            backward_speed: Self::DEFAULT_BACKWARD_SPEED,
            max_health: Self::DEFAULT_MAX_HEALTH,
            stage_width: Self::DEFAULT_STAGE_WIDTH,
            start_offset: Self::DEFAULT_START_OFFSET,
            ground_y: Self::DEFAULT_GROUND_Y,
        }
    }

    /// X coordinate of the stage centre.
    pub const fn stage_center(&self) -> i32 {
        self.stage_width / 2
    }
}

impl Default for FightConfig {
    fn default() -> Self {
        Self::new()
    }
}
