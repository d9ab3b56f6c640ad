use std::fmt;

/// Identifier of one of the two fighters in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterId(pub u8);

impl FighterId {
    /// Player one, spawned left of centre facing right.
    pub const P1: Self = Self(0);
    /// Player two, spawned right of centre facing left.
    pub const P2: Self = Self(1);

    pub const BOTH: [Self; 2] = [Self::P1, Self::P2];

    /// Slot of this fighter in per-round arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other fighter of the pair.
    #[inline]
    pub const fn opponent(self) -> Self {
        Self(1 - (self.0 & 1))
    }
}

impl fmt::Display for FighterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0 + 1)
    }
}

/// World-space anchor position of a fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal distance between two anchors, saturating at `i32::MAX`.
    pub const fn distance_x(self, other: Self) -> i32 {
        let distance = self.x.abs_diff(other.x);
        if distance > i32::MAX as u32 {
            i32::MAX
        } else {
            distance as i32
        }
    }
}

/// Horizontal direction a fighter's local coordinates mirror toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    /// Local +x points to world +x.
    #[default]
    Right,
    /// Local +x points to world -x.
    Left,
}

impl Facing {
    /// Sign applied to local x offsets: `+1` or `-1`.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Facing::Right => 1,
            Facing::Left => -1,
        }
    }
}

/// Discrete simulation step counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer health meter tracked per fighter.
///
/// Damage saturates at zero. Healing is capped at `maximum` and is allowed
/// while depleted: there is no "already defeated" lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    pub current: u32,
    pub maximum: u32,
}

impl Health {
    pub const fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    /// A full meter.
    pub const fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    /// Removes up to `amount` and returns the amount actually removed.
    pub fn take(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_sub(amount);
        before - self.current
    }

    pub fn restore(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.maximum);
    }

    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }
}
