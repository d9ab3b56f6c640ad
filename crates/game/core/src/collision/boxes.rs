//! Axis-aligned rectangles in frame-local and world space.

/// Frame-local collision rectangle.
///
/// Coordinates are signed offsets from the fighter's anchor and are not
/// mirrored yet. Construction normalizes the corners so `x1 <= x2` and
/// `y1 <= y2` always hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CollisionBox {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl CollisionBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    pub const fn x1(&self) -> i32 {
        self.x1
    }

    pub const fn y1(&self) -> i32 {
        self.y1
    }

    pub const fn x2(&self) -> i32 {
        self.x2
    }

    pub const fn y2(&self) -> i32 {
        self.y2
    }
}

/// World-space collision rectangle, `x1 <= x2` and `y1 <= y2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl WorldBox {
    /// Builds a box from two arbitrary corners, normalizing min/max per axis.
    pub fn from_corners(ax: i32, ay: i32, bx: i32, by: i32) -> Self {
        Self {
            x1: ax.min(bx),
            y1: ay.min(by),
            x2: ax.max(bx),
            y2: ay.max(by),
        }
    }

    pub const fn width(&self) -> i32 {
        self.x2.saturating_sub(self.x1)
    }

    /// Inclusive overlap test: boxes sharing an edge collide.
    ///
    /// Boxes are disjoint only when fully separated on one axis.
    pub const fn overlaps(&self, other: &WorldBox) -> bool {
        !(self.x2 < other.x1 || other.x2 < self.x1 || self.y2 < other.y1 || other.y2 < self.y1)
    }
}
