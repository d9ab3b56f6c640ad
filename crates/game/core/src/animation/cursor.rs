use crate::env::{ActionId, AnimationOracle, Frame, LookupError};

/// Per-fighter playback position inside its current action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationCursor {
    pub action: ActionId,
    pub frame_index: usize,
    pub ticks_in_frame: u32,
}

impl AnimationCursor {
    /// Cursor at the first tick of the first frame of `action`.
    pub const fn new(action: ActionId) -> Self {
        Self {
            action,
            frame_index: 0,
            ticks_in_frame: 0,
        }
    }

    /// Switches to another action, restarting playback.
    ///
    /// Selecting the action already playing leaves the cursor untouched.
    /// Returns whether a switch happened.
    pub fn set_action(&mut self, action: ActionId) -> bool {
        if self.action == action {
            return false;
        }
        *self = Self::new(action);
        true
    }

    /// Frame the cursor currently points at.
    pub fn current_frame<'t, A>(&self, table: &'t A) -> Result<&'t Frame, LookupError>
    where
        A: AnimationOracle + ?Sized,
    {
        table.frame_at(self.action, self.frame_index)
    }

    /// Cursor one tick later. Animations loop; there is no terminal frame.
    pub fn advanced<A>(&self, table: &A) -> Result<Self, LookupError>
    where
        A: AnimationOracle + ?Sized,
    {
        let (frame_index, ticks_in_frame) =
            advance(table, self.action, self.frame_index, self.ticks_in_frame)?;
        Ok(Self {
            action: self.action,
            frame_index,
            ticks_in_frame,
        })
    }
}

impl Default for AnimationCursor {
    fn default() -> Self {
        Self::new(ActionId::IDLE)
    }
}

/// Advances `(frame_index, ticks_in_frame)` by one tick.
///
/// Crosses at most one frame boundary per call and wraps to frame 0 past the
/// action's last frame.
///
/// # Errors
///
/// [`LookupError`] if `action` is not in the table or `frame_index` is out
/// of range for it.
pub fn advance<A>(
    table: &A,
    action: ActionId,
    frame_index: usize,
    ticks_in_frame: u32,
) -> Result<(usize, u32), LookupError>
where
    A: AnimationOracle + ?Sized,
{
    let current = table.lookup(action)?;
    let frame = table.frame_at(action, frame_index)?;

    let ticks = ticks_in_frame.saturating_add(1);
    if ticks < frame.ticks() {
        return Ok((frame_index, ticks));
    }

    let next = frame_index + 1;
    if next >= current.frame_count() {
        Ok((0, 0))
    } else {
        Ok((next, 0))
    }
}
