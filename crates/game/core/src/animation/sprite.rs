use crate::animation::AnimationCursor;
use crate::env::{AnimationOracle, LookupError, SpriteOracle};
use crate::state::Facing;

/// What the presentation layer needs to draw a fighter this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteRef {
    /// Position in the decoded sprite array.
    pub index: usize,
    pub group: i32,
    pub image: i32,
    /// Draw mirrored horizontally.
    pub flip: bool,
}

/// Resolves the cursor's current frame into a concrete sprite index.
pub fn resolve_sprite<A, S>(
    cursor: &AnimationCursor,
    frames: &A,
    sprites: &S,
    facing: Facing,
) -> Result<SpriteRef, LookupError>
where
    A: AnimationOracle + ?Sized,
    S: SpriteOracle + ?Sized,
{
    let frame = cursor.current_frame(frames)?;
    let (group, image) = (frame.sprite_group, frame.sprite_image);
    let index = sprites
        .index_of(group, image)
        .ok_or(LookupError::SpriteNotFound { group, image })?;

    Ok(SpriteRef {
        index,
        group,
        image,
        flip: facing == Facing::Left,
    })
}
