use std::collections::HashMap;

/// Metadata of one decoded sprite, in the order the archive stores them.
///
/// Pixels and palettes never reach the core; only the `(group, image)` key and
/// the sprite's axis (its anchor offset) are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteEntry {
    pub group: i32,
    pub image: i32,
    pub axis_x: i32,
    pub axis_y: i32,
}

impl SpriteEntry {
    pub const fn new(group: i32, image: i32, axis_x: i32, axis_y: i32) -> Self {
        Self {
            group,
            image,
            axis_x,
            axis_y,
        }
    }
}

/// Oracle mapping a `(group, image)` pair to a position in the sprite array.
pub trait SpriteOracle: Send + Sync {
    fn index_of(&self, group: i32, image: i32) -> Option<usize>;

    fn entry(&self, index: usize) -> Option<&SpriteEntry>;
}

/// Lookup table over a character's decoded sprite list.
///
/// When the archive holds the same pair more than once, the first entry wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpriteIndex {
    entries: Vec<SpriteEntry>,
    by_key: HashMap<(i32, i32), usize>,
}

impl SpriteIndex {
    pub fn new(entries: Vec<SpriteEntry>) -> Self {
        let mut by_key = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            by_key.entry((entry.group, entry.image)).or_insert(index);
        }
        Self { entries, by_key }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, group: i32, image: i32) -> bool {
        self.by_key.contains_key(&(group, image))
    }
}

impl SpriteOracle for SpriteIndex {
    fn index_of(&self, group: i32, image: i32) -> Option<usize> {
        self.by_key.get(&(group, image)).copied()
    }

    fn entry(&self, index: usize) -> Option<&SpriteEntry> {
        self.entries.get(index)
    }
}
