use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, crate::error::StrataError>;

/// Integer block coordinate. Serialized as a `[x, y, z]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i64; 3]", into = "[i64; 3]")]
pub struct BlockPos {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl BlockPos {
    pub const ORIGIN: BlockPos = BlockPos { x: 0, y: 0, z: 0 };

    pub fn new(x: i64, y: i64, z: i64) -> Self {
        BlockPos { x, y, z }
    }

    /// Componentwise minimum.
    pub fn min(self, other: BlockPos) -> BlockPos {
        BlockPos::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Componentwise maximum.
    pub fn max(self, other: BlockPos) -> BlockPos {
        BlockPos::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Componentwise `self - other`, saturating at the i64 bounds.
    pub fn offset_from(self, other: BlockPos) -> BlockPos {
        BlockPos::new(
            self.x.saturating_sub(other.x),
            self.y.saturating_sub(other.y),
            self.z.saturating_sub(other.z),
        )
    }

    pub fn to_array(self) -> [i64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[i64; 3]> for BlockPos {
    fn from([x, y, z]: [i64; 3]) -> Self {
        BlockPos { x, y, z }
    }
}

impl From<BlockPos> for [i64; 3] {
    fn from(pos: BlockPos) -> Self {
        pos.to_array()
    }
}

impl From<(i64, i64, i64)> for BlockPos {
    fn from((x, y, z): (i64, i64, i64)) -> Self {
        BlockPos { x, y, z }
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        BlockPos::new(x.into(), y.into(), z.into())
    }
}

/// Size of a structure along each axis, in blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Extent {
    pub dx: i64,
    pub dy: i64,
    pub dz: i64,
}

impl Extent {
    pub const EMPTY: Extent = Extent { dx: 0, dy: 0, dz: 0 };

    pub fn new(dx: i64, dy: i64, dz: i64) -> Self {
        Extent { dx, dy, dz }
    }

    /// Inclusive extent of the box spanned by `min` and `max`.
    pub fn between(min: BlockPos, max: BlockPos) -> Self {
        let span = max.offset_from(min);
        Extent::new(
            span.x.saturating_add(1),
            span.y.saturating_add(1),
            span.z.saturating_add(1),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.dx == 0 || self.dy == 0 || self.dz == 0
    }

    pub fn contains(&self, pos: BlockPos) -> bool {
        (0..self.dx).contains(&pos.x)
            && (0..self.dy).contains(&pos.y)
            && (0..self.dz).contains(&pos.z)
    }

    pub fn to_array(self) -> [i64; 3] {
        [self.dx, self.dy, self.dz]
    }
}
