//! Block Grid Types
//!
//! Every block is a uniform axis-aligned cube whose center sits on a regular
//! grid. Positions are stored as integer grid coordinates and converted to
//! world space by scaling with [`CUBE_SIZE`], so grid alignment can never
//! drift through float arithmetic. All mutators of the world operate on
//! [`BlockPos`] values, which keeps the alignment invariant by construction.

use glam::{IVec3, Vec3};

/// Edge length of every block cube in world units.
pub const CUBE_SIZE: f32 = 2.0;

/// Half the cube edge; the AABB half-extent of a block on every axis.
pub const CUBE_HALF: f32 = CUBE_SIZE * 0.5;

/// Integer grid coordinate of a block.
///
/// The cube center in world space is `coord * CUBE_SIZE` on each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockPos(pub IVec3);

impl BlockPos {
    /// Create a block position from grid coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(IVec3::new(x, y, z))
    }

    /// World-space center of this block's cube.
    pub fn center(&self) -> Vec3 {
        self.0.as_vec3() * CUBE_SIZE
    }

    /// Min/max corners of the block's AABB.
    pub fn aabb(&self) -> (Vec3, Vec3) {
        let center = self.center();
        (
            center - Vec3::splat(CUBE_HALF),
            center + Vec3::splat(CUBE_HALF),
        )
    }

    /// World-space Y of the top face.
    pub fn top(&self) -> f32 {
        self.center().y + CUBE_HALF
    }

    /// World-space Y of the bottom face.
    pub fn bottom(&self) -> f32 {
        self.center().y - CUBE_HALF
    }

    /// Snap an arbitrary world position to the nearest grid cell
    /// (each coordinate rounds to the nearest multiple of the cube size).
    pub fn from_world(pos: Vec3) -> Self {
        Self(IVec3::new(
            (pos.x / CUBE_SIZE).round() as i32,
            (pos.y / CUBE_SIZE).round() as i32,
            (pos.z / CUBE_SIZE).round() as i32,
        ))
    }

    /// The cell one step along a unit axis direction.
    pub fn offset(&self, dir: IVec3) -> Self {
        Self(self.0 + dir)
    }

    /// The six face-adjacent neighbor cells.
    pub fn neighbors(&self) -> [BlockPos; 6] {
        [
            self.offset(IVec3::X),
            self.offset(IVec3::NEG_X),
            self.offset(IVec3::Y),
            self.offset(IVec3::NEG_Y),
            self.offset(IVec3::Z),
            self.offset(IVec3::NEG_Z),
        ]
    }
}

/// Block surface material. Derived from height, never stored per block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockMaterial {
    Grass,
    Dirt,
}

impl BlockMaterial {
    /// Material for a block: dirt above the ground line, grass at or below it.
    pub fn for_pos(pos: BlockPos) -> Self {
        if pos.center().y > 0.0 {
            BlockMaterial::Dirt
        } else {
            BlockMaterial::Grass
        }
    }

    /// Index of the texture bound for this material.
    pub fn texture_index(self) -> u32 {
        match self {
            BlockMaterial::Grass => 0,
            BlockMaterial::Dirt => 1,
        }
    }
}
