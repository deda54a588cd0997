//! Block Targeting
//!
//! Per-frame raycast selection: which existing block the crosshair points
//! at (the removal target) and which empty cell a new block would go into
//! (the placement target). Both are recomputed from scratch every frame;
//! the only state that survives frames is the pulsing highlight alpha.
//!
//! Placement rule: a cell is a valid target only if it is unoccupied and at
//! least one of its six axis neighbors is occupied, so free-floating blocks
//! cannot be placed.

use glam::{IVec3, Vec3};

use crate::camera::raycast::Ray;
use crate::physics::collision::ray_aabb_intersect;
use crate::world::block::{BlockPos, CUBE_SIZE};
use crate::world::blocks::BlockWorld;

/// Maximum targeting distance: four cube lengths.
pub const MAX_REACH: f32 = 4.0 * CUBE_SIZE;

/// Highlight alpha ping-pong bounds and rate.
const ALPHA_MIN: f32 = 0.2;
const ALPHA_MAX: f32 = 1.0;
const ALPHA_SPEED: f32 = 2.0;

/// What a primary click does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    /// Clicks place a block into the targeted empty cell.
    Place,
    /// Clicks remove the targeted block.
    Remove,
}

impl InteractionMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            InteractionMode::Place => InteractionMode::Remove,
            InteractionMode::Remove => InteractionMode::Place,
        }
    }
}

/// Per-frame targeting state.
#[derive(Clone, Debug)]
pub struct BlockTargeting {
    /// Closest block under the crosshair, if any (removal target).
    pub hit_block: Option<BlockPos>,
    /// Cell a placement would fill, if any. Only computed in
    /// [`InteractionMode::Place`].
    pub place_cell: Option<BlockPos>,
    alpha: f32,
    alpha_speed: f32,
}

impl Default for BlockTargeting {
    fn default() -> Self {
        Self {
            hit_block: None,
            place_cell: None,
            alpha: 0.5,
            alpha_speed: ALPHA_SPEED,
        }
    }
}

impl BlockTargeting {
    /// Create a fresh targeting state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current highlight alpha in `[0.2, 1.0]`.
    pub fn highlight_alpha(&self) -> f32 {
        self.alpha
    }

    /// Recompute the selection for this frame and advance the highlight
    /// animation.
    pub fn update(&mut self, ray: &Ray, world: &BlockWorld, mode: InteractionMode, dt: f32) {
        self.hit_block = None;
        self.place_cell = None;

        // Closest slab hit strictly inside the reach distance
        let mut closest = MAX_REACH;
        for &block in world.blocks() {
            let (min, max) = block.aabb();
            if let Some(t) = ray_aabb_intersect(ray.origin, ray.dir, min, max) {
                if t < closest {
                    closest = t;
                    self.hit_block = Some(block);
                }
            }
        }

        match (self.hit_block, mode) {
            (Some(hit), InteractionMode::Place) => {
                let normal = dominant_axis_dir(ray.point_at(closest) - ray.origin);
                self.place_cell = Some(hit.offset(normal));
            }
            (None, InteractionMode::Place) => {
                // No block under the crosshair: march along the ray and take
                // the first grid cell that satisfies the placement rule.
                let mut distance = 0.0;
                while distance <= MAX_REACH {
                    let cell = BlockPos::from_world(ray.point_at(distance));
                    if !world.contains(cell) && world.has_neighbor(cell) {
                        self.place_cell = Some(cell);
                        break;
                    }
                    distance += CUBE_SIZE / 2.0;
                }
            }
            (_, InteractionMode::Remove) => {}
        }

        // Pulsing highlight: ping-pong between the alpha bounds
        self.alpha += self.alpha_speed * dt;
        if self.alpha > ALPHA_MAX || self.alpha < ALPHA_MIN {
            self.alpha_speed = -self.alpha_speed;
            self.alpha = self.alpha.clamp(ALPHA_MIN, ALPHA_MAX);
        }
    }
}

/// Snap a vector to its dominant axis as a signed unit step.
fn dominant_axis_dir(v: Vec3) -> IVec3 {
    let a = v.abs();
    if a.x > a.y && a.x > a.z {
        IVec3::new(v.x.signum() as i32, 0, 0)
    } else if a.y > a.z {
        IVec3::new(0, v.y.signum() as i32, 0)
    } else {
        IVec3::new(0, 0, v.z.signum() as i32)
    }
}
