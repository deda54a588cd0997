//! Collision Detection
//!
//! Player-versus-block overlap tests, slab-method ray-AABB intersection,
//! and the axis-separated movement resolver.
//!
//! # Ray-AABB Intersection
//!
//! The slab method computes entry/exit times per axis via the inverse ray
//! direction. A hit is valid only when `t_far >= t_near >= 0`; the returned
//! distance is `t_near`. Rays that start inside a box therefore report no
//! hit, and degenerate (zero-length) directions report no hit.
//!
//! # Movement Resolution
//!
//! Movement resolves in two passes against the block list in collection
//! order:
//!
//! 1. Horizontal, at the original height: on overlap, try reverting only X,
//!    then only Z ("sliding" along the obstacle); if neither clears the
//!    obstacle, both horizontal axes revert and scanning stops.
//! 2. Vertical, on the slid position: the first overlapping block clamps the
//!    player just below its bottom face (moving up) or just above its top
//!    face (moving down or stationary) and reports the contact.
//!
//! The output never overlaps the block that drove the clamp along the
//! resolved axis. Concave multi-block arrangements are not iterated to a
//! fixpoint; the single pass matches the per-frame integration above it.

use glam::Vec3;

use crate::world::block::{BlockPos, CUBE_HALF};

/// Gap kept between the player box and any clamped contact surface.
pub const GROUND_OFFSET: f32 = 0.05;

/// Vertical contact produced by a movement resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalContact {
    /// No block constrained the vertical motion.
    None,
    /// Clamped against a block's bottom face while moving up.
    Ceiling,
    /// Clamped against a block's top face while moving down or stationary.
    Ground,
}

/// Result of resolving one movement step against the block collection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveResolution {
    /// Final, non-overlapping position.
    pub position: Vec3,
    /// What the vertical pass ran into, if anything.
    pub contact: VerticalContact,
}

/// Test whether a player box centered at `pos` overlaps a block's cube.
///
/// `half` is the player half-extent per axis (width/2 on X and Z,
/// height/2 on Y). The combined test uses half-extent sums per axis.
pub fn player_overlaps_block(pos: Vec3, half: Vec3, block: BlockPos) -> bool {
    let center = block.center();
    (pos.x - center.x).abs() < CUBE_HALF + half.x
        && (pos.y - center.y).abs() < CUBE_HALF + half.y
        && (pos.z - center.z).abs() < CUBE_HALF + half.z
}

/// Slab-method ray-AABB intersection.
///
/// # Arguments
///
/// * `origin` - Ray starting position
/// * `dir` - Ray direction (normalized; a zero direction yields `None`)
/// * `aabb_min` / `aabb_max` - Corners of the box
///
/// # Returns
///
/// `Some(t)` with the entry distance when `t_far >= t_near >= 0`,
/// `None` otherwise (miss, box behind the origin, or origin inside).
pub fn ray_aabb_intersect(origin: Vec3, dir: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Option<f32> {
    if dir.length_squared() < 1e-12 {
        return None;
    }

    // Near-zero components map to huge inverse values so the parallel-axis
    // intervals become (-inf, inf) or empty, which the min/max folding
    // handles without NaNs.
    let inv = Vec3::new(
        if dir.x.abs() > 1e-10 { 1.0 / dir.x } else { f32::MAX * dir.x.signum() },
        if dir.y.abs() > 1e-10 { 1.0 / dir.y } else { f32::MAX * dir.y.signum() },
        if dir.z.abs() > 1e-10 { 1.0 / dir.z } else { f32::MAX * dir.z.signum() },
    );

    let t1 = (aabb_min.x - origin.x) * inv.x;
    let t2 = (aabb_max.x - origin.x) * inv.x;
    let mut t_near = t1.min(t2);
    let mut t_far = t1.max(t2);

    let t3 = (aabb_min.y - origin.y) * inv.y;
    let t4 = (aabb_max.y - origin.y) * inv.y;
    t_near = t_near.max(t3.min(t4));
    t_far = t_far.min(t3.max(t4));

    let t5 = (aabb_min.z - origin.z) * inv.z;
    let t6 = (aabb_max.z - origin.z) * inv.z;
    t_near = t_near.max(t5.min(t6));
    t_far = t_far.min(t5.max(t6));

    if t_far >= t_near && t_near >= 0.0 {
        Some(t_near)
    } else {
        None
    }
}

/// Horizontal pass: resolve X/Z movement at the original height.
///
/// Blocks are tested in collection order; the first overlapping block
/// drives the slide decision (not necessarily the nearest one).
fn resolve_horizontal(original: Vec3, desired: Vec3, half: Vec3, blocks: &[BlockPos]) -> Vec3 {
    if desired.x == original.x && desired.z == original.z {
        return desired;
    }

    let mut adjusted = desired;
    for &block in blocks {
        let probe = Vec3::new(adjusted.x, original.y, adjusted.z);
        if !player_overlaps_block(probe, half, block) {
            continue;
        }

        // Slide along Z by reverting only the X displacement
        let slide_x = Vec3::new(original.x, original.y, adjusted.z);
        if !player_overlaps_block(slide_x, half, block) {
            adjusted.x = original.x;
            continue;
        }

        // Slide along X by reverting only the Z displacement
        let slide_z = Vec3::new(adjusted.x, original.y, original.z);
        if !player_overlaps_block(slide_z, half, block) {
            adjusted.z = original.z;
            continue;
        }

        // Cornered: revert the full horizontal displacement
        adjusted.x = original.x;
        adjusted.z = original.z;
        break;
    }

    adjusted
}

/// Vertical pass: clamp against the first overlapping block.
fn resolve_vertical(
    original: Vec3,
    candidate: Vec3,
    half: Vec3,
    blocks: &[BlockPos],
) -> (Vec3, VerticalContact) {
    let moving_up = candidate.y > original.y;
    let mut adjusted = candidate;

    for &block in blocks {
        if !player_overlaps_block(adjusted, half, block) {
            continue;
        }
        if moving_up {
            adjusted.y = block.bottom() - half.y - GROUND_OFFSET;
            return (adjusted, VerticalContact::Ceiling);
        }
        adjusted.y = block.top() + half.y + GROUND_OFFSET;
        return (adjusted, VerticalContact::Ground);
    }

    (adjusted, VerticalContact::None)
}

/// Resolve a movement step from `original` to `desired` against the blocks.
///
/// Horizontal displacement is resolved first (with sliding), then vertical.
/// The caller is responsible for reacting to the reported contact (zeroing
/// vertical speed, marking grounded).
pub fn resolve_movement(
    original: Vec3,
    desired: Vec3,
    half: Vec3,
    blocks: &[BlockPos],
) -> MoveResolution {
    let slid = resolve_horizontal(original, desired, half, blocks);
    let (position, contact) = resolve_vertical(original, slid, half, blocks);
    MoveResolution { position, contact }
}
