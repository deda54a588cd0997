//! Physics Module
//!
//! Geometry shared by the player controller and the block targeting code:
//! AABB overlap tests, slab-method ray/box intersection, and the
//! axis-separated movement resolver.
//!
//! Everything here is a total function over well-formed geometry — no
//! panics, no error taxonomy. Degenerate inputs (zero-length ray
//! directions) are defined to produce "no hit".
//!
//! # Unit System
//!
//! 1 unit = 1 meter. Distances in meters, speeds in m/s.

pub mod collision;

// Re-export commonly used items at the physics module level
pub use collision::{
    player_overlaps_block, ray_aabb_intersect, resolve_movement, MoveResolution,
    VerticalContact, GROUND_OFFSET,
};
