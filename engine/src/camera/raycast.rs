//! Picking Ray
//!
//! World-space ray used for block targeting. The only ray the sandbox ever
//! casts goes through the screen center, so no screen-to-world unprojection
//! is needed; the camera hands out its eye and forward directly.

use glam::Vec3;

/// A world-space ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Starting point.
    pub origin: Vec3,
    /// Direction, normalized at construction. A degenerate (zero) input
    /// direction stays zero and is treated as "hits nothing" downstream.
    pub dir: Vec3,
}

impl Ray {
    /// Create a ray; the direction is normalized (zero stays zero).
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Point at parametric distance `t` along the ray.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}
