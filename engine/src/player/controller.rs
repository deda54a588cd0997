//! Player Controller
//!
//! Walking, gravity, jumping and ground detection for the first-person
//! player. The player is an axis-aligned box (width on X/Z, height on Y)
//! whose horizontal velocity is recomputed from input every frame; only the
//! vertical speed is integrated across frames.
//!
//! # Ground model
//!
//! Three related but distinct checks, all scanning the block list:
//!
//! - **Supported** (`is_supported`): feet within [`GROUND_CHECK_DISTANCE`]
//!   above some block top whose footprint (inflated by the player's half
//!   width, X/Z only) contains the feet. Drives the `on_ground` flag.
//! - **Jump eligibility** (`can_jump`): the same footprint test with the
//!   looser [`JUMP_GRACE_DISTANCE`], so a jump still triggers during the
//!   first moments of a fall.
//! - **Clipping correction** (`correct_ground_clipping`): after movement,
//!   snap the player up onto the highest supporting top face if the frame's
//!   integration left the feet inside it. Idempotent; exists to counter
//!   tunneling artifacts from discrete per-frame steps.

use glam::Vec3;
use log::debug;

use crate::input::MovementKeys;
use crate::physics::collision::{self, VerticalContact, GROUND_OFFSET};
use crate::world::block::{BlockPos, CUBE_HALF};
use crate::world::blocks::BlockWorld;

/// Walk speed in meters per second.
pub const MOVE_SPEED: f32 = 5.0;

/// Gravity acceleration in m/s^2 (negative = downward).
pub const GRAVITY: f32 = -20.0;

/// Vertical speed set by a jump, in m/s.
pub const JUMP_FORCE: f32 = 9.0;

/// Player box height (Y extent) in meters.
pub const PLAYER_HEIGHT: f32 = 2.5;

/// Player box width (X and Z extent) in meters.
pub const PLAYER_WIDTH: f32 = 0.8;

/// Feet-to-surface distance that still counts as standing on a block.
pub const GROUND_CHECK_DISTANCE: f32 = 0.1;

/// Looser feet-to-surface distance used only for jump eligibility.
pub const JUMP_GRACE_DISTANCE: f32 = 0.2;

/// Below this Y the player has fallen out of the world.
pub const WORLD_FLOOR_Y: f32 = -50.0;

/// Y the player is teleported back to by the out-of-world fallback.
pub const RESPAWN_HEIGHT: f32 = 20.0;

/// Where the player starts.
pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 20.0, 0.0);

/// First-person player state.
#[derive(Clone, Debug)]
pub struct PlayerController {
    /// Center of the player box in world space.
    pub position: Vec3,
    /// Integrated vertical speed in m/s (positive = upward).
    pub vertical_speed: f32,
    /// Whether the player is currently supported by a block.
    pub on_ground: bool,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self {
            position: SPAWN_POSITION,
            vertical_speed: 0.0,
            on_ground: false,
        }
    }
}

impl PlayerController {
    /// Create a player at the spawn position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Half extents of the player box per axis.
    pub fn half_extents() -> Vec3 {
        Vec3::new(PLAYER_WIDTH / 2.0, PLAYER_HEIGHT / 2.0, PLAYER_WIDTH / 2.0)
    }

    /// World-space feet point (bottom center of the box).
    pub fn feet(&self) -> Vec3 {
        self.position - Vec3::new(0.0, PLAYER_HEIGHT / 2.0, 0.0)
    }

    /// World-space eye point (top center of the box); the camera anchor.
    pub fn eye(&self) -> Vec3 {
        self.position + Vec3::new(0.0, PLAYER_HEIGHT / 2.0, 0.0)
    }

    /// Whether `block`'s footprint, inflated by the player half width,
    /// contains the feet point on X/Z and its top face is within `max_gap`
    /// below the feet.
    fn supports(feet: Vec3, block: BlockPos, max_gap: f32) -> bool {
        let center = block.center();
        let reach = CUBE_HALF + PLAYER_WIDTH / 2.0;
        (feet.x - center.x).abs() < reach
            && (feet.z - center.z).abs() < reach
            && feet.y - block.top() <= max_gap
    }

    /// Strict ground check used to maintain the `on_ground` flag.
    pub fn is_supported(&self, blocks: &[BlockPos]) -> bool {
        let feet = self.feet();
        blocks
            .iter()
            .any(|b| Self::supports(feet, *b, GROUND_CHECK_DISTANCE))
    }

    /// Permissive check used only for jump eligibility.
    pub fn can_jump(&self, blocks: &[BlockPos]) -> bool {
        let feet = self.feet();
        blocks
            .iter()
            .any(|b| Self::supports(feet, *b, JUMP_GRACE_DISTANCE))
    }

    /// Advance the player one frame.
    ///
    /// # Arguments
    ///
    /// * `dt` - Frame time in seconds (already clamped by the caller)
    /// * `movement` - Held movement keys
    /// * `jump_requested` - Whether the jump key was pressed this frame
    /// * `camera_yaw` - Camera yaw in radians; movement is camera-relative
    /// * `world` - The block collection to collide against
    pub fn update(
        &mut self,
        dt: f32,
        movement: &MovementKeys,
        jump_requested: bool,
        camera_yaw: f32,
        world: &BlockWorld,
    ) {
        let blocks = world.blocks();

        // Camera-relative wish direction on the XZ plane
        let forward = Vec3::new(camera_yaw.sin(), 0.0, -camera_yaw.cos());
        let right = Vec3::new(-forward.z, 0.0, forward.x);
        let wish = forward * movement.forward_axis() as f32 + right * movement.right_axis() as f32;
        let horizontal = wish.normalize_or_zero() * MOVE_SPEED * dt;

        // Gravity accumulates every frame regardless of state; only
        // collision and ground events zero it.
        self.vertical_speed += GRAVITY * dt;

        if jump_requested && self.can_jump(blocks) {
            self.vertical_speed = JUMP_FORCE;
            self.on_ground = false;
        }

        let delta = Vec3::new(horizontal.x, self.vertical_speed * dt, horizontal.z);
        let resolved = collision::resolve_movement(
            self.position,
            self.position + delta,
            Self::half_extents(),
            blocks,
        );
        self.position = resolved.position;
        match resolved.contact {
            VerticalContact::Ceiling => self.vertical_speed = 0.0,
            VerticalContact::Ground => self.vertical_speed = 0.0,
            VerticalContact::None => {}
        }

        // The post-move support check has the last word on the flag; a jump
        // earlier in this same frame may be re-asserted as grounded here.
        self.on_ground = self.is_supported(blocks);

        // Out-of-world fallback: a silent recovery for anything that slips
        // past the resolver.
        if self.position.y < WORLD_FLOOR_Y {
            debug!(
                "player fell out of the world at {:?}; respawning at y={}",
                self.position, RESPAWN_HEIGHT
            );
            self.position.y = RESPAWN_HEIGHT;
            self.vertical_speed = 0.0;
        }
    }

    /// Snap the player up onto the highest supporting block top if the
    /// frame's integration left the feet clipped into it.
    pub fn correct_ground_clipping(&mut self, blocks: &[BlockPos]) {
        let feet = self.feet();
        let reach = CUBE_HALF + PLAYER_WIDTH / 2.0;

        let mut highest: Option<f32> = None;
        for block in blocks {
            let center = block.center();
            if (feet.x - center.x).abs() >= reach || (feet.z - center.z).abs() >= reach {
                continue;
            }
            let top = block.top();
            if feet.y <= top + GROUND_CHECK_DISTANCE && highest.map_or(true, |h| top > h) {
                highest = Some(top);
            }
        }

        if let Some(top) = highest {
            let desired_y = top + PLAYER_HEIGHT / 2.0 + GROUND_OFFSET;
            if self.position.y < desired_y {
                self.position.y = desired_y;
                self.vertical_speed = self.vertical_speed.max(0.0);
                self.on_ground = true;
            }
        }
    }
}
