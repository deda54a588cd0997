//! Player Module
//!
//! The first-person player: a vertical box with camera-relative walking,
//! gravity, jumping, and block-supported ground detection.

pub mod controller;

// Re-export commonly used items at the player module level
pub use controller::{
    PlayerController, GRAVITY, JUMP_FORCE, JUMP_GRACE_DISTANCE, MOVE_SPEED, PLAYER_HEIGHT,
    PLAYER_WIDTH, RESPAWN_HEIGHT, SPAWN_POSITION, WORLD_FLOOR_Y,
};
