//! Simulation State & Frame Update
//!
//! All mutable game state in one struct, advanced by exactly one function.
//! The windowing layer injects an input snapshot and the frame time; the
//! renderer reads the result. Nothing here touches the GPU or the OS.
//!
//! Per-frame order, matching the component contract:
//! mouse look -> player physics (gravity, jump, collision, ground state)
//! -> camera follow -> ground-clipping correction -> raycast targeting ->
//! click handling (place / break / mode toggle).

use log::info;

use crate::camera::FirstPersonCamera;
use crate::config::SandboxConfig;
use crate::input::InputState;
use crate::player::PlayerController;
use crate::world::{self, BlockTargeting, BlockWorld, InteractionMode};

/// Complete simulation state for the sandbox.
pub struct Simulation {
    pub world: BlockWorld,
    pub player: PlayerController,
    pub camera: FirstPersonCamera,
    pub targeting: BlockTargeting,
    pub mode: InteractionMode,
}

impl Simulation {
    /// Build the starting state: generated terrain, player at spawn, camera
    /// on the player's eye, placement mode active.
    pub fn new(config: &SandboxConfig) -> Self {
        let world = world::generate(config.world_size);
        info!("generated terrain: {} blocks", world.len());

        let player = PlayerController::new();
        let mut camera = FirstPersonCamera::new(config.window_width, config.window_height);
        camera.sensitivity = config.mouse_sensitivity;
        camera.fov_y = config.fov_y_degrees.to_radians();
        camera.eye = player.eye();

        Self {
            world,
            player,
            camera,
            targeting: BlockTargeting::new(),
            mode: InteractionMode::Place,
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// `input` is consumed destructively: the mouse delta and any latched
    /// one-shot actions (jump, clicks) are taken by this frame.
    pub fn update(&mut self, input: &mut InputState, dt: f32) {
        // A hitch must not turn into a physics explosion
        let dt = dt.clamp(0.0, 0.1);

        let (dx, dy) = input.mouse.consume_delta();
        self.camera.apply_mouse_delta(dx, dy);

        let jump = input.keyboard.take_jump();
        self.player
            .update(dt, &input.keyboard.movement, jump, self.camera.yaw, &self.world);

        // Camera rides the player's eye; the clipping correction afterwards
        // mirrors the original frame layout (the camera picks the corrected
        // height up next frame).
        self.camera.eye = self.player.eye();
        self.player.correct_ground_clipping(self.world.blocks());

        self.targeting
            .update(&self.camera.center_ray(), &self.world, self.mode, dt);

        if input.mouse.take_primary_click() {
            match self.mode {
                InteractionMode::Place => {
                    if let Some(cell) = self.targeting.place_cell {
                        self.world.place(cell);
                    }
                }
                InteractionMode::Remove => {
                    if let Some(hit) = self.targeting.hit_block {
                        self.world.remove(hit);
                    }
                }
            }
        } else if input.mouse.take_secondary_click() {
            self.mode = self.mode.toggled();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{KeyCode, MouseButton};
    use crate::world::BlockPos;
    use glam::Vec3;

    /// A simulation over a hand-built flat slab instead of random terrain.
    fn flat_sim() -> Simulation {
        let config = SandboxConfig::default();
        let mut sim = Simulation::new(&config);
        sim.world = BlockWorld::new();
        for x in -3..=3 {
            for z in -3..=3 {
                sim.world.place(BlockPos::new(x, 0, z));
            }
        }
        // Stand on the slab: top faces at y = 1
        sim.player.position = Vec3::new(0.0, 1.0 + 2.5 / 2.0, 0.0);
        sim.camera.eye = sim.player.eye();
        sim
    }

    #[test]
    fn test_player_settles_on_terrain() {
        let mut sim = flat_sim();
        let mut input = InputState::new();
        for _ in 0..120 {
            sim.update(&mut input, 1.0 / 60.0);
        }
        assert!(sim.player.on_ground);
        // Feet resting just above the slab top face
        let feet_y = sim.player.position.y - 2.5 / 2.0;
        assert!(
            (feet_y - 1.05).abs() < 0.02,
            "feet settled at {}, expected ~1.05",
            feet_y
        );
    }

    #[test]
    fn test_secondary_click_toggles_mode() {
        let mut sim = flat_sim();
        let mut input = InputState::new();
        assert_eq!(sim.mode, InteractionMode::Place);

        input.mouse.handle_button(MouseButton::Right, true);
        sim.update(&mut input, 1.0 / 60.0);
        assert_eq!(sim.mode, InteractionMode::Remove);

        input.mouse.handle_button(MouseButton::Right, false);
        input.mouse.handle_button(MouseButton::Right, true);
        sim.update(&mut input, 1.0 / 60.0);
        assert_eq!(sim.mode, InteractionMode::Place);
    }

    #[test]
    fn test_primary_click_breaks_targeted_block() {
        let mut sim = flat_sim();
        sim.mode = InteractionMode::Remove;
        let mut input = InputState::new();

        // Look straight down at the slab under the player
        sim.camera.pitch = -1.4;
        let before = sim.world.len();
        input.mouse.handle_button(MouseButton::Left, true);
        sim.update(&mut input, 1.0 / 60.0);

        assert_eq!(sim.world.len(), before - 1, "one block must be removed");
        assert!(!sim.world.contains(BlockPos::new(0, 0, 0)));
    }

    #[test]
    fn test_primary_click_places_block() {
        let mut sim = flat_sim();
        sim.mode = InteractionMode::Place;
        let mut input = InputState::new();

        sim.camera.pitch = -1.4;
        let before = sim.world.len();
        input.mouse.handle_button(MouseButton::Left, true);
        sim.update(&mut input, 1.0 / 60.0);

        assert_eq!(sim.world.len(), before + 1, "one block must be placed");
    }

    #[test]
    fn test_jump_through_input_snapshot() {
        let mut sim = flat_sim();
        let mut input = InputState::new();
        // Let the player settle first
        for _ in 0..10 {
            sim.update(&mut input, 1.0 / 60.0);
        }

        input.keyboard.handle_key(KeyCode::Space, true);
        sim.update(&mut input, 1.0 / 60.0);
        assert!(
            sim.player.vertical_speed > 0.0,
            "queued jump must fire on the next update"
        );
    }

    #[test]
    fn test_camera_follows_player_eye() {
        let mut sim = flat_sim();
        let mut input = InputState::new();
        input.keyboard.handle_key(KeyCode::W, true);
        sim.update(&mut input, 1.0 / 60.0);
        // Eye set before clipping correction: it matches the pre-correction
        // player eye, and always matches exactly on a settled player.
        assert!((sim.camera.eye.x - sim.player.position.x).abs() < 1e-5);
        assert!((sim.camera.eye.z - sim.player.position.z).abs() < 1e-5);
    }
}
