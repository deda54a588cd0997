//! Simulation Tests - End-to-end properties across modules
//!
//! Exercises the documented behavioral guarantees through the public
//! simulation surface: collision non-overlap, placement/removal rules,
//! ground classification, the out-of-world fallback, and the idempotent
//! ground-clipping correction.

use glam::Vec3;

use voxel_sandbox_engine::camera::Ray;
use voxel_sandbox_engine::config::SandboxConfig;
use voxel_sandbox_engine::input::{InputState, MouseButton};
use voxel_sandbox_engine::physics::{player_overlaps_block, ray_aabb_intersect};
use voxel_sandbox_engine::player::{PlayerController, PLAYER_HEIGHT, RESPAWN_HEIGHT};
use voxel_sandbox_engine::sim::Simulation;
use voxel_sandbox_engine::world::{
    BlockPos, BlockTargeting, BlockWorld, InteractionMode, CUBE_SIZE,
};

// ============================================================================
// Helpers
// ============================================================================

/// A simulation standing on a hand-built 7x7 slab (top faces at y = 1).
fn slab_sim() -> Simulation {
    let mut sim = Simulation::new(&SandboxConfig::default());
    sim.world = BlockWorld::new();
    for x in -3..=3 {
        for z in -3..=3 {
            sim.world.place(BlockPos::new(x, 0, z));
        }
    }
    sim.player.position = Vec3::new(0.0, 1.0 + PLAYER_HEIGHT / 2.0, 0.0);
    sim.camera.eye = sim.player.eye();
    sim
}

// ============================================================================
// Collection mutator properties
// ============================================================================

#[test]
fn test_placing_into_occupied_cell_keeps_size() {
    let mut world = BlockWorld::new();
    world.place(BlockPos::new(0, 0, 0));
    let size = world.len();

    world.place(BlockPos::new(0, 0, 0));
    assert_eq!(world.len(), size);
}

#[test]
fn test_removing_missing_position_keeps_size() {
    let mut world = BlockWorld::new();
    world.place(BlockPos::new(0, 0, 0));
    let size = world.len();

    world.remove(BlockPos::new(7, 7, 7));
    assert_eq!(world.len(), size);
}

#[test]
fn test_placement_validity_with_cube_size_two() {
    // Occupied block at world (0,0,0): world cell (2,0,0) touches it and is
    // a valid target; world cell (6,0,0) is isolated and is not.
    let mut world = BlockWorld::new();
    world.place(BlockPos::from_world(Vec3::ZERO));

    let adjacent = BlockPos::from_world(Vec3::new(CUBE_SIZE, 0.0, 0.0));
    let isolated = BlockPos::from_world(Vec3::new(3.0 * CUBE_SIZE, 0.0, 0.0));

    assert!(!world.contains(adjacent) && world.has_neighbor(adjacent));
    assert!(!world.contains(isolated) && !world.has_neighbor(isolated));
}

// ============================================================================
// Raycast selection
// ============================================================================

#[test]
fn test_face_on_ray_selects_at_analytic_distance() {
    // One cube length from the +X face of the origin block, aiming -X:
    // the slab entry is the face plane at distance exactly 2.0.
    let mut world = BlockWorld::new();
    world.place(BlockPos::new(0, 0, 0));
    let origin = Vec3::new(CUBE_SIZE + CUBE_SIZE / 2.0, 0.0, 0.0);
    let ray = Ray::new(origin, Vec3::NEG_X);

    let mut targeting = BlockTargeting::new();
    targeting.update(&ray, &world, InteractionMode::Remove, 0.016);
    assert_eq!(targeting.hit_block, Some(BlockPos::new(0, 0, 0)));

    let (min, max) = BlockPos::new(0, 0, 0).aabb();
    let t = ray_aabb_intersect(ray.origin, ray.dir, min, max).unwrap();
    assert!(
        (t - CUBE_SIZE).abs() < 1e-5,
        "expected analytic distance {}, got {}",
        CUBE_SIZE,
        t
    );
}

// ============================================================================
// Ground state and fallback
// ============================================================================

#[test]
fn test_feet_on_top_face_grounded_and_ten_up_airborne() {
    let sim = slab_sim();
    assert!(sim.player.is_supported(sim.world.blocks()));

    let mut lifted = sim.player.clone();
    lifted.position.y += 10.0;
    assert!(!lifted.is_supported(sim.world.blocks()));
}

#[test]
fn test_fallback_teleport_after_one_update() {
    let mut sim = slab_sim();
    sim.player.position.y = -51.0;
    sim.player.vertical_speed = -25.0;

    let mut input = InputState::new();
    sim.update(&mut input, 1.0 / 60.0);

    assert_eq!(sim.player.position.y, RESPAWN_HEIGHT);
    assert_eq!(sim.player.vertical_speed, 0.0);
}

#[test]
fn test_ground_clipping_correction_idempotent() {
    let sim = slab_sim();
    let mut player = sim.player.clone();
    player.position.y -= 0.08;

    player.correct_ground_clipping(sim.world.blocks());
    let once = player.position;
    player.correct_ground_clipping(sim.world.blocks());
    assert_eq!(player.position, once);
}

// ============================================================================
// Collision invariant through a full simulation run
// ============================================================================

#[test]
fn test_settled_player_overlaps_no_block() {
    let mut sim = slab_sim();
    let mut input = InputState::new();
    input.keyboard.handle_key(voxel_sandbox_engine::input::KeyCode::W, true);

    for _ in 0..240 {
        sim.update(&mut input, 1.0 / 60.0);
        for &block in sim.world.blocks() {
            assert!(
                !player_overlaps_block(
                    sim.player.position,
                    PlayerController::half_extents(),
                    block
                ),
                "player at {:?} overlaps block {:?}",
                sim.player.position,
                block
            );
        }
    }
}

// ============================================================================
// Click-driven mutation through the simulation
// ============================================================================

#[test]
fn test_break_then_place_round_trip() {
    let mut sim = slab_sim();
    let mut input = InputState::new();

    // Look straight down and switch to break mode
    sim.camera.pitch = -1.4;
    input.mouse.handle_button(MouseButton::Right, true);
    sim.update(&mut input, 1.0 / 60.0);
    assert_eq!(sim.mode, InteractionMode::Remove);

    input.mouse.handle_button(MouseButton::Right, false);
    let before = sim.world.len();
    input.mouse.handle_button(MouseButton::Left, true);
    sim.update(&mut input, 1.0 / 60.0);
    assert_eq!(sim.world.len(), before - 1, "break must remove one block");

    // Back to place mode; the next click adds one block
    input.mouse.handle_button(MouseButton::Left, false);
    input.mouse.handle_button(MouseButton::Right, true);
    sim.update(&mut input, 1.0 / 60.0);
    assert_eq!(sim.mode, InteractionMode::Place);

    input.mouse.handle_button(MouseButton::Right, false);
    let before = sim.world.len();
    input.mouse.handle_button(MouseButton::Left, true);
    sim.update(&mut input, 1.0 / 60.0);
    assert_eq!(sim.world.len(), before + 1, "place must add one block");
}

#[test]
fn test_generated_world_is_playable() {
    // The default simulation: generated terrain, player above it. After a
    // few seconds of falling the player must come to rest on some block.
    let mut sim = Simulation::new(&SandboxConfig::default());
    let mut input = InputState::new();

    for _ in 0..600 {
        sim.update(&mut input, 1.0 / 60.0);
    }
    assert!(sim.player.on_ground, "player must land on generated terrain");
    assert!(sim.player.position.y > 0.0);
}
