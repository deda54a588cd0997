//! Voxel Sandbox Engine
//!
//! A small first-person voxel sandbox: a procedurally generated block world,
//! a walking/jumping player with box collision, and crosshair-driven block
//! placement and removal.
//!
//! The engine is split into a pure simulation core and a thin wgpu rendering
//! layer. All game state lives in [`sim::Simulation`] and is advanced once
//! per frame from an [`input::InputState`] snapshot; the windowing binary
//! only translates OS events and presents frames.
//!
//! # Modules
//!
//! - [`camera`] - First-person camera (yaw/pitch look, view matrix, picking ray)
//! - [`config`] - Startup configuration with optional JSON override file
//! - [`input`] - Platform-agnostic keyboard/mouse state
//! - [`physics`] - AABB overlap, slab raycast, axis-separated movement resolution
//! - [`player`] - Player controller (gravity, jumping, ground detection)
//! - [`render`] - wgpu renderer (instanced block pass, highlight, crosshair)
//! - [`sim`] - Simulation state struct and the per-frame update
//! - [`world`] - Block collection, terrain generation, raycast block targeting
//!
//! # Example
//!
//! ```rust,ignore
//! use voxel_sandbox_engine::{config::SandboxConfig, input::InputState, sim::Simulation};
//!
//! let config = SandboxConfig::default();
//! let mut sim = Simulation::new(&config);
//! let mut input = InputState::new();
//!
//! // Each frame: fold OS events into `input`, then advance the simulation.
//! input.mouse.accumulate_delta(4.0, -2.0);
//! sim.update(&mut input, 1.0 / 60.0);
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod player;
pub mod render;
pub mod sim;
pub mod world;

// Re-export the types the binary wires together.
pub use camera::FirstPersonCamera;
pub use config::SandboxConfig;
pub use input::{InputState, KeyCode, KeyboardState, MouseButton, MouseState, MovementKeys};
pub use player::PlayerController;
pub use sim::Simulation;
pub use world::{BlockPos, BlockWorld, InteractionMode, CUBE_SIZE};
