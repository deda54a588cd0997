//! Voxel Sandbox
//!
//! Run with: `cargo run --bin sandbox`
//!
//! Controls:
//! - WASD: Move
//! - Mouse: Look around
//! - Space: Jump
//! - Left click: Place or break the targeted block (depends on mode)
//! - Right click: Toggle place/break mode
//! - ESC: Exit
//!
//! An optional `sandbox.json` next to the working directory overrides the
//! default configuration; `RUST_LOG` controls log verbosity.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use log::{error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowAttributes, WindowId};

use voxel_sandbox_engine::input::{self, InputState};
use voxel_sandbox_engine::render::Renderer;
use voxel_sandbox_engine::world::InteractionMode;
use voxel_sandbox_engine::{SandboxConfig, Simulation};

/// Map a winit key code onto the engine's generic key codes.
fn map_key(key: KeyCode) -> input::KeyCode {
    match key {
        KeyCode::KeyW => input::KeyCode::W,
        KeyCode::KeyA => input::KeyCode::A,
        KeyCode::KeyS => input::KeyCode::S,
        KeyCode::KeyD => input::KeyCode::D,
        KeyCode::Space => input::KeyCode::Space,
        _ => input::KeyCode::Unknown,
    }
}

struct SandboxApp {
    config: SandboxConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    sim: Option<Simulation>,
    input: InputState,
    last_frame: Instant,
    // FPS bookkeeping for the title bar
    frame_count: u32,
    last_fps_update: Instant,
    fps: f32,
}

impl SandboxApp {
    fn new(config: SandboxConfig) -> Self {
        Self {
            config,
            window: None,
            renderer: None,
            sim: None,
            input: InputState::new(),
            last_frame: Instant::now(),
            frame_count: 0,
            last_fps_update: Instant::now(),
            fps: 0.0,
        }
    }

    fn initialize(&mut self, window: Arc<Window>) {
        // Capture the cursor for mouse look right away
        if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
            let _ = window.set_cursor_grab(CursorGrabMode::Confined);
        }
        window.set_cursor_visible(false);
        self.input.mouse.set_captured(true);

        self.renderer = Some(Renderer::new(Arc::clone(&window), self.config.vsync));
        self.sim = Some(Simulation::new(&self.config));
        self.window = Some(window);
        self.last_frame = Instant::now();
        self.last_fps_update = Instant::now();
        info!("sandbox initialized");
    }

    fn update_title(&mut self, now: Instant) {
        self.frame_count += 1;
        let elapsed = now.duration_since(self.last_fps_update).as_secs_f32();
        if elapsed >= 1.0 {
            self.fps = self.frame_count as f32 / elapsed;
            self.frame_count = 0;
            self.last_fps_update = now;

            if let (Some(window), Some(sim)) = (&self.window, &self.sim) {
                let mode = match sim.mode {
                    InteractionMode::Place => "Place",
                    InteractionMode::Remove => "Break",
                };
                window.set_title(&format!(
                    "Voxel Sandbox - {} mode | Blocks: {} | FPS: {:.0}",
                    mode,
                    sim.world.len(),
                    self.fps
                ));
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.update_title(now);

        let (Some(sim), Some(renderer)) = (self.sim.as_mut(), self.renderer.as_mut()) else {
            return;
        };

        sim.update(&mut self.input, dt);

        match renderer.render(sim) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                let (width, height) = renderer.dimensions();
                renderer.resize(width, height);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => error!("surface error: {:?}", e),
        }
    }
}

impl ApplicationHandler for SandboxApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = WindowAttributes::default()
                .with_title("Voxel Sandbox")
                .with_inner_size(PhysicalSize::new(
                    self.config.window_width,
                    self.config.window_height,
                ));
            let window = Arc::new(event_loop.create_window(attrs).unwrap());
            self.initialize(window);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(key) = event.physical_key {
                    let pressed = event.state == ElementState::Pressed;
                    if key == KeyCode::Escape && pressed {
                        event_loop.exit();
                        return;
                    }
                    self.input.keyboard.handle_key(map_key(key), pressed);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let pressed = state == ElementState::Pressed;
                match button {
                    MouseButton::Left => self
                        .input
                        .mouse
                        .handle_button(input::MouseButton::Left, pressed),
                    MouseButton::Right => self
                        .input
                        .mouse
                        .handle_button(input::MouseButton::Right, pressed),
                    _ => {}
                }
            }
            WindowEvent::Focused(false) => {
                // Dropped focus means dropped key-up events; start clean
                self.input.reset();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(new_size.width, new_size.height);
                }
                if let Some(sim) = self.sim.as_mut() {
                    sim.camera.set_aspect(new_size.width, new_size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.input.mouse.is_captured() {
                self.input
                    .mouse
                    .accumulate_delta(delta.0 as f32, delta.1 as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SandboxConfig::load_or_default(Path::new("sandbox.json"));
    info!(
        "starting voxel sandbox ({}x{}, world size {})",
        config.window_width, config.window_height, config.world_size
    );
    info!("controls: WASD move, mouse look, Space jump");
    info!("controls: left click place/break, right click toggle mode, Esc exit");

    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = SandboxApp::new(config);
    event_loop.run_app(&mut app).unwrap();
}
