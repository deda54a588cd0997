//! Sandbox Configuration
//!
//! Startup knobs in one place instead of constants scattered across the
//! binary. `Default` is the shipped configuration; a `sandbox.json` file
//! next to the executable can override any subset of fields (JSON for
//! human-inspectability).

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

/// Startup configuration for the sandbox.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Initial window width in pixels.
    pub window_width: u32,
    /// Initial window height in pixels.
    pub window_height: u32,
    /// Cap presentation to the monitor refresh rate.
    pub vsync: bool,
    /// Number of terrain columns along each horizontal axis.
    pub world_size: i32,
    /// Mouse look sensitivity in radians per pixel.
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            vsync: true,
            world_size: 20,
            mouse_sensitivity: 0.002,
            fov_y_degrees: 45.0,
        }
    }
}

impl SandboxConfig {
    /// Load the configuration from `path`, falling back to defaults when
    /// the file is absent. A present-but-invalid file logs a warning and
    /// also falls back.
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    warn!("ignoring malformed {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
