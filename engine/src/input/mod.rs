//! Input Module
//!
//! Platform-agnostic input state, decoupled from any windowing system. The
//! binary folds winit events into these structs; the simulation reads a
//! consistent snapshot once per frame.
//!
//! Held keys are level-triggered (walking), while jump and the two mouse
//! actions are edge-triggered: they latch on the press event and are
//! consumed by the frame that handles them, so a click can never fire
//! twice.
//!
//! # Example
//!
//! ```rust,ignore
//! use voxel_sandbox_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//! input.keyboard.handle_key(KeyCode::W, true);
//! assert_eq!(input.keyboard.movement.forward_axis(), 1);
//!
//! input.mouse.accumulate_delta(12.0, -3.0);
//! let (dx, dy) = input.mouse.consume_delta();
//! ```

pub mod keyboard;
pub mod mouse;

// Re-export commonly used types at module level
pub use keyboard::{KeyCode, KeyboardState, MovementKeys};
pub use mouse::{MouseButton, MouseState};

/// Combined keyboard and mouse state for one frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub mouse: MouseState,
}

impl InputState {
    /// Create an input state with everything released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all input state, e.g. on focus loss.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_everything() {
        let mut input = InputState::new();
        input.keyboard.handle_key(KeyCode::W, true);
        input.mouse.accumulate_delta(5.0, 5.0);
        input.mouse.handle_button(MouseButton::Left, true);

        input.reset();
        assert_eq!(input.keyboard.movement.forward_axis(), 0);
        assert_eq!(input.mouse.consume_delta(), (0.0, 0.0));
        assert!(!input.mouse.take_primary_click());
    }
}
