//! Keyboard Input
//!
//! Movement-key tracking with generic key codes, independent of the
//! windowing system.

/// Generic key codes for the keys the sandbox cares about.
///
/// These map to standard keyboard keys but are not tied to
/// winit::keyboard::KeyCode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    Space,
    /// Catch-all for unhandled keys
    Unknown,
}

/// Currently held movement keys.
///
/// Held state gives smooth continuous walking; the jump key is tracked
/// separately as an edge in [`KeyboardState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W - move forward
    pub forward: bool,
    /// S - move backward
    pub backward: bool,
    /// A - strafe left
    pub left: bool,
    /// D - strafe right
    pub right: bool,
}

impl MovementKeys {
    /// All keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward/backward direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Left/right strafe direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Whether any movement key is held.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Release all keys.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Complete keyboard state: held movement keys plus the queued jump edge.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    /// Held movement keys.
    pub movement: MovementKeys,
    jump_queued: bool,
}

impl KeyboardState {
    /// Create a keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a key transition.
    ///
    /// Returns `true` if the key was handled. A fresh Space press queues a
    /// jump request; key repeats must be filtered by the caller.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => {
                self.movement.forward = pressed;
                true
            }
            KeyCode::S => {
                self.movement.backward = pressed;
                true
            }
            KeyCode::A => {
                self.movement.left = pressed;
                true
            }
            KeyCode::D => {
                self.movement.right = pressed;
                true
            }
            KeyCode::Space => {
                if pressed {
                    self.jump_queued = true;
                }
                true
            }
            KeyCode::Unknown => false,
        }
    }

    /// Consume the queued jump request, if any.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_queued)
    }

    /// Release everything and drop any queued jump.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_default_to_zero() {
        let keys = MovementKeys::new();
        assert_eq!(keys.forward_axis(), 0);
        assert_eq!(keys.right_axis(), 0);
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut state = KeyboardState::new();
        state.handle_key(KeyCode::W, true);
        state.handle_key(KeyCode::S, true);
        assert_eq!(state.movement.forward_axis(), 0);

        state.handle_key(KeyCode::S, false);
        assert_eq!(state.movement.forward_axis(), 1);
    }

    #[test]
    fn test_strafe_axis() {
        let mut state = KeyboardState::new();
        state.handle_key(KeyCode::D, true);
        assert_eq!(state.movement.right_axis(), 1);
        state.handle_key(KeyCode::A, true);
        assert_eq!(state.movement.right_axis(), 0);
    }

    #[test]
    fn test_jump_is_edge_triggered_and_consumed() {
        let mut state = KeyboardState::new();
        assert!(!state.take_jump());

        state.handle_key(KeyCode::Space, true);
        assert!(state.take_jump());
        // Still held, but the edge was consumed
        assert!(!state.take_jump());

        // Release does not queue anything
        state.handle_key(KeyCode::Space, false);
        assert!(!state.take_jump());
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut state = KeyboardState::new();
        assert!(!state.handle_key(KeyCode::Unknown, true));
        assert!(!state.movement.any_pressed());
    }
}
