//! Mouse Input
//!
//! Captured-cursor mouse state: look deltas accumulate between frames and
//! are consumed atomically; button presses latch as one-shot clicks.

/// Mouse buttons the sandbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary action: place or break, depending on the interaction mode.
    Left,
    /// Secondary action: toggle between place and break mode.
    Right,
}

/// Mouse state with delta accumulation and edge-triggered clicks.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    delta_x: f32,
    delta_y: f32,
    captured: bool,
    /// Held state, exposed for completeness.
    pub left_held: bool,
    pub right_held: bool,
    primary_clicked: bool,
    secondary_clicked: bool,
}

impl MouseState {
    /// Create a mouse state with zero deltas and no captured cursor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw mouse motion from the event loop.
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        self.delta_x += dx;
        self.delta_y += dy;
    }

    /// Consume the accumulated delta, returning it and resetting to zero.
    pub fn consume_delta(&mut self) -> (f32, f32) {
        let delta = (self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }

    /// Feed a button transition. Presses latch a one-shot click.
    pub fn handle_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => {
                if pressed && !self.left_held {
                    self.primary_clicked = true;
                }
                self.left_held = pressed;
            }
            MouseButton::Right => {
                if pressed && !self.right_held {
                    self.secondary_clicked = true;
                }
                self.right_held = pressed;
            }
        }
    }

    /// Consume the latched primary (left) click, if any.
    pub fn take_primary_click(&mut self) -> bool {
        std::mem::take(&mut self.primary_clicked)
    }

    /// Consume the latched secondary (right) click, if any.
    pub fn take_secondary_click(&mut self) -> bool {
        std::mem::take(&mut self.secondary_clicked)
    }

    /// Track whether the cursor is captured (hidden and confined).
    ///
    /// Releasing capture clears pending deltas so the view does not jump
    /// when capture resumes.
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
        if !captured {
            self.delta_x = 0.0;
            self.delta_y = 0.0;
        }
    }

    /// Whether the cursor is currently captured.
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Reset all state to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
