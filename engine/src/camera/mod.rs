//! Camera Module
//!
//! First-person camera control and the screen-center picking ray.

pub mod first_person;
pub mod raycast;

// Re-export commonly used types at the camera module level
pub use first_person::{FirstPersonCamera, MOUSE_SENSITIVITY};
pub use raycast::Ray;
