//! Perspective camera and the two interactive camera controls
//!
//! [`OrbitControls`] keeps the camera upright and orbits the target, while
//! [`TrackballControls`] rotates freely and carries inertia between frames.

pub mod camera_utils;
pub mod orbit_controls;
pub mod perspective;
pub mod trackball_controls;

// Re-export main types
pub use camera_utils::{Camera, CameraUniform};
pub use orbit_controls::OrbitControls;
pub use perspective::PerspectiveCamera;
pub use trackball_controls::{TrackballControls, TrackballState};
