// src/lib.rs
//! Scene Inspector
//!
//! Scene construction presets and a typed live control panel for tweaking
//! materials, lights and post-processing passes, built on wgpu, winit and
//! Dear ImGui.

pub mod error;
pub mod gfx;
pub mod prelude;
pub mod presets;
pub mod ui;

// Re-export main types for convenience
pub use error::{HostError, PanelError};
pub use ui::{Panel, PanelHost};
