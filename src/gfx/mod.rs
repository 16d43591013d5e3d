//! # Graphics Module
//!
//! Scene description types consumed by a wgpu renderer: colors, textures,
//! procedural geometry, materials, lights, cameras, renderer settings and
//! post-processing passes.
//!
//! ## Architecture Overview
//!
//! - **Scene Management** ([`scene`]) - Meshes, lights and groups in a hierarchy
//! - **Materials** ([`material`]) - Shading models and the flags panels edit
//! - **Camera System** ([`camera`]) - Perspective camera with orbit and trackball controls
//! - **Post-processing** ([`postprocessing`]) - Uniform-driven shader passes and the pass chain
//!
//! Materials are shared between meshes and panels through [`SharedMaterial`],
//! so an edit made in a panel is visible to every mesh drawing with it.
//!
//! [`SharedMaterial`]: material::SharedMaterial

pub mod camera;
pub mod color;
pub mod geometry;
pub mod light;
pub mod material;
pub mod postprocessing;
pub mod renderer;
pub mod scene;
pub mod texture;

// Re-export commonly used types
pub use color::Color;
pub use material::{Material, MaterialKind, SharedMaterial};
pub use scene::{Container, Scene};
