//! # Scene Presets
//!
//! Ready-made renderer settings, cameras, controls, props, light rigs and
//! planets with fixed parameters, plus helpers that add a mesh together with
//! panel folders for its material.
//!
//! ## Usage
//!
//! ```rust
//! use scene_inspector::gfx::scene::Scene;
//! use scene_inspector::presets::{add_default_cube_and_sphere, add_ground_plane, init_default_lighting};
//!
//! let mut scene = Scene::new();
//! add_ground_plane(&mut scene);
//! add_default_cube_and_sphere(&mut scene);
//! init_default_lighting(&mut scene, None);
//! assert_eq!(scene.statistics().light_count, 2);
//! ```

pub mod inspector;
pub mod lighting;
pub mod planets;
pub mod scenery;
pub mod setup;

pub use inspector::{
    add_geometry, add_geometry_with_material, apply_mesh_normal_material,
    apply_mesh_standard_material, GeometryInspector, MaterialPreset,
};
pub use lighting::{init_default_directional_lighting, init_default_lighting};
pub use planets::{add_earth, add_mars, EarthOptions, Planet};
pub use scenery::{
    add_default_cube_and_sphere, add_ground_plane, add_house_and_tree, add_large_ground_plane,
    CubeAndSphere,
};
pub use setup::{
    init_camera, init_camera_pos, init_controls, init_renderer, init_trackball_controls,
};
