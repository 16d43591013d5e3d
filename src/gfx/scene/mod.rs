//! # Scene Management Module
//!
//! Object hierarchy for the scene presets: meshes, lights and groups held by a
//! [`Scene`]. Both [`Scene`] and [`Group`] implement [`Container`], so helpers
//! can populate either one.
//!
//! ## Usage
//!
//! ```rust
//! use scene_inspector::gfx::geometry::generate_box;
//! use scene_inspector::gfx::material::Material;
//! use scene_inspector::gfx::scene::{Container, Mesh, Scene};
//!
//! let mut scene = Scene::new();
//! let cube = scene.add(Mesh::new(generate_box(4.0, 4.0, 4.0), Material::lambert(0xff0000)).at(-4.0, 3.0, 0.0));
//! assert!(scene.mesh(cube).is_some());
//! ```
//!
//! ## Object Management
//!
//! Objects in the scene support:
//! - Procedural geometry with shared materials
//! - Transform operations (position, rotation, scale)
//! - Lookup by id or name, including objects parented to groups
//! - Removal of direct children when a mesh is swapped at runtime

pub mod object;
pub mod scene;

// Re-export main types
pub use object::{Group, Mesh, ObjectId, SceneObject, Transform};
pub use scene::{Container, Scene, SceneStatistics};
