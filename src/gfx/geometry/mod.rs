//! # Procedural Geometry Generation
//!
//! Functions that generate the primitive shapes used by the scene presets,
//! so no model files are needed for boxes, spheres, planes, cylinders and cones.
//!
//! ## Usage
//!
//! ```rust
//! use scene_inspector::gfx::geometry::{generate_box, generate_sphere, generate_plane};
//!
//! // A 4x4x4 box
//! let cube = generate_box(4.0, 4.0, 4.0);
//!
//! // A sphere of radius 4 with 20 segments each way
//! let sphere = generate_sphere(4.0, 20, 20);
//!
//! // A 60x20 plane with 120 subdivisions on each axis
//! let plane = generate_plane(60.0, 20.0, 120, 120);
//! assert_eq!(plane.triangle_count(), 120 * 120 * 2);
//! ```

pub mod primitives;
pub mod vertex;

pub use primitives::*;
pub use vertex::Vertex;

/// Generated geometry data ready for GPU upload
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            tex_coords: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for empty geometry
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(mut min, mut max), v| {
            for axis in 0..3 {
                min[axis] = min[axis].min(v[axis]);
                max[axis] = max[axis].max(v[axis]);
            }
            (min, max)
        }))
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
