//! # Vertex Layout
//!
//! GPU vertex format produced from [`GeometryData`](super::GeometryData).

/// A vertex with position, normal and texture coordinates.
///
/// `#[repr(C)]` keeps the layout stable for vertex buffer uploads.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    /// Vertex buffer layout:
    /// - location 0: position (Float32x3)
    /// - location 1: normal (Float32x3)
    /// - location 2: uv (Float32x2)
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

impl super::GeometryData {
    /// Interleaves the geometry into vertices, filling gaps with up-facing
    /// normals and zero UVs
    pub fn to_vertices(&self) -> Vec<Vertex> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, position)| Vertex {
                position: *position,
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
                uv: self.tex_coords.get(i).copied().unwrap_or([0.0, 0.0]),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::{generate_box, GeometryData};

    #[test]
    fn test_layout_stride() {
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes.len(), 3);
    }

    #[test]
    fn test_to_vertices_fills_missing_attributes() {
        let mut data = GeometryData::new();
        data.vertices.push([1.0, 2.0, 3.0]);
        let vertices = data.to_vertices();
        assert_eq!(vertices[0].normal, [0.0, 1.0, 0.0]);
        assert_eq!(vertices[0].uv, [0.0, 0.0]);

        assert_eq!(generate_box(1.0, 1.0, 1.0).to_vertices().len(), 24);
    }
}
