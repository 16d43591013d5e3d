//! # Primitive Shape Generation
//!
//! This module contains functions to generate common 3D primitive shapes.
//! All shapes are Y-up, centered at the origin, with normals and texture coordinates.

use super::GeometryData;
use std::f32::consts::PI;

/// Radial segment count used when a caller does not pick one
pub const DEFAULT_RADIAL_SEGMENTS: u32 = 32;

/// Generate a box centered at the origin
///
/// Each face has its own four vertices so normals stay flat per face.
pub fn generate_box(width: f32, height: f32, depth: f32) -> GeometryData {
    let mut data = GeometryData::new();
    let (hw, hh, hd) = (width * 0.5, height * 0.5, depth * 0.5);

    let positions = [
        // Front face
        [-hw, -hh,  hd], [ hw, -hh,  hd], [ hw,  hh,  hd], [-hw,  hh,  hd],
        // Back face
        [-hw, -hh, -hd], [-hw,  hh, -hd], [ hw,  hh, -hd], [ hw, -hh, -hd],
        // Left face
        [-hw, -hh, -hd], [-hw, -hh,  hd], [-hw,  hh,  hd], [-hw,  hh, -hd],
        // Right face
        [ hw, -hh,  hd], [ hw, -hh, -hd], [ hw,  hh, -hd], [ hw,  hh,  hd],
        // Top face
        [-hw,  hh,  hd], [ hw,  hh,  hd], [ hw,  hh, -hd], [-hw,  hh, -hd],
        // Bottom face
        [-hw, -hh, -hd], [ hw, -hh, -hd], [ hw, -hh,  hd], [-hw, -hh,  hd],
    ];

    let face_normals = [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [-1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
    ];

    data.vertices = positions.to_vec();
    for (face, normal) in face_normals.iter().enumerate() {
        data.normals.extend([*normal; 4]);
        data.tex_coords
            .extend([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);

        let base = face as u32 * 4;
        data.indices
            .extend([base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a UV sphere
///
/// # Arguments
/// * `radius` - Sphere radius
/// * `width_segments` - Number of segments around the equator (min 3)
/// * `height_segments` - Number of segments pole to pole (min 2)
pub fn generate_sphere(radius: f32, width_segments: u32, height_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let long_segs = width_segments.max(3);
    let lat_segs = height_segments.max(2);

    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32; // 0 to PI
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32; // 0 to 2*PI
            let x = sin_theta * phi.cos();
            let y = cos_theta;
            let z = sin_theta * phi.sin();

            data.vertices.push([x * radius, y * radius, z * radius]);
            data.normals.push([x, y, z]);
            data.tex_coords.push([
                long as f32 / long_segs as f32,
                lat as f32 / lat_segs as f32,
            ]);
        }
    }

    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * (long_segs + 1) + long;
            let second = first + long_segs + 1;

            data.indices.extend([first, second, first + 1]);
            data.indices.extend([second, second + 1, first + 1]);
        }
    }

    data
}

/// Generate a plane in the XY plane facing +Z
///
/// Rotate it by -90 degrees around X to lay it flat as a ground plane.
///
/// # Arguments
/// * `width` - Width of the plane (X direction)
/// * `height` - Height of the plane (Y direction)
/// * `width_segments` - Number of subdivisions along width
/// * `height_segments` - Number of subdivisions along height
pub fn generate_plane(
    width: f32,
    height: f32,
    width_segments: u32,
    height_segments: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let w_segs = width_segments.max(1);
    let h_segs = height_segments.max(1);

    for y in 0..=h_segs {
        let v = y as f32 / h_segs as f32;
        let pos_y = (v - 0.5) * height;

        for x in 0..=w_segs {
            let u = x as f32 / w_segs as f32;
            let pos_x = (u - 0.5) * width;

            data.vertices.push([pos_x, pos_y, 0.0]);
            data.normals.push([0.0, 0.0, 1.0]);
            data.tex_coords.push([u, v]);
        }
    }

    for y in 0..h_segs {
        for x in 0..w_segs {
            let i = y * (w_segs + 1) + x;
            let next_row = i + w_segs + 1;

            data.indices.extend([i, i + 1, next_row]);
            data.indices.extend([next_row, i + 1, next_row + 1]);
        }
    }

    data
}

/// Generate a (possibly tapered) cylinder along the Y axis
///
/// A cap is only generated for an end whose radius is greater than zero.
///
/// # Arguments
/// * `radius_top` - Radius at +height/2
/// * `radius_bottom` - Radius at -height/2
/// * `height` - Height of the cylinder
/// * `radial_segments` - Number of segments around the axis (min 3)
pub fn generate_cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let segs = radial_segments.max(3);
    let half_height = height * 0.5;
    let slope = if height != 0.0 {
        (radius_bottom - radius_top) / height
    } else {
        0.0
    };

    // Side: one bottom/top vertex pair per column, seam duplicated
    for i in 0..=segs {
        let u = i as f32 / segs as f32;
        let angle = u * 2.0 * PI;
        let (sin_a, cos_a) = angle.sin_cos();

        let length = (1.0 + slope * slope).sqrt();
        let normal = [sin_a / length, slope / length, cos_a / length];

        data.vertices
            .push([radius_bottom * sin_a, -half_height, radius_bottom * cos_a]);
        data.normals.push(normal);
        data.tex_coords.push([u, 0.0]);

        data.vertices
            .push([radius_top * sin_a, half_height, radius_top * cos_a]);
        data.normals.push(normal);
        data.tex_coords.push([u, 1.0]);
    }

    for i in 0..segs {
        let bottom = i * 2;
        let top = bottom + 1;
        let bottom_next = bottom + 2;
        let top_next = bottom + 3;

        data.indices.extend([bottom, bottom_next, top]);
        data.indices.extend([top, bottom_next, top_next]);
    }

    if radius_top > 0.0 {
        push_cap(&mut data, radius_top, half_height, segs, true);
    }
    if radius_bottom > 0.0 {
        push_cap(&mut data, radius_bottom, -half_height, segs, false);
    }

    data
}

/// Generate a cone along the Y axis with its tip at +height/2
pub fn generate_cone(radius: f32, height: f32, radial_segments: u32) -> GeometryData {
    generate_cylinder(0.0, radius, height, radial_segments)
}

fn push_cap(data: &mut GeometryData, radius: f32, y: f32, segs: u32, top: bool) {
    let normal_y = if top { 1.0 } else { -1.0 };
    let center = data.vertices.len() as u32;

    data.vertices.push([0.0, y, 0.0]);
    data.normals.push([0.0, normal_y, 0.0]);
    data.tex_coords.push([0.5, 0.5]);

    for i in 0..=segs {
        let angle = i as f32 / segs as f32 * 2.0 * PI;
        let (sin_a, cos_a) = angle.sin_cos();
        data.vertices.push([radius * sin_a, y, radius * cos_a]);
        data.normals.push([0.0, normal_y, 0.0]);
        data.tex_coords
            .push([0.5 + 0.5 * sin_a, 0.5 + 0.5 * cos_a * normal_y]);
    }

    for i in 0..segs {
        let current = center + 1 + i;
        let next = current + 1;
        if top {
            data.indices.extend([center, current, next]);
        } else {
            data.indices.extend([center, next, current]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_generation() {
        let cube = generate_box(4.0, 2.0, 6.0);
        assert_eq!(cube.vertex_count(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.triangle_count(), 12);

        let (min, max) = cube.bounds().unwrap();
        assert_eq!(min, [-2.0, -1.0, -3.0]);
        assert_eq!(max, [2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_sphere_generation() {
        let sphere = generate_sphere(4.0, 8, 6);
        assert_eq!(sphere.vertex_count(), 9 * 7);
        assert_eq!(sphere.triangle_count(), 8 * 6 * 2);
        assert_eq!(sphere.vertices.len(), sphere.normals.len());
        assert_eq!(sphere.vertices.len(), sphere.tex_coords.len());

        let (_, max) = sphere.bounds().unwrap();
        assert!((max[1] - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_plane_generation() {
        let plane = generate_plane(2.0, 2.0, 2, 2);
        assert_eq!(plane.vertices.len(), 9); // 3x3 grid
        assert_eq!(plane.indices.len(), 24); // 4 quads * 2 triangles * 3 indices
    }

    #[test]
    fn test_cylinder_has_both_caps() {
        let cylinder = generate_cylinder(5.0, 5.0, 6.0, 8);
        // 18 side vertices + 2 caps of (center + 9 ring vertices)
        assert_eq!(cylinder.vertex_count(), 38);
        assert_eq!(cylinder.triangle_count(), 16 + 16);
    }

    #[test]
    fn test_cone_skips_tip_cap() {
        let cone = generate_cone(5.0, 4.0, 8);
        assert_eq!(cone.vertex_count(), 28);
        assert_eq!(cone.triangle_count(), 16 + 8);

        let (min, max) = cone.bounds().unwrap();
        assert_eq!(min[1], -2.0);
        assert_eq!(max[1], 2.0);
    }
}
