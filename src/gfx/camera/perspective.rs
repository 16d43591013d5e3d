use cgmath::{perspective, Deg, EuclideanSpace, InnerSpace, Matrix4, Point3, Vector3, Zero};
use winit::dpi::PhysicalSize;

use super::camera_utils::{Camera, CameraUniform, OPENGL_TO_WGPU_MATRIX};

/// Perspective camera looking from `position` at `target`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
}

impl Camera for PerspectiveCamera {
    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }
}

impl PerspectiveCamera {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov,
            aspect,
            near,
            far,
            position: Vector3::zero(),
            target: Vector3::new(0.0, 0.0, -1.0),
            up: Vector3::unit_y(),
        }
    }

    /// Aspect ratio of a surface size, falling back to 1 for degenerate sizes
    pub fn aspect_of(size: PhysicalSize<u32>) -> f32 {
        if size.width == 0 || size.height == 0 {
            1.0
        } else {
            size.width as f32 / size.height as f32
        }
    }

    /// Points the camera at `target`
    pub fn look_at(&mut self, target: Vector3<f32>) {
        self.target = target;
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.aspect = Self::aspect_of(size);
    }

    pub fn distance_to_target(&self) -> f32 {
        (self.position - self.target).magnitude()
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(
            Point3::from_vec(self.position),
            Point3::from_vec(self.target),
            self.up,
        )
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(Deg(self.fov), self.aspect, self.near, self.far)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_position: [self.position.x, self.position.y, self.position.z, 1.0],
            view_proj: self.build_view_projection_matrix().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4;

    #[test]
    fn test_aspect_guards_zero_height() {
        assert_eq!(PerspectiveCamera::aspect_of(PhysicalSize::new(800, 0)), 1.0);
        assert_eq!(PerspectiveCamera::aspect_of(PhysicalSize::new(1200, 800)), 1.5);
    }

    #[test]
    fn test_target_projects_to_center() {
        let mut camera = PerspectiveCamera::new(45.0, 1.5, 1.0, 1000.0);
        camera.position = Vector3::new(-20.0, 25.0, 100.0);
        camera.look_at(Vector3::zero());

        let clip = camera.build_view_projection_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_uniform_carries_position() {
        let mut camera = PerspectiveCamera::new(45.0, 1.0, 0.1, 1000.0);
        camera.position = Vector3::new(-30.0, 40.0, 30.0);
        assert_eq!(camera.uniform().view_position, [-30.0, 40.0, 30.0, 1.0]);
    }
}
