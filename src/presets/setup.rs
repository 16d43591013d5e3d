//! Renderer, camera and camera-control presets

use cgmath::{Vector3, Zero};
use log::debug;
use winit::{dpi::PhysicalSize, keyboard::KeyCode};

use crate::gfx::camera::{OrbitControls, PerspectiveCamera, TrackballControls};
use crate::gfx::color::Color;
use crate::gfx::renderer::{RendererSettings, ShadowMapSettings, ShadowMapType};
use crate::gfx::scene::Scene;

/// Renderer with soft PCF shadows on a black background
pub fn init_renderer(size: PhysicalSize<u32>) -> RendererSettings {
    RendererSettings::new(size)
        .with_clear_color(Color::BLACK)
        .with_shadow_map(ShadowMapSettings {
            enabled: true,
            soft: true,
            kind: ShadowMapType::PcfSoft,
        })
}

/// Wide shot from (-20, 25, 100) looking at the scene origin
pub fn init_camera(scene: &Scene, size: PhysicalSize<u32>) -> PerspectiveCamera {
    let mut camera = PerspectiveCamera::new(45.0, PerspectiveCamera::aspect_of(size), 1.0, 1000.0);
    camera.position = Vector3::new(-20.0, 25.0, 100.0);
    camera.look_at(scene.position);
    camera
}

/// Camera looking at the world origin, from (-30, 40, 30) unless given
pub fn init_camera_pos(size: PhysicalSize<u32>, position: Option<Vector3<f32>>) -> PerspectiveCamera {
    let mut camera = PerspectiveCamera::new(45.0, PerspectiveCamera::aspect_of(size), 0.1, 1000.0);
    camera.position = position.unwrap_or(Vector3::new(-30.0, 40.0, 30.0));
    camera.look_at(Vector3::zero());
    camera
}

/// Orbit controls kept between 10 and 500 units, without panning
///
/// The camera is pulled into the allowed range right away.
pub fn init_controls(camera: &mut PerspectiveCamera) -> OrbitControls {
    let controls = OrbitControls::new()
        .with_distance_range(10.0, 500.0)
        .with_pan(false);
    controls.update(camera);
    debug!(
        "Orbit controls at distance {:.2}",
        camera.distance_to_target()
    );
    controls
}

/// Trackball controls with undamped motion and A/S/D modifier keys
pub fn init_trackball_controls(size: PhysicalSize<u32>) -> TrackballControls {
    let mut controls = TrackballControls::new(size);
    controls.rotate_speed = 1.0;
    controls.zoom_speed = 1.2;
    controls.pan_speed = 0.8;
    controls.no_zoom = false;
    controls.no_pan = false;
    controls.static_moving = true;
    controls.dynamic_damping_factor = 0.3;
    controls.keys = [KeyCode::KeyA, KeyCode::KeyS, KeyCode::KeyD];
    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: PhysicalSize<u32> = PhysicalSize::new(1600, 900);

    #[test]
    fn test_init_renderer_enables_soft_shadows() {
        let settings = init_renderer(SIZE);
        assert!(settings.shadow_map.enabled);
        assert!(settings.shadow_map.soft);
        assert_eq!(settings.shadow_map.kind, ShadowMapType::PcfSoft);
        assert_eq!(settings.clear_color, Color::BLACK);
        assert_eq!(settings.size, SIZE);
    }

    #[test]
    fn test_init_camera() {
        let scene = Scene::new();
        let camera = init_camera(&scene, SIZE);
        assert_eq!(camera.fov, 45.0);
        assert_eq!(camera.near, 1.0);
        assert_eq!(camera.far, 1000.0);
        assert_eq!(camera.position, Vector3::new(-20.0, 25.0, 100.0));
        assert_eq!(camera.target, scene.position);
        assert!((camera.aspect - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_init_camera_pos_default_and_custom() {
        let camera = init_camera_pos(SIZE, None);
        assert_eq!(camera.position, Vector3::new(-30.0, 40.0, 30.0));
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.target, Vector3::zero());

        let camera = init_camera_pos(SIZE, Some(Vector3::new(0.0, 60.0, 70.0)));
        assert_eq!(camera.position, Vector3::new(0.0, 60.0, 70.0));
    }

    #[test]
    fn test_init_controls_clamps_camera() {
        let mut camera = init_camera_pos(SIZE, Some(Vector3::new(0.0, 0.0, 2.0)));
        let controls = init_controls(&mut camera);
        assert!(!controls.enable_pan);
        assert_eq!(controls.min_distance, 10.0);
        assert_eq!(controls.max_distance, 500.0);
        assert!((camera.distance_to_target() - 10.0).abs() < 1e-4);
        assert!(!controls.pan(&mut camera, 1.0, 1.0));
    }

    #[test]
    fn test_init_trackball_controls() {
        let controls = init_trackball_controls(SIZE);
        assert_eq!(controls.pan_speed, 0.8);
        assert_eq!(controls.dynamic_damping_factor, 0.3);
        assert!(controls.static_moving);
        assert_eq!(controls.keys, [KeyCode::KeyA, KeyCode::KeyS, KeyCode::KeyD]);
    }
}
