use std::f32::consts::PI;

use cgmath::{InnerSpace, Vector3};
use winit::{
    dpi::PhysicalPosition,
    event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta},
    keyboard::{KeyCode, PhysicalKey},
};

use super::perspective::PerspectiveCamera;

const PITCH_EPSILON: f32 = 1e-4;

/// Orbits a camera around its target
///
/// Drag rotates, shift + drag pans (when enabled), the wheel dollies within
/// `[min_distance, max_distance]`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    pub min_distance: f32,
    pub max_distance: f32,
    pub enable_rotate: bool,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    is_shift_held: bool,
    is_mouse_pressed: bool,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            enable_rotate: true,
            enable_zoom: true,
            enable_pan: true,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            pan_speed: 0.01,
            is_shift_held: false,
            is_mouse_pressed: false,
        }
    }
}

impl OrbitControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set the dolly range
    pub fn with_distance_range(mut self, min_distance: f32, max_distance: f32) -> Self {
        self.min_distance = min_distance;
        self.max_distance = max_distance;
        self
    }

    pub fn with_pan(mut self, enable_pan: bool) -> Self {
        self.enable_pan = enable_pan;
        self
    }

    /// Applies a raw device event; returns true if the camera moved
    pub fn process_device_event(
        &mut self,
        event: &DeviceEvent,
        camera: &mut PerspectiveCamera,
    ) -> bool {
        match event {
            DeviceEvent::Button {
                button: 0, // Left Mouse Button
                state,
            } => {
                self.is_mouse_pressed = *state == ElementState::Pressed;
                false
            }
            DeviceEvent::MouseWheel { delta } => {
                let scroll_amount = match delta {
                    MouseScrollDelta::LineDelta(_, scroll) => *scroll,
                    MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => *y as f32 / 20.0,
                };
                self.dolly(camera, (-scroll_amount * self.zoom_speed).exp())
            }
            DeviceEvent::MouseMotion { delta } if self.is_mouse_pressed => {
                let (dx, dy) = (delta.0 as f32, delta.1 as f32);
                if self.is_shift_held {
                    self.pan(camera, -dx * self.pan_speed, dy * self.pan_speed)
                } else {
                    self.rotate(camera, -dx * self.rotate_speed, -dy * self.rotate_speed)
                }
            }
            _ => false,
        }
    }

    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(KeyCode::ShiftLeft | KeyCode::ShiftRight) = event.physical_key {
            self.set_shift_held(event.state == ElementState::Pressed);
        }
    }

    pub fn set_shift_held(&mut self, held: bool) {
        self.is_shift_held = held;
    }

    pub fn set_mouse_pressed(&mut self, pressed: bool) {
        self.is_mouse_pressed = pressed;
    }

    /// Orbits around the target; pitch stays strictly between the poles
    pub fn rotate(&self, camera: &mut PerspectiveCamera, delta_yaw: f32, delta_pitch: f32) -> bool {
        if !self.enable_rotate {
            return false;
        }
        let (radius, theta, phi) = spherical(camera);
        let phi = (phi + delta_pitch).clamp(PITCH_EPSILON, PI - PITCH_EPSILON);
        place(camera, radius, theta + delta_yaw, phi);
        true
    }

    /// Scales the target distance by `scale`, clamped to the distance range
    pub fn dolly(&self, camera: &mut PerspectiveCamera, scale: f32) -> bool {
        if !self.enable_zoom {
            return false;
        }
        let (radius, theta, phi) = spherical(camera);
        place(camera, self.clamp_distance(radius * scale), theta, phi);
        true
    }

    /// Moves camera and target along the view plane
    pub fn pan(&self, camera: &mut PerspectiveCamera, right: f32, up: f32) -> bool {
        if !self.enable_pan {
            return false;
        }
        let forward = (camera.target - camera.position).normalize();
        let right_axis = forward.cross(camera.up).normalize();
        let up_axis = right_axis.cross(forward).normalize();

        // Scale by distance so panning feels the same at every zoom level
        let scale = camera.distance_to_target() * 0.1;
        let movement = right_axis * right * scale + up_axis * up * scale;
        camera.position += movement;
        camera.target += movement;
        true
    }

    /// Pulls the camera back into the allowed distance range
    pub fn update(&self, camera: &mut PerspectiveCamera) {
        let (radius, theta, phi) = spherical(camera);
        let clamped = self.clamp_distance(radius);
        if clamped != radius {
            place(camera, clamped, theta, phi);
        }
    }

    fn clamp_distance(&self, distance: f32) -> f32 {
        distance.max(self.min_distance).min(self.max_distance)
    }
}

/// Camera offset from its target as (radius, azimuth around +Y, polar angle from +Y)
fn spherical(camera: &PerspectiveCamera) -> (f32, f32, f32) {
    let offset = camera.position - camera.target;
    let radius = offset.magnitude();
    if radius == 0.0 {
        return (0.0, 0.0, PI / 2.0);
    }
    let theta = offset.x.atan2(offset.z);
    let phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
    (radius, theta, phi)
}

fn place(camera: &mut PerspectiveCamera, radius: f32, theta: f32, phi: f32) {
    let offset = Vector3::new(
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
        radius * phi.sin() * theta.cos(),
    );
    camera.position = camera.target + offset;
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Zero;

    fn camera_at(z: f32) -> PerspectiveCamera {
        let mut camera = PerspectiveCamera::new(45.0, 1.0, 1.0, 1000.0);
        camera.position = Vector3::new(0.0, 0.0, z);
        camera.look_at(Vector3::zero());
        camera
    }

    #[test]
    fn test_dolly_respects_distance_range() {
        let controls = OrbitControls::new().with_distance_range(10.0, 500.0);
        let mut camera = camera_at(100.0);

        controls.dolly(&mut camera, 0.01);
        assert!((camera.distance_to_target() - 10.0).abs() < 1e-3);

        controls.dolly(&mut camera, 1000.0);
        assert!((camera.distance_to_target() - 500.0).abs() < 1e-2);
    }

    #[test]
    fn test_wheel_zooms_in() {
        let mut controls = OrbitControls::new();
        let mut camera = camera_at(100.0);
        let event = DeviceEvent::MouseWheel {
            delta: MouseScrollDelta::LineDelta(0.0, 1.0),
        };
        assert!(controls.process_device_event(&event, &mut camera));
        assert!(camera.distance_to_target() < 100.0);
    }

    #[test]
    fn test_pan_disabled() {
        let mut controls = OrbitControls::new().with_pan(false);
        let mut camera = camera_at(100.0);
        controls.set_shift_held(true);
        controls.set_mouse_pressed(true);

        let moved = controls.process_device_event(
            &DeviceEvent::MouseMotion { delta: (10.0, 5.0) },
            &mut camera,
        );
        assert!(!moved);
        assert_eq!(camera.target, Vector3::zero());
    }

    #[test]
    fn test_rotate_keeps_distance() {
        let controls = OrbitControls::new();
        let mut camera = camera_at(50.0);
        controls.rotate(&mut camera, 0.5, 0.25);
        assert!((camera.distance_to_target() - 50.0).abs() < 1e-3);
        assert!(camera.position.x > 0.0);
    }

    #[test]
    fn test_motion_ignored_without_button() {
        let mut controls = OrbitControls::new();
        let mut camera = camera_at(50.0);
        let before = camera.position;
        controls.process_device_event(&DeviceEvent::MouseMotion { delta: (10.0, 0.0) }, &mut camera);
        assert_eq!(camera.position, before);
    }

    #[test]
    fn test_update_clamps_initial_distance() {
        let controls = OrbitControls::new().with_distance_range(10.0, 500.0);
        let mut camera = camera_at(2.0);
        controls.update(&mut camera);
        assert!((camera.distance_to_target() - 10.0).abs() < 1e-3);
    }
}
