use cgmath::{InnerSpace, Quaternion, Rad, Rotation, Rotation3, Vector2, Zero};
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{DeviceEvent, ElementState, MouseScrollDelta},
    keyboard::KeyCode,
};

use super::perspective::PerspectiveCamera;

/// Interaction a drag currently performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackballState {
    Rotate,
    Zoom,
    Pan,
}

/// Free rotation around the target, without a fixed up axis
///
/// Input is accumulated by [`process_device_event`](Self::process_device_event)
/// and applied in [`update`](Self::update), once per frame. With
/// `static_moving` the accumulated motion is consumed in one frame, otherwise
/// it decays by `dynamic_damping_factor` every update.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackballControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub no_rotate: bool,
    pub no_zoom: bool,
    pub no_pan: bool,
    pub static_moving: bool,
    pub dynamic_damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Keys that switch a drag to rotate, zoom and pan respectively
    pub keys: [KeyCode; 3],
    screen: PhysicalSize<u32>,
    key_state: Option<TrackballState>,
    is_mouse_pressed: bool,
    pending_rotate: Vector2<f32>,
    pending_zoom: f32,
    pending_pan: Vector2<f32>,
}

impl Default for TrackballControls {
    fn default() -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 1.2,
            pan_speed: 0.3,
            no_rotate: false,
            no_zoom: false,
            no_pan: false,
            static_moving: false,
            dynamic_damping_factor: 0.2,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            keys: [KeyCode::KeyA, KeyCode::KeyS, KeyCode::KeyD],
            screen: PhysicalSize::new(800, 600),
            key_state: None,
            is_mouse_pressed: false,
            pending_rotate: Vector2::zero(),
            pending_zoom: 0.0,
            pending_pan: Vector2::zero(),
        }
    }
}

impl TrackballControls {
    pub fn new(screen: PhysicalSize<u32>) -> Self {
        Self {
            screen,
            ..Self::default()
        }
    }

    pub fn set_screen_size(&mut self, screen: PhysicalSize<u32>) {
        self.screen = screen;
    }

    /// Holding one of `keys` overrides what a drag does until released
    pub fn set_key_state(&mut self, key: KeyCode, pressed: bool) {
        let Some(index) = self.keys.iter().position(|candidate| *candidate == key) else {
            return;
        };
        let state = [TrackballState::Rotate, TrackballState::Zoom, TrackballState::Pan][index];
        if pressed {
            self.key_state = Some(state);
        } else if self.key_state == Some(state) {
            self.key_state = None;
        }
    }

    pub fn state(&self) -> TrackballState {
        self.key_state.unwrap_or(TrackballState::Rotate)
    }

    pub fn has_pending_motion(&self) -> bool {
        !self.pending_rotate.is_zero() || self.pending_zoom != 0.0 || !self.pending_pan.is_zero()
    }

    /// Queues input from a raw device event; returns true if motion was queued
    pub fn process_device_event(&mut self, event: &DeviceEvent) -> bool {
        let scale = self.screen.height.max(1) as f32;
        match event {
            DeviceEvent::Button { button: 0, state } => {
                self.is_mouse_pressed = *state == ElementState::Pressed;
                false
            }
            DeviceEvent::MouseWheel { delta } => {
                if self.no_zoom {
                    return false;
                }
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y * 0.025,
                    MouseScrollDelta::PixelDelta(PhysicalPosition { y, .. }) => *y as f32 / scale,
                };
                self.pending_zoom -= scroll;
                true
            }
            DeviceEvent::MouseMotion { delta } if self.is_mouse_pressed => {
                let movement = Vector2::new(delta.0 as f32, delta.1 as f32) / scale;
                match self.state() {
                    TrackballState::Rotate if !self.no_rotate => self.pending_rotate += movement,
                    TrackballState::Zoom if !self.no_zoom => self.pending_zoom += movement.y,
                    TrackballState::Pan if !self.no_pan => self.pending_pan += movement,
                    _ => return false,
                }
                true
            }
            _ => false,
        }
    }

    /// Applies queued motion to the camera
    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        let mut eye = camera.position - camera.target;

        if !self.no_rotate && !self.pending_rotate.is_zero() {
            let angle = self.pending_rotate.magnitude() * self.rotate_speed;
            let eye_direction = eye.normalize();
            let up_direction = camera.up.normalize();
            let sideways = up_direction.cross(eye_direction).normalize();
            let move_direction =
                up_direction * -self.pending_rotate.y + sideways * self.pending_rotate.x;
            let axis = move_direction.cross(eye);
            if axis.magnitude2() > 0.0 {
                let rotation = Quaternion::from_axis_angle(axis.normalize(), Rad(angle));
                eye = rotation.rotate_vector(eye);
                camera.up = rotation.rotate_vector(camera.up);
            }
            self.pending_rotate = self.decay(self.pending_rotate);
        }

        if !self.no_zoom && self.pending_zoom != 0.0 {
            let factor = 1.0 + self.pending_zoom * self.zoom_speed;
            if factor > 0.0 {
                eye *= factor;
            }
            self.pending_zoom = if self.static_moving {
                0.0
            } else {
                self.pending_zoom * (1.0 - self.dynamic_damping_factor)
            };
        }

        if !self.no_pan && !self.pending_pan.is_zero() {
            let change = self.pending_pan * eye.magnitude() * self.pan_speed;
            let pan = eye.cross(camera.up).normalize() * change.x + camera.up.normalize() * change.y;
            camera.position += pan;
            camera.target += pan;
            self.pending_pan = self.decay(self.pending_pan);
        }

        let distance = eye.magnitude();
        if distance > 0.0 {
            let clamped = distance.max(self.min_distance).min(self.max_distance);
            eye *= clamped / distance;
        }
        camera.position = camera.target + eye;
    }

    fn decay(&self, pending: Vector2<f32>) -> Vector2<f32> {
        if self.static_moving {
            Vector2::zero()
        } else {
            pending * (1.0 - self.dynamic_damping_factor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector3;

    fn camera() -> PerspectiveCamera {
        let mut camera = PerspectiveCamera::new(45.0, 1.0, 0.1, 1000.0);
        camera.position = Vector3::new(0.0, 0.0, 50.0);
        camera.look_at(Vector3::zero());
        camera
    }

    fn drag(controls: &mut TrackballControls, dx: f64, dy: f64) -> bool {
        controls.process_device_event(&DeviceEvent::Button {
            button: 0,
            state: ElementState::Pressed,
        });
        controls.process_device_event(&DeviceEvent::MouseMotion { delta: (dx, dy) })
    }

    #[test]
    fn test_static_moving_consumes_motion() {
        let mut controls = TrackballControls::default();
        controls.static_moving = true;
        let mut camera = camera();

        assert!(drag(&mut controls, 60.0, 0.0));
        controls.update(&mut camera);
        assert!(!controls.has_pending_motion());
        assert!((camera.distance_to_target() - 50.0).abs() < 1e-3);

        let after_first = camera.position;
        controls.update(&mut camera);
        assert_eq!(camera.position, after_first);
    }

    #[test]
    fn test_dynamic_motion_decays() {
        let mut controls = TrackballControls::default();
        let mut camera = camera();
        drag(&mut controls, 60.0, 0.0);

        controls.update(&mut camera);
        let first = camera.position;
        assert!(controls.has_pending_motion());
        controls.update(&mut camera);
        assert_ne!(camera.position, first);
    }

    #[test]
    fn test_no_zoom_ignores_wheel() {
        let mut controls = TrackballControls::default();
        controls.no_zoom = true;
        let mut camera = camera();

        let queued = controls.process_device_event(&DeviceEvent::MouseWheel {
            delta: MouseScrollDelta::LineDelta(0.0, 3.0),
        });
        assert!(!queued);
        controls.update(&mut camera);
        assert!((camera.distance_to_target() - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_zoom_key_turns_drag_into_zoom() {
        let mut controls = TrackballControls::default();
        controls.static_moving = true;
        let mut camera = camera();

        controls.set_key_state(KeyCode::KeyS, true);
        assert_eq!(controls.state(), TrackballState::Zoom);
        drag(&mut controls, 0.0, -60.0);
        controls.update(&mut camera);
        assert!(camera.distance_to_target() < 50.0);

        controls.set_key_state(KeyCode::KeyS, false);
        assert_eq!(controls.state(), TrackballState::Rotate);
    }

    #[test]
    fn test_pan_moves_target() {
        let mut controls = TrackballControls::default();
        controls.static_moving = true;
        let mut camera = camera();

        controls.set_key_state(KeyCode::KeyD, true);
        drag(&mut controls, 30.0, 0.0);
        controls.update(&mut camera);
        assert!(camera.target.x.abs() > 0.0);
        assert!((camera.distance_to_target() - 50.0).abs() < 1e-3);
    }
}
