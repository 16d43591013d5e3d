//! Light definitions
//!
//! Spot, ambient and directional lights with the shadow settings the default
//! lighting presets configure.

use cgmath::{Vector3, Zero};

use crate::gfx::{color::Color, scene::ObjectId};

/// Projection used when rendering a light's shadow map
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShadowCamera {
    Perspective {
        fov: f32,
        near: f32,
        far: f32,
    },
    Orthographic {
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        near: f32,
        far: f32,
    },
}

/// Shadow map settings of a shadow-casting light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSettings {
    pub map_size: [u32; 2],
    pub camera: ShadowCamera,
}

impl ShadowSettings {
    pub fn perspective() -> Self {
        Self {
            map_size: [512, 512],
            camera: ShadowCamera::Perspective {
                fov: 50.0,
                near: 0.5,
                far: 500.0,
            },
        }
    }

    pub fn orthographic() -> Self {
        Self {
            map_size: [512, 512],
            camera: ShadowCamera::Orthographic {
                left: -5.0,
                right: 5.0,
                top: 5.0,
                bottom: -5.0,
                near: 0.5,
                far: 500.0,
            },
        }
    }

    /// Builder pattern: set the shadow map resolution
    pub fn with_map_size(mut self, width: u32, height: u32) -> Self {
        self.map_size = [width, height];
        self
    }

    /// Texture extent for allocating the shadow map
    pub fn extent(&self) -> wgpu::Extent3d {
        wgpu::Extent3d {
            width: self.map_size[0],
            height: self.map_size[1],
            depth_or_array_layers: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vector3<f32>,
    pub target: Vector3<f32>,
    pub distance: f32,
    pub angle: f32,
    pub penumbra: f32,
    pub decay: f32,
    pub cast_shadow: bool,
    pub shadow: ShadowSettings,
}

impl SpotLight {
    pub fn new(color: u32) -> Self {
        Self {
            color: Color::from_hex(color),
            intensity: 1.0,
            position: Vector3::new(0.0, 1.0, 0.0),
            target: Vector3::zero(),
            distance: 0.0,
            angle: std::f32::consts::PI / 3.0,
            penumbra: 0.0,
            decay: 2.0,
            cast_shadow: false,
            shadow: ShadowSettings::perspective(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(color: u32) -> Self {
        Self {
            color: Color::from_hex(color),
            intensity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f32,
    pub position: Vector3<f32>,
    pub target: Vector3<f32>,
    pub cast_shadow: bool,
    pub shadow: ShadowSettings,
}

impl DirectionalLight {
    pub fn new(color: u32) -> Self {
        Self {
            color: Color::from_hex(color),
            intensity: 1.0,
            position: Vector3::new(0.0, 1.0, 0.0),
            target: Vector3::zero(),
            cast_shadow: false,
            shadow: ShadowSettings::orthographic(),
        }
    }

    /// Normalized direction the light travels in
    pub fn direction(&self) -> Vector3<f32> {
        use cgmath::InnerSpace;
        let delta = self.target - self.position;
        if delta.magnitude2() > 0.0 {
            delta.normalize()
        } else {
            -Vector3::unit_y()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LightKind {
    Spot(SpotLight),
    Ambient(AmbientLight),
    Directional(DirectionalLight),
}

/// A light placed in a scene or group
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    id: ObjectId,
    pub name: String,
    pub kind: LightKind,
}

impl Light {
    pub fn new(kind: LightKind) -> Self {
        Self {
            id: ObjectId::next(),
            name: String::new(),
            kind,
        }
    }

    pub fn spot(light: SpotLight) -> Self {
        Self::new(LightKind::Spot(light))
    }

    pub fn ambient(light: AmbientLight) -> Self {
        Self::new(LightKind::Ambient(light))
    }

    pub fn directional(light: DirectionalLight) -> Self {
        Self::new(LightKind::Directional(light))
    }

    /// Builder pattern: set the lookup name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn color(&self) -> Color {
        match &self.kind {
            LightKind::Spot(light) => light.color,
            LightKind::Ambient(light) => light.color,
            LightKind::Directional(light) => light.color,
        }
    }

    pub fn casts_shadow(&self) -> bool {
        match &self.kind {
            LightKind::Spot(light) => light.cast_shadow,
            LightKind::Ambient(_) => false,
            LightKind::Directional(light) => light.cast_shadow,
        }
    }

    pub fn shadow(&self) -> Option<&ShadowSettings> {
        match &self.kind {
            LightKind::Spot(light) => Some(&light.shadow),
            LightKind::Ambient(_) => None,
            LightKind::Directional(light) => Some(&light.shadow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_light_never_casts_shadow() {
        let light = Light::ambient(AmbientLight::new(0x343434)).with_name("ambientLight");
        assert!(!light.casts_shadow());
        assert!(light.shadow().is_none());
        assert_eq!(light.color(), Color::from_hex(0x343434));
    }

    #[test]
    fn test_directional_direction() {
        let mut light = DirectionalLight::new(0xffffff);
        light.position = Vector3::new(0.0, 10.0, 0.0);
        assert_eq!(light.direction(), Vector3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_shadow_extent() {
        let shadow = ShadowSettings::perspective().with_map_size(2048, 1024);
        let extent = shadow.extent();
        assert_eq!(extent.width, 2048);
        assert_eq!(extent.height, 1024);
    }
}
