//! Default light rigs

use cgmath::Vector3;

use crate::gfx::light::{AmbientLight, DirectionalLight, Light, ShadowCamera, SpotLight};
use crate::gfx::scene::Container;

pub const SPOT_LIGHT_NAME: &str = "spotLight";
pub const AMBIENT_LIGHT_NAME: &str = "ambientLight";

const SHADOW_MAP_SIZE: u32 = 2048;
const AMBIENT_COLOR: u32 = 0x343434;

/// Adds a shadow-casting white spot light and a dim ambient light
///
/// The spot light sits at (-10, 30, 40) unless `position` is given. Works on
/// any container, so the rig can hang off a pivot group.
pub fn init_default_lighting(container: &mut impl Container, position: Option<Vector3<f32>>) {
    let mut spot = SpotLight::new(0xffffff);
    spot.position = position.unwrap_or(Vector3::new(-10.0, 30.0, 40.0));
    spot.shadow = spot.shadow.with_map_size(SHADOW_MAP_SIZE, SHADOW_MAP_SIZE);
    if let ShadowCamera::Perspective { fov, .. } = &mut spot.shadow.camera {
        *fov = 15.0;
    }
    spot.cast_shadow = true;
    spot.decay = 2.0;
    spot.penumbra = 0.05;
    container.add(Light::spot(spot).with_name(SPOT_LIGHT_NAME));

    container.add(Light::ambient(AmbientLight::new(AMBIENT_COLOR)).with_name(AMBIENT_LIGHT_NAME));
}

/// Adds a shadow-casting white directional light and a dim ambient light
///
/// The directional light sits at (100, 200, 200) unless `position` is given;
/// its shadow frustum spans 400 units each way.
pub fn init_default_directional_lighting(
    container: &mut impl Container,
    position: Option<Vector3<f32>>,
) {
    let mut directional = DirectionalLight::new(0xffffff);
    directional.position = position.unwrap_or(Vector3::new(100.0, 200.0, 200.0));
    directional.shadow = directional
        .shadow
        .with_map_size(SHADOW_MAP_SIZE, SHADOW_MAP_SIZE);
    if let ShadowCamera::Orthographic {
        left,
        right,
        top,
        bottom,
        ..
    } = &mut directional.shadow.camera
    {
        *left = -200.0;
        *right = 200.0;
        *top = 200.0;
        *bottom = -200.0;
    }
    directional.cast_shadow = true;
    container.add(Light::directional(directional));

    container.add(Light::ambient(AmbientLight::new(AMBIENT_COLOR)).with_name(AMBIENT_LIGHT_NAME));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::color::Color;
    use crate::gfx::light::LightKind;
    use crate::gfx::scene::{Group, Scene};

    #[test]
    fn test_default_lighting() {
        let mut scene = Scene::new();
        init_default_lighting(&mut scene, None);
        assert_eq!(scene.lights().len(), 2);

        let spot = scene.get_object_by_name(SPOT_LIGHT_NAME).and_then(|o| o.as_light()).unwrap();
        let LightKind::Spot(spot) = &spot.kind else {
            panic!("expected a spot light");
        };
        assert_eq!(spot.position, Vector3::new(-10.0, 30.0, 40.0));
        assert_eq!(spot.shadow.map_size, [2048, 2048]);
        assert!(matches!(spot.shadow.camera, ShadowCamera::Perspective { fov, .. } if fov == 15.0));
        assert!(spot.cast_shadow);
        assert_eq!(spot.penumbra, 0.05);

        let ambient = scene.get_object_by_name(AMBIENT_LIGHT_NAME).and_then(|o| o.as_light()).unwrap();
        assert_eq!(ambient.color(), Color::from_hex(0x343434));
    }

    #[test]
    fn test_default_lighting_on_group() {
        let mut pivot = Group::new().with_name("pivot");
        init_default_lighting(&mut pivot, Some(Vector3::new(0.0, 10.0, 0.0)));
        assert_eq!(pivot.children().len(), 2);

        let mut scene = Scene::new();
        scene.add(pivot);
        assert_eq!(scene.lights().len(), 2);
    }

    #[test]
    fn test_default_directional_lighting() {
        let mut scene = Scene::new();
        init_default_directional_lighting(&mut scene, None);
        let lights = scene.lights();
        assert_eq!(lights.len(), 2);

        let LightKind::Directional(light) = &lights[0].kind else {
            panic!("expected a directional light");
        };
        assert_eq!(light.position, Vector3::new(100.0, 200.0, 200.0));
        assert!(light.cast_shadow);
        assert!(matches!(
            light.shadow.camera,
            ShadowCamera::Orthographic { left, right, top, bottom, .. }
                if left == -200.0 && right == 200.0 && top == 200.0 && bottom == -200.0
        ));
    }
}
