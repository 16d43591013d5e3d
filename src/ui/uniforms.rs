//! Panel folders for the uniforms of a shader pass

use cgmath::{Vector2, Vector3};
use log::warn;

use crate::error::PanelError;
use crate::gfx::postprocessing::{ShaderPass, UniformKind};
use crate::ui::binder::{
    apply_descriptor, BindingDescriptor, Field, ScalarRange, Shared, Switchable, VectorRange,
};
use crate::ui::panel::{FolderId, Panel};

impl Switchable for ShaderPass {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl<V: UniformKind + 'static> Field<ShaderPass, V> {
    /// The uniform `key` of a shader pass
    ///
    /// Reads as absent when the uniform is missing, unset or of another kind.
    pub fn uniform(key: impl Into<String>) -> Self {
        let key = key.into();
        let read_key = key.clone();
        let write_key = key.clone();
        Field::new(
            key,
            move |pass: &ShaderPass| pass.uniforms.value::<V>(&read_key),
            move |pass: &mut ShaderPass, value: V| {
                pass.uniforms.set(write_key.clone(), value.into_uniform())
            },
        )
    }
}

/// Float uniform with an optional slider range
///
/// Unset bounds default independently to 0, 1 and 0.01.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatUniform {
    pub key: String,
    pub from: Option<f32>,
    pub to: Option<f32>,
    pub step: Option<f32>,
}

impl FloatUniform {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            from: None,
            to: None,
            step: None,
        }
    }

    pub fn with_range(mut self, from: f32, to: f32, step: f32) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self.step = Some(step);
        self
    }

    pub fn range(&self) -> ScalarRange {
        ScalarRange::new(
            self.from.unwrap_or(0.0),
            self.to.unwrap_or(1.0),
            self.step.unwrap_or(0.01),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VectorUniform<V> {
    pub key: String,
    pub range: VectorRange<V>,
}

/// Which uniforms of a pass to expose
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderControls {
    /// Expose the pass's `enabled` switch
    pub set_enabled: bool,
    /// Value forced onto the pass when `set_enabled` is on
    pub enabled: bool,
    pub floats: Vec<FloatUniform>,
    pub colors: Vec<String>,
    pub vector2: Vec<VectorUniform<Vector2<f32>>>,
    pub vector3: Vec<VectorUniform<Vector3<f32>>>,
    pub booleans: Vec<String>,
}

impl Default for ShaderControls {
    fn default() -> Self {
        Self {
            set_enabled: true,
            enabled: false,
            floats: Vec::new(),
            colors: Vec::new(),
            vector2: Vec::new(),
            vector3: Vec::new(),
            booleans: Vec::new(),
        }
    }
}

impl ShaderControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Leaves the pass's `enabled` switch alone and hides it
    pub fn without_toggle(mut self) -> Self {
        self.set_enabled = false;
        self
    }

    pub fn float(mut self, uniform: FloatUniform) -> Self {
        self.floats.push(uniform);
        self
    }

    pub fn color(mut self, key: impl Into<String>) -> Self {
        self.colors.push(key.into());
        self
    }

    pub fn vector2(mut self, key: impl Into<String>, range: VectorRange<Vector2<f32>>) -> Self {
        self.vector2.push(VectorUniform {
            key: key.into(),
            range,
        });
        self
    }

    pub fn vector3(mut self, key: impl Into<String>, range: VectorRange<Vector3<f32>>) -> Self {
        self.vector3.push(VectorUniform {
            key: key.into(),
            range,
        });
        self
    }

    pub fn boolean(mut self, key: impl Into<String>) -> Self {
        self.booleans.push(key.into());
        self
    }

    /// Binding descriptor over the uniforms of a pass
    pub fn descriptor(&self) -> BindingDescriptor<ShaderPass> {
        let mut descriptor = BindingDescriptor::new();
        if self.set_enabled {
            descriptor = descriptor.with_enabled_toggle(Field::enabled());
        }
        for key in &self.booleans {
            descriptor = descriptor.boolean(Field::uniform(key.as_str()));
        }
        for uniform in &self.floats {
            descriptor = descriptor.scalar(Field::uniform(uniform.key.as_str()), uniform.range());
        }
        for key in &self.colors {
            descriptor = descriptor.color(Field::uniform(key.as_str()));
        }
        for uniform in &self.vector2 {
            descriptor = descriptor.vector2(Field::uniform(uniform.key.as_str()), uniform.range);
        }
        for uniform in &self.vector3 {
            descriptor = descriptor.vector3(Field::uniform(uniform.key.as_str()), uniform.range);
        }
        descriptor
    }
}

/// Creates folder `folder_name` exposing the selected uniforms of `pass`
pub fn add_shader_control(
    panel: &mut Panel,
    folder_name: &str,
    pass: &Shared<ShaderPass>,
    controls: &ShaderControls,
) -> Result<FolderId, PanelError> {
    if controls.set_enabled {
        match pass.try_borrow_mut() {
            Ok(mut pass) => pass.enabled = controls.enabled,
            Err(_) => warn!("Pass for '{}' is busy, enabled flag left as is", folder_name),
        }
    }
    apply_descriptor(panel, folder_name, pass, &controls.descriptor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::color::Color;
    use crate::gfx::postprocessing::{UniformValue, Uniforms};
    use crate::ui::panel::{ControlValue, Widget};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn shared(pass: ShaderPass) -> Shared<ShaderPass> {
        Rc::new(RefCell::new(pass))
    }

    #[test]
    fn test_float_range_defaults_are_independent() {
        let mut uniform = FloatUniform::new("amount");
        assert_eq!(uniform.range(), ScalarRange::new(0.0, 1.0, 0.01));

        uniform.to = Some(10.0);
        assert_eq!(uniform.range(), ScalarRange::new(0.0, 10.0, 0.01));

        uniform.from = Some(2.0);
        assert_eq!(uniform.range(), ScalarRange::new(2.0, 10.0, 0.01));
    }

    #[test]
    fn test_enabled_toggle_forces_flag() {
        let pass = shared(ShaderPass::sepia());
        let mut panel = Panel::new("Controls");
        let controls = ShaderControls::new().float(FloatUniform::new("amount").with_range(0.0, 10.0, 0.1));

        let id = add_shader_control(&mut panel, "Sepia", &pass, &controls).unwrap();
        assert!(!pass.borrow().enabled);
        assert_eq!(panel.value(id, "enabled"), Some(&ControlValue::Bool(false)));
        assert_eq!(panel.value(id, "amount"), Some(&ControlValue::Number(1.0)));

        panel.set_value(id, "enabled", ControlValue::Bool(true)).unwrap();
        panel.set_value(id, "amount", ControlValue::Number(4.5)).unwrap();
        assert!(pass.borrow().enabled);
        assert_eq!(pass.borrow().uniforms.value::<f32>("amount"), Some(4.5));
    }

    #[test]
    fn test_without_toggle_keeps_pass_enabled() {
        let pass = shared(ShaderPass::colorify());
        let mut panel = Panel::new("Controls");
        let controls = ShaderControls::new().without_toggle().color("color");

        let id = add_shader_control(&mut panel, "Colorify", &pass, &controls).unwrap();
        assert!(pass.borrow().enabled);
        assert!(panel.value(id, "enabled").is_none());

        panel
            .set_value(id, "color", ControlValue::Color([255.0, 0.0, 0.0]))
            .unwrap();
        assert_eq!(
            pass.borrow().uniforms.value::<Color>("color"),
            Some(Color::new(1.0, 0.0, 0.0))
        );
    }

    #[test]
    fn test_vector_uniforms_use_per_axis_ranges() {
        let mut uniforms = Uniforms::new();
        uniforms.declare("direction");
        let pass = shared(ShaderPass::new("Custom", uniforms.with("flip", UniformValue::Bool(true))));
        let mut panel = Panel::new("Controls");
        let range = VectorRange::new(
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(1.0, 1.0, 10.0),
            Vector3::new(0.01, 0.1, 1.0),
        );
        let controls = ShaderControls::new()
            .vector3("direction", range)
            .boolean("flip")
            .boolean("mirror");

        let id = add_shader_control(&mut panel, "Custom", &pass, &controls).unwrap();
        let folder = panel.folder(id).unwrap();
        assert_eq!(folder.len(), 6);
        assert_eq!(
            folder.control("direction_z").unwrap().widget(),
            &Widget::slider(0.0, 10.0, Some(1.0))
        );
        assert_eq!(panel.value(id, "flip"), Some(&ControlValue::Bool(true)));
        assert_eq!(panel.value(id, "mirror"), Some(&ControlValue::Bool(false)));
        assert_eq!(panel.value(id, "direction_x"), Some(&ControlValue::Number(0.0)));

        panel
            .set_value(id, "direction_z", ControlValue::Number(4.0))
            .unwrap();
        assert_eq!(
            pass.borrow().uniforms.value::<Vector3<f32>>("direction"),
            Some(Vector3::new(0.0, 0.0, 4.0))
        );
    }
}
