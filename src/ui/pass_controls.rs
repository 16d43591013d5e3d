//! Folders for the stock post-processing passes
//!
//! Film, bloom, dot-screen and glitch folders edit a settings struct owned by
//! the caller. Every edit pushes the whole struct to the pass, or hands a
//! rebuilt pass to the caller for passes that cannot be changed in place.
//! Edits stop reaching the pass once the settings are dropped.

use std::cell::RefCell;
use std::f32::consts::PI;
use std::rc::{Rc, Weak};

use cgmath::Vector2;
use log::warn;

use crate::error::PanelError;
use crate::gfx::color::Color;
use crate::gfx::postprocessing::{BloomPass, GlitchPass, ShaderPass, UniformValue};
use crate::ui::binder::{bind_boolean, bind_color, bind_scalar, Field, ScalarRange, Shared};
use crate::ui::panel::{FolderId, Panel};

/// Writes into a pass if it is still alive and not borrowed
fn update_pass(pass: &Weak<RefCell<ShaderPass>>, update: impl FnOnce(&mut ShaderPass)) {
    let Some(pass) = pass.upgrade() else {
        return;
    };
    match pass.try_borrow_mut() {
        Ok(mut pass) => update(&mut *pass),
        Err(_) => warn!("Pass is busy, skipping update"),
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilmSettings {
    pub gray_scale: bool,
    pub noise_intensity: f32,
    pub scanlines_intensity: f32,
    pub scanlines_count: f32,
}

impl Default for FilmSettings {
    fn default() -> Self {
        Self {
            gray_scale: false,
            noise_intensity: 0.8,
            scanlines_intensity: 0.325,
            scanlines_count: 256.0,
        }
    }
}

impl FilmSettings {
    /// Copies the settings into the film pass uniforms
    pub fn apply(&self, pass: &mut ShaderPass) {
        pass.uniforms.set("grayscale", UniformValue::Bool(self.gray_scale));
        pass.uniforms.set("nIntensity", UniformValue::Float(self.noise_intensity));
        pass.uniforms.set("sIntensity", UniformValue::Float(self.scanlines_intensity));
        pass.uniforms.set("sCount", UniformValue::Float(self.scanlines_count));
    }
}

/// Folder "FilmPass"
pub fn add_film_pass_controls(
    panel: &mut Panel,
    settings: &Shared<FilmSettings>,
    pass: &Shared<ShaderPass>,
) -> Result<FolderId, PanelError> {
    let weak = Rc::downgrade(pass);
    let push = move |s: &mut FilmSettings| update_pass(&weak, |pass| s.apply(pass));
    let folder = panel.add_folder("FilmPass")?;

    bind_boolean(
        folder,
        Field::new("grayScale", |s: &FilmSettings| Some(s.gray_scale), |s, v| s.gray_scale = v)
            .and_then(push.clone()),
        settings,
        false,
    );
    bind_scalar(
        folder,
        Field::new(
            "noiseIntensity",
            |s: &FilmSettings| Some(s.noise_intensity),
            |s, v| s.noise_intensity = v,
        )
        .and_then(push.clone()),
        settings,
        ScalarRange::UNIT,
        0.8,
    );
    bind_scalar(
        folder,
        Field::new(
            "scanlinesIntensity",
            |s: &FilmSettings| Some(s.scanlines_intensity),
            |s, v| s.scanlines_intensity = v,
        )
        .and_then(push.clone()),
        settings,
        ScalarRange::UNIT,
        0.325,
    );
    bind_scalar(
        folder,
        Field::new(
            "scanlinesCount",
            |s: &FilmSettings| Some(s.scanlines_count),
            |s, v| s.scanlines_count = v,
        )
        .and_then(push),
        settings,
        ScalarRange::new(0.0, 500.0, 1.0),
        256.0,
    );

    Ok(folder.id())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomSettings {
    pub strength: f32,
    pub kernel_size: f32,
    pub sigma: f32,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self {
            strength: 3.0,
            kernel_size: 25.0,
            sigma: 5.0,
        }
    }
}

impl BloomSettings {
    pub fn to_pass(&self) -> BloomPass {
        BloomPass::new(self.strength, self.kernel_size.round() as u32, self.sigma)
    }
}

/// Folder "BloomPass"; every edit hands a rebuilt pass to `on_update`
pub fn add_bloom_pass_controls(
    panel: &mut Panel,
    settings: &Shared<BloomSettings>,
    on_update: impl Fn(BloomPass) + 'static,
) -> Result<FolderId, PanelError> {
    let on_update = Rc::new(on_update);
    let rebuild = move |s: &mut BloomSettings| on_update(s.to_pass());
    let folder = panel.add_folder("BloomPass")?;

    bind_scalar(
        folder,
        Field::new("strength", |s: &BloomSettings| Some(s.strength), |s, v| s.strength = v)
            .and_then(rebuild.clone()),
        settings,
        ScalarRange::new(0.0, 5.0, 0.01),
        3.0,
    );
    bind_scalar(
        folder,
        Field::new("kernelSize", |s: &BloomSettings| Some(s.kernel_size), |s, v| s.kernel_size = v)
            .and_then(rebuild.clone()),
        settings,
        ScalarRange::new(10.0, 100.0, 1.0),
        25.0,
    );
    bind_scalar(
        folder,
        Field::new("sigma", |s: &BloomSettings| Some(s.sigma), |s, v| s.sigma = v)
            .and_then(rebuild),
        settings,
        ScalarRange::new(1.0, 8.0, 0.1),
        5.0,
    );

    Ok(folder.id())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotScreenSettings {
    pub center_x: f32,
    pub center_y: f32,
    pub angle: f32,
    pub scale: f32,
}

impl Default for DotScreenSettings {
    fn default() -> Self {
        Self {
            center_x: 0.5,
            center_y: 0.5,
            angle: 1.0,
            scale: 1.0,
        }
    }
}

impl DotScreenSettings {
    pub fn apply(&self, pass: &mut ShaderPass) {
        pass.uniforms.set(
            "center",
            UniformValue::Vec2(Vector2::new(self.center_x, self.center_y)),
        );
        pass.uniforms.set("angle", UniformValue::Float(self.angle));
        pass.uniforms.set("scale", UniformValue::Float(self.scale));
    }
}

/// Folder "DotScreenPass"
pub fn add_dot_screen_pass_controls(
    panel: &mut Panel,
    settings: &Shared<DotScreenSettings>,
    pass: &Shared<ShaderPass>,
) -> Result<FolderId, PanelError> {
    let weak = Rc::downgrade(pass);
    let push = move |s: &mut DotScreenSettings| update_pass(&weak, |pass| s.apply(pass));
    let folder = panel.add_folder("DotScreenPass")?;

    let center = ScalarRange::new(0.0, 5.0, 0.01);
    bind_scalar(
        folder,
        Field::new("centerX", |s: &DotScreenSettings| Some(s.center_x), |s, v| s.center_x = v)
            .and_then(push.clone()),
        settings,
        center,
        0.5,
    );
    bind_scalar(
        folder,
        Field::new("centerY", |s: &DotScreenSettings| Some(s.center_y), |s, v| s.center_y = v)
            .and_then(push.clone()),
        settings,
        center,
        0.5,
    );
    bind_scalar(
        folder,
        Field::new("angle", |s: &DotScreenSettings| Some(s.angle), |s, v| s.angle = v)
            .and_then(push.clone()),
        settings,
        ScalarRange::new(0.0, PI, 0.01),
        1.0,
    );
    bind_scalar(
        folder,
        Field::new("scale", |s: &DotScreenSettings| Some(s.scale), |s, v| s.scale = v)
            .and_then(push),
        settings,
        ScalarRange::continuous(0.0, 10.0),
        1.0,
    );

    Ok(folder.id())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitchSettings {
    pub dt_size: f32,
}

impl Default for GlitchSettings {
    fn default() -> Self {
        Self { dt_size: 64.0 }
    }
}

/// Folder "GlitchPass"; every edit hands a rebuilt pass to `on_update`
pub fn add_glitch_pass_controls(
    panel: &mut Panel,
    settings: &Shared<GlitchSettings>,
    on_update: impl Fn(GlitchPass) + 'static,
) -> Result<FolderId, PanelError> {
    let folder = panel.add_folder("GlitchPass")?;
    bind_scalar(
        folder,
        Field::new("dtsize", |s: &GlitchSettings| Some(s.dt_size), |s, v| s.dt_size = v)
            .and_then(move |s| on_update(GlitchPass::new(s.dt_size as u32))),
        settings,
        ScalarRange::continuous(0.0, 1024.0),
        64.0,
    );
    Ok(folder.id())
}

/// Folder "SepiaShader" editing the pass's `amount` uniform
pub fn add_sepia_shader_controls(
    panel: &mut Panel,
    pass: &Shared<ShaderPass>,
) -> Result<FolderId, PanelError> {
    let folder = panel.add_folder("SepiaShader")?;
    bind_scalar(
        folder,
        Field::uniform("amount"),
        pass,
        ScalarRange::new(0.0, 10.0, 0.1),
        1.0,
    );
    Ok(folder.id())
}

/// Folder "ColorifyShader" editing the pass's `color` uniform
pub fn add_colorify_shader_controls(
    panel: &mut Panel,
    pass: &Shared<ShaderPass>,
) -> Result<FolderId, PanelError> {
    let folder = panel.add_folder("ColorifyShader")?;
    bind_color(folder, Field::uniform("color"), pass, Color::WHITE);
    Ok(folder.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panel::ControlValue;

    fn shared<T>(value: T) -> Shared<T> {
        Rc::new(RefCell::new(value))
    }

    #[test]
    fn test_film_edit_pushes_all_settings() {
        let pass = shared(ShaderPass::film());
        let settings = shared(FilmSettings::default());
        let mut panel = Panel::new("Controls");
        let id = add_film_pass_controls(&mut panel, &settings, &pass).unwrap();

        assert_eq!(panel.value(id, "scanlinesCount"), Some(&ControlValue::Number(256.0)));
        panel.set_value(id, "grayScale", ControlValue::Bool(true)).unwrap();

        let pass = pass.borrow();
        assert_eq!(pass.uniforms.value::<bool>("grayscale"), Some(true));
        assert_eq!(pass.uniforms.value::<f32>("nIntensity"), Some(0.8));
        assert_eq!(pass.uniforms.value::<f32>("sIntensity"), Some(0.325));
        assert_eq!(pass.uniforms.value::<f32>("sCount"), Some(256.0));
    }

    #[test]
    fn test_bloom_edit_rebuilds_pass() {
        let settings = shared(BloomSettings::default());
        let latest = Rc::new(RefCell::new(None));
        let sink = latest.clone();
        let mut panel = Panel::new("Controls");
        let id = add_bloom_pass_controls(&mut panel, &settings, move |pass| {
            *sink.borrow_mut() = Some(pass)
        })
        .unwrap();

        panel.set_value(id, "kernelSize", ControlValue::Number(40.0)).unwrap();
        assert_eq!(*latest.borrow(), Some(BloomPass::new(3.0, 40, 5.0)));

        panel.set_value(id, "strength", ControlValue::Number(9.0)).unwrap();
        assert_eq!(*latest.borrow(), Some(BloomPass::new(5.0, 40, 5.0)));
    }

    #[test]
    fn test_film_edit_skips_busy_or_dropped_pass() {
        let pass = shared(ShaderPass::film());
        let settings = shared(FilmSettings::default());
        let mut panel = Panel::new("Controls");
        let id = add_film_pass_controls(&mut panel, &settings, &pass).unwrap();

        {
            let _reading = pass.borrow();
            panel.set_value(id, "scanlinesCount", ControlValue::Number(300.0)).unwrap();
        }
        assert_eq!(settings.borrow().scanlines_count, 300.0);
        assert_eq!(pass.borrow().uniforms.value::<f32>("sCount"), Some(4096.0));

        panel.set_value(id, "scanlinesCount", ControlValue::Number(400.0)).unwrap();
        assert_eq!(pass.borrow().uniforms.value::<f32>("sCount"), Some(400.0));

        drop(pass);
        panel.set_value(id, "scanlinesCount", ControlValue::Number(100.0)).unwrap();
        assert_eq!(settings.borrow().scanlines_count, 100.0);
    }

    #[test]
    fn test_dot_screen_pushes_center() {
        let pass = shared(ShaderPass::dot_screen());
        let settings = shared(DotScreenSettings::default());
        let mut panel = Panel::new("Controls");
        let id = add_dot_screen_pass_controls(&mut panel, &settings, &pass).unwrap();

        panel.set_value(id, "centerY", ControlValue::Number(2.0)).unwrap();
        let pass = pass.borrow();
        assert_eq!(
            pass.uniforms.value::<Vector2<f32>>("center"),
            Some(Vector2::new(0.5, 2.0))
        );
        assert_eq!(pass.uniforms.value::<f32>("angle"), Some(1.0));
    }

    #[test]
    fn test_glitch_edit_rebuilds_pass() {
        let settings = shared(GlitchSettings::default());
        let latest = Rc::new(RefCell::new(None));
        let sink = latest.clone();
        let mut panel = Panel::new("Controls");
        let id = add_glitch_pass_controls(&mut panel, &settings, move |pass| {
            *sink.borrow_mut() = Some(pass)
        })
        .unwrap();

        panel.set_value(id, "dtsize", ControlValue::Number(128.0)).unwrap();
        assert_eq!(*latest.borrow(), Some(GlitchPass::new(128)));
    }

    #[test]
    fn test_shader_folders_edit_uniforms() {
        let sepia = shared(ShaderPass::sepia());
        let colorify = shared(ShaderPass::colorify());
        let mut panel = Panel::new("Controls");
        let sepia_id = add_sepia_shader_controls(&mut panel, &sepia).unwrap();
        let colorify_id = add_colorify_shader_controls(&mut panel, &colorify).unwrap();

        panel.set_value(sepia_id, "amount", ControlValue::Number(3.5)).unwrap();
        panel
            .set_value(colorify_id, "color", ControlValue::Color([0.0, 0.0, 255.0]))
            .unwrap();
        assert_eq!(sepia.borrow().uniforms.value::<f32>("amount"), Some(3.5));
        assert_eq!(
            colorify.borrow().uniforms.value::<Color>("color"),
            Some(Color::new(0.0, 0.0, 1.0))
        );
        assert!(add_sepia_shader_controls(&mut panel, &sepia).is_err());
    }
}
