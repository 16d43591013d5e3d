//! # Inspector Walkthrough
//!
//! Builds a scene from the presets, binds material and post-processing
//! folders, then edits a few controls the way the panel UI would and logs
//! what reached the scene. Runs without a window.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example inspector
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use log::info;
use winit::dpi::PhysicalSize;

use scene_inspector::gfx::postprocessing::{UniformValue, Uniforms};
use scene_inspector::prelude::*;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let size = PhysicalSize::new(1280, 720);
    let renderer = init_renderer(size);
    let surface = renderer.surface_configuration(wgpu::TextureFormat::Bgra8UnormSrgb);
    info!(
        "Surface {}x{}, {} samples, shadows {:?}",
        surface.width,
        surface.height,
        renderer.sample_count(),
        renderer.shadow_map.kind
    );

    let mut scene = Scene::new();
    let mut camera = init_camera(&scene, size);
    let orbit = init_controls(&mut camera);
    orbit.dolly(&mut camera, 0.5);
    info!("Camera at {:?}", camera.position);

    add_ground_plane(&mut scene);
    add_house_and_tree(&mut scene);
    let props = add_default_cube_and_sphere(&mut scene);
    init_default_lighting(&mut scene, None);

    let mut panel = Panel::new("Controls");

    // Material of the cube, edited through its folders
    let cube_material = scene
        .mesh(props.cube)
        .map(|mesh| mesh.material().clone())
        .context("cube missing from scene")?;
    let basic = add_basic_material_settings(&mut panel, &cube_material, Some("cube-Material"))?;
    panel.set_value(basic, "opacity", ControlValue::Number(0.4))?;
    panel.set_value(basic, "transparent", ControlValue::Bool(true))?;
    panel.set_value(basic, "side", ControlValue::Choice(Side::Double.index()))?;
    {
        let material = cube_material.borrow();
        info!(
            "Cube material: opacity {}, transparent {}, side {:?}",
            material.opacity, material.transparent, material.side
        );
    }

    // Inspected mesh that is redrawn with another geometry
    let mut inspector = GeometryInspector::new(MaterialPreset::Standard).with_cast_shadow(true);
    inspector.redraw(&mut scene, &mut panel, || generate_box(4.0, 4.0, 4.0))?;
    let (_, specific) = inspector
        .folders()
        .ok_or_else(|| anyhow!("inspector has no folders"))?;
    panel.set_value(specific, "roughness", ControlValue::Number(0.25))?;
    let mesh = inspector.redraw(&mut scene, &mut panel, || generate_sphere(4.0, 20, 20))?;
    if let Some(mesh) = scene.mesh(mesh) {
        let material = mesh.material().borrow();
        info!(
            "Redrawn mesh keeps roughness {:?}, {} folders live",
            material.standard_params().map(|p| p.roughness),
            panel.len()
        );
    }

    // Post-processing chain
    let composer = Rc::new(RefCell::new(EffectComposer::new()));
    let bloom_index = composer.borrow_mut().add_pass(BloomPass::default());
    let glitch_index = composer.borrow_mut().add_pass(GlitchPass::default());

    let film = Rc::new(RefCell::new(ShaderPass::film()));
    let film_settings = Rc::new(RefCell::new(FilmSettings::default()));
    let film_folder = add_film_pass_controls(&mut panel, &film_settings, &film)?;
    panel.set_value(film_folder, "scanlinesCount", ControlValue::Number(900.0))?;
    info!(
        "Film scanlines: {:?}",
        film.borrow().uniforms.value::<f32>("sCount")
    );

    let bloom_settings = Rc::new(RefCell::new(BloomSettings::default()));
    let chain = Rc::clone(&composer);
    let bloom_folder = add_bloom_pass_controls(&mut panel, &bloom_settings, move |pass| {
        chain.borrow_mut().replace_pass(bloom_index, pass);
    })?;
    panel.set_value(bloom_folder, "strength", ControlValue::Number(1.5))?;

    let glitch_settings = Rc::new(RefCell::new(GlitchSettings::default()));
    let chain = Rc::clone(&composer);
    let glitch_folder = add_glitch_pass_controls(&mut panel, &glitch_settings, move |pass| {
        chain.borrow_mut().replace_pass(glitch_index, pass);
    })?;
    panel.set_value(glitch_folder, "dtsize", ControlValue::Number(128.0))?;
    info!("Passes after edits: {:?}", composer.borrow().passes());

    let sepia = Rc::new(RefCell::new(ShaderPass::sepia()));
    let controls = ShaderControls::new()
        .with_enabled(true)
        .float(FloatUniform::new("amount").with_range(0.0, 10.0, 0.1));
    let sepia_folder = add_shader_control(&mut panel, "Sepia", &sepia, &controls)?;
    panel.set_value(sepia_folder, "amount", ControlValue::Number(2.5))?;
    info!(
        "Sepia enabled {}, amount {:?}",
        sepia.borrow().enabled,
        sepia.borrow().uniforms.get("amount")
    );

    // Edits to a removed folder are rejected
    panel.remove_folder(sepia_folder);
    info!(
        "Sepia folder removed: {}",
        panel.set_value(sepia_folder, "amount", ControlValue::Number(9.0)).is_err()
    );

    let vignette = Rc::new(RefCell::new(ShaderPass::new(
        "Vignette",
        Uniforms::new()
            .with("offset", UniformValue::Float(1.0))
            .with("darkness", UniformValue::Float(1.0)),
    )));
    let controls = ShaderControls::new()
        .without_toggle()
        .float(FloatUniform::new("offset").with_range(0.0, 2.0, 0.01))
        .float(FloatUniform::new("darkness").with_range(0.0, 3.0, 0.01));
    let vignette_folder = add_shader_control(&mut panel, "Vignette", &vignette, &controls)?;
    panel.set_value(vignette_folder, "darkness", ControlValue::Number(5.0))?;
    info!(
        "Vignette darkness clamped to {:?}",
        vignette.borrow().uniforms.value::<f32>("darkness")
    );

    let stats = scene.statistics();
    info!(
        "Scene: {} meshes, {} lights, {} triangles; panel: {} folders",
        stats.mesh_count,
        stats.light_count,
        stats.total_triangles,
        panel.len()
    );
    Ok(())
}
