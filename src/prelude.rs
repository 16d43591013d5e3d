//! # Scene Inspector Prelude
//!
//! Commonly used types and helpers in one import.
//!
//! ```rust
//! use scene_inspector::prelude::*;
//!
//! let mut scene = Scene::new();
//! let mut panel = Panel::new("Controls");
//! let mut inspector = GeometryInspector::new(MaterialPreset::Standard);
//! inspector
//!     .redraw(&mut scene, &mut panel, || generate_sphere(4.0, 20, 20))
//!     .unwrap();
//! assert_eq!(panel.len(), 2);
//! ```

// Scene description
pub use crate::gfx::camera::{OrbitControls, PerspectiveCamera, TrackballControls};
pub use crate::gfx::color::Color;
pub use crate::gfx::geometry::{
    generate_box, generate_cone, generate_cylinder, generate_plane, generate_sphere, GeometryData,
};
pub use crate::gfx::material::{Material, MaterialKind, SharedMaterial, Side};
pub use crate::gfx::postprocessing::{BloomPass, EffectComposer, GlitchPass, Pass, ShaderPass};
pub use crate::gfx::renderer::RendererSettings;
pub use crate::gfx::scene::{Container, Group, Mesh, ObjectId, Scene};
pub use crate::gfx::texture::TextureLoader;

// Presets
pub use crate::presets::*;

// Control panel
pub use crate::error::{HostError, PanelError};
pub use crate::ui::binder::{
    apply_descriptor, bind_boolean, bind_choice, bind_color, bind_scalar, bind_vector2,
    bind_vector3, create_group, BindingDescriptor, Field, ScalarRange, Shared, Switchable,
    VectorRange,
};
pub use crate::ui::material_settings::{add_basic_material_settings, add_specific_material_settings};
pub use crate::ui::pass_controls::*;
pub use crate::ui::uniforms::{add_shader_control, FloatUniform, ShaderControls, VectorUniform};
pub use crate::ui::{ControlValue, FolderId, Panel, PanelHost, Widget};
