//! # Control Panel Module
//!
//! Typed live controls bound to shared scene state, plus the Dear ImGui
//! glue that draws them.
//!
//! ## Architecture
//!
//! - [`panel`] - Folders of controls, each holding a value and a change callback
//! - [`binder`] - Binds controls to fields of an `Rc<RefCell<T>>` target
//! - [`uniforms`] - Binds controls to the uniforms of a shader pass
//! - [`material_settings`] - Ready-made folders for material flags and parameters
//! - [`pass_controls`] - Ready-made folders for the post-processing passes
//! - [`render`] / [`host`] - Drawing a panel with ImGui inside a winit window
//!
//! ## Usage
//!
//! ```rust
//! use scene_inspector::gfx::material::Material;
//! use scene_inspector::ui::material_settings::add_basic_material_settings;
//! use scene_inspector::ui::panel::{ControlValue, Panel};
//!
//! let material = Material::lambert(0xff0000).into_shared();
//! let mut panel = Panel::new("Controls");
//! let folder = add_basic_material_settings(&mut panel, &material, None).unwrap();
//!
//! panel.set_value(folder, "opacity", ControlValue::Number(0.4)).unwrap();
//! assert_eq!(material.borrow().opacity, 0.4);
//! ```
//!
//! ## Input Handling
//!
//! [`PanelHost::handle_input`] reports whether ImGui captured an event, so
//! camera controls can skip it while the panel is focused.

pub mod binder;
pub mod host;
pub mod material_settings;
pub mod panel;
pub mod pass_controls;
pub mod render;
pub mod uniforms;

// Re-export main types
pub use binder::{apply_descriptor, create_group, BindingDescriptor, Field, Shared};
pub use host::PanelHost;
pub use panel::{Control, ControlValue, Folder, FolderId, Panel, Widget};
pub use uniforms::{add_shader_control, ShaderControls};
