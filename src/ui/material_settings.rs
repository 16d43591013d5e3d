//! Material folders
//!
//! [`add_basic_material_settings`] exposes the flags every material has,
//! [`add_specific_material_settings`] the parameters of its shading model.

use log::debug;

use crate::error::PanelError;
use crate::gfx::color::Color;
use crate::gfx::material::{Material, MaterialKind, SharedMaterial, Side, VertexColors};
use crate::ui::binder::{bind_boolean, bind_choice, bind_color, bind_scalar, Field, ScalarRange};
use crate::ui::panel::{ControlValue, FolderId, Panel, Widget};

pub const DEFAULT_BASIC_FOLDER: &str = "Material";

fn flag(
    name: &str,
    get: fn(&Material) -> bool,
    set: fn(&mut Material, bool),
) -> Field<Material, bool> {
    Field::new(name, move |m: &Material| Some(get(m)), set)
}

/// Folder with the settings shared by every material
///
/// `name` defaults to `"Material"`.
pub fn add_basic_material_settings(
    panel: &mut Panel,
    material: &SharedMaterial,
    name: Option<&str>,
) -> Result<FolderId, PanelError> {
    let folder = panel.add_folder(name.unwrap_or(DEFAULT_BASIC_FOLDER))?;

    {
        let m = material.borrow();
        folder.add("id", Widget::Label, ControlValue::Text(m.id().to_string()));
        folder.add("uuid", Widget::Label, ControlValue::Text(m.uuid().to_string()));
        folder.add("name", Widget::Label, ControlValue::Text(m.name.clone()));
    }

    bind_scalar(
        folder,
        Field::new("opacity", |m: &Material| Some(m.opacity), |m, v| m.opacity = v),
        material,
        ScalarRange::UNIT,
        1.0,
    );
    bind_boolean(
        folder,
        flag("transparent", |m| m.transparent, |m, v| m.transparent = v),
        material,
        false,
    );
    bind_scalar(
        folder,
        Field::new("overdraw", |m: &Material| Some(m.overdraw), |m, v| m.overdraw = v),
        material,
        ScalarRange::UNIT,
        0.0,
    );
    bind_boolean(folder, flag("visible", |m| m.visible, |m, v| m.visible = v), material, true);
    bind_choice(
        folder,
        Field::new(
            "side",
            |m: &Material| Some(m.side.index()),
            |m, index| {
                if let Some(side) = Side::from_index(index) {
                    m.side = side;
                }
            },
        ),
        material,
        &Side::ALL.map(Side::label),
        0,
    );
    bind_boolean(
        folder,
        flag("colorWrite", |m| m.color_write, |m, v| m.color_write = v),
        material,
        true,
    );
    bind_boolean(
        folder,
        flag("flatShading", |m| m.flat_shading, |m, v| {
            m.flat_shading = v;
            m.needs_update = true;
        }),
        material,
        false,
    );
    bind_boolean(
        folder,
        flag("premultipliedAlpha", |m| m.premultiplied_alpha, |m, v| {
            m.premultiplied_alpha = v
        }),
        material,
        false,
    );
    bind_boolean(folder, flag("dithering", |m| m.dithering, |m, v| m.dithering = v), material, false);
    bind_choice(
        folder,
        Field::new(
            "shadowSide",
            |m: &Material| Some(m.shadow_side.unwrap_or(Side::Front).index()),
            |m, index| {
                if let Some(side) = Side::from_index(index) {
                    m.shadow_side = Some(side);
                }
            },
        ),
        material,
        &Side::ALL.map(Side::label),
        0,
    );
    bind_choice(
        folder,
        Field::new(
            "vertexColors",
            |m: &Material| Some(m.vertex_colors.index()),
            |m, index| {
                if let Some(colors) = VertexColors::from_index(index) {
                    m.vertex_colors = colors;
                }
            },
        ),
        material,
        &VertexColors::ALL.map(VertexColors::label),
        0,
    );
    bind_boolean(folder, flag("fog", |m| m.fog, |m, v| m.fog = v), material, true);

    debug!("Basic material settings in '{}'", folder.name());
    Ok(folder.id())
}

/// Folder with the parameters of the material's shading model
///
/// `name` defaults to the kind's type name. Kinds without specific
/// parameters get an empty folder.
pub fn add_specific_material_settings(
    panel: &mut Panel,
    material: &SharedMaterial,
    name: Option<&str>,
) -> Result<FolderId, PanelError> {
    let kind = material.borrow().kind();
    let folder = panel.add_folder(name.unwrap_or(kind.type_name()))?;

    match kind {
        MaterialKind::Normal => {
            bind_boolean(folder, wireframe(), material, false);
        }
        MaterialKind::Phong => {
            bind_color(
                folder,
                Field::new(
                    "specular",
                    |m: &Material| m.phong_params().map(|p| p.specular),
                    |m, color| {
                        if let Some(params) = m.phong_params_mut() {
                            params.specular = color;
                        }
                    },
                ),
                material,
                Color::from_hex(0x111111),
            );
            bind_scalar(
                folder,
                Field::new(
                    "shininess",
                    |m: &Material| m.phong_params().map(|p| p.shininess),
                    |m, v| {
                        if let Some(params) = m.phong_params_mut() {
                            params.shininess = v;
                        }
                    },
                ),
                material,
                ScalarRange::new(0.0, 100.0, 0.01),
                30.0,
            );
        }
        MaterialKind::Standard => {
            bind_color(
                folder,
                Field::new("color", |m: &Material| Some(m.color), |m, v| m.color = v),
                material,
                Color::WHITE,
            );
            bind_color(
                folder,
                Field::new("emissive", |m: &Material| Some(m.emissive), |m, v| m.emissive = v),
                material,
                Color::BLACK,
            );
            bind_scalar(
                folder,
                Field::new(
                    "metalness",
                    |m: &Material| m.standard_params().map(|p| p.metalness),
                    |m, v| {
                        if let Some(params) = m.standard_params_mut() {
                            params.metalness = v;
                        }
                    },
                ),
                material,
                ScalarRange::UNIT,
                0.0,
            );
            bind_scalar(
                folder,
                Field::new(
                    "roughness",
                    |m: &Material| m.standard_params().map(|p| p.roughness),
                    |m, v| {
                        if let Some(params) = m.standard_params_mut() {
                            params.roughness = v;
                        }
                    },
                ),
                material,
                ScalarRange::UNIT,
                1.0,
            );
            bind_boolean(folder, wireframe(), material, false);
        }
        MaterialKind::Basic | MaterialKind::Lambert => {
            debug!("No specific settings for {}", kind.type_name());
        }
    }

    Ok(folder.id())
}

fn wireframe() -> Field<Material, bool> {
    flag("wireframe", |m| m.wireframe, |m, v| m.wireframe = v)
}
