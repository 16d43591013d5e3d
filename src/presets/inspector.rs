//! Meshes whose materials are editable from a panel
//!
//! [`GeometryInspector`] keeps a single mesh in the scene together with its
//! two material folders, and swaps both when the geometry is redrawn.

use log::{debug, warn};

use crate::error::PanelError;
use crate::gfx::geometry::GeometryData;
use crate::gfx::material::{Material, MaterialKind, SharedMaterial, Side};
use crate::gfx::scene::{Container, Mesh, ObjectId};
use crate::gfx::texture::Texture;
use crate::ui::material_settings::{add_basic_material_settings, add_specific_material_settings};
use crate::ui::panel::{FolderId, Panel};

/// Textured standard-material mesh with its material folders
///
/// The folders are named `{name}-Material` and `{name}-MeshStandardMaterial`.
pub fn add_geometry(
    scene: &mut impl Container,
    panel: &mut Panel,
    geometry: GeometryData,
    name: &str,
    texture: Texture,
) -> Result<ObjectId, PanelError> {
    let material = Material::standard(0xffffff)
        .with_map(texture)
        .with_metalness(0.2)
        .with_roughness(0.07)
        .into_shared();
    add_geometry_with_material(scene, panel, geometry, name, material)
}

/// Shadow-casting mesh drawing with `material`, plus its material folders
///
/// Folders are named `{name}-Material` and `{name}-{type name}`. Nothing is
/// added to the scene if either folder cannot be created.
pub fn add_geometry_with_material(
    scene: &mut impl Container,
    panel: &mut Panel,
    geometry: GeometryData,
    name: &str,
    material: SharedMaterial,
) -> Result<ObjectId, PanelError> {
    let basic_name = format!("{}-Material", name);
    let specific_name = format!("{}-{}", name, material.borrow().kind().type_name());

    add_material_folders(panel, &material, Some(&basic_name), Some(&specific_name))?;

    let mut mesh = Mesh::with_shared_material(geometry, material).with_name(name);
    mesh.cast_shadow = true;
    Ok(scene.add(mesh))
}

/// Builds a mesh with a standard material
///
/// `material` is reused when it is already a standard material, otherwise a
/// new red double-sided one is created.
pub fn apply_mesh_standard_material(
    geometry: GeometryData,
    material: Option<SharedMaterial>,
) -> Mesh {
    let material = reuse_or(material, MaterialKind::Standard, || {
        Material::standard(0xff0000).with_side(Side::Double)
    });
    Mesh::with_shared_material(geometry, material)
}

/// Builds a mesh with a normal material
///
/// `material` is reused when it is already a normal material, otherwise a new
/// double-sided one is created.
pub fn apply_mesh_normal_material(geometry: GeometryData, material: Option<SharedMaterial>) -> Mesh {
    let material = reuse_or(material, MaterialKind::Normal, || {
        Material::normal().with_side(Side::Double)
    });
    Mesh::with_shared_material(geometry, material)
}

/// Basic and specific folders for `material`, or neither
fn add_material_folders(
    panel: &mut Panel,
    material: &SharedMaterial,
    basic_name: Option<&str>,
    specific_name: Option<&str>,
) -> Result<(FolderId, FolderId), PanelError> {
    let basic = add_basic_material_settings(panel, material, basic_name)?;
    match add_specific_material_settings(panel, material, specific_name) {
        Ok(specific) => Ok((basic, specific)),
        Err(err) => {
            panel.remove_folder(basic);
            Err(err)
        }
    }
}

fn reuse_or(
    material: Option<SharedMaterial>,
    kind: MaterialKind,
    create: impl FnOnce() -> Material,
) -> SharedMaterial {
    match material {
        Some(material) if material.borrow().kind() == kind => material,
        _ => create().into_shared(),
    }
}

/// Material applied by [`GeometryInspector::redraw`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaterialPreset {
    #[default]
    Standard,
    Normal,
}

impl MaterialPreset {
    pub const ALL: [MaterialPreset; 2] = [MaterialPreset::Standard, MaterialPreset::Normal];

    pub fn label(self) -> &'static str {
        match self {
            MaterialPreset::Standard => "applyMeshStandardMaterial",
            MaterialPreset::Normal => "applyMeshNormalMaterial",
        }
    }

    pub fn apply(self, geometry: GeometryData, material: Option<SharedMaterial>) -> Mesh {
        match self {
            MaterialPreset::Standard => apply_mesh_standard_material(geometry, material),
            MaterialPreset::Normal => apply_mesh_normal_material(geometry, material),
        }
    }
}

/// One inspected mesh and its material folders
#[derive(Debug, Default)]
pub struct GeometryInspector {
    pub preset: MaterialPreset,
    pub cast_shadow: bool,
    mesh: Option<ObjectId>,
    basic_folder: Option<FolderId>,
    specific_folder: Option<FolderId>,
}

impl GeometryInspector {
    pub fn new(preset: MaterialPreset) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    /// Builder pattern: shadow casting of redrawn meshes
    pub fn with_cast_shadow(mut self, cast_shadow: bool) -> Self {
        self.cast_shadow = cast_shadow;
        self
    }

    pub fn mesh(&self) -> Option<ObjectId> {
        self.mesh
    }

    /// Basic and specific material folder, once drawn
    pub fn folders(&self) -> Option<(FolderId, FolderId)> {
        self.basic_folder.zip(self.specific_folder)
    }

    /// Replaces the inspected mesh with one built from `geometry`
    ///
    /// The old folders are removed before the new ones are created, so their
    /// callbacks can no longer reach the previous material. The previous
    /// material carries over when the preset accepts it. If the new folders
    /// cannot be created the scene keeps the old mesh, and its folders are
    /// recreated when their names are still free.
    pub fn redraw(
        &mut self,
        scene: &mut impl Container,
        panel: &mut Panel,
        geometry: impl FnOnce() -> GeometryData,
    ) -> Result<ObjectId, PanelError> {
        for folder in [self.specific_folder.take(), self.basic_folder.take()]
            .into_iter()
            .flatten()
        {
            panel.remove_folder(folder);
        }

        let previous = self
            .mesh
            .and_then(|id| scene.mesh(id))
            .map(|mesh| mesh.material().clone());

        let mut mesh = self.preset.apply(geometry(), previous.clone());
        mesh.cast_shadow = self.cast_shadow;
        let material = mesh.material().clone();

        let (basic, specific) = match add_material_folders(panel, &material, None, None) {
            Ok(folders) => folders,
            Err(err) => {
                warn!("Redraw failed, keeping the previous mesh: {}", err);
                if let Some((basic, specific)) = previous
                    .and_then(|previous| add_material_folders(panel, &previous, None, None).ok())
                {
                    self.basic_folder = Some(basic);
                    self.specific_folder = Some(specific);
                }
                return Err(err);
            }
        };

        if let Some(old) = self.mesh.take() {
            scene.remove(old);
        }
        let id = scene.add(mesh);
        self.mesh = Some(id);
        self.basic_folder = Some(basic);
        self.specific_folder = Some(specific);
        debug!("Redrew {} with {}", id, self.preset.label());
        Ok(id)
    }
}
