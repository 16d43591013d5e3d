//! Material definitions
//!
//! Materials carry the shading model specific parameters plus the common render
//! flags every inspector exposes. Materials are shared between meshes and
//! control panels through [`SharedMaterial`].

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use cgmath::Vector2;

use crate::gfx::{color::Color, texture::Texture};

/// Material shared between meshes and the panels editing it
pub type SharedMaterial = Rc<RefCell<Material>>;

static NEXT_MATERIAL_ID: AtomicU32 = AtomicU32::new(0);

/// Which faces are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

impl Side {
    pub const ALL: [Side; 3] = [Side::Front, Side::Back, Side::Double];

    pub fn label(self) -> &'static str {
        match self {
            Side::Front => "FrontSide",
            Side::Back => "BackSide",
            Side::Double => "DoubleSide",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Side> {
        Self::ALL.get(index).copied()
    }

    /// Face culling for a pipeline using this side
    pub fn cull_mode(self) -> Option<wgpu::Face> {
        match self {
            Side::Front => Some(wgpu::Face::Back),
            Side::Back => Some(wgpu::Face::Front),
            Side::Double => None,
        }
    }
}

/// Source of per-vertex color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexColors {
    #[default]
    None,
    Face,
    Vertex,
}

impl VertexColors {
    pub const ALL: [VertexColors; 3] = [VertexColors::None, VertexColors::Face, VertexColors::Vertex];

    pub fn label(self) -> &'static str {
        match self {
            VertexColors::None => "NoColors",
            VertexColors::Face => "FaceColors",
            VertexColors::Vertex => "VertexColors",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<VertexColors> {
        Self::ALL.get(index).copied()
    }
}

/// Shading model of a material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    Basic,
    Lambert,
    Phong,
    Standard,
    Normal,
}

impl MaterialKind {
    /// Conventional type name, used as the default panel folder name
    pub fn type_name(self) -> &'static str {
        match self {
            MaterialKind::Basic => "MeshBasicMaterial",
            MaterialKind::Lambert => "MeshLambertMaterial",
            MaterialKind::Phong => "MeshPhongMaterial",
            MaterialKind::Standard => "MeshStandardMaterial",
            MaterialKind::Normal => "MeshNormalMaterial",
        }
    }
}

/// Blinn-Phong parameters
#[derive(Debug, Clone, PartialEq)]
pub struct PhongParams {
    pub specular: Color,
    pub shininess: f32,
    pub specular_map: Option<Texture>,
}

impl Default for PhongParams {
    fn default() -> Self {
        Self {
            specular: Color::from_hex(0x111111),
            shininess: 30.0,
            specular_map: None,
        }
    }
}

/// Metal/roughness parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardParams {
    pub metalness: f32,
    pub roughness: f32,
}

impl Default for StandardParams {
    fn default() -> Self {
        Self {
            metalness: 0.0,
            roughness: 1.0,
        }
    }
}

/// Shading model specific data
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialParams {
    Basic,
    Lambert,
    Phong(PhongParams),
    Standard(StandardParams),
    Normal,
}

/// GPU uniform data for materials
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub base_color: [f32; 4],
    pub emissive: [f32; 3],
    pub metallic: f32,
    pub specular: [f32; 3],
    pub roughness: f32,
    pub normal_scale: [f32; 2],
    pub shininess: f32,
    pub flags: u32,
}

impl MaterialUniform {
    pub const FLAG_FLAT_SHADING: u32 = 1;
    pub const FLAG_WIREFRAME: u32 = 1 << 1;
    pub const FLAG_FOG: u32 = 1 << 2;
    pub const FLAG_PREMULTIPLIED_ALPHA: u32 = 1 << 3;
}

/// Material definition
///
/// Every material gets a process-unique `id` and a random `uuid` at creation.
/// Clones keep both.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    id: u32,
    uuid: String,
    pub name: String,
    pub params: MaterialParams,

    pub color: Color,
    pub emissive: Color,
    pub map: Option<Texture>,
    pub normal_map: Option<Texture>,
    pub normal_scale: Vector2<f32>,

    pub opacity: f32,
    pub transparent: bool,
    pub overdraw: f32,
    pub visible: bool,
    pub side: Side,
    pub shadow_side: Option<Side>,
    pub vertex_colors: VertexColors,
    pub color_write: bool,
    pub flat_shading: bool,
    pub premultiplied_alpha: bool,
    pub dithering: bool,
    pub fog: bool,
    pub wireframe: bool,
    /// Set when a change requires the pipeline to be rebuilt
    pub needs_update: bool,
}

impl Material {
    /// Creates a material with the given shading model and default flags
    pub fn new(params: MaterialParams) -> Self {
        Self {
            id: NEXT_MATERIAL_ID.fetch_add(1, Ordering::Relaxed),
            uuid: generate_uuid(),
            name: String::new(),
            params,
            color: Color::WHITE,
            emissive: Color::BLACK,
            map: None,
            normal_map: None,
            normal_scale: Vector2::new(1.0, 1.0),
            opacity: 1.0,
            transparent: false,
            overdraw: 0.0,
            visible: true,
            side: Side::Front,
            shadow_side: None,
            vertex_colors: VertexColors::None,
            color_write: true,
            flat_shading: false,
            premultiplied_alpha: false,
            dithering: false,
            fog: true,
            wireframe: false,
            needs_update: false,
        }
    }

    pub fn basic(color: u32) -> Self {
        Self::new(MaterialParams::Basic).with_color(color)
    }

    pub fn lambert(color: u32) -> Self {
        Self::new(MaterialParams::Lambert).with_color(color)
    }

    pub fn phong(color: u32) -> Self {
        Self::new(MaterialParams::Phong(PhongParams::default())).with_color(color)
    }

    pub fn standard(color: u32) -> Self {
        Self::new(MaterialParams::Standard(StandardParams::default())).with_color(color)
    }

    pub fn normal() -> Self {
        Self::new(MaterialParams::Normal)
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn kind(&self) -> MaterialKind {
        match self.params {
            MaterialParams::Basic => MaterialKind::Basic,
            MaterialParams::Lambert => MaterialKind::Lambert,
            MaterialParams::Phong(_) => MaterialKind::Phong,
            MaterialParams::Standard(_) => MaterialKind::Standard,
            MaterialParams::Normal => MaterialKind::Normal,
        }
    }

    pub fn phong_params(&self) -> Option<&PhongParams> {
        match &self.params {
            MaterialParams::Phong(params) => Some(params),
            _ => None,
        }
    }

    pub fn phong_params_mut(&mut self) -> Option<&mut PhongParams> {
        match &mut self.params {
            MaterialParams::Phong(params) => Some(params),
            _ => None,
        }
    }

    pub fn standard_params(&self) -> Option<&StandardParams> {
        match &self.params {
            MaterialParams::Standard(params) => Some(params),
            _ => None,
        }
    }

    pub fn standard_params_mut(&mut self) -> Option<&mut StandardParams> {
        match &mut self.params {
            MaterialParams::Standard(params) => Some(params),
            _ => None,
        }
    }

    /// Wraps the material for sharing with meshes and panels
    pub fn into_shared(self) -> SharedMaterial {
        Rc::new(RefCell::new(self))
    }

    /// Builder pattern: set the diffuse color from `0xRRGGBB`
    pub fn with_color(mut self, color: u32) -> Self {
        self.color = Color::from_hex(color);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn with_map(mut self, map: Texture) -> Self {
        self.map = Some(map);
        self
    }

    pub fn with_normal_map(mut self, normal_map: Texture, scale: Vector2<f32>) -> Self {
        self.normal_map = Some(normal_map);
        self.normal_scale = scale;
        self
    }

    /// Builder pattern: Phong specular color; ignored by other shading models
    pub fn with_specular(mut self, specular: u32) -> Self {
        if let Some(params) = self.phong_params_mut() {
            params.specular = Color::from_hex(specular);
        }
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        if let Some(params) = self.phong_params_mut() {
            params.shininess = shininess;
        }
        self
    }

    pub fn with_specular_map(mut self, specular_map: Texture) -> Self {
        if let Some(params) = self.phong_params_mut() {
            params.specular_map = Some(specular_map);
        }
        self
    }

    /// Builder pattern: metalness for standard materials, clamped to 0-1
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        if let Some(params) = self.standard_params_mut() {
            params.metalness = metalness.clamp(0.0, 1.0);
        }
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        if let Some(params) = self.standard_params_mut() {
            params.roughness = roughness.clamp(0.0, 1.0);
        }
        self
    }

    /// Packs the material into its uniform layout
    pub fn uniform(&self) -> MaterialUniform {
        let (metallic, roughness) = self
            .standard_params()
            .map_or((0.0, 1.0), |p| (p.metalness, p.roughness));
        let (specular, shininess) = self
            .phong_params()
            .map_or((Color::BLACK, 0.0), |p| (p.specular, p.shininess));

        let mut flags = 0;
        if self.flat_shading {
            flags |= MaterialUniform::FLAG_FLAT_SHADING;
        }
        if self.wireframe {
            flags |= MaterialUniform::FLAG_WIREFRAME;
        }
        if self.fog {
            flags |= MaterialUniform::FLAG_FOG;
        }
        if self.premultiplied_alpha {
            flags |= MaterialUniform::FLAG_PREMULTIPLIED_ALPHA;
        }

        MaterialUniform {
            base_color: self.color.with_alpha(self.opacity),
            emissive: self.emissive.to_array(),
            metallic,
            specular: specular.to_array(),
            roughness,
            normal_scale: self.normal_scale.into(),
            shininess,
            flags,
        }
    }
}

fn generate_uuid() -> String {
    let bits: u128 = rand::random();
    // Stamp version 4 and the RFC 4122 variant
    let bits = (bits & !(0xf << 76) & !(0x3 << 62)) | (0x4 << 76) | (0x2 << 62);
    let hex = format!("{bits:032x}");
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = Material::normal();
        let b = Material::normal();
        assert_ne!(a.id(), b.id());
        assert_ne!(a.uuid(), b.uuid());
        assert_eq!(a.uuid().len(), 36);
        assert_eq!(&a.uuid()[14..15], "4");
    }

    #[test]
    fn test_kind_specific_builders() {
        let phong = Material::phong(0xffffff)
            .with_specular(0x4444aa)
            .with_shininess(0.5)
            .with_metalness(0.7);
        assert_eq!(phong.kind(), MaterialKind::Phong);
        assert_eq!(phong.phong_params().unwrap().shininess, 0.5);
        assert!(phong.standard_params().is_none());

        let standard = Material::standard(0xff0000).with_roughness(2.0);
        assert_eq!(standard.standard_params().unwrap().roughness, 1.0);
        assert_eq!(standard.color, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_uniform_packing() {
        let mut material = Material::standard(0xff0000)
            .with_metalness(0.2)
            .with_roughness(0.07);
        material.opacity = 0.5;
        material.flat_shading = true;

        let uniform = material.uniform();
        assert_eq!(uniform.base_color, [1.0, 0.0, 0.0, 0.5]);
        assert_eq!(uniform.metallic, 0.2);
        assert_ne!(uniform.flags & MaterialUniform::FLAG_FLAT_SHADING, 0);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 64);
    }

    #[test]
    fn test_side_round_trips_through_index() {
        for side in Side::ALL {
            assert_eq!(Side::from_index(side.index()), Some(side));
        }
        assert_eq!(Side::from_index(3), None);
        assert_eq!(Side::Double.cull_mode(), None);
    }
}
