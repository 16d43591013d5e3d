//! Texture references
//!
//! Textures are path passthroughs: the loader resolves a path against its base
//! directory and records sampling parameters. Decoding and upload happen in the
//! renderer that consumes the scene.

use std::path::{Path, PathBuf};

use cgmath::Vector2;

/// Texture coordinate wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wrapping {
    #[default]
    ClampToEdge,
    Repeat,
    MirroredRepeat,
}

impl Wrapping {
    pub fn address_mode(self) -> wgpu::AddressMode {
        match self {
            Wrapping::ClampToEdge => wgpu::AddressMode::ClampToEdge,
            Wrapping::Repeat => wgpu::AddressMode::Repeat,
            Wrapping::MirroredRepeat => wgpu::AddressMode::MirrorRepeat,
        }
    }
}

/// A texture referenced by path along with its sampling parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    path: PathBuf,
    pub wrap_s: Wrapping,
    pub wrap_t: Wrapping,
    pub repeat: Vector2<f32>,
}

impl Texture {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            wrap_s: Wrapping::ClampToEdge,
            wrap_t: Wrapping::ClampToEdge,
            repeat: Vector2::new(1.0, 1.0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Builder pattern: set both wrap modes
    pub fn with_wrapping(mut self, wrap_s: Wrapping, wrap_t: Wrapping) -> Self {
        self.wrap_s = wrap_s;
        self.wrap_t = wrap_t;
        self
    }

    /// Builder pattern: set the UV repeat count
    pub fn with_repeat(mut self, u: f32, v: f32) -> Self {
        self.repeat = Vector2::new(u, v);
        self
    }

    /// Sampler settings matching this texture's wrap modes
    pub fn sampler_descriptor(&self) -> wgpu::SamplerDescriptor<'static> {
        wgpu::SamplerDescriptor {
            label: Some("Texture Sampler"),
            address_mode_u: self.wrap_s.address_mode(),
            address_mode_v: self.wrap_t.address_mode(),
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        }
    }
}

/// Resolves texture paths against an asset directory
#[derive(Debug, Clone)]
pub struct TextureLoader {
    base_path: PathBuf,
}

impl Default for TextureLoader {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("assets"),
        }
    }
}

impl TextureLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set the directory relative paths are resolved against
    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Creates a texture reference; absolute paths are kept as given
    pub fn load(&self, path: impl AsRef<Path>) -> Texture {
        let path = path.as_ref();
        let resolved = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        };
        log::debug!("texture reference {}", resolved.display());
        Texture::new(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_resolves_relative_paths() {
        let loader = TextureLoader::new().with_base_path("public/textures");
        let texture = loader.load("earth/Earth.png");
        assert_eq!(texture.path(), Path::new("public/textures/earth/Earth.png"));
        assert_eq!(texture.wrap_s, Wrapping::ClampToEdge);
    }

    #[test]
    fn test_repeat_wrapping_sampler() {
        let texture = Texture::new("floor.jpg")
            .with_wrapping(Wrapping::Repeat, Wrapping::Repeat)
            .with_repeat(80.0, 80.0);
        let sampler = texture.sampler_descriptor();
        assert_eq!(sampler.address_mode_u, wgpu::AddressMode::Repeat);
        assert_eq!(sampler.address_mode_v, wgpu::AddressMode::Repeat);
        assert_eq!(texture.repeat, Vector2::new(80.0, 80.0));
    }
}
