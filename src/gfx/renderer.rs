//! Renderer configuration
//!
//! The crate does not own a device; [`RendererSettings`] describes how a wgpu
//! renderer should configure its surface, clear the frame and sample shadows.

use winit::dpi::PhysicalSize;

use super::color::Color;

/// Shadow filtering technique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowMapType {
    Basic,
    #[default]
    Pcf,
    PcfSoft,
    Vsm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowMapSettings {
    pub enabled: bool,
    pub soft: bool,
    pub kind: ShadowMapType,
}

impl Default for ShadowMapSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            soft: false,
            kind: ShadowMapType::Pcf,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererSettings {
    pub antialias: bool,
    pub clear_color: Color,
    pub size: PhysicalSize<u32>,
    pub shadow_map: ShadowMapSettings,
    pub present_mode: wgpu::PresentMode,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            antialias: false,
            clear_color: Color::BLACK,
            size: PhysicalSize::new(800, 600),
            shadow_map: ShadowMapSettings::default(),
            present_mode: wgpu::PresentMode::Fifo,
        }
    }
}

impl RendererSettings {
    pub fn new(size: PhysicalSize<u32>) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn with_shadow_map(mut self, shadow_map: ShadowMapSettings) -> Self {
        self.shadow_map = shadow_map;
        self
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.size = size;
    }

    /// Surface configuration for the given swapchain format
    ///
    /// Zero-sized windows are configured as 1x1, wgpu rejects empty surfaces.
    pub fn surface_configuration(&self, format: wgpu::TextureFormat) -> wgpu::SurfaceConfiguration {
        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: self.size.width.max(1),
            height: self.size.height.max(1),
            present_mode: self.present_mode,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    pub fn clear_color(&self) -> wgpu::Color {
        self.clear_color.into()
    }

    /// MSAA sample count for color and depth targets
    pub fn sample_count(&self) -> u32 {
        if self.antialias {
            4
        } else {
            1
        }
    }

    /// Sampler used to read the shadow map, or None when shadows are off
    pub fn shadow_sampler_descriptor(&self) -> Option<wgpu::SamplerDescriptor<'static>> {
        if !self.shadow_map.enabled {
            return None;
        }
        let filter = match self.shadow_map.kind {
            ShadowMapType::Basic => wgpu::FilterMode::Nearest,
            ShadowMapType::Pcf | ShadowMapType::PcfSoft | ShadowMapType::Vsm => {
                wgpu::FilterMode::Linear
            }
        };
        // Variance shadow maps store moments and are sampled without comparison
        let compare = match self.shadow_map.kind {
            ShadowMapType::Vsm => None,
            _ => Some(wgpu::CompareFunction::LessEqual),
        };
        Some(wgpu::SamplerDescriptor {
            label: Some("shadow_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: filter,
            min_filter: filter,
            mipmap_filter: wgpu::FilterMode::Nearest,
            compare,
            lod_min_clamp: 0.0,
            lod_max_clamp: 32.0,
            ..Default::default()
        })
    }
}
