//! Normalized RGB color
//!
//! Colors are stored as linear 0.0-1.0 channels. Panels display colors with
//! 0-255 channels, so conversions in both directions live here.

/// RGB color with normalized (0.0-1.0) channels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Packs the color into `0xRRGGBB`, clamping out-of-range channels
    pub fn to_hex(&self) -> u32 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Converts 0-255 panel channels into a normalized color
    pub fn from_rgb255(channels: [f32; 3]) -> Self {
        Self {
            r: channels[0] / 255.0,
            g: channels[1] / 255.0,
            b: channels[2] / 255.0,
        }
    }

    /// Expands the color into 0-255 panel channels
    pub fn to_rgb255(&self) -> [f32; 3] {
        [self.r * 255.0, self.g * 255.0, self.b * 255.0]
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// RGBA array with the given alpha, as packed into uniforms
    pub fn with_alpha(&self, alpha: f32) -> [f32; 4] {
        [self.r, self.g, self.b, alpha]
    }
}

impl From<[f32; 3]> for Color {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Color> for [f32; 3] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<Color> for wgpu::Color {
    fn from(color: Color) -> Self {
        wgpu::Color {
            r: color.r as f64,
            g: color.g as f64,
            b: color.b as f64,
            a: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_conversion() {
        let color = Color::from_hex(0xff0000);
        assert_eq!(color, Color::new(1.0, 0.0, 0.0));
        assert_eq!(Color::from_hex(0x4444aa).to_hex(), 0x4444aa);
    }

    #[test]
    fn test_panel_channels() {
        let color = Color::from_rgb255([0.0, 255.0, 0.0]);
        assert_eq!(color, Color::new(0.0, 1.0, 0.0));
        assert_eq!(Color::WHITE.to_rgb255(), [255.0, 255.0, 255.0]);
    }

    #[test]
    fn test_wgpu_color_is_opaque() {
        let clear: wgpu::Color = Color::BLACK.into();
        assert_eq!(clear.a, 1.0);
        assert_eq!(clear.r, 0.0);
    }
}
