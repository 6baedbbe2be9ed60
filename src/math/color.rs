use serde::Serialize;

/// Linear RGB color as consumed by the shaders
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::linear(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::linear(0.0, 0.0, 0.0);

    pub const fn linear(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed sRGB hex value such as `0x800080`
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    /// The handful of CSS color names the playground uses
    pub fn named(name: &str) -> Option<Self> {
        let hex = match name {
            "white" => 0xffffff,
            "black" => 0x000000,
            "purple" => 0x800080,
            "blue" => 0x0000ff,
            "red" => 0xff0000,
            "green" => 0x008000,
            _ => return None,
        };
        Some(Self::from_hex(hex))
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self::linear(self.r * factor, self.g * factor, self.b * factor)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_vec4(self, w: f32) -> [f32; 4] {
        [self.r, self.g, self.b, w]
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: 1.0,
        }
    }
}

pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_white() {
        let c = Color::from_hex(0xffffff);
        assert!((c.r - 1.0).abs() < 1e-5);
        assert!((c.g - 1.0).abs() < 1e-5);
        assert!((c.b - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_from_hex_purple() {
        let c = Color::from_hex(0x800080);
        // 0x80 in sRGB is roughly 0.216 linear
        assert!((c.r - 0.2158).abs() < 0.001);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2158).abs() < 0.001);
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::named("white"), Some(Color::from_hex(0xffffff)));
        assert_eq!(Color::named("purple"), Some(Color::from_hex(0x800080)));
        assert_eq!(Color::named("blue"), Some(Color::linear(0.0, 0.0, 1.0)));
        assert_eq!(Color::named("chartreuse"), None);
    }

    #[test]
    fn test_scaled() {
        let c = Color::WHITE.scaled(0.5);
        assert_eq!(c.to_array(), [0.5, 0.5, 0.5]);
    }
}
