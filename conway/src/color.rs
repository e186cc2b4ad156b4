// color.rs - RGBA values and the live/dead palette

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// One RGBA pixel, 8 bits per channel, laid out exactly as a
/// `R8G8B8A8` texture expects.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 200);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Foreground (alive) and background (dead) colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub foreground: Rgba,
    pub background: Rgba,
}

impl Palette {
    pub const fn new(foreground: Rgba, background: Rgba) -> Self {
        Self { foreground, background }
    }

    #[inline]
    pub const fn color_for(&self, alive: bool) -> Rgba {
        if alive { self.foreground } else { self.background }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Rgba::CYAN, Rgba::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_layout_matches_bytes() {
        let pixels = [Rgba::new(1, 2, 3, 4), Rgba::CYAN];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[1, 2, 3, 4, 0, 255, 200, 255]);
    }

    #[test]
    fn test_palette_color_for() {
        let palette = Palette::default();
        assert_eq!(palette.color_for(true), Rgba::CYAN);
        assert_eq!(palette.color_for(false), Rgba::BLACK);
    }

    #[test]
    fn test_rgba_json_shape() {
        let color: Rgba = serde_json::from_str(r#"{"r":10,"g":20,"b":30,"a":255}"#).unwrap();
        assert_eq!(color.to_array(), [10, 20, 30, 255]);
    }
}
