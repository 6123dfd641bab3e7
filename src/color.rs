use std::str::FromStr;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0 + 210.0;
            let hsl = Hsl::new(hue, 0.65, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Parse `#rrggbb` / `#rgb` (the leading `#` is optional).
pub fn parse_hex(hex: &str) -> Result<Color32, palette::rgb::FromHexError> {
    let rgb = Srgb::<u8>::from_str(hex.trim())?;
    Ok(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

// ---------------------------------------------------------------------------
// Species → Color32, shared by every chart and the sidebar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SpeciesPalette {
    colors: [Color32; 3],
}

impl Default for SpeciesPalette {
    fn default() -> Self {
        let palette = generate_palette(Species::ALL.len());
        let mut colors = [Color32::GRAY; 3];
        for (slot, color) in colors.iter_mut().zip(palette) {
            *slot = color;
        }
        Self { colors }
    }
}

impl SpeciesPalette {
    /// Colour for a species; stable regardless of which species are selected.
    pub fn color_for(&self, species: Species) -> Color32 {
        let index = Species::ALL
            .iter()
            .position(|&s| s == species)
            .unwrap_or_default();
        self.colors[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_distinct() {
        let palette = SpeciesPalette::default();
        let [a, b, c] = Species::ALL.map(|s| palette.color_for(s));
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex("#f8f8f8").unwrap(), Color32::from_rgb(0xf8, 0xf8, 0xf8));
        assert_eq!(parse_hex("102030").unwrap(), Color32::from_rgb(0x10, 0x20, 0x30));
        assert!(parse_hex("#zzzzzz").is_err());
        assert!(parse_hex("").is_err());
    }
}
