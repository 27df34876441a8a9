//! Glow color lookup and color helpers.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use ratatui::style::Color;
use starfall_core::{ColorPair, GlowColor, Rgb};

/// Built-in color table, initialized once and never mutated.
static STANDARD: LazyLock<Palette> = LazyLock::new(|| {
    Palette::empty()
        .with(
            GlowColor::Red,
            ColorPair::new(Rgb::new(255, 0, 0), Rgb::new(255, 50, 50)),
        )
        .with(
            GlowColor::Orange,
            ColorPair::new(Rgb::new(255, 165, 0), Rgb::new(255, 200, 100)),
        )
        .with(
            GlowColor::Yellow,
            ColorPair::new(Rgb::new(255, 255, 0), Rgb::new(255, 255, 150)),
        )
        .with(GlowColor::White, ColorPair::WHITE)
});

/// Mapping from glow color to the body and glow RGB values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: BTreeMap<GlowColor, ColorPair>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard().clone()
    }
}

impl Palette {
    /// The built-in palette covering every [`GlowColor`].
    pub fn standard() -> &'static Palette {
        &STANDARD
    }

    /// A palette with no entries. Every lookup falls back to white.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace the entry for `color`.
    pub fn with(mut self, color: GlowColor, pair: ColorPair) -> Self {
        self.entries.insert(color, pair);
        self
    }

    /// The standard palette with `overrides` applied on top.
    pub fn with_overrides(overrides: impl IntoIterator<Item = (GlowColor, ColorPair)>) -> Self {
        overrides
            .into_iter()
            .fold(Self::default(), |palette, (color, pair)| palette.with(color, pair))
    }

    /// Look up the pair for `color`, falling back to plain white when missing.
    pub fn lookup(&self, color: GlowColor) -> ColorPair {
        self.entries.get(&color).copied().unwrap_or(ColorPair::WHITE)
    }

    pub fn contains(&self, color: GlowColor) -> bool {
        self.entries.contains_key(&color)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Dim an RGB value towards black by `intensity` (0.0-1.0).
pub fn fade(rgb: Rgb, intensity: f32) -> Color {
    let intensity = intensity.clamp(0.0, 1.0);
    let scale = |c: u8| (c as f32 * intensity) as u8;
    Color::Rgb(scale(rgb.r), scale(rgb.g), scale(rgb.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_palette_is_total() {
        let palette = Palette::standard();
        assert_eq!(palette.len(), GlowColor::ALL.len());
        for color in GlowColor::ALL {
            assert!(palette.contains(color), "{color} missing");
        }
    }

    #[test]
    fn test_standard_values() {
        let palette = Palette::standard();
        let orange = palette.lookup(GlowColor::Orange);
        assert_eq!(orange.rgb.to_string(), "255, 165, 0");
        assert_eq!(orange.glow.to_string(), "255, 200, 100");
        assert_eq!(palette.lookup(GlowColor::White), ColorPair::WHITE);
    }

    #[test]
    fn test_missing_entry_falls_back_to_white() {
        let palette = Palette::empty();
        assert!(palette.is_empty());
        assert_eq!(palette.lookup(GlowColor::Red), ColorPair::WHITE);
    }

    #[test]
    fn test_fallback_ignores_custom_white() {
        let dim = ColorPair::new(Rgb::new(10, 10, 10), Rgb::new(20, 20, 20));
        let palette = Palette::empty().with(GlowColor::White, dim);
        assert_eq!(palette.lookup(GlowColor::White), dim);
        assert_eq!(palette.lookup(GlowColor::Yellow), ColorPair::WHITE);
    }

    #[test]
    fn test_overrides_keep_other_entries() {
        let teal = ColorPair::new(Rgb::new(0, 128, 128), Rgb::new(0, 200, 200));
        let palette = Palette::with_overrides([(GlowColor::Red, teal)]);
        assert_eq!(palette.lookup(GlowColor::Red), teal);
        assert_eq!(
            palette.lookup(GlowColor::Yellow),
            Palette::standard().lookup(GlowColor::Yellow)
        );
        assert_eq!(palette.len(), 4);
    }

    #[test]
    fn test_fade() {
        assert_eq!(fade(Rgb::new(200, 100, 50), 1.0), Color::Rgb(200, 100, 50));
        assert_eq!(fade(Rgb::new(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(fade(Rgb::new(200, 100, 50), -1.0), Color::Rgb(0, 0, 0));
    }
}
