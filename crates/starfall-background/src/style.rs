//! CSS custom-property rendering for shooting stars.
//!
//! The property names and their order are shared with the stylesheet that
//! animates the stars and must not change.

use starfall_core::ColorPair;

use crate::palette::Palette;
use crate::star::ShootingStar;

/// Custom properties emitted for every star, in output order.
pub const STYLE_PROPERTIES: [&str; 10] = [
    "--star-start-left",
    "--star-start-top",
    "--star-end-left",
    "--star-end-top",
    "--star-duration",
    "--star-delay",
    "--star-size",
    "--star-glow",
    "--star-color",
    "--star-glow-color",
];

impl ShootingStar {
    /// Property values in [`STYLE_PROPERTIES`] order.
    pub fn style_values(&self, palette: &Palette) -> [String; 10] {
        let ColorPair { rgb, glow } = palette.lookup(self.color());
        [
            format!("{}%", self.start_left()),
            format!("{}%", self.start_top()),
            format!("{}%", self.end_left()),
            format!("{}%", self.end_top()),
            format!("{}s", self.duration()),
            format!("{}s", self.delay()),
            format!("{}px", self.size()),
            format!("{}px", self.glow_size()),
            format!("rgb({rgb})"),
            format!("rgba({glow}, 0.8)"),
        ]
    }

    /// Inline style for this star using the standard palette.
    pub fn animation_style(&self) -> String {
        self.animation_style_with(Palette::standard())
    }

    /// Inline style for this star, resolving its color through `palette`.
    pub fn animation_style_with(&self, palette: &Palette) -> String {
        STYLE_PROPERTIES
            .iter()
            .zip(self.style_values(palette))
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
