//! Core types shared across the starfall crates.
//!
//! The categorical choices a shooting star is built from (entry edge, glow
//! color, magnitude) live here together with the RGB color types and the
//! preview playback speed.

use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Screen edge a shooting star enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeOrigin {
    Left,
    Right,
    Top,
    Bottom,
}

impl EdgeOrigin {
    /// All edges, in draw order.
    pub const ALL: [EdgeOrigin; 4] = [
        EdgeOrigin::Left,
        EdgeOrigin::Right,
        EdgeOrigin::Top,
        EdgeOrigin::Bottom,
    ];

    /// Get the display name of the edge.
    pub fn name(&self) -> &'static str {
        match self {
            EdgeOrigin::Left => "left",
            EdgeOrigin::Right => "right",
            EdgeOrigin::Top => "top",
            EdgeOrigin::Bottom => "bottom",
        }
    }

    /// Whether the star travels horizontally across the screen.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, EdgeOrigin::Left | EdgeOrigin::Right)
    }
}

impl fmt::Display for EdgeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Glow color of a shooting star.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum GlowColor {
    Red,
    Orange,
    Yellow,
    White,
}

impl GlowColor {
    /// All colors, in draw order.
    pub const ALL: [GlowColor; 4] = [
        GlowColor::Red,
        GlowColor::Orange,
        GlowColor::Yellow,
        GlowColor::White,
    ];

    /// Get the display name of the color.
    pub fn name(&self) -> &'static str {
        match self {
            GlowColor::Red => "red",
            GlowColor::Orange => "orange",
            GlowColor::Yellow => "yellow",
            GlowColor::White => "white",
        }
    }
}

impl fmt::Display for GlowColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Size and brightness tier of a shooting star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarMagnitude {
    Small,
    Medium,
    Large,
}

impl StarMagnitude {
    /// Map a roll in `0..100` to a magnitude (70% small, 25% medium, 5% large).
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            0..70 => StarMagnitude::Small,
            70..95 => StarMagnitude::Medium,
            _ => StarMagnitude::Large,
        }
    }

    /// Get the display name of the magnitude.
    pub fn name(&self) -> &'static str {
        match self {
            StarMagnitude::Small => "small",
            StarMagnitude::Medium => "medium",
            StarMagnitude::Large => "large",
        }
    }
}

impl fmt::Display for StarMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An RGB triple, printed as `r, g, b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Base color of a star body together with the color of its glow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub rgb: Rgb,
    pub glow: Rgb,
}

impl ColorPair {
    /// Plain white body and glow.
    pub const WHITE: ColorPair = ColorPair::new(Rgb::new(255, 255, 255), Rgb::new(255, 255, 255));

    pub const fn new(rgb: Rgb, glow: Rgb) -> Self {
        Self { rgb, glow }
    }
}

/// Playback speed of the terminal preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Multiplier applied to wall-clock time.
    pub fn time_scale(&self) -> f64 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Cycle to the next speed.
    pub fn next(&self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Get the display name of the speed.
    pub fn name(&self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }
}
