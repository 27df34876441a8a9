//! Shooting star effect for animated page backgrounds.
//!
//! Each [`ShootingStar`] is built once from a random source: the edge it
//! enters from, its glow color, a weighted magnitude, body and glow sizes,
//! timing, and an off-screen to off-screen trajectory. Stars render to an
//! inline CSS style of custom properties consumed by an external stylesheet,
//! and a [`StarField`] can also preview a batch in the terminal.

mod animations;
mod chars;
mod error;
mod palette;
mod state;
mod star;
mod style;

pub use animations::shooting::{Canvas, Cell};
pub use error::StarError;
pub use palette::{Palette, fade};
pub use star::{ShootingStar, Trajectory};
pub use state::{MAX_STARS, StarField};
pub use style::STYLE_PROPERTIES;
