//! Printing star batches as inline styles.

use std::io::Write;

use serde::Serialize;
use starfall_background::{Palette, StarField};
use starfall_core::{EdgeOrigin, GlowColor, StarMagnitude};

/// One star in the JSON listing.
#[derive(Debug, Serialize)]
struct StyleEntry {
    id: i64,
    origin: EdgeOrigin,
    color: GlowColor,
    magnitude: StarMagnitude,
    style: String,
}

/// Write every star's style, one per line, or as a JSON array.
pub fn write_styles<W: Write>(
    out: &mut W,
    field: &StarField,
    palette: &Palette,
    json: bool,
) -> color_eyre::Result<()> {
    if json {
        let entries: Vec<StyleEntry> = field
            .stars()
            .iter()
            .map(|star| StyleEntry {
                id: star.id(),
                origin: star.origin(),
                color: star.color(),
                magnitude: star.magnitude(),
                style: star.animation_style_with(palette),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
    } else {
        for style in field.styles(palette) {
            writeln!(out, "{style}")?;
        }
    }
    Ok(())
}
