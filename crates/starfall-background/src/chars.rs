//! Character constants for the shooting star preview.

/// Head glyphs indexed by magnitude (small, medium, large).
pub const HEAD_CHARS: [char; 3] = ['+', '✦', '★'];

/// Trail glyphs from faintest to brightest.
pub const TRAIL_CHARS: &[char] = &['·', '∙', '•'];
