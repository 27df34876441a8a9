//! Shooting star preview animation (driven by pre-built star descriptors).

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use starfall_core::StarMagnitude;

use crate::chars::{HEAD_CHARS, TRAIL_CHARS};
use crate::palette::{Palette, fade};
use crate::star::ShootingStar;

/// A painted terminal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub color: Color,
}

/// Fixed-size grid the stars are painted onto before being turned into lines.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Option<Cell>>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Paint a cell, ignoring positions outside the grid.
    fn set(&mut self, x: i64, y: i64, cell: Cell) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.cells[y as usize * self.width as usize + x as usize] = Some(cell);
    }

    /// Convert percent-of-viewport coordinates to fractional cell coordinates.
    pub fn to_cells(&self, left: f64, top: f64) -> (f64, f64) {
        (
            left / 100.0 * self.width as f64,
            top / 100.0 * self.height as f64,
        )
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        let width = self.width as usize;
        if width == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(width)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| match cell {
                        Some(c) => Span::styled(c.ch.to_string(), Style::new().fg(c.color)),
                        None => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

/// Paint `star` as it looks `seconds` into the animation.
pub fn paint(canvas: &mut Canvas, star: &ShootingStar, seconds: f64, palette: &Palette) {
    let Some(progress) = star.progress_at(seconds) else {
        return;
    };
    let pair = palette.lookup(star.color());
    let trajectory = star.trajectory();

    let (left, top) = trajectory.at(progress);
    let (head_x, head_y) = canvas.to_cells(left, top);

    // Unit step back along the flight path, adjusted for terminal aspect ratio
    let (start_x, start_y) =
        canvas.to_cells(trajectory.start_left as f64, trajectory.start_top as f64);
    let (end_x, end_y) = canvas.to_cells(trajectory.end_left as f64, trajectory.end_top as f64);
    let (dx, dy) = (end_x - start_x, end_y - start_y);
    let length = (dx * dx + dy * dy * 4.0).sqrt();

    if length > 0.0 {
        let trail_len = star.size();
        for k in (1..=trail_len).rev() {
            let intensity = 1.0 - k as f32 / (trail_len + 1) as f32;
            let idx = ((intensity * TRAIL_CHARS.len() as f32) as usize).min(TRAIL_CHARS.len() - 1);
            let x = head_x - dx / length * k as f64;
            let y = head_y - dy / length * k as f64;
            canvas.set(
                x.floor() as i64,
                y.floor() as i64,
                Cell {
                    ch: TRAIL_CHARS[idx],
                    color: fade(pair.glow, intensity),
                },
            );
        }
    }

    let head = match star.magnitude() {
        StarMagnitude::Small => HEAD_CHARS[0],
        StarMagnitude::Medium => HEAD_CHARS[1],
        StarMagnitude::Large => HEAD_CHARS[2],
    };
    canvas.set(
        head_x.floor() as i64,
        head_y.floor() as i64,
        Cell {
            ch: head,
            color: pair.rgb.into(),
        },
    );
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn horizontal_star() -> ShootingStar {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        std::iter::repeat_with(|| ShootingStar::new(0, &mut rng))
            .find(|s| s.origin().is_horizontal())
            .unwrap()
    }

    fn painted(canvas: &Canvas) -> usize {
        canvas.cells.iter().filter(|c| c.is_some()).count()
    }

    #[test]
    fn test_head_at_midpoint() {
        let star = horizontal_star();
        let mut canvas = Canvas::new(100, 50);
        let seconds = star.delay() + star.duration() / 2.0;
        paint(&mut canvas, &star, seconds, Palette::standard());

        let progress = star.progress_at(seconds).unwrap();
        let (left, top) = star.trajectory().at(progress);
        let (x, y) = canvas.to_cells(left, top);
        let (head_x, head_y) = (x.floor() as u16, y.floor() as u16);
        let cell = canvas.get(head_x, head_y).unwrap();

        let pair = Palette::standard().lookup(star.color());
        assert!(HEAD_CHARS.contains(&cell.ch));
        assert_eq!(cell.color, Color::from(pair.rgb));

        // Every other painted cell is trail, faded from the glow color
        let trail_len = star.size();
        let trail_colors: Vec<Color> = (1..=trail_len)
            .map(|k| fade(pair.glow, 1.0 - k as f32 / (trail_len + 1) as f32))
            .collect();
        let mut trail_cells = 0;
        for ty in 0..50 {
            for tx in 0..100 {
                if (tx, ty) == (head_x, head_y) {
                    continue;
                }
                if let Some(trail) = canvas.get(tx, ty) {
                    assert!(TRAIL_CHARS.contains(&trail.ch), "{trail:?}");
                    assert!(trail_colors.contains(&trail.color), "{trail:?}");
                    trail_cells += 1;
                }
            }
        }
        assert!(trail_cells > 0, "trail should be drawn");
    }

    #[test]
    fn test_hidden_during_delay() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let star = std::iter::repeat_with(|| ShootingStar::new(0, &mut rng))
            .find(|s| s.delay() > 0.5)
            .unwrap();
        let mut canvas = Canvas::new(80, 24);
        paint(&mut canvas, &star, 0.25, Palette::standard());
        assert_eq!(painted(&canvas), 0);
    }

    #[test]
    fn test_off_screen_positions_are_skipped() {
        let star = horizontal_star();
        let mut canvas = Canvas::new(40, 20);
        // At the very start the head sits off-screen on the entry edge
        paint(&mut canvas, &star, star.delay(), Palette::standard());
        assert_eq!(painted(&canvas), 0);
    }

    #[test]
    fn test_into_lines_shape() {
        let lines = Canvas::new(7, 3).into_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.spans.len() == 7));
        assert!(Canvas::new(0, 3).into_lines().is_empty());
    }
}
