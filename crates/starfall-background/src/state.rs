//! Star batch state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{Frame, layout::Rect, widgets::Paragraph};
use starfall_core::AnimationSpeed;
use tracing::debug;

use crate::animations::shooting::{self, Canvas};
use crate::error::StarError;
use crate::palette::Palette;
use crate::star::ShootingStar;

/// Largest batch a single field will generate.
pub const MAX_STARS: usize = 1000;

/// A batch of shooting stars sharing one random source.
#[derive(Debug)]
pub struct StarField {
    /// Stars in the current batch, in id order.
    stars: Vec<ShootingStar>,
    /// Random source for every star this field creates.
    rng: ChaCha8Rng,
    /// Seed the random source started from.
    seed: u64,
    /// Id given to the next star.
    next_id: i64,
    /// Stars per batch.
    count: usize,
}

impl StarField {
    /// Create a field and generate its first batch of `count` stars.
    ///
    /// Without a `seed` the system clock seeds the random source.
    pub fn new(count: usize, seed: Option<u64>) -> Result<Self, StarError> {
        if count == 0 || count > MAX_STARS {
            return Err(StarError::InvalidArgument(format!(
                "star count must be between 1 and {MAX_STARS}, got {count}"
            )));
        }

        let seed = seed.unwrap_or_else(clock_seed);
        let mut field = Self {
            stars: Vec::with_capacity(count),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            next_id: 0,
            count,
        };
        field.regenerate()?;
        Ok(field)
    }

    /// Replace the whole batch. Ids keep counting up from the previous batch.
    ///
    /// Fails without touching the current batch once the ids would overflow.
    pub fn regenerate(&mut self) -> Result<(), StarError> {
        let first = self.next_id;
        let next = i64::try_from(self.count)
            .ok()
            .and_then(|count| first.checked_add(count))
            .ok_or_else(|| {
                StarError::InvalidArgument(format!(
                    "star ids exhausted: cannot assign {} more after {first}",
                    self.count
                ))
            })?;

        self.stars = (first..next)
            .map(|id| ShootingStar::new(id, &mut self.rng))
            .collect();
        self.next_id = next;
        debug!(seed = self.seed, first_id = first, count = self.count, "generated star batch");
        Ok(())
    }

    pub fn stars(&self) -> &[ShootingStar] {
        &self.stars
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// One inline style per star, in id order.
    pub fn styles(&self, palette: &Palette) -> Vec<String> {
        self.stars
            .iter()
            .map(|star| star.animation_style_with(palette))
            .collect()
    }

    /// Paint the batch as it looks `elapsed_ms` into the animation.
    pub fn canvas(
        &self,
        width: u16,
        height: u16,
        elapsed_ms: u64,
        speed: AnimationSpeed,
        palette: &Palette,
    ) -> Canvas {
        let seconds = elapsed_ms as f64 / 1000.0 * speed.time_scale();
        let mut canvas = Canvas::new(width, height);
        for star in &self.stars {
            shooting::paint(&mut canvas, star, seconds, palette);
        }
        canvas
    }

    /// Render the batch into `area` of the frame.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        elapsed_ms: u64,
        speed: AnimationSpeed,
        palette: &Palette,
    ) {
        let canvas = self.canvas(area.width, area.height, elapsed_ms, speed, palette);
        frame.render_widget(Paragraph::new(canvas.into_lines()), area);
    }
}

/// Seed from the system clock.
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
