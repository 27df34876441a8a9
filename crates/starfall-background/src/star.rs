//! Randomized shooting star descriptors.

use std::ops::Range;

use rand::Rng;
use serde::Serialize;
use starfall_core::{EdgeOrigin, GlowColor, StarMagnitude};

/// Percent range just past the left or top edge of the viewport.
const BEFORE_EDGE: Range<i32> = -30..-10;
/// Percent range just past the right or bottom edge of the viewport.
const AFTER_EDGE: Range<i32> = 110..130;
/// Entry band along the vertical edges.
const VERTICAL_BAND: Range<i32> = 10..90;
/// Entry band along the horizontal edges (may start slightly off-screen).
const HORIZONTAL_BAND: Range<i32> = -10..110;
/// Offset applied to the cross axis so trajectories are not perfectly straight.
const JITTER: Range<i32> = -20..21;

/// Start and end of a star's flight, in percent of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trajectory {
    pub start_left: i32,
    pub start_top: i32,
    pub end_left: i32,
    pub end_top: i32,
}

impl Trajectory {
    /// Sample a trajectory entering from `origin` and leaving on the far side.
    pub fn sample<R: Rng + ?Sized>(origin: EdgeOrigin, rng: &mut R) -> Self {
        match origin {
            EdgeOrigin::Left => {
                let start_left = rng.random_range(BEFORE_EDGE);
                let start_top = rng.random_range(VERTICAL_BAND);
                let end_left = rng.random_range(AFTER_EDGE);
                let end_top = start_top + rng.random_range(JITTER);
                Self { start_left, start_top, end_left, end_top }
            }
            EdgeOrigin::Right => {
                let start_left = rng.random_range(AFTER_EDGE);
                let start_top = rng.random_range(VERTICAL_BAND);
                let end_left = rng.random_range(BEFORE_EDGE);
                let end_top = start_top + rng.random_range(JITTER);
                Self { start_left, start_top, end_left, end_top }
            }
            EdgeOrigin::Top => {
                let start_left = rng.random_range(HORIZONTAL_BAND);
                let start_top = rng.random_range(BEFORE_EDGE);
                let end_left = start_left + rng.random_range(JITTER);
                let end_top = rng.random_range(AFTER_EDGE);
                Self { start_left, start_top, end_left, end_top }
            }
            EdgeOrigin::Bottom => {
                let start_left = rng.random_range(HORIZONTAL_BAND);
                let start_top = rng.random_range(AFTER_EDGE);
                let end_left = start_left + rng.random_range(JITTER);
                let end_top = rng.random_range(BEFORE_EDGE);
                Self { start_left, start_top, end_left, end_top }
            }
        }
    }

    /// Position at `progress` (0.0-1.0) along the flight, in percent.
    pub fn at(&self, progress: f64) -> (f64, f64) {
        let lerp = |a: i32, b: i32| a as f64 + (b - a) as f64 * progress;
        (
            lerp(self.start_left, self.end_left),
            lerp(self.start_top, self.end_top),
        )
    }
}

/// A single shooting star, fully parameterized at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShootingStar {
    id: i64,
    origin: EdgeOrigin,
    color: GlowColor,
    magnitude: StarMagnitude,
    /// Body diameter in pixels.
    size: u32,
    /// Glow radius in pixels.
    glow_size: f64,
    /// Flight time in seconds.
    duration: f64,
    /// Seconds before the first flight starts.
    delay: f64,
    #[serde(flatten)]
    trajectory: Trajectory,
}

impl ShootingStar {
    /// Build a star from the next draws of `rng`.
    ///
    /// Draws happen in a fixed order (edge, color, magnitude, body, delay,
    /// trajectory), so identically seeded generators produce identical stars.
    pub fn new<R: Rng + ?Sized>(id: i64, rng: &mut R) -> Self {
        let origin = EdgeOrigin::ALL[rng.random_range(0..EdgeOrigin::ALL.len())];
        let color = GlowColor::ALL[rng.random_range(0..GlowColor::ALL.len())];
        let magnitude = StarMagnitude::from_roll(rng.random_range(0..100));

        let (size, glow_size, duration) = match magnitude {
            StarMagnitude::Small => (
                rng.random_range(2..3),
                f64::from(rng.random_range(8u32..10)),
                rng.random::<f64>() * 1.5 + 2.0,
            ),
            StarMagnitude::Medium => (
                rng.random_range(3..5),
                rng.random::<f64>() * 2.0 + 12.0,
                rng.random::<f64>() * 1.2 + 2.5,
            ),
            StarMagnitude::Large => (
                rng.random_range(5..8),
                rng.random::<f64>() * 3.0 + 18.0,
                rng.random::<f64>() + 3.0,
            ),
        };

        let delay = rng.random::<f64>() * 4.0;
        let trajectory = Trajectory::sample(origin, rng);

        Self {
            id,
            origin,
            color,
            magnitude,
            size,
            glow_size,
            duration,
            delay,
            trajectory,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn origin(&self) -> EdgeOrigin {
        self.origin
    }

    pub fn color(&self) -> GlowColor {
        self.color
    }

    pub fn magnitude(&self) -> StarMagnitude {
        self.magnitude
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn glow_size(&self) -> f64 {
        self.glow_size
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn start_left(&self) -> i32 {
        self.trajectory.start_left
    }

    pub fn start_top(&self) -> i32 {
        self.trajectory.start_top
    }

    pub fn end_left(&self) -> i32 {
        self.trajectory.end_left
    }

    pub fn end_top(&self) -> i32 {
        self.trajectory.end_top
    }

    /// Flight progress (0.0-1.0) at `seconds` since the animation started.
    ///
    /// Returns `None` while the star is still waiting out its delay. The
    /// flight repeats forever, like an `infinite` CSS animation.
    pub fn progress_at(&self, seconds: f64) -> Option<f64> {
        let local = seconds - self.delay;
        if local < 0.0 {
            return None;
        }
        Some((local % self.duration) / self.duration)
    }
}
