//! Seeded shape synthesizer.
//!
//! # Responsibility
//! - Turn a style, center, size and seed into an ordered outline of points.
//!
//! # Invariants
//! - Identical `(style, center, size, seed)` always yields an identical
//!   point sequence; the random stream is built locally from `seed`.
//! - Unknown style tags resolve to `ShapeStyle::DefaultWobble`.
//! - Coordinates live in the unit square with `y` pointing up.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::fmt::{Display, Formatter};

const WOBBLE_SAMPLES: usize = 200;
const CIRCULAR_WOBBLE: f64 = 0.2;
const DEFAULT_WOBBLE: f64 = 0.25;
const SHARP_SAMPLES: usize = 100;
const SHARP_WOBBLE: f64 = 0.5;
const SHARP_LOBES: f64 = 5.0;
const HEART_SAMPLES: usize = 100;
const HEART_SCALE: f64 = 30.0;
const WAVE_SAMPLES: usize = 150;
const WAVE_AMPLITUDE: f64 = 0.3;
const WAVE_STRETCH_Y: f64 = 1.2;
const SPIRAL_SAMPLES: usize = 200;
const SPIRAL_COMPRESSION: f64 = 0.8;
const POLYGON_VERTICES: usize = 6;
const ARC_SAMPLES: usize = 100;
const ARC_DRIFT: f64 = 10.0;

/// Point in canvas space (unit square, `y` up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Closed set of outline styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeStyle {
    /// Randomly wobbled circle.
    CircularWobble,
    /// Scalloped spikes, no randomness.
    AngularSharp,
    /// Parametric heart curve.
    Heart,
    /// Three-lobed wave stretched vertically.
    FlowingWave,
    /// Two-turn open spiral.
    SpiralSwirl,
    /// Regular hexagon.
    GeometricPolygon,
    /// Circle drifting upwards with angle.
    AscendingArc,
    /// Fallback wobble for every other tag.
    DefaultWobble,
}

impl ShapeStyle {
    pub const ALL: [ShapeStyle; 8] = [
        ShapeStyle::CircularWobble,
        ShapeStyle::AngularSharp,
        ShapeStyle::Heart,
        ShapeStyle::FlowingWave,
        ShapeStyle::SpiralSwirl,
        ShapeStyle::GeometricPolygon,
        ShapeStyle::AscendingArc,
        ShapeStyle::DefaultWobble,
    ];

    /// Resolves a style tag or emotion motif (`circles`, `sharp`, ...).
    ///
    /// Matching is case-insensitive; anything unrecognized becomes
    /// `DefaultWobble`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "circles" | "circular-wobble" => Self::CircularWobble,
            "sharp" | "angular-sharp" => Self::AngularSharp,
            "hearts" | "heart" => Self::Heart,
            "flowing" | "flowing-wave" => Self::FlowingWave,
            "swirls" | "spiral-swirl" => Self::SpiralSwirl,
            "geometric" | "geometric-polygon" => Self::GeometricPolygon,
            "ascending" | "ascending-arc" => Self::AscendingArc,
            _ => Self::DefaultWobble,
        }
    }

    /// Canonical kebab-case tag.
    pub fn tag(self) -> &'static str {
        match self {
            Self::CircularWobble => "circular-wobble",
            Self::AngularSharp => "angular-sharp",
            Self::Heart => "heart",
            Self::FlowingWave => "flowing-wave",
            Self::SpiralSwirl => "spiral-swirl",
            Self::GeometricPolygon => "geometric-polygon",
            Self::AscendingArc => "ascending-arc",
            Self::DefaultWobble => "default-wobble",
        }
    }

    /// Whether the outline depends on the seed at all.
    pub fn is_randomized(self) -> bool {
        matches!(self, Self::CircularWobble | Self::DefaultWobble)
    }
}

impl Display for ShapeStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Synthesizes one outline.
///
/// Never fails; a non-positive `size` simply collapses the outline.
pub fn synthesize(style: ShapeStyle, center: Point, size: f64, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    match style {
        ShapeStyle::CircularWobble => wobble_blob(&mut rng, center, size, CIRCULAR_WOBBLE),
        ShapeStyle::DefaultWobble => wobble_blob(&mut rng, center, size, DEFAULT_WOBBLE),
        ShapeStyle::AngularSharp => sharp_blob(center, size),
        ShapeStyle::Heart => heart(center, size),
        ShapeStyle::FlowingWave => flowing_wave(center, size),
        ShapeStyle::SpiralSwirl => spiral(center, size),
        ShapeStyle::GeometricPolygon => polygon(center, size),
        ShapeStyle::AscendingArc => ascending_arc(center, size),
    }
}

/// Evenly spaced samples in `[start, end]` (or `[start, end)` when
/// `include_end` is false).
fn linspace(start: f64, end: f64, count: usize, include_end: bool) -> impl Iterator<Item = f64> {
    let divisions = if include_end {
        count.saturating_sub(1).max(1)
    } else {
        count.max(1)
    };
    let step = (end - start) / divisions as f64;
    (0..count).map(move |idx| start + step * idx as f64)
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

fn wobble_blob(rng: &mut ChaCha8Rng, center: Point, size: f64, wobble: f64) -> Vec<Point> {
    linspace(0.0, TAU, WOBBLE_SAMPLES, false)
        .map(|angle| {
            let factor = 1.0 + wobble * (rng.gen::<f64>() - 0.5);
            polar(center, size * factor, angle)
        })
        .collect()
}

fn sharp_blob(center: Point, size: f64) -> Vec<Point> {
    linspace(0.0, TAU, SHARP_SAMPLES, false)
        .map(|angle| {
            let radius = size * (1.0 + SHARP_WOBBLE * (angle * SHARP_LOBES).sin().abs());
            polar(center, radius, angle)
        })
        .collect()
}

fn heart(center: Point, size: f64) -> Vec<Point> {
    linspace(0.0, TAU, HEART_SAMPLES, true)
        .map(|t| {
            let x = size * 16.0 * t.sin().powi(3);
            let y = size
                * (13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
            Point::new(center.x + x / HEART_SCALE, center.y + y / HEART_SCALE)
        })
        .collect()
}

fn flowing_wave(center: Point, size: f64) -> Vec<Point> {
    linspace(0.0, TAU, WAVE_SAMPLES, true)
        .map(|t| {
            let radius = size * (1.0 + WAVE_AMPLITUDE * (3.0 * t).sin());
            Point::new(
                center.x + radius * t.cos(),
                center.y + radius * t.sin() * WAVE_STRETCH_Y,
            )
        })
        .collect()
}

fn spiral(center: Point, size: f64) -> Vec<Point> {
    let turns = 4.0 * PI;
    linspace(0.0, turns, SPIRAL_SAMPLES, true)
        .map(|t| {
            let radius = size * (0.5 + t / turns);
            Point::new(
                center.x + radius * t.cos() * SPIRAL_COMPRESSION,
                center.y + radius * t.sin() * SPIRAL_COMPRESSION,
            )
        })
        .collect()
}

fn polygon(center: Point, size: f64) -> Vec<Point> {
    (0..POLYGON_VERTICES)
        .map(|idx| polar(center, size, idx as f64 * PI / 3.0))
        .collect()
}

fn ascending_arc(center: Point, size: f64) -> Vec<Point> {
    linspace(0.0, TAU, ARC_SAMPLES, true)
        .map(|t| {
            let base = polar(center, size, t);
            Point::new(base.x, base.y + t / ARC_DRIFT)
        })
        .collect()
}
