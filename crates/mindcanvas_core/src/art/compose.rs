//! Composition renderer: layers seeded shapes into one artwork.
//!
//! # Responsibility
//! - Resolve the emotion profile and effective seed for a request.
//! - Draw placement, size, color and opacity per layer from one seeded
//!   stream and delegate outlines to the shape synthesizer.
//! - Lay out the overlay text block.
//!
//! # Invariants
//! - The random stream is constructed once per call from the seed; layer
//!   outlines use the sub-seed `seed + i`.
//! - Same request in, same artifact out.
//! - Intensity is not clamped here; out-of-range values still render.

use crate::art::artifact::{Artifact, Layer, OverlayRole, TextOverlay};
use crate::art::color::Rgb;
use crate::art::shape::{synthesize, Point};
use crate::model::emotion::Emotion;
use crate::model::entry::JournalEntry;
use once_cell::sync::Lazy;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use regex::Regex;

/// Derived seeds are reduced into `[0, SEED_MODULUS)`.
pub const SEED_MODULUS: u64 = 10_000;
/// Note characters shown before the ellipsis.
pub const NOTE_PREVIEW_CHARS: usize = 80;
/// Activities shown on the canvas.
pub const OVERLAY_ACTIVITIES: usize = 3;
/// Number of glyphs in the intensity dial.
pub const DIAL_SLOTS: usize = 10;

const PLACEMENT_MIN: f64 = 0.1;
const PLACEMENT_MAX: f64 = 0.9;
const SIZE_MIN: f64 = 0.12;
const SIZE_MAX: f64 = 0.38;
const ALPHA_MIN: f64 = 0.25;
const ALPHA_MAX: f64 = 0.55;
const FOOTER_TOP: f64 = 0.08;
const FOOTER_STEP: f64 = 0.03;
const DIAL_FILLED: char = '●';
const DIAL_EMPTY: char = '○';
const ACTIVITY_SEPARATOR: &str = " • ";

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Inputs for one artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Emotion label as supplied by the caller; resolved leniently.
    pub emotion: String,
    pub date_label: String,
    pub note: String,
    pub intensity: u8,
    pub weather: Option<String>,
    pub activities: Vec<String>,
    /// Explicit seed; derived from `(date_label, emotion)` when `None`.
    pub seed: Option<u64>,
}

impl RenderRequest {
    pub fn new(emotion: impl Into<String>, date_label: impl Into<String>, intensity: u8) -> Self {
        Self {
            emotion: emotion.into(),
            date_label: date_label.into(),
            note: String::new(),
            intensity,
            weather: None,
            activities: Vec::new(),
            seed: None,
        }
    }

    /// Full render request for a stored entry.
    pub fn from_entry(entry: &JournalEntry) -> Self {
        Self {
            emotion: entry.emotion.label().to_string(),
            date_label: entry.date_label(),
            note: entry.note.clone(),
            intensity: entry.intensity,
            weather: entry.weather.clone(),
            activities: entry.activities.clone(),
            seed: None,
        }
    }

    /// Gallery thumbnail: same artwork, no note/weather/activities.
    pub fn thumbnail(entry: &JournalEntry) -> Self {
        Self::new(entry.emotion.label(), entry.date_label(), entry.intensity)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_weather(mut self, weather: impl Into<String>) -> Self {
        let weather = weather.into();
        self.weather = if weather.trim().is_empty() {
            None
        } else {
            Some(weather)
        };
        self
    }

    pub fn with_activities<I, S>(mut self, activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.activities = activities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seed actually used for this request.
    pub fn effective_seed(&self) -> u64 {
        self.seed
            .unwrap_or_else(|| derive_seed(&self.date_label, &self.emotion))
    }
}

/// Deterministic seed from a date label and emotion label.
///
/// FNV-1a over the UTF-8 bytes of `date_label + emotion`, reduced modulo
/// `SEED_MODULUS`.
pub fn derive_seed(date_label: &str, emotion: &str) -> u64 {
    let hash = date_label
        .bytes()
        .chain(emotion.bytes())
        .fold(FNV_OFFSET_BASIS, |acc, byte| {
            (acc ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        });
    hash % SEED_MODULUS
}

/// Number of layers for a profile's base count at the given intensity.
///
/// `round(base * (0.7 + intensity / 20))`; non-decreasing in intensity.
pub fn layer_count(base_layers: u32, intensity: u8) -> usize {
    let scaled = f64::from(base_layers) * (0.7 + f64::from(intensity) / 20.0);
    // Non-negative by construction.
    scaled.round() as usize
}

/// Background shade: darker for higher intensity, blue slightly lower.
pub fn background_for(intensity: u8) -> Rgb {
    let value = 0.98 - f64::from(intensity) / 100.0;
    Rgb::new(value, value, value - 0.02)
}

/// Renders one artwork. Pure; never fails.
pub fn render(request: &RenderRequest) -> Artifact {
    let emotion = Emotion::resolve(&request.emotion);
    let profile = emotion.profile();
    let style = profile.style();
    let seed = request.effective_seed();
    let intensity = f64::from(request.intensity);
    let count = layer_count(profile.base_layers, request.intensity);

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut layers = Vec::with_capacity(count);
    for idx in 0..count {
        let center = Point::new(
            rng.gen_range(PLACEMENT_MIN..PLACEMENT_MAX),
            rng.gen_range(PLACEMENT_MIN..PLACEMENT_MAX),
        );
        let size = rng.gen_range(SIZE_MIN..SIZE_MAX) * (1.0 + intensity / 30.0);
        let points = synthesize(style, center, size, seed.wrapping_add(idx as u64));
        let color = profile.palette[rng.gen_range(0..profile.palette.len())];
        let fade = 1.0 - idx as f64 / (count as f64 * 2.0);
        let alpha = rng.gen_range(ALPHA_MIN..ALPHA_MAX) * fade;

        layers.push(Layer {
            center,
            size,
            color,
            alpha,
            points,
        });
    }

    Artifact {
        emotion,
        seed,
        background: background_for(request.intensity),
        layers,
        overlay: overlay_lines(request),
    }
}

/// `intensity` filled glyphs followed by the remaining empty ones.
pub fn intensity_dial(intensity: u8) -> String {
    let filled = usize::from(intensity);
    let empty = DIAL_SLOTS.saturating_sub(filled);
    let mut dial = String::with_capacity((filled + empty) * DIAL_FILLED.len_utf8());
    dial.extend(std::iter::repeat(DIAL_FILLED).take(filled));
    dial.extend(std::iter::repeat(DIAL_EMPTY).take(empty));
    dial
}

/// First `NOTE_PREVIEW_CHARS` characters of the note, plus `...` when the
/// note is longer.
///
/// Length is judged on the note as written; whitespace runs are collapsed
/// only in the text shown.
pub fn note_preview(note: &str) -> String {
    let truncated = note.chars().count() > NOTE_PREVIEW_CHARS;
    let head: String = note.chars().take(NOTE_PREVIEW_CHARS).collect();
    let mut preview = WHITESPACE_RE.replace_all(head.trim(), " ").into_owned();
    if truncated {
        preview.push_str("...");
    }
    preview
}

fn overlay_lines(request: &RenderRequest) -> Vec<TextOverlay> {
    let title = Rgb::from_rgb8(0x2c, 0x3e, 0x50);
    let muted = Rgb::from_rgb8(0x7f, 0x8c, 0x8d);
    let weather_color = Rgb::from_rgb8(0x34, 0x49, 0x5e);
    let note_color = Rgb::from_rgb8(0x55, 0x55, 0x55);

    let mut lines = vec![
        line(OverlayRole::Date, request.date_label.clone(), 0.97, 13.0, title).bold(),
        line(OverlayRole::Emotion, request.emotion.clone(), 0.93, 22.0, Rgb::gray(0.0)).bold(),
        line(
            OverlayRole::IntensityDial,
            intensity_dial(request.intensity),
            0.89,
            10.0,
            muted,
        ),
    ];

    let mut y = FOOTER_TOP;
    if let Some(weather) = request.weather.as_deref().filter(|w| !w.trim().is_empty()) {
        lines.push(line(
            OverlayRole::Weather,
            format!("Weather: {weather}"),
            y,
            9.0,
            weather_color,
        ));
        y -= FOOTER_STEP;
    }

    if !request.activities.is_empty() {
        let joined = request
            .activities
            .iter()
            .take(OVERLAY_ACTIVITIES)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(ACTIVITY_SEPARATOR);
        lines.push(line(OverlayRole::Activities, joined, y, 8.0, muted).italic());
        y -= FOOTER_STEP;
    }

    if !request.note.trim().is_empty() {
        lines.push(
            line(
                OverlayRole::Note,
                format!("\"{}\"", note_preview(&request.note)),
                y,
                9.0,
                note_color,
            )
            .italic(),
        );
    }

    lines
}

fn line(role: OverlayRole, text: String, y: f64, font_size: f64, color: Rgb) -> TextOverlay {
    TextOverlay {
        role,
        text,
        anchor: Point::new(0.5, y),
        font_size,
        color,
        bold: false,
        italic: false,
    }
}

impl TextOverlay {
    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}
