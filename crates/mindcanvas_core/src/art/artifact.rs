//! Rendered artwork and its SVG serialization.
//!
//! # Responsibility
//! - Hold the draw commands produced by one composition call.
//! - Serialize them to a standalone SVG document.
//!
//! # Invariants
//! - `layers` are stored in paint order (first drawn first).
//! - Canvas coordinates are unit-square with `y` up; SVG output flips `y`.

use crate::art::color::Rgb;
use crate::art::shape::Point;
use crate::model::emotion::Emotion;
use serde::Serialize;
use std::fmt::Write as _;

/// Canvas width in SVG user units.
pub const CANVAS_WIDTH: f64 = 700.0;
/// Canvas height in SVG user units (7:9 aspect).
pub const CANVAS_HEIGHT: f64 = 900.0;

const POINTS_TO_UNITS: f64 = 100.0 / 72.0;

/// One filled outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub center: Point,
    pub size: f64,
    pub color: Rgb,
    pub alpha: f64,
    pub points: Vec<Point>,
}

/// What an overlay line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayRole {
    Date,
    Emotion,
    IntensityDial,
    Weather,
    Activities,
    Note,
}

/// One horizontally centered text line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOverlay {
    pub role: OverlayRole,
    pub text: String,
    /// Anchor in canvas space (unit square, `y` up).
    pub anchor: Point,
    /// Font size in points.
    pub font_size: f64,
    pub color: Rgb,
    pub bold: bool,
    pub italic: bool,
}

/// Output of one composition call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artifact {
    /// Emotion whose profile was used (after fallback).
    pub emotion: Emotion,
    /// Effective seed.
    pub seed: u64,
    pub background: Rgb,
    pub layers: Vec<Layer>,
    pub overlay: Vec<TextOverlay>,
}

impl Artifact {
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Overlay line for `role`, if present.
    pub fn overlay_text(&self, role: OverlayRole) -> Option<&str> {
        self.overlay
            .iter()
            .find(|line| line.role == role)
            .map(|line| line.text.as_str())
    }

    /// Serializes the artwork as an SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = CANVAS_WIDTH,
            h = CANVAS_HEIGHT
        );
        let _ = write!(
            svg,
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            self.background.to_hex()
        );

        for layer in &self.layers {
            if layer.points.is_empty() {
                continue;
            }
            let _ = write!(
                svg,
                "<path d=\"{}\" fill=\"{}\" fill-opacity=\"{:.3}\" stroke=\"none\"/>",
                path_data(&layer.points),
                layer.color.to_hex(),
                layer.alpha
            );
        }

        for line in &self.overlay {
            svg.push_str(&text_svg(line));
        }

        svg.push_str("</svg>");
        svg
    }
}

pub(crate) fn to_svg_x(x: f64) -> f64 {
    x * CANVAS_WIDTH
}

pub(crate) fn to_svg_y(y: f64) -> f64 {
    (1.0 - y) * CANVAS_HEIGHT
}

fn path_data(points: &[Point]) -> String {
    let mut data = String::new();
    for (idx, point) in points.iter().enumerate() {
        let command = if idx == 0 { 'M' } else { 'L' };
        let _ = write!(
            data,
            "{command}{:.2} {:.2} ",
            to_svg_x(point.x),
            to_svg_y(point.y)
        );
    }
    data.push('Z');
    data
}

fn text_svg(line: &TextOverlay) -> String {
    let weight = if line.bold { "bold" } else { "normal" };
    let style = if line.italic { "italic" } else { "normal" };
    format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"{:.1}\" font-weight=\"{weight}\" font-style=\"{style}\" fill=\"{}\">{}</text>",
        to_svg_x(line.anchor.x),
        to_svg_y(line.anchor.y),
        line.font_size * POINTS_TO_UNITS,
        line.color.to_hex(),
        escape_xml(&line.text)
    )
}

pub(crate) fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_xml, path_data, to_svg_y};
    use crate::art::shape::Point;

    #[test]
    fn escape_xml_handles_markup_characters() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn path_flips_y_axis_and_closes() {
        let data = path_data(&[Point::new(0.0, 1.0), Point::new(1.0, 0.0)]);
        assert_eq!(data, "M0.00 0.00 L700.00 900.00 Z");
        assert_eq!(to_svg_y(0.5), 450.0);
    }
}
