//! Mood chart series and SVG rendering.
//!
//! # Invariants
//! - The series covers at most `CHART_WINDOW` latest dates, oldest first.
//! - Each value averages the emotion's wellbeing score with the intensity.

use crate::art::artifact::escape_xml;
use crate::art::color::Rgb;
use crate::model::emotion::Emotion;
use crate::model::entry::EntryMap;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write as _;

/// Number of most recent dates charted.
pub const CHART_WINDOW: usize = 14;
/// Upper bound of the chart's value axis.
pub const CHART_MAX_VALUE: f64 = 10.0;

const CHART_WIDTH: f64 = 1000.0;
const CHART_HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 60.0;
const BAR_FILL: f64 = 0.8;

/// One charted day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    /// `MM-DD` axis label.
    pub label: String,
    pub value: f64,
    pub emotion: Emotion,
    pub intensity: u8,
}

/// Chart value for one emotion/intensity pair.
pub fn wellbeing_value(emotion: Emotion, intensity: u8) -> f64 {
    (f64::from(emotion.wellbeing_score()) + f64::from(intensity)) / 2.0
}

/// Latest `CHART_WINDOW` dates in ascending order with their values.
pub fn chart_series(entries: &EntryMap) -> Vec<ChartPoint> {
    let mut series: Vec<ChartPoint> = entries
        .values()
        .rev()
        .take(CHART_WINDOW)
        .map(|entry| ChartPoint {
            date: entry.date,
            label: entry.date.format("%m-%d").to_string(),
            value: wellbeing_value(entry.emotion, entry.intensity),
            emotion: entry.emotion,
            intensity: entry.intensity,
        })
        .collect();
    series.reverse();
    series
}

/// Bar-and-line chart over a mood series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodChart {
    pub points: Vec<ChartPoint>,
}

impl MoodChart {
    /// Builds the chart; `None` for an empty journal.
    pub fn from_entries(entries: &EntryMap) -> Option<Self> {
        let points = chart_series(entries);
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    /// Serializes the chart as an SVG document.
    pub fn to_svg(&self) -> String {
        let plot_width = CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let slot = plot_width / self.points.len().max(1) as f64;
        let baseline = MARGIN_TOP + plot_height;
        let y_for = |value: f64| {
            baseline - value.clamp(0.0, CHART_MAX_VALUE) / CHART_MAX_VALUE * plot_height
        };

        let mut svg = String::new();
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = CHART_WIDTH,
            h = CHART_HEIGHT
        );
        let _ = write!(
            svg,
            "<rect x=\"0\" y=\"0\" width=\"{CHART_WIDTH}\" height=\"{CHART_HEIGHT}\" fill=\"#f8f9fa\"/>"
        );

        for tick in (0..=10_u8).step_by(2) {
            let y = y_for(f64::from(tick));
            let _ = write!(
                svg,
                "<line x1=\"{MARGIN_LEFT}\" y1=\"{y:.2}\" x2=\"{:.2}\" y2=\"{y:.2}\" stroke=\"#cccccc\" stroke-dasharray=\"4 4\"/>",
                CHART_WIDTH - MARGIN_RIGHT
            );
            let _ = write!(
                svg,
                "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" font-family=\"sans-serif\" font-size=\"12\">{tick}</text>",
                MARGIN_LEFT - 8.0,
                y + 4.0
            );
        }

        let mut line_points = Vec::with_capacity(self.points.len());
        for (idx, point) in self.points.iter().enumerate() {
            let center_x = MARGIN_LEFT + slot * (idx as f64 + 0.5);
            let bar_width = slot * BAR_FILL;
            let top = y_for(point.value);
            let color = Rgb::red_yellow_green(point.value / CHART_MAX_VALUE);
            let _ = write!(
                svg,
                "<rect x=\"{:.2}\" y=\"{top:.2}\" width=\"{bar_width:.2}\" height=\"{:.2}\" fill=\"{}\" fill-opacity=\"0.7\"/>",
                center_x - bar_width / 2.0,
                baseline - top,
                color.to_hex()
            );
            let _ = write!(
                svg,
                "<text x=\"{center_x:.2}\" y=\"{:.2}\" text-anchor=\"end\" transform=\"rotate(-45 {center_x:.2} {:.2})\" font-family=\"sans-serif\" font-size=\"12\">{}</text>",
                baseline + 18.0,
                baseline + 18.0,
                escape_xml(&point.label)
            );
            line_points.push((center_x, top));
        }

        let polyline = line_points
            .iter()
            .map(|(x, y)| format!("{x:.2},{y:.2}"))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(
            svg,
            "<polyline points=\"{polyline}\" fill=\"none\" stroke=\"#2c3e50\" stroke-width=\"2\" stroke-opacity=\"0.6\"/>"
        );
        for (x, y) in &line_points {
            let _ = write!(
                svg,
                "<circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"5\" fill=\"#2c3e50\" fill-opacity=\"0.6\"/>"
            );
        }

        let _ = write!(
            svg,
            "<text x=\"16\" y=\"{:.2}\" transform=\"rotate(-90 16 {:.2})\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"14\" font-weight=\"bold\">Emotional Wellbeing</text>",
            MARGIN_TOP + plot_height / 2.0,
            MARGIN_TOP + plot_height / 2.0
        );
        svg.push_str("</svg>");
        svg
    }
}
