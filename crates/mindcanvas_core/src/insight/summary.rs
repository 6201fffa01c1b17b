//! Aggregate statistics over a journal.
//!
//! # Invariants
//! - Input is the caller-owned `EntryMap`; "recent" means latest by date.
//! - Count ties resolve to the earlier emotion in catalog order.
//! - Empty input yields a zero summary, never an error.

use crate::model::emotion::Emotion;
use crate::model::entry::EntryMap;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Entries considered by the weekly trend and recent snapshot.
pub const TREND_WINDOW: usize = 7;
/// Activities listed by `top_activities` unless told otherwise.
pub const TOP_ACTIVITIES_DEFAULT: usize = 5;

/// Direction of intensity across the recent window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    #[default]
    Stable,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Self::Improving => "📈 Improving",
            Self::Declining => "📉 Declining",
            Self::Stable => "➡️ Stable",
        }
    }

    /// Compares last against first; fewer than two values is `Stable`.
    pub fn from_intensities(values: &[u8]) -> Self {
        match (values.first(), values.last()) {
            (Some(first), Some(last)) if values.len() >= 2 => match last.cmp(first) {
                std::cmp::Ordering::Greater => Self::Improving,
                std::cmp::Ordering::Less => Self::Declining,
                std::cmp::Ordering::Equal => Self::Stable,
            },
            _ => Self::Stable,
        }
    }
}

impl Display for Trend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Read-only aggregate over a journal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrendSummary {
    pub most_common: Option<Emotion>,
    /// Occurrences of `most_common`.
    pub count: usize,
    /// Mean intensity, one decimal.
    pub avg_intensity: f64,
    /// Percentage of positive entries, one decimal.
    pub positivity: f64,
    pub trend: Trend,
    pub total: usize,
}

/// One row of the emotion distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionShare {
    pub emotion: Emotion,
    pub count: usize,
    /// Share of all entries, one decimal.
    pub percentage: f64,
}

/// Most common emotion and mean intensity over the recent window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentSnapshot {
    pub most_common: Emotion,
    pub avg_intensity: f64,
    pub entries: usize,
}

/// Summarizes the whole journal.
pub fn summarize(entries: &EntryMap) -> TrendSummary {
    if entries.is_empty() {
        return TrendSummary::default();
    }

    let total = entries.len();
    let counts = emotion_counts(entries.values().map(|entry| entry.emotion));
    let (most_common, count) = most_common(&counts);
    let intensity_sum: u64 = entries
        .values()
        .map(|entry| u64::from(entry.intensity))
        .sum();
    let positive = entries
        .values()
        .filter(|entry| entry.emotion.is_positive())
        .count();

    let window = recent_intensities(entries, TREND_WINDOW);

    TrendSummary {
        most_common,
        count,
        avg_intensity: round1(intensity_sum as f64 / total as f64),
        positivity: round1(positive as f64 / total as f64 * 100.0),
        trend: Trend::from_intensities(&window),
        total,
    }
}

/// Emotion counts sorted by count descending, ties in catalog order.
pub fn emotion_distribution(entries: &EntryMap) -> Vec<EmotionShare> {
    let total = entries.len();
    if total == 0 {
        return Vec::new();
    }

    let counts = emotion_counts(entries.values().map(|entry| entry.emotion));
    let mut shares: Vec<EmotionShare> = Emotion::ALL
        .into_iter()
        .filter(|emotion| counts[emotion.index()] > 0)
        .map(|emotion| EmotionShare {
            emotion,
            count: counts[emotion.index()],
            percentage: round1(counts[emotion.index()] as f64 / total as f64 * 100.0),
        })
        .collect();
    // Stable sort keeps catalog order among equal counts.
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

/// Activity counts sorted descending, ties by first appearance (by date).
pub fn top_activities(entries: &EntryMap, limit: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for activity in entries.values().flat_map(|entry| entry.activities.iter()) {
        match counts.iter_mut().find(|(name, _)| name == activity) {
            Some((_, count)) => *count += 1,
            None => counts.push((activity.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

/// Snapshot of the most recent `TREND_WINDOW` entries.
pub fn recent_snapshot(entries: &EntryMap) -> Option<RecentSnapshot> {
    let recent: Vec<_> = entries.values().rev().take(TREND_WINDOW).collect();
    if recent.is_empty() {
        return None;
    }

    let counts = emotion_counts(recent.iter().map(|entry| entry.emotion));
    let (most_common, _) = most_common(&counts);
    let sum: u64 = recent.iter().map(|entry| u64::from(entry.intensity)).sum();

    Some(RecentSnapshot {
        most_common: most_common.unwrap_or_default(),
        avg_intensity: round1(sum as f64 / recent.len() as f64),
        entries: recent.len(),
    })
}

/// Intensities of the latest `window` entries, oldest first.
fn recent_intensities(entries: &EntryMap, window: usize) -> Vec<u8> {
    let mut values: Vec<u8> = entries
        .values()
        .rev()
        .take(window)
        .map(|entry| entry.intensity)
        .collect();
    values.reverse();
    values
}

fn emotion_counts(emotions: impl Iterator<Item = Emotion>) -> [usize; 12] {
    let mut counts = [0usize; 12];
    for emotion in emotions {
        counts[emotion.index()] += 1;
    }
    counts
}

fn most_common(counts: &[usize; 12]) -> (Option<Emotion>, usize) {
    let mut best: (Option<Emotion>, usize) = (None, 0);
    for emotion in Emotion::ALL {
        let count = counts[emotion.index()];
        if count > best.1 {
            best = (Some(emotion), count);
        }
    }
    best
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::{round1, Trend};

    #[test]
    fn trend_needs_two_values() {
        assert_eq!(Trend::from_intensities(&[]), Trend::Stable);
        assert_eq!(Trend::from_intensities(&[9]), Trend::Stable);
        assert_eq!(Trend::from_intensities(&[3, 9, 3]), Trend::Stable);
        assert_eq!(Trend::from_intensities(&[5, 1, 2]), Trend::Declining);
    }

    #[test]
    fn round1_keeps_one_decimal() {
        assert_eq!(round1(200.0 / 3.0), 66.7);
        assert_eq!(round1(5.0), 5.0);
    }
}
