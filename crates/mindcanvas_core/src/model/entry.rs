//! Journal entry domain model.
//!
//! # Responsibility
//! - Define the one-per-day record a user writes.
//! - Provide field-shape validation used by storage and import paths.
//!
//! # Invariants
//! - `date` is the unique key; saving a second entry for a date overwrites.
//! - `intensity` is within `1..=10` for stored entries.
//! - `note` holds at most `NOTE_MAX_CHARS` characters.
//! - `activities` holds at most `MAX_ACTIVITIES` non-blank labels.
//! - Empty weather strings are normalized to `None`.

use crate::model::emotion::Emotion;
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const INTENSITY_MIN: u8 = 1;
pub const INTENSITY_MAX: u8 = 10;
pub const NOTE_MAX_CHARS: usize = 300;
pub const MAX_ACTIVITIES: usize = 3;
/// Calendar-day key format used in labels and the export shape.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Weather tags offered to users. Other values are accepted as free text.
pub const WEATHER_OPTIONS: &[&str] = &[
    "☀️ Sunny",
    "⛅ Partly Cloudy",
    "☁️ Cloudy",
    "🌧️ Rainy",
    "⛈️ Stormy",
    "❄️ Snowy",
];

/// Activity labels offered to users. Other values are accepted as free text.
pub const ACTIVITY_OPTIONS: &[&str] = &[
    "Work",
    "Exercise",
    "Social",
    "Creative",
    "Rest",
    "Learning",
    "Entertainment",
    "Nature",
    "Family",
];

/// Caller-owned entry store, ascending by date.
pub type EntryMap = BTreeMap<NaiveDate, JournalEntry>;

/// Validation failures for entry field shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    IntensityOutOfRange(u8),
    NoteTooLong { chars: usize, max: usize },
    TooManyActivities { count: usize, max: usize },
    BlankActivity,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IntensityOutOfRange(value) => write!(
                f,
                "intensity {value} is outside {INTENSITY_MIN}..={INTENSITY_MAX}"
            ),
            Self::NoteTooLong { chars, max } => {
                write!(f, "note has {chars} characters, limit is {max}")
            }
            Self::TooManyActivities { count, max } => {
                write!(f, "{count} activities given, limit is {max}")
            }
            Self::BlankActivity => write!(f, "activity labels cannot be blank"),
        }
    }
}

impl Error for EntryValidationError {}

/// One day's journal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub emotion: Emotion,
    pub intensity: u8,
    pub note: String,
    pub weather: Option<String>,
    pub activities: Vec<String>,
    /// Local wall-clock time the entry was written.
    pub created_at: NaiveDateTime,
}

impl JournalEntry {
    /// Creates an entry stamped with the current local time.
    pub fn new(date: NaiveDate, emotion: Emotion, intensity: u8) -> Self {
        Self {
            date,
            emotion,
            intensity,
            note: String::new(),
            weather: None,
            activities: Vec::new(),
            created_at: Local::now().naive_local(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Sets weather; blank strings clear it.
    pub fn with_weather(mut self, weather: impl Into<String>) -> Self {
        self.weather = normalize_weather(Some(weather.into()));
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

    /// Overrides the creation stamp; used by import paths and tests.
    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }

    /// `YYYY-MM-DD` key label.
    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Validates field shapes.
    ///
    /// # Errors
    /// - `IntensityOutOfRange` outside `1..=10`.
    /// - `NoteTooLong` above `NOTE_MAX_CHARS` characters.
    /// - `TooManyActivities` above `MAX_ACTIVITIES` labels.
    /// - `BlankActivity` for whitespace-only labels.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if !(INTENSITY_MIN..=INTENSITY_MAX).contains(&self.intensity) {
            return Err(EntryValidationError::IntensityOutOfRange(self.intensity));
        }

        let chars = self.note.chars().count();
        if chars > NOTE_MAX_CHARS {
            return Err(EntryValidationError::NoteTooLong {
                chars,
                max: NOTE_MAX_CHARS,
            });
        }

        if self.activities.len() > MAX_ACTIVITIES {
            return Err(EntryValidationError::TooManyActivities {
                count: self.activities.len(),
                max: MAX_ACTIVITIES,
            });
        }
        if self.activities.iter().any(|label| label.trim().is_empty()) {
            return Err(EntryValidationError::BlankActivity);
        }

        Ok(())
    }
}

/// Parses a `YYYY-MM-DD` key.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub(crate) fn normalize_weather(weather: Option<String>) -> Option<String> {
    weather
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{normalize_weather, parse_date, EntryValidationError, JournalEntry};
    use crate::model::emotion::Emotion;

    fn entry(intensity: u8) -> JournalEntry {
        JournalEntry::new(parse_date("2024-03-01").unwrap(), Emotion::Hopeful, intensity)
    }

    #[test]
    fn weather_blank_is_normalized_to_none() {
        assert_eq!(normalize_weather(Some("  ".to_string())), None);
        assert_eq!(
            normalize_weather(Some(" ☀️ Sunny ".to_string())).as_deref(),
            Some("☀️ Sunny")
        );
    }

    #[test]
    fn validate_checks_intensity_bounds() {
        assert!(entry(1).validate().is_ok());
        assert!(entry(10).validate().is_ok());
        assert_eq!(
            entry(0).validate(),
            Err(EntryValidationError::IntensityOutOfRange(0))
        );
        assert_eq!(
            entry(11).validate(),
            Err(EntryValidationError::IntensityOutOfRange(11))
        );
    }

    #[test]
    fn validate_counts_note_chars_not_bytes() {
        let note = "é".repeat(300);
        assert!(entry(5).with_note(note).validate().is_ok());

        let err = entry(5).with_note("x".repeat(301)).validate().unwrap_err();
        assert_eq!(
            err,
            EntryValidationError::NoteTooLong {
                chars: 301,
                max: 300
            }
        );
    }

    #[test]
    fn date_label_uses_iso_day() {
        assert_eq!(entry(5).date_label(), "2024-03-01");
        assert_eq!(parse_date("not a date"), None);
    }
}
