//! JSON export/import in the journal's portable shape.
//!
//! # Responsibility
//! - Serialize an `EntryMap` as `{ "YYYY-MM-DD": { emotion, intensity,
//!   note, weather, activities, timestamp } }`.
//! - Parse and validate the same shape into entries.
//!
//! # Invariants
//! - Parsing is all-or-nothing: any bad key, record or field fails the
//!   whole document.
//! - Missing `weather` is written as an empty string.
//! - Missing `timestamp` on import defaults to midnight of the entry date.

use crate::model::emotion::Emotion;
use crate::model::entry::{
    normalize_weather, parse_date, EntryMap, EntryValidationError, JournalEntry,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Import failure; nothing has been written when this is returned.
#[derive(Debug)]
pub enum ImportError {
    /// Document is not valid JSON or does not match the record shape.
    Json(serde_json::Error),
    /// Object key is not a `YYYY-MM-DD` date.
    InvalidDate(String),
    /// Record timestamp cannot be parsed.
    InvalidTimestamp { date: NaiveDate, value: String },
    /// Record fails entry validation.
    InvalidEntry {
        date: NaiveDate,
        source: EntryValidationError,
    },
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed journal document: {err}"),
            Self::InvalidDate(key) => write!(f, "invalid entry date key `{key}`"),
            Self::InvalidTimestamp { date, value } => {
                write!(f, "invalid timestamp `{value}` for entry {date}")
            }
            Self::InvalidEntry { date, source } => write!(f, "invalid entry {date}: {source}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidEntry { source, .. } => Some(source),
            Self::InvalidDate(_) | Self::InvalidTimestamp { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Wire record; the date lives in the enclosing object key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct EntryRecord {
    emotion: Emotion,
    intensity: u8,
    #[serde(default)]
    note: String,
    #[serde(default)]
    weather: Option<String>,
    #[serde(default)]
    activities: Vec<String>,
    #[serde(default)]
    timestamp: Option<String>,
}

impl From<&JournalEntry> for EntryRecord {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            emotion: entry.emotion,
            intensity: entry.intensity,
            note: entry.note.clone(),
            weather: Some(entry.weather.clone().unwrap_or_default()),
            activities: entry.activities.clone(),
            timestamp: Some(entry.created_at.format(TIMESTAMP_FORMAT).to_string()),
        }
    }
}

/// Serializes entries as pretty-printed JSON keyed by date.
pub fn export_json(entries: &EntryMap) -> Result<String, serde_json::Error> {
    let document: BTreeMap<String, EntryRecord> = entries
        .values()
        .map(|entry| (entry.date_label(), EntryRecord::from(entry)))
        .collect();
    serde_json::to_string_pretty(&document)
}

/// Parses and validates an exported document.
///
/// # Errors
/// - `Json` when the text is not the expected object shape.
/// - `InvalidDate`, `InvalidTimestamp`, `InvalidEntry` for bad records.
pub fn parse_import(text: &str) -> Result<Vec<JournalEntry>, ImportError> {
    let document: BTreeMap<String, EntryRecord> = serde_json::from_str(text)?;
    let mut entries = Vec::with_capacity(document.len());

    for (key, record) in document {
        let date = parse_date(&key).ok_or_else(|| ImportError::InvalidDate(key.clone()))?;
        let created_at = match record.timestamp.as_deref() {
            Some(value) if !value.trim().is_empty() => {
                parse_timestamp(value).ok_or_else(|| ImportError::InvalidTimestamp {
                    date,
                    value: value.to_string(),
                })?
            }
            _ => date.and_time(NaiveTime::MIN),
        };

        let entry = JournalEntry {
            date,
            emotion: record.emotion,
            intensity: record.intensity,
            note: record.note,
            weather: normalize_weather(record.weather),
            activities: record.activities,
            created_at,
        };
        entry
            .validate()
            .map_err(|source| ImportError::InvalidEntry { date, source })?;
        entries.push(entry);
    }

    Ok(entries)
}

/// Accepts naive ISO timestamps with optional fraction, or RFC 3339.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|parsed| parsed.naive_local())
        })
}

#[cfg(test)]
mod tests {
    use super::parse_timestamp;

    #[test]
    fn timestamp_accepts_naive_and_offset_forms() {
        assert!(parse_timestamp("2024-01-05T08:30:00.123456").is_some());
        assert!(parse_timestamp("2024-01-05T08:30:00").is_some());
        assert!(parse_timestamp("2024-01-05T08:30:00+02:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
