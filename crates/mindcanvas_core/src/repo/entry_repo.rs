//! Journal entry repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist one entry per calendar day in `journal_entries`.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - Write paths call `JournalEntry::validate()` before SQL mutations.
//! - Upserting an existing date overwrites every field of that row.
//! - `merge_entries` applies all rows in one transaction or none.
//! - Read paths reject invalid persisted rows instead of masking them.

use crate::db::DbError;
use crate::model::emotion::Emotion;
use crate::model::entry::{parse_date, EntryMap, EntryValidationError, JournalEntry, DATE_FORMAT};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, Row, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ENTRY_SELECT_SQL: &str = "SELECT
    entry_date,
    emotion,
    intensity,
    note,
    weather,
    activities,
    created_at
FROM journal_entries";

const ENTRY_UPSERT_SQL: &str = "INSERT INTO journal_entries (
    entry_date,
    emotion,
    intensity,
    note,
    weather,
    activities,
    created_at
) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
ON CONFLICT(entry_date) DO UPDATE SET
    emotion = excluded.emotion,
    intensity = excluded.intensity,
    note = excluded.note,
    weather = excluded.weather,
    activities = excluded.activities,
    created_at = excluded.created_at;";

const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for journal persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(EntryValidationError),
    Db(DbError),
    NotFound(NaiveDate),
    InvalidData(String),
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(date) => write!(f, "no journal entry for {date}"),
            Self::InvalidData(message) => write!(f, "invalid persisted entry data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; run migrations first")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for journal entries keyed by date.
pub trait EntryRepository {
    /// Inserts or overwrites the entry for `entry.date`.
    fn upsert_entry(&self, entry: &JournalEntry) -> RepoResult<()>;
    fn get_entry(&self, date: NaiveDate) -> RepoResult<Option<JournalEntry>>;
    /// Removes the entry for `date`; `NotFound` when absent.
    fn delete_entry(&self, date: NaiveDate) -> RepoResult<()>;
    /// All entries, ascending by date.
    fn list_entries(&self) -> RepoResult<EntryMap>;
    /// Upserts every entry atomically; returns the number written.
    fn merge_entries(&mut self, entries: &[JournalEntry]) -> RepoResult<usize>;
    /// Removes every entry; returns the number removed.
    fn clear_entries(&self) -> RepoResult<usize>;
}

/// SQLite-backed journal repository.
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteEntryRepository<'conn> {
    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// - `MissingRequiredTable` when `journal_entries` does not exist.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        if !table_exists(conn, "journal_entries")? {
            return Err(RepoError::MissingRequiredTable("journal_entries"));
        }
        Ok(Self { conn })
    }
}

impl EntryRepository for SqliteEntryRepository<'_> {
    fn upsert_entry(&self, entry: &JournalEntry) -> RepoResult<()> {
        upsert_with(self.conn, entry)
    }

    fn get_entry(&self, date: NaiveDate) -> RepoResult<Option<JournalEntry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} WHERE entry_date = ?1;"))?;
        let mut rows = stmt.query([date_key(date)])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_entry_row(row)?)),
            None => Ok(None),
        }
    }

    fn delete_entry(&self, date: NaiveDate) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM journal_entries WHERE entry_date = ?1;",
            [date_key(date)],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(date));
        }
        Ok(())
    }

    fn list_entries(&self) -> RepoResult<EntryMap> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} ORDER BY entry_date ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut entries = EntryMap::new();
        while let Some(row) = rows.next()? {
            let entry = parse_entry_row(row)?;
            entries.insert(entry.date, entry);
        }
        Ok(entries)
    }

    fn merge_entries(&mut self, entries: &[JournalEntry]) -> RepoResult<usize> {
        for entry in entries {
            entry.validate()?;
        }

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        for entry in entries {
            upsert_with(&tx, entry)?;
        }
        tx.commit()?;
        Ok(entries.len())
    }

    fn clear_entries(&self) -> RepoResult<usize> {
        let removed = self.conn.execute("DELETE FROM journal_entries;", [])?;
        Ok(removed)
    }
}

fn upsert_with(conn: &Connection, entry: &JournalEntry) -> RepoResult<()> {
    entry.validate()?;

    let activities = serde_json::to_string(&entry.activities)
        .map_err(|err| RepoError::InvalidData(format!("activities not encodable: {err}")))?;
    conn.execute(
        ENTRY_UPSERT_SQL,
        params![
            date_key(entry.date),
            entry.emotion.label(),
            i64::from(entry.intensity),
            entry.note.as_str(),
            entry.weather.as_deref(),
            activities,
            entry.created_at.format(CREATED_AT_FORMAT).to_string(),
        ],
    )?;
    Ok(())
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<JournalEntry> {
    let date_text: String = row.get("entry_date")?;
    let date = parse_date(&date_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid entry_date `{date_text}`"))
    })?;

    let emotion_text: String = row.get("emotion")?;
    let emotion = Emotion::from_label(&emotion_text).ok_or_else(|| {
        RepoError::InvalidData(format!("unknown emotion `{emotion_text}` for {date_text}"))
    })?;

    let intensity_raw: i64 = row.get("intensity")?;
    let intensity = u8::try_from(intensity_raw).map_err(|_| {
        RepoError::InvalidData(format!("intensity {intensity_raw} out of range for {date_text}"))
    })?;

    let activities_text: String = row.get("activities")?;
    let activities: Vec<String> = serde_json::from_str(&activities_text).map_err(|err| {
        RepoError::InvalidData(format!("invalid activities for {date_text}: {err}"))
    })?;

    let created_text: String = row.get("created_at")?;
    let created_at = NaiveDateTime::parse_from_str(&created_text, CREATED_AT_FORMAT)
        .map_err(|err| {
            RepoError::InvalidData(format!("invalid created_at `{created_text}`: {err}"))
        })?;

    Ok(JournalEntry {
        date,
        emotion,
        intensity,
        note: row.get("note")?,
        weather: row.get("weather")?,
        activities,
        created_at,
    })
}

fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
