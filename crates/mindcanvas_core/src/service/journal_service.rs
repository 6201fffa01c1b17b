//! Journal use-case service.
//!
//! # Responsibility
//! - Provide save/get/delete/list APIs over an `EntryRepository`.
//! - Bridge stored entries into the art renderer and insight aggregator.
//! - Run JSON export and all-or-nothing merge import.
//!
//! # Invariants
//! - Saving for an existing date overwrites that day's entry.
//! - Import parses and validates the whole document before any write.
//! - Logged events carry dates and counts only, never note text.

use crate::art::artifact::Artifact;
use crate::art::compose::{render, RenderRequest};
use crate::insight::chart::MoodChart;
use crate::insight::gallery::{gallery_dates, GalleryRange};
use crate::insight::recommend::{Recommendation, ANALYTICS_MIN_ENTRIES, INSIGHTS_MIN_ENTRIES};
use crate::insight::summary::{
    emotion_distribution, recent_snapshot, summarize, top_activities, EmotionShare,
    RecentSnapshot, TrendSummary,
};
use crate::model::entry::{EntryMap, EntryValidationError, JournalEntry};
use crate::repo::entry_repo::{EntryRepository, RepoError, RepoResult};
use crate::transfer::json::{export_json, parse_import, ImportError};
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for journal use-cases.
#[derive(Debug)]
pub enum JournalServiceError {
    /// Entry fields fail shape validation.
    Validation(EntryValidationError),
    /// No entry stored for the date.
    EntryNotFound(NaiveDate),
    /// Import document rejected; storage untouched.
    Import(ImportError),
    /// Export serialization failed.
    Export(serde_json::Error),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Write succeeded but read-back disagrees.
    InconsistentState(&'static str),
}

impl Display for JournalServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid entry: {err}"),
            Self::EntryNotFound(date) => write!(f, "no journal entry for {date}"),
            Self::Import(err) => write!(f, "import failed: {err}"),
            Self::Export(err) => write!(f, "export failed: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent journal state: {details}")
            }
        }
    }
}

impl Error for JournalServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Import(err) => Some(err),
            Self::Export(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::EntryNotFound(_) | Self::InconsistentState(_) => None,
        }
    }
}

impl From<RepoError> for JournalServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(date) => Self::EntryNotFound(date),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

impl From<ImportError> for JournalServiceError {
    fn from(value: ImportError) -> Self {
        Self::Import(value)
    }
}

/// Journal facade over repository implementations.
pub struct JournalService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> JournalService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Saves (or overwrites) the entry for its date and returns the stored copy.
    pub fn save_entry(&self, entry: JournalEntry) -> Result<JournalEntry, JournalServiceError> {
        entry.validate().map_err(JournalServiceError::Validation)?;
        let date = entry.date;
        self.repo.upsert_entry(&entry)?;
        info!(
            "event=entry_save module=service status=ok date={date} intensity={} activities={}",
            entry.intensity,
            entry.activities.len()
        );

        self.repo
            .get_entry(date)?
            .ok_or(JournalServiceError::InconsistentState(
                "saved entry not found in read-back",
            ))
    }

    pub fn get_entry(&self, date: NaiveDate) -> RepoResult<Option<JournalEntry>> {
        self.repo.get_entry(date)
    }

    pub fn delete_entry(&self, date: NaiveDate) -> Result<(), JournalServiceError> {
        self.repo.delete_entry(date)?;
        info!("event=entry_delete module=service status=ok date={date}");
        Ok(())
    }

    /// Removes every entry; returns how many were removed.
    pub fn clear_all(&self) -> Result<usize, JournalServiceError> {
        let removed = self.repo.clear_entries()?;
        info!("event=journal_clear module=service status=ok removed={removed}");
        Ok(removed)
    }

    /// Whole journal, ascending by date.
    pub fn entries(&self) -> RepoResult<EntryMap> {
        self.repo.list_entries()
    }

    /// Full artwork for a stored entry.
    pub fn render_entry(&self, date: NaiveDate) -> Result<Artifact, JournalServiceError> {
        Ok(render(&self.render_request(date, false)?))
    }

    /// Gallery thumbnail for a stored entry.
    pub fn render_thumbnail(&self, date: NaiveDate) -> Result<Artifact, JournalServiceError> {
        Ok(render(&self.render_request(date, true)?))
    }

    /// Render request for a stored entry, for callers that adjust it
    /// (explicit seed) before rendering.
    pub fn render_request(
        &self,
        date: NaiveDate,
        thumbnail: bool,
    ) -> Result<RenderRequest, JournalServiceError> {
        let entry = self.require_entry(date)?;
        Ok(if thumbnail {
            RenderRequest::thumbnail(&entry)
        } else {
            RenderRequest::from_entry(&entry)
        })
    }

    pub fn summary(&self) -> RepoResult<TrendSummary> {
        Ok(summarize(&self.repo.list_entries()?))
    }

    /// Summary gated on `ANALYTICS_MIN_ENTRIES`; `None` below it.
    pub fn analytics(&self) -> RepoResult<Option<TrendSummary>> {
        let summary = self.summary()?;
        if summary.total < ANALYTICS_MIN_ENTRIES {
            return Ok(None);
        }
        Ok(Some(summary))
    }

    /// Mood chart, or `None` for an empty journal.
    pub fn mood_chart(&self) -> RepoResult<Option<MoodChart>> {
        Ok(MoodChart::from_entries(&self.repo.list_entries()?))
    }

    pub fn emotion_distribution(&self) -> RepoResult<Vec<EmotionShare>> {
        Ok(emotion_distribution(&self.repo.list_entries()?))
    }

    pub fn top_activities(&self, limit: usize) -> RepoResult<Vec<(String, usize)>> {
        Ok(top_activities(&self.repo.list_entries()?, limit))
    }

    /// Recommendation tier; `None` until `INSIGHTS_MIN_ENTRIES` exist.
    pub fn recommendation(&self) -> RepoResult<Option<Recommendation>> {
        let summary = self.summary()?;
        if summary.total < INSIGHTS_MIN_ENTRIES {
            return Ok(None);
        }
        Ok(Some(Recommendation::from_positivity(summary.positivity)))
    }

    pub fn recent_snapshot(&self) -> RepoResult<Option<RecentSnapshot>> {
        Ok(recent_snapshot(&self.repo.list_entries()?))
    }

    pub fn gallery_dates(
        &self,
        today: NaiveDate,
        range: GalleryRange,
    ) -> RepoResult<Vec<NaiveDate>> {
        Ok(gallery_dates(&self.repo.list_entries()?, today, range))
    }

    /// Whole journal as the portable JSON document.
    pub fn export_json(&self) -> Result<String, JournalServiceError> {
        let entries = self.repo.list_entries()?;
        let document = export_json(&entries).map_err(JournalServiceError::Export)?;
        info!(
            "event=journal_export module=service status=ok entries={}",
            entries.len()
        );
        Ok(document)
    }

    /// Merges a JSON document into the journal; returns entries written.
    ///
    /// Dates in the document overwrite stored ones; other stored dates stay.
    /// A malformed document writes nothing.
    pub fn import_json(&mut self, text: &str) -> Result<usize, JournalServiceError> {
        let entries = match parse_import(text) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("event=journal_import module=service status=rejected error={err}");
                return Err(err.into());
            }
        };

        let written = self.repo.merge_entries(&entries)?;
        info!("event=journal_import module=service status=ok entries={written}");
        Ok(written)
    }

    fn require_entry(&self, date: NaiveDate) -> Result<JournalEntry, JournalServiceError> {
        self.repo
            .get_entry(date)?
            .ok_or(JournalServiceError::EntryNotFound(date))
    }
}
