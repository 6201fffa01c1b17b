//! Core domain logic for MindCanvas.
//! Emotion journal storage, seeded procedural art and mood insights.

pub mod art;
pub mod db;
pub mod insight;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod transfer;

pub use art::artifact::{Artifact, Layer, OverlayRole, TextOverlay, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use art::color::Rgb;
pub use art::compose::{derive_seed, layer_count, render, RenderRequest};
pub use art::shape::{synthesize, Point, ShapeStyle};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use insight::chart::{chart_series, wellbeing_value, ChartPoint, MoodChart};
pub use insight::gallery::{gallery_dates, GalleryRange};
pub use insight::recommend::{Recommendation, ANALYTICS_MIN_ENTRIES, INSIGHTS_MIN_ENTRIES};
pub use insight::summary::{
    emotion_distribution, recent_snapshot, summarize, top_activities, EmotionShare,
    RecentSnapshot, Trend, TrendSummary,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::emotion::{Emotion, EmotionProfile, DEFAULT_EMOTION};
pub use model::entry::{parse_date, EntryMap, EntryValidationError, JournalEntry};
pub use repo::entry_repo::{EntryRepository, RepoError, RepoResult, SqliteEntryRepository};
pub use service::journal_service::{JournalService, JournalServiceError};
pub use transfer::json::{export_json, parse_import, ImportError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
