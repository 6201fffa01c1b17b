//! Gallery date selection.

use crate::model::entry::EntryMap;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Look-back range offered by the gallery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryRange {
    #[default]
    Week,
    Fortnight,
    Month,
    AllTime,
}

impl GalleryRange {
    pub fn days(self) -> u64 {
        match self {
            Self::Week => 7,
            Self::Fortnight => 14,
            Self::Month => 30,
            Self::AllTime => 9999,
        }
    }

    /// Parses `7|14|30|all` and the variant names.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "7" | "week" => Some(Self::Week),
            "14" | "fortnight" => Some(Self::Fortnight),
            "30" | "month" => Some(Self::Month),
            "all" | "all_time" | "all-time" => Some(Self::AllTime),
            _ => None,
        }
    }
}

/// Stored dates shown in the gallery, newest first.
///
/// Walks back day by day from `today`; the walk is bounded both by the
/// range and by the number of stored entries.
pub fn gallery_dates(entries: &EntryMap, today: NaiveDate, range: GalleryRange) -> Vec<NaiveDate> {
    let steps = range.days().min(entries.len() as u64);
    let mut dates: Vec<NaiveDate> = (0..steps)
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .filter(|date| entries.contains_key(date))
        .collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates
}

#[cfg(test)]
mod tests {
    use super::GalleryRange;

    #[test]
    fn parse_accepts_days_and_names() {
        assert_eq!(GalleryRange::parse("14"), Some(GalleryRange::Fortnight));
        assert_eq!(GalleryRange::parse("ALL"), Some(GalleryRange::AllTime));
        assert_eq!(GalleryRange::parse("year"), None);
    }
}
