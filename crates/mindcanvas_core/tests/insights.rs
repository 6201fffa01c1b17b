use chrono::{Days, NaiveDate};
use mindcanvas_core::{
    chart_series, emotion_distribution, gallery_dates, recent_snapshot, summarize,
    top_activities, Emotion, EntryMap, GalleryRange, JournalEntry, MoodChart, Recommendation,
    Trend,
};

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .checked_add_days(Days::new(offset))
        .unwrap()
}

fn journal(rows: &[(u64, Emotion, u8)]) -> EntryMap {
    rows.iter()
        .map(|&(offset, emotion, intensity)| {
            let entry = JournalEntry::new(day(offset), emotion, intensity);
            (entry.date, entry)
        })
        .collect()
}

#[test]
fn empty_journal_summarizes_to_zero() {
    let summary = summarize(&EntryMap::new());
    assert_eq!(summary.total, 0);
    assert_eq!(summary.most_common, None);
    assert_eq!(summary.avg_intensity, 0.0);
    assert_eq!(summary.positivity, 0.0);
    assert_eq!(summary.trend, Trend::Stable);
    assert!(chart_series(&EntryMap::new()).is_empty());
    assert!(MoodChart::from_entries(&EntryMap::new()).is_none());
    assert!(recent_snapshot(&EntryMap::new()).is_none());
}

#[test]
fn positivity_and_average_are_rounded_to_one_decimal() {
    let entries = journal(&[
        (0, Emotion::Joyful, 5),
        (1, Emotion::Joyful, 6),
        (2, Emotion::Furious, 6),
    ]);
    let summary = summarize(&entries);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.most_common, Some(Emotion::Joyful));
    assert_eq!(summary.count, 2);
    assert_eq!(summary.positivity, 66.7);
    assert_eq!(summary.avg_intensity, 5.7);
}

#[test]
fn trend_compares_ends_of_recent_window() {
    let rising = journal(&[
        (0, Emotion::Worried, 3),
        (1, Emotion::Worried, 4),
        (2, Emotion::Peaceful, 4),
        (3, Emotion::Peaceful, 5),
        (4, Emotion::Hopeful, 6),
        (5, Emotion::Hopeful, 7),
        (6, Emotion::Joyful, 8),
    ]);
    assert_eq!(summarize(&rising).trend, Trend::Improving);

    // Only the last seven dates count: 9 -> 2 is a decline even though the
    // first ever entry was lower still.
    let falling = journal(&[
        (0, Emotion::Joyful, 1),
        (1, Emotion::Joyful, 9),
        (2, Emotion::Joyful, 8),
        (3, Emotion::Joyful, 7),
        (4, Emotion::Joyful, 6),
        (5, Emotion::Joyful, 5),
        (6, Emotion::Joyful, 4),
        (7, Emotion::Joyful, 2),
    ]);
    assert_eq!(summarize(&falling).trend, Trend::Declining);

    let single = journal(&[(0, Emotion::Joyful, 9)]);
    assert_eq!(summarize(&single).trend, Trend::Stable);
}

#[test]
fn ties_for_most_common_go_to_catalog_order() {
    let entries = journal(&[
        (0, Emotion::Grateful, 5),
        (1, Emotion::Melancholic, 5),
        (2, Emotion::Grateful, 5),
        (3, Emotion::Melancholic, 5),
    ]);
    assert_eq!(summarize(&entries).most_common, Some(Emotion::Melancholic));

    let shares = emotion_distribution(&entries);
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].emotion, Emotion::Melancholic);
    assert_eq!(shares[0].percentage, 50.0);
}

#[test]
fn chart_series_keeps_latest_fourteen_dates_ascending() {
    let rows: Vec<(u64, Emotion, u8)> = (0..20)
        .map(|offset| {
            let emotion = Emotion::ALL[offset as usize % Emotion::ALL.len()];
            (offset, emotion, (offset % 10 + 1) as u8)
        })
        .collect();
    let series = chart_series(&journal(&rows));

    assert_eq!(series.len(), 14);
    assert_eq!(series[0].date, day(6));
    assert_eq!(series[13].date, day(19));
    assert_eq!(series[0].label, "01-07");
    assert!(series.windows(2).all(|pair| pair[0].date < pair[1].date));
    assert!(series
        .iter()
        .all(|point| (1.0..=10.0).contains(&point.value)));
}

#[test]
fn chart_svg_has_one_bar_per_point() {
    let entries = journal(&[
        (0, Emotion::Joyful, 9),
        (1, Emotion::Melancholic, 2),
        (2, Emotion::Peaceful, 6),
    ]);
    let chart = MoodChart::from_entries(&entries).unwrap();
    let svg = chart.to_svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<polyline"));
    assert!(svg.contains("01-02"));
    assert_eq!(svg.matches("<circle").count(), 3);
}

#[test]
fn top_activities_counts_across_entries() {
    let mut entries = journal(&[
        (0, Emotion::Joyful, 5),
        (1, Emotion::Joyful, 5),
        (2, Emotion::Joyful, 5),
    ]);
    let activities = [
        vec!["Work", "Exercise"],
        vec!["Exercise", "Social"],
        vec!["Exercise", "Work", "Rest"],
    ];
    for (entry, names) in entries.values_mut().zip(activities) {
        entry.activities = names.into_iter().map(String::from).collect();
    }

    let top = top_activities(&entries, 2);
    assert_eq!(
        top,
        vec![("Exercise".to_string(), 3), ("Work".to_string(), 2)]
    );
    assert_eq!(top_activities(&entries, 10).len(), 4);
}

#[test]
fn recent_snapshot_uses_last_seven_entries() {
    let mut rows = vec![(0, Emotion::Exhausted, 1), (1, Emotion::Exhausted, 1)];
    rows.extend((2..9).map(|offset| (offset, Emotion::Confident, 8)));
    let snapshot = recent_snapshot(&journal(&rows)).unwrap();
    assert_eq!(snapshot.entries, 7);
    assert_eq!(snapshot.most_common, Emotion::Confident);
    assert_eq!(snapshot.avg_intensity, 8.0);
}

#[test]
fn recommendation_tiers_follow_positivity() {
    assert_eq!(Recommendation::from_positivity(39.9), Recommendation::Challenging);
    assert_eq!(Recommendation::from_positivity(40.0), Recommendation::Balanced);
    assert_eq!(Recommendation::from_positivity(70.0), Recommendation::Balanced);
    assert_eq!(Recommendation::from_positivity(70.1), Recommendation::Positive);
}

#[test]
fn gallery_walks_back_from_today() {
    let entries = journal(&[
        (0, Emotion::Joyful, 5),
        (5, Emotion::Joyful, 5),
        (9, Emotion::Joyful, 5),
        (10, Emotion::Joyful, 5),
    ]);
    let today = day(10);

    assert_eq!(
        gallery_dates(&entries, today, GalleryRange::Week),
        vec![day(10), day(9)]
    );
    // The walk is bounded by the entry count, so older dates drop out.
    assert_eq!(
        gallery_dates(&entries, today, GalleryRange::AllTime),
        vec![day(10), day(9)]
    );
    assert!(gallery_dates(&EntryMap::new(), today, GalleryRange::Month).is_empty());
}
