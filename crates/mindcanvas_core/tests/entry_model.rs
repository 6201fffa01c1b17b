use chrono::NaiveDate;
use mindcanvas_core::model::entry::{ACTIVITY_OPTIONS, WEATHER_OPTIONS};
use mindcanvas_core::{parse_date, Emotion, EntryValidationError, JournalEntry};
use serde_json::json;

fn sample() -> JournalEntry {
    JournalEntry::new(NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(), Emotion::Worried, 6)
}

#[test]
fn emotion_serializes_as_display_label() {
    let value = serde_json::to_value(Emotion::Worried).unwrap();
    assert_eq!(value, json!("😰 Worried"));

    let parsed: Emotion = serde_json::from_value(json!("confident")).unwrap();
    assert_eq!(parsed, Emotion::Confident);

    let fallback: Emotion = serde_json::from_value(json!("🫠 Melting")).unwrap();
    assert_eq!(fallback, Emotion::Peaceful);
}

#[test]
fn entry_json_uses_iso_dates_and_labels() {
    let value = serde_json::to_value(sample().with_note("deadline")).unwrap();
    assert_eq!(value["date"], json!("2024-06-09"));
    assert_eq!(value["emotion"], json!("😰 Worried"));
    assert_eq!(value["note"], json!("deadline"));
    assert_eq!(value["weather"], json!(null));
}

#[test]
fn validation_covers_every_field_limit() {
    assert_eq!(sample().validate(), Ok(()));
    assert_eq!(
        JournalEntry { intensity: 11, ..sample() }.validate(),
        Err(EntryValidationError::IntensityOutOfRange(11))
    );
    assert_eq!(
        sample().with_note("é".repeat(300)).validate(),
        Ok(())
    );
    assert_eq!(
        sample()
            .with_activities(["Work", "Rest", "Nature", "Family"])
            .validate(),
        Err(EntryValidationError::TooManyActivities { count: 4, max: 3 })
    );
    assert_eq!(
        sample().with_activities(["Work", "  "]).validate(),
        Err(EntryValidationError::BlankActivity)
    );
}

#[test]
fn labels_cover_the_whole_catalog() {
    assert_eq!(Emotion::ALL.len(), 12);
    for emotion in Emotion::ALL {
        assert_eq!(Emotion::from_label(emotion.label()), Some(emotion));
        assert_eq!(Emotion::from_label(emotion.name()), Some(emotion));
        assert_eq!(
            emotion.label(),
            format!("{} {}", emotion.emoji(), emotion.name())
        );
    }
    assert_eq!(parse_date("2024-02-30"), None);
    assert_eq!(
        parse_date(" 2024-02-29 "),
        NaiveDate::from_ymd_opt(2024, 2, 29)
    );
}

#[test]
fn offered_choices_pass_validation() {
    for weather in WEATHER_OPTIONS {
        let entry = sample().with_weather(*weather);
        assert_eq!(entry.weather.as_deref(), Some(*weather));
    }
    for chunk in ACTIVITY_OPTIONS.chunks(3) {
        assert_eq!(sample().with_activities(chunk.iter().copied()).validate(), Ok(()));
    }
}
