use super::*;
use chrono::Duration;

fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
}

// =============================================================
// DateInfo
// =============================================================

#[test]
fn date_info_formats_in_given_zone() {
    let ts = at("2025-03-04T09:05:00Z");
    let info = DateInfo::new(Some(ts), ts + Duration::days(3), &Utc);
    assert_eq!(info.exact_date, "March 4, 2025");
    assert_eq!(info.time, "9:05 AM");
    assert_eq!(info.full_date_time, "March 4, 2025, 9:05 AM");
    assert_eq!(info.relative_date, "3 days ago");
    assert_eq!(info.iso, "2025-03-04T09:05:00.000Z");
}

#[test]
fn date_info_afternoon_uses_pm() {
    let ts = at("2024-12-25T17:30:00Z");
    let info = DateInfo::new(Some(ts), ts, &Utc);
    assert_eq!(info.time, "5:30 PM");
    assert_eq!(info.relative_date, "less than a minute ago");
}

#[test]
fn date_info_respects_offset() {
    let ts = at("2025-01-01T02:00:00Z");
    let tz = chrono::FixedOffset::west_opt(5 * 3600).unwrap();
    let info = DateInfo::new(Some(ts), ts, &tz);
    assert_eq!(info.exact_date, "December 31, 2024");
    assert_eq!(info.time, "9:00 PM");
}

#[test]
fn date_info_missing_timestamp() {
    let info = DateInfo::new(None, Utc::now(), &Utc);
    assert_eq!(info.exact_date, "Date not available");
    assert!(info.relative_date.is_empty());
    assert!(info.time.is_empty());
    assert!(info.full_date_time.is_empty());
}

// =============================================================
// distance_in_words
// =============================================================

#[test]
fn distance_under_a_minute() {
    assert_eq!(distance_in_words(0), "less than a minute");
    assert_eq!(distance_in_words(29), "less than a minute");
    assert_eq!(distance_in_words(30), "1 minute");
}

#[test]
fn distance_minutes_and_hours() {
    assert_eq!(distance_in_words(44 * 60), "44 minutes");
    assert_eq!(distance_in_words(45 * 60), "about 1 hour");
    assert_eq!(distance_in_words(90 * 60), "about 2 hours");
    assert_eq!(distance_in_words(23 * 3600), "about 23 hours");
}

#[test]
fn distance_days() {
    assert_eq!(distance_in_words(24 * 3600), "1 day");
    assert_eq!(distance_in_words(42 * 3600), "2 days");
    assert_eq!(distance_in_words(29 * 86_400), "29 days");
}

#[test]
fn distance_months() {
    assert_eq!(distance_in_words(30 * 86_400), "about 1 month");
    assert_eq!(distance_in_words(59 * 86_400), "about 2 months");
    assert_eq!(distance_in_words(60 * 86_400), "2 months");
    assert_eq!(distance_in_words(300 * 86_400), "10 months");
}

#[test]
fn distance_years() {
    assert_eq!(distance_in_words(365 * 86_400), "about 1 year");
    assert_eq!(distance_in_words(500 * 86_400), "over 1 year");
    assert_eq!(distance_in_words(700 * 86_400), "almost 2 years");
}

// =============================================================
// relative_to
// =============================================================

#[test]
fn relative_past_and_future() {
    let now = at("2025-06-01T12:00:00Z");
    assert_eq!(relative_to(now - Duration::minutes(5), now), "5 minutes ago");
    assert_eq!(relative_to(now + Duration::hours(1), now), "in about 1 hour");
}
