//! Display formatting for server-assigned post timestamps.
//!
//! Relative dates follow the usual "distance in words" buckets (`less than a
//! minute`, `about 2 hours`, `3 days`, `over 1 year`, ...) with an `ago`/`in`
//! suffix.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_MONTH: i64 = 43_200;

/// Placeholder shown when a post has no resolved timestamp.
pub const DATE_NOT_AVAILABLE: &str = "Date not available";

/// Pre-formatted date strings for post cards and the single-post header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateInfo {
    /// e.g. `March 4, 2025`
    pub exact_date: String,
    /// e.g. `3 days ago`
    pub relative_date: String,
    /// e.g. `9:05 AM`
    pub time: String,
    /// e.g. `March 4, 2025, 9:05 AM`
    pub full_date_time: String,
    pub iso: String,
}

impl DateInfo {
    /// Format `timestamp` in `tz`, measuring the relative part against `now`.
    pub fn new<Tz>(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let Some(ts) = timestamp else {
            return Self::unavailable();
        };
        let local = ts.with_timezone(tz);
        let exact_date = local.format("%B %-d, %Y").to_string();
        let time = local.format("%-I:%M %p").to_string();
        Self {
            full_date_time: format!("{exact_date}, {time}"),
            exact_date,
            relative_date: relative_to(ts, now),
            time,
            iso: ts.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Format in the viewer's local time zone against the current clock.
    #[must_use]
    pub fn local(timestamp: Option<DateTime<Utc>>) -> Self {
        Self::new(timestamp, Utc::now(), &chrono::Local)
    }

    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            exact_date: DATE_NOT_AVAILABLE.to_owned(),
            relative_date: String::new(),
            time: String::new(),
            full_date_time: String::new(),
            iso: String::new(),
        }
    }
}

/// `"{distance} ago"` for past instants, `"in {distance}"` for future ones.
#[must_use]
pub fn relative_to(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    let words = distance_in_words(seconds.abs());
    if seconds < 0 { format!("in {words}") } else { format!("{words} ago") }
}

/// Human distance for an absolute span of `seconds`.
#[must_use]
pub fn distance_in_words(seconds: i64) -> String {
    let minutes = rounded_div(seconds, 60);

    if minutes == 0 {
        return "less than a minute".to_owned();
    }
    if minutes < 45 {
        return counted(minutes, "minute");
    }
    if minutes < 90 {
        return "about 1 hour".to_owned();
    }
    if minutes < MINUTES_IN_DAY {
        return format!("about {}", counted(rounded_div(minutes, 60), "hour"));
    }
    if minutes < 2_520 {
        return "1 day".to_owned();
    }
    if minutes < MINUTES_IN_MONTH {
        return counted(rounded_div(minutes, MINUTES_IN_DAY), "day");
    }
    if minutes < 2 * MINUTES_IN_MONTH {
        return format!("about {}", counted(rounded_div(minutes, MINUTES_IN_MONTH), "month"));
    }

    let months = minutes / MINUTES_IN_MONTH;
    if months < 12 {
        return counted(rounded_div(minutes, MINUTES_IN_MONTH), "month");
    }

    let years = months / 12;
    match months % 12 {
        0..3 => format!("about {}", counted(years, "year")),
        3..9 => format!("over {}", counted(years, "year")),
        _ => format!("almost {}", counted(years + 1, "year")),
    }
}

fn counted(n: i64, unit: &str) -> String {
    if n == 1 { format!("1 {unit}") } else { format!("{n} {unit}s") }
}

/// Integer division rounding half away from zero, for non-negative inputs.
fn rounded_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}
