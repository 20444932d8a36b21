//! Derived display values: initials, capacity bars and date strings.
//!
//! Dates arrive from the backend in UTC and are shown in the viewer's local
//! time. The `*_in` variants take any time zone so they can be checked
//! against fixed inputs.

use api::Event;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

/// Shown wherever an event has no location.
pub const UNKNOWN_LOCATION: &str = "TBD";

/// Up to two uppercased leading letters, one per word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Fill level for the capacity bar, clamped to 100.
pub fn fill_percentage(event: &Event) -> f64 {
    event.capacity_percentage().clamp(0.0, 100.0)
}

pub fn location_or_tbd(location: &str) -> &str {
    if location.trim().is_empty() {
        UNKNOWN_LOCATION
    } else {
        location
    }
}

/// "3 spots left", "1 spot left".
pub fn spots_left_label(event: &Event) -> String {
    match event.spots_left() {
        1 => "1 spot left".to_string(),
        n => format!("{n} spots left"),
    }
}

/// Trailing six characters of an id, as shown in the edit header.
pub fn short_id(id: &str) -> &str {
    let count = id.chars().count();
    match id.char_indices().nth(count.saturating_sub(6)) {
        Some((start, _)) => &id[start..],
        None => id,
    }
}

/// "12/100"
pub fn char_counter(text: &str, limit: usize) -> String {
    format!("{}/{}", text.chars().count(), limit)
}

/// "Oct 20, 2026"
pub fn short_date(dt: &DateTime<Utc>) -> String {
    short_date_in(&dt.with_timezone(&Local))
}

/// "Tuesday, October 20, 2026 at 10:00 AM"
pub fn long_datetime(dt: &DateTime<Utc>) -> String {
    long_datetime_in(&dt.with_timezone(&Local))
}

/// "October 20, 2026"
pub fn day_date(dt: &DateTime<Utc>) -> String {
    day_date_in(&dt.with_timezone(&Local))
}

pub fn short_date_in<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%b %-d, %Y").to_string()
}

pub fn long_datetime_in<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%A, %B %-d, %Y at %I:%M %p").to_string()
}

pub fn day_date_in<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%B %-d, %Y").to_string()
}
