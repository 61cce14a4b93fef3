//! Opening-hours evaluation against a wall-clock instant.

use chrono::{Datelike, NaiveDateTime, Timelike};
use field_map_field_models::Field;

/// Placeholder shown when today's schedule entry is absent.
pub const NO_HOURS_LISTED: &str = "No hours listed";

/// Whether the field is open at the given local instant.
///
/// Closed when today's weekday has no entry or either time is malformed.
/// The window is inclusive at both ends and never spans midnight — a close
/// time numerically earlier than the open time can never match.
#[must_use]
pub fn is_open_at(field: &Field, at: NaiveDateTime) -> bool {
    let Some(hours) = field.opening_hours.for_weekday(at.weekday()) else {
        return false;
    };
    let (Some(open), Some(close)) = (parse_hhmm(&hours.open), parse_hhmm(&hours.close)) else {
        return false;
    };

    let now = at.hour() * 60 + at.minute();
    open <= now && now <= close
}

/// Renders today's hours as `"HH:MM – HH:MM"`, or a placeholder when today's
/// entry is absent.
#[must_use]
pub fn format_today_hours(field: &Field, at: NaiveDateTime) -> String {
    field.opening_hours.for_weekday(at.weekday()).map_or_else(
        || NO_HOURS_LISTED.to_string(),
        |hours| format!("{} – {}", hours.open, hours.close),
    )
}

/// Parses an "HH:MM" 24-hour string into minutes since midnight.
fn parse_hhmm(value: &str) -> Option<u32> {
    let (hour, minute) = value.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(hour * 60 + minute)
}
