#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canonical sports field entity and supporting domain types.
//!
//! Every city data source normalizes its records into [`Field`]. Downstream
//! consumers (filtering, map/list presentation) only ever see this shape,
//! regardless of which provider the data came from.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A latitude/longitude pair in WGS84. Both components are always finite —
/// records without usable geometry fall back to their city's map center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl LatLng {
    /// Creates a coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Playing surface of a field.
///
/// No current data source supplies real surfacing data, so adapters default
/// to [`Surface::Grass`]. The variant set still matters for filtering.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Surface {
    /// Artificial turf.
    Turf,
    /// Natural grass (also the default when the source is silent).
    #[default]
    Grass,
}

/// Open/close times for a single day, as "HH:MM" 24-hour strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// Opening time, e.g. `"06:00"`.
    pub open: String,
    /// Closing time, e.g. `"22:00"`. Must not be earlier than `open`;
    /// schedules never span midnight.
    pub close: String,
}

impl DayHours {
    /// Creates a day entry from open/close strings.
    #[must_use]
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
        }
    }
}

/// Weekly opening-hours table, one optional entry per weekday.
///
/// A missing entry means the field is closed that day. Adapters always
/// produce a fully-populated table via [`OpeningHours::default_schedule`] —
/// no source currently publishes machine-readable hours, so the schedule is
/// a static placeholder rather than parsed data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sun: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mon: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tue: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wed: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thu: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fri: Option<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sat: Option<DayHours>,
}

impl OpeningHours {
    /// Builds a table with the same hours every day of the week.
    #[must_use]
    pub fn daily(open: &str, close: &str) -> Self {
        let hours = DayHours::new(open, close);
        Self {
            sun: Some(hours.clone()),
            mon: Some(hours.clone()),
            tue: Some(hours.clone()),
            wed: Some(hours.clone()),
            thu: Some(hours.clone()),
            fri: Some(hours.clone()),
            sat: Some(hours),
        }
    }

    /// The static placeholder schedule applied to every adapted record:
    /// 06:00–22:00 all week.
    #[must_use]
    pub fn default_schedule() -> Self {
        Self::daily("06:00", "22:00")
    }

    /// Returns the entry for the given weekday, if any.
    #[must_use]
    pub fn for_weekday(&self, weekday: Weekday) -> Option<&DayHours> {
        match weekday {
            Weekday::Sun => self.sun.as_ref(),
            Weekday::Mon => self.mon.as_ref(),
            Weekday::Tue => self.tue.as_ref(),
            Weekday::Wed => self.wed.as_ref(),
            Weekday::Thu => self.thu.as_ref(),
            Weekday::Fri => self.fri.as_ref(),
            Weekday::Sat => self.sat.as_ref(),
        }
    }
}

/// A public sports field, normalized from one raw provider record.
///
/// Immutable once produced by an adapter; the whole collection is rebuilt
/// on every load. `id` is unique within a single loaded collection only —
/// synthetic ids are regenerated each load and carry no cross-load identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Upstream object identifier when present, else a per-load synthetic id.
    pub id: String,
    /// Display name; `"Unnamed park"` when the source has no usable name.
    pub name: String,
    /// Neighborhood or, for sources without that attribute, the city name.
    pub neighborhood: String,
    /// Street address; may be empty.
    pub address: String,
    /// Representative coordinate, always finite (fallback chain guarantees it).
    pub location: LatLng,
    /// Playing surface.
    pub surface: Surface,
    /// Whether the field has lighting, per structured attributes or
    /// description text. `false` when undeterminable.
    pub has_lights: bool,
    /// Whether the field is lined for soccer / mentions soccer use.
    pub has_soccer_lines: bool,
    /// Whether goals are mentioned for this field.
    pub has_goals: bool,
    /// Weekly schedule (currently always the static default).
    pub opening_hours: OpeningHours,
    /// Short description from the source; may be empty.
    pub short_desc: String,
    /// Longer description from the source; may be empty.
    pub extra_desc: String,
    /// Official page URL, if the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Photo URL, if the source provides one. Insecure schemes are upgraded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_fills_every_weekday() {
        let hours = OpeningHours::daily("07:00", "19:00");
        for weekday in [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ] {
            let entry = hours.for_weekday(weekday).expect("entry for every day");
            assert_eq!(entry.open, "07:00");
            assert_eq!(entry.close, "19:00");
        }
    }

    #[test]
    fn missing_weekday_entry_is_none() {
        let hours = OpeningHours {
            mon: Some(DayHours::new("08:00", "18:00")),
            ..OpeningHours::default()
        };
        assert!(hours.for_weekday(Weekday::Mon).is_some());
        assert!(hours.for_weekday(Weekday::Sun).is_none());
    }

    #[test]
    fn surface_round_trips_through_strings() {
        assert_eq!(Surface::Turf.to_string(), "turf");
        assert_eq!("grass".parse::<Surface>().unwrap(), Surface::Grass);
        assert_eq!(Surface::default(), Surface::Grass);
    }
}
