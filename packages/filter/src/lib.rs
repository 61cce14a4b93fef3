#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Pure field filtering and opening-hours evaluation.
//!
//! The visible subset is always recomputed from its declared inputs — the
//! field collection, the filter state, and the current instant — never
//! incrementally mutated, so stored and derived data cannot drift apart.

pub mod hours;

use chrono::NaiveDateTime;
use field_map_field_models::{Field, Surface};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Surface selector for the filter panel.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SurfaceFilter {
    /// No surface restriction.
    #[default]
    Any,
    /// Turf fields only.
    Turf,
    /// Grass fields only.
    Grass,
}

impl SurfaceFilter {
    /// Whether a field's surface passes this selector.
    #[must_use]
    pub fn matches(self, surface: Surface) -> bool {
        match self {
            Self::Any => true,
            Self::Turf => surface == Surface::Turf,
            Self::Grass => surface == Surface::Grass,
        }
    }
}

/// User-controlled filter configuration.
///
/// Owned by the presentation layer; read-only input here. All active
/// conditions combine conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Only fields with lights.
    pub lights_only: bool,
    /// Only fields lined for soccer.
    pub soccer_lines_only: bool,
    /// Only fields open at the evaluation instant.
    pub open_now_only: bool,
    /// Surface restriction.
    pub surface: SurfaceFilter,
    /// Case-insensitive substring over name or neighborhood. Surrounding
    /// whitespace is ignored; a blank query matches everything.
    pub search: String,
}

/// Computes the visible subset of `fields` under `filter` at instant `at`.
///
/// Pure and order-preserving: the output keeps the relative order of the
/// input and no sort is applied.
#[must_use]
pub fn apply_filters<'a>(
    fields: &'a [Field],
    filter: &FilterState,
    at: NaiveDateTime,
) -> Vec<&'a Field> {
    let query = filter.search.trim().to_lowercase();

    fields
        .iter()
        .filter(|field| {
            if filter.lights_only && !field.has_lights {
                return false;
            }
            if filter.soccer_lines_only && !field.has_soccer_lines {
                return false;
            }
            if !filter.surface.matches(field.surface) {
                return false;
            }
            if filter.open_now_only && !hours::is_open_at(field, at) {
                return false;
            }
            if !query.is_empty() {
                let matches_name = field.name.to_lowercase().contains(&query);
                let matches_neighborhood = field.neighborhood.to_lowercase().contains(&query);
                if !matches_name && !matches_neighborhood {
                    return false;
                }
            }
            true
        })
        .collect()
}
