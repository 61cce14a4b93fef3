#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! City data source adapters and the city registry.
//!
//! Each municipal open-data provider publishes park features under its own
//! schema. A per-city [`FieldSource`] maps one raw feature into the canonical
//! [`Field`] shape so everything downstream is provider-agnostic.

pub mod amenities;
pub mod city_def;
pub mod geometry;
pub mod parsing;
pub mod registry;
pub mod sources;

use field_map_field_models::{Field, LatLng};

/// Trait that all city park data sources must implement.
///
/// `adapt` is a total function: malformed input (empty property bag, absent
/// or broken geometry) degrades to placeholder values rather than failing.
/// One bad record must never fail a whole load.
pub trait FieldSource: Send + Sync {
    /// Returns the unique identifier for this source (e.g., `"pasadena"`).
    fn id(&self) -> &'static str;

    /// Returns the neighborhood label applied when the source schema has no
    /// neighborhood attribute (typically the city name).
    fn neighborhood(&self) -> &'static str;

    /// Maps one raw GeoJSON feature into a canonical [`Field`], using
    /// `fallback` as the location of last resort.
    fn adapt(&self, feature: &serde_json::Value, fallback: LatLng) -> Field;
}
