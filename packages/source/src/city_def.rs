//! Config-driven city definition.
//!
//! [`CityDefinition`] captures everything unique about a city in a
//! serializable config struct: the open-data endpoint, the fallback map
//! center, and which adapter understands the provider's schema.

use field_map_field_models::LatLng;
use serde::Deserialize;
use strum_macros::{AsRefStr, Display, EnumString};

use crate::sources::source_for;
use crate::FieldSource;

/// Which [`FieldSource`] implementation a city's records go through.
///
/// One variant per city schema; adding a city means adding a variant and
/// a source implementation, never touching shared logic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AdapterKind {
    /// Pasadena open data portal parks layer.
    Pasadena,
    /// Irvine parks `FeatureServer` layer.
    Irvine,
}

/// A complete city configuration, loaded from TOML at compile time.
///
/// Static after startup; never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct CityDefinition {
    /// Unique identifier (e.g., `"pasadena"`).
    pub id: String,
    /// Human-readable label (e.g., `"Pasadena, CA"`).
    pub label: String,
    /// GeoJSON query endpoint for the city's park features.
    pub api_url: String,
    /// Adapter that understands this provider's property schema.
    pub adapter: AdapterKind,
    /// Fallback map center, used when a record has no usable geometry.
    pub center: LatLng,
}

impl CityDefinition {
    /// Returns the source adapter bound to this city.
    #[must_use]
    pub fn source(&self) -> &'static dyn FieldSource {
        source_for(self.adapter)
    }
}

/// Parses a city definition from its TOML config text.
///
/// # Errors
///
/// Returns a deserialization error if the TOML is malformed or missing
/// required fields.
pub fn parse_city_toml(raw: &str) -> Result<CityDefinition, toml::de::Error> {
    toml::from_str(raw)
}
