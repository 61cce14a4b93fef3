//! City registry — loads all city definitions from embedded TOML configs.
//!
//! Each `.toml` file in `packages/source/cities/` is baked into the binary
//! at compile time via [`include_str!`]. Adding a city is a new TOML file
//! here plus a new adapter variant in [`crate::city_def::AdapterKind`].

use crate::city_def::{CityDefinition, parse_city_toml};

/// TOML configs embedded at compile time.
const CITY_TOMLS: &[(&str, &str)] = &[
    ("pasadena", include_str!("../cities/pasadena.toml")),
    ("irvine", include_str!("../cities/irvine.toml")),
];

/// Total number of configured cities (used in tests).
#[cfg(test)]
const EXPECTED_CITY_COUNT: usize = 2;

/// Returns all configured city definitions, parsed from embedded TOML.
///
/// # Panics
///
/// Panics if any TOML config is malformed (this is a compile-time guarantee
/// since the configs are embedded).
#[must_use]
pub fn all_cities() -> Vec<CityDefinition> {
    CITY_TOMLS
        .iter()
        .map(|(name, toml)| {
            parse_city_toml(toml).unwrap_or_else(|e| panic!("Failed to parse {name}.toml: {e}"))
        })
        .collect()
}

/// Looks up one city by identifier. `None` means the id is not registered —
/// a configuration error, fatal at startup for any caller with a fixed city
/// choice.
#[must_use]
pub fn lookup(city_id: &str) -> Option<CityDefinition> {
    all_cities().into_iter().find(|city| city.id == city_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_all_cities() {
        let cities = all_cities();
        assert_eq!(cities.len(), EXPECTED_CITY_COUNT);
    }

    #[test]
    fn city_ids_are_unique() {
        let cities = all_cities();
        let mut ids: Vec<&str> = cities.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), EXPECTED_CITY_COUNT);
    }

    #[test]
    fn all_cities_have_required_fields() {
        for city in &all_cities() {
            assert!(!city.id.is_empty(), "city id is empty");
            assert!(!city.label.is_empty(), "{}: label is empty", city.id);
            assert!(!city.api_url.is_empty(), "{}: api_url is empty", city.id);
            assert!(
                city.center.lat.is_finite() && city.center.lng.is_finite(),
                "{}: center is not finite",
                city.id
            );
        }
    }

    #[test]
    fn adapters_resolve_to_matching_sources() {
        for city in &all_cities() {
            assert_eq!(city.source().id(), city.id);
        }
    }

    #[test]
    fn lookup_finds_registered_and_rejects_unknown() {
        assert!(lookup("pasadena").is_some());
        assert!(lookup("irvine").is_some());
        assert!(lookup("gotham").is_none());
    }
}
