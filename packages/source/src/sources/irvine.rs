//! Irvine parks data source.
//!
//! Uses the `Irvine_Parks` ArcGIS `FeatureServer` (layer 8, GeoJSON output).
//! The layer's exact attribute names are not documented, so extraction tries
//! several candidate keys and falls back to text heuristics.

use field_map_field_models::{Field, LatLng, OpeningHours, Surface};
use serde_json::{Map, Value};

use crate::amenities::{detects_lights, mentions_goals, mentions_soccer};
use crate::geometry::reduce_raw;
use crate::parsing::{
    UNNAMED_PARK, attr_contains, first_string, optional_url, record_id, text_blob,
};
use crate::FieldSource;

const NAME_KEYS: &[&str] = &["NAME", "PARK_NAME", "Park", "Name"];
const ADDRESS_KEYS: &[&str] = &["Address", "ADDRESS", "SITE_ADDR", "LOCATION"];
const DESC_KEYS: &[&str] = &["Short_Desc", "Desc1", "DESCRIPT", "DESCRIPTION", "TYPE"];

/// Irvine parks data source.
pub struct IrvineSource;

impl IrvineSource {
    /// Creates a new Irvine data source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for IrvineSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSource for IrvineSource {
    fn id(&self) -> &'static str {
        "irvine"
    }

    fn neighborhood(&self) -> &'static str {
        "Irvine"
    }

    fn adapt(&self, feature: &Value, fallback: LatLng) -> Field {
        let empty = Map::new();
        let props = feature
            .get("properties")
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        let location = reduce_raw(feature.get("geometry"), fallback);
        let desc = text_blob(props, DESC_KEYS);

        // Structured attributes win when present; text heuristics fill in.
        let has_lights = attr_contains(props, "LIGHTS", "yes") || detects_lights(&desc);
        let has_soccer_lines = attr_contains(props, "SPORT", "soccer") || mentions_soccer(&desc);

        Field {
            id: record_id(feature, props, &["OBJECTID"]),
            name: first_string(props, NAME_KEYS).unwrap_or(UNNAMED_PARK).to_string(),
            neighborhood: self.neighborhood().to_string(),
            address: first_string(props, ADDRESS_KEYS).unwrap_or_default().to_string(),
            location,
            surface: Surface::Grass,
            has_lights,
            has_soccer_lines,
            has_goals: mentions_goals(&desc),
            opening_hours: OpeningHours::default_schedule(),
            short_desc: first_string(props, &["Short_Desc", "DESCRIPT", "DESCRIPTION", "TYPE"])
                .unwrap_or_default()
                .to_string(),
            extra_desc: first_string(props, &["Desc1"]).unwrap_or_default().to_string(),
            website: optional_url(props, &["Website"]),
            image_url: optional_url(props, &["Image_URL"]),
        }
    }
}
