//! Pasadena parks data source.
//!
//! Uses the Pasadena open data portal's Parks layer.
//! Dataset: <https://data.cityofpasadena.net/> (ArcGIS `FeatureServer`,
//! GeoJSON output).

use field_map_field_models::{Field, LatLng, OpeningHours, Surface};
use serde_json::{Map, Value};

use crate::amenities::{detects_lights, mentions_goals, mentions_soccer};
use crate::geometry::reduce_raw;
use crate::parsing::{UNNAMED_PARK, first_string, optional_url, record_id, text_blob};
use crate::FieldSource;

/// Pasadena parks data source.
pub struct PasadenaSource;

impl PasadenaSource {
    /// Creates a new Pasadena data source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for PasadenaSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSource for PasadenaSource {
    fn id(&self) -> &'static str {
        "pasadena"
    }

    fn neighborhood(&self) -> &'static str {
        "Pasadena"
    }

    fn adapt(&self, feature: &Value, fallback: LatLng) -> Field {
        let empty = Map::new();
        let props = feature
            .get("properties")
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        let location = reduce_raw(feature.get("geometry"), fallback);
        let desc = text_blob(props, &["Short_Desc", "Desc1"]);

        Field {
            id: record_id(feature, props, &["OBJECTID"]),
            name: first_string(props, &["NAME"])
                .unwrap_or(UNNAMED_PARK)
                .to_string(),
            neighborhood: self.neighborhood().to_string(),
            address: first_string(props, &["Address"]).unwrap_or_default().to_string(),
            location,
            // The portal has no surfacing attribute; grass is the coarse default.
            surface: Surface::Grass,
            has_lights: detects_lights(&desc),
            has_soccer_lines: mentions_soccer(&desc),
            has_goals: mentions_goals(&desc),
            opening_hours: OpeningHours::default_schedule(),
            short_desc: first_string(props, &["Short_Desc"])
                .unwrap_or_default()
                .to_string(),
            extra_desc: first_string(props, &["Desc1"]).unwrap_or_default().to_string(),
            website: optional_url(props, &["Website"]),
            image_url: optional_url(props, &["Image_URL"]),
        }
    }
}
