//! Shared property-bag extraction helpers for city data sources.
//!
//! Upstream schemas are not under our control, so every extraction works off
//! an ordered list of candidate keys and tolerates missing or wrong-typed
//! values.

use serde_json::{Map, Value};

/// Placeholder name for records with no usable name attribute.
pub const UNNAMED_PARK: &str = "Unnamed park";

/// Returns the first candidate key whose value is a non-empty string.
#[must_use]
pub fn first_string<'a>(props: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| props.get(*key).and_then(Value::as_str))
        .find(|value| !value.is_empty())
}

/// Concatenates every present candidate text field into one lower-cased
/// blob, used as the basis for keyword heuristics.
#[must_use]
pub fn text_blob(props: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| props.get(*key).and_then(Value::as_str))
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Case-insensitive substring test against a structured attribute.
///
/// Non-string values (numbers, booleans) are rendered before matching since
/// some providers publish flags as `1`/`0` or `true`.
#[must_use]
pub fn attr_contains(props: &Map<String, Value>, key: &str, needle: &str) -> bool {
    let Some(value) = props.get(key) else {
        return false;
    };
    let rendered = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return false,
    };
    rendered.to_lowercase().contains(needle)
}

/// Upgrades an insecure URL scheme to the secure equivalent.
#[must_use]
pub fn upgrade_scheme(url: &str) -> String {
    url.strip_prefix("http://")
        .map_or_else(|| url.to_string(), |rest| format!("https://{rest}"))
}

/// Returns the first present candidate URL, scheme-upgraded. Empty strings
/// count as absent.
#[must_use]
pub fn optional_url(props: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    first_string(props, keys).map(upgrade_scheme)
}

/// Extracts a stable record identifier.
///
/// Prefers the upstream object-id properties, then the feature-level `id`,
/// and finally mints a per-load synthetic id. Synthetic ids are unique within
/// one load only — they are regenerated on every refresh.
#[must_use]
pub fn record_id(feature: &Value, props: &Map<String, Value>, keys: &[&str]) -> String {
    for key in keys {
        if let Some(id) = render_id(props.get(*key)) {
            return id;
        }
    }
    if let Some(id) = render_id(feature.get("id")) {
        return id;
    }
    uuid::Uuid::new_v4().to_string()
}

fn render_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(raw: Value) -> Map<String, Value> {
        raw.as_object().unwrap().clone()
    }

    #[test]
    fn first_string_respects_candidate_order() {
        let props = props(json!({"Name": "fallback", "NAME": "Eaton Park"}));
        assert_eq!(
            first_string(&props, &["NAME", "Name"]),
            Some("Eaton Park")
        );
    }

    #[test]
    fn first_string_skips_empty_and_non_string_values() {
        let props = props(json!({"NAME": "", "PARK_NAME": 7, "Park": "Central"}));
        assert_eq!(
            first_string(&props, &["NAME", "PARK_NAME", "Park"]),
            Some("Central")
        );
    }

    #[test]
    fn text_blob_joins_and_lowercases() {
        let props = props(json!({"Short_Desc": "Lighted Field", "Desc1": "Soccer GOALS"}));
        assert_eq!(
            text_blob(&props, &["Short_Desc", "Desc1"]),
            "lighted field soccer goals"
        );
    }

    #[test]
    fn attr_contains_matches_case_insensitively() {
        let props = props(json!({"LIGHTS": "Yes - evenings", "SPORT": "Soccer/Football"}));
        assert!(attr_contains(&props, "LIGHTS", "yes"));
        assert!(attr_contains(&props, "SPORT", "soccer"));
        assert!(!attr_contains(&props, "LIGHTS", "no"));
        assert!(!attr_contains(&props, "MISSING", "yes"));
    }

    #[test]
    fn upgrade_scheme_only_rewrites_insecure() {
        assert_eq!(
            upgrade_scheme("http://example.com/park.jpg"),
            "https://example.com/park.jpg"
        );
        assert_eq!(
            upgrade_scheme("https://example.com/park.jpg"),
            "https://example.com/park.jpg"
        );
    }

    #[test]
    fn record_id_prefers_object_id_then_feature_id() {
        let feature = json!({"id": "feat-9", "properties": {"OBJECTID": 42}});
        let props = feature["properties"].as_object().unwrap().clone();
        assert_eq!(record_id(&feature, &props, &["OBJECTID"]), "42");

        let feature = json!({"id": "feat-9", "properties": {}});
        let props = Map::new();
        assert_eq!(record_id(&feature, &props, &["OBJECTID"]), "feat-9");
    }

    #[test]
    fn record_id_mints_synthetic_when_nothing_present() {
        let feature = json!({});
        let props = Map::new();
        let first = record_id(&feature, &props, &["OBJECTID"]);
        let second = record_id(&feature, &props, &["OBJECTID"]);
        assert!(!first.is_empty());
        assert_ne!(first, second);
    }
}
