//! Amenity keyword heuristics.
//!
//! Park datasets rarely carry structured amenity flags, so detection falls
//! back to keyword matching over the record's description text. Matching is
//! against an already lower-cased blob (see [`crate::parsing::text_blob`]).

/// Returns `true` if the haystack contains any of the needles.
#[must_use]
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Description text mentions field lighting.
#[must_use]
pub fn detects_lights(desc: &str) -> bool {
    contains_any(desc, &["lighted", "lights"])
}

/// Description text mentions soccer use (multi-purpose fields count — they
/// are lined for soccer in practice).
#[must_use]
pub fn mentions_soccer(desc: &str) -> bool {
    contains_any(desc, &["soccer", "multi-purpose field"])
}

/// Description text mentions goals.
#[must_use]
pub fn mentions_goals(desc: &str) -> bool {
    contains_any(desc, &["goal"])
}
