//! Geometry reduction: any GeoJSON shape down to one representative point.
//!
//! Park datasets mix Point, Polygon, and `MultiPolygon` geometry (and
//! sometimes none at all). Markers need exactly one coordinate, so polygons
//! are reduced to the unweighted mean of their outer-ring vertices. That is
//! deliberately not an area-weighted centroid — the error is negligible for
//! city-park-sized shapes, and changing it would move every marker.

use field_map_field_models::LatLng;
use geojson::Geometry;

/// Reduces a geometry to a single coordinate, falling back to `fallback`
/// when the geometry is absent, unsupported, or has no valid vertices.
///
/// GeoJSON positions are `[longitude, latitude]`; the output pair is
/// latitude-first.
#[must_use]
pub fn reduce(geometry: Option<&Geometry>, fallback: LatLng) -> LatLng {
    let Some(geometry) = geometry else {
        return fallback;
    };

    match &geometry.value {
        geojson::Value::Point(position) => position_latlng(position).unwrap_or(fallback),
        geojson::Value::Polygon(rings) => ring_centroid(rings.first(), fallback),
        // Outer ring of the first polygon member only.
        geojson::Value::MultiPolygon(polygons) => {
            ring_centroid(polygons.first().and_then(|rings| rings.first()), fallback)
        }
        _ => fallback,
    }
}

/// Reduces a raw JSON geometry value, tolerating malformed input.
///
/// Anything that does not parse as GeoJSON geometry yields the fallback.
#[must_use]
pub fn reduce_raw(value: Option<&serde_json::Value>, fallback: LatLng) -> LatLng {
    let geometry = value.and_then(|v| serde_json::from_value::<Geometry>(v.clone()).ok());
    reduce(geometry.as_ref(), fallback)
}

fn position_latlng(position: &[f64]) -> Option<LatLng> {
    if position.len() < 2 {
        return None;
    }
    let (lng, lat) = (position[0], position[1]);
    if lat.is_finite() && lng.is_finite() {
        Some(LatLng::new(lat, lng))
    } else {
        None
    }
}

/// Unweighted vertex mean over one ring, skipping malformed or non-finite
/// vertices. An empty or fully-invalid ring yields the fallback.
fn ring_centroid(ring: Option<&Vec<Vec<f64>>>, fallback: LatLng) -> LatLng {
    let Some(ring) = ring else {
        return fallback;
    };

    let mut sum_lat = 0.0;
    let mut sum_lng = 0.0;
    let mut count: u32 = 0;

    for vertex in ring {
        if vertex.len() < 2 {
            continue;
        }
        let (lng, lat) = (vertex[0], vertex[1]);
        if !lat.is_finite() || !lng.is_finite() {
            continue;
        }
        sum_lat += lat;
        sum_lng += lng;
        count += 1;
    }

    if count == 0 {
        return fallback;
    }

    LatLng::new(sum_lat / f64::from(count), sum_lng / f64::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: LatLng = LatLng::new(34.1478, -118.1445);

    fn parse_geometry(raw: &str) -> Geometry {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn absent_geometry_yields_fallback() {
        let reduced = reduce(None, FALLBACK);
        assert_eq!(reduced, FALLBACK);
    }

    #[test]
    fn point_swaps_coordinate_order() {
        let geometry = parse_geometry(r#"{"type":"Point","coordinates":[-118.127,34.137]}"#);
        let reduced = reduce(Some(&geometry), FALLBACK);
        assert!((reduced.lat - 34.137).abs() < f64::EPSILON);
        assert!((reduced.lng - -118.127).abs() < f64::EPSILON);
    }

    #[test]
    fn polygon_centroid_is_vertex_mean() {
        let geometry = parse_geometry(
            r#"{"type":"Polygon","coordinates":[[[0,0],[0,2],[2,2],[2,0]]]}"#,
        );
        let reduced = reduce(Some(&geometry), FALLBACK);
        assert!((reduced.lat - 1.0).abs() < f64::EPSILON);
        assert!((reduced.lng - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn multi_polygon_uses_first_outer_ring_only() {
        let geometry = parse_geometry(
            r#"{"type":"MultiPolygon","coordinates":[
                [[[0,0],[0,2],[2,2],[2,0]]],
                [[[100,100],[100,102],[102,102]]]
            ]}"#,
        );
        let reduced = reduce(Some(&geometry), FALLBACK);
        assert!((reduced.lat - 1.0).abs() < f64::EPSILON);
        assert!((reduced.lng - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_polygon_ring_yields_fallback() {
        let geometry = parse_geometry(r#"{"type":"Polygon","coordinates":[[]]}"#);
        assert_eq!(reduce(Some(&geometry), FALLBACK), FALLBACK);
    }

    #[test]
    fn unsupported_geometry_type_yields_fallback() {
        let geometry =
            parse_geometry(r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#);
        assert_eq!(reduce(Some(&geometry), FALLBACK), FALLBACK);
    }

    #[test]
    fn malformed_raw_geometry_yields_fallback() {
        let raw = serde_json::json!({"type": "Point", "coordinates": "oops"});
        assert_eq!(reduce_raw(Some(&raw), FALLBACK), FALLBACK);
        assert_eq!(reduce_raw(None, FALLBACK), FALLBACK);
        assert_eq!(reduce_raw(Some(&serde_json::Value::Null), FALLBACK), FALLBACK);
    }

    #[test]
    fn invalid_vertices_are_skipped() {
        let ring = vec![
            vec![0.0, 0.0],
            vec![5.0],
            vec![f64::NAN, 1.0],
            vec![0.0, 2.0],
            vec![2.0, 2.0],
            vec![2.0, 0.0],
        ];
        let geometry = Geometry::new(geojson::Value::Polygon(vec![ring]));
        let reduced = reduce(Some(&geometry), FALLBACK);
        assert!((reduced.lat - 1.0).abs() < f64::EPSILON);
        assert!((reduced.lng - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn all_invalid_vertices_yield_fallback() {
        let ring = vec![vec![f64::NAN, f64::NAN], vec![1.0]];
        let geometry = Geometry::new(geojson::Value::Polygon(vec![ring]));
        assert_eq!(reduce(Some(&geometry), FALLBACK), FALLBACK);
    }
}
