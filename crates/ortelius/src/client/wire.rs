//! Wire-format decoding for the service's JSON search responses.

use serde_json::{Map, Value};
use tracing::debug;

use super::Result;
use crate::candidate::Candidate;

/// Decode a response body into candidates.
///
/// The body must be a JSON array whose every element is an object; anything
/// else fails the whole batch with a decode error. Elements are then salvaged
/// independently: records without parseable string `lat`/`lon` are skipped,
/// every other field falls back to its default when absent or wrong-typed.
pub(super) fn decode_candidates(body: &[u8]) -> Result<Vec<Candidate>> {
    let records: Vec<Map<String, Value>> = serde_json::from_slice(body)?;
    let total = records.len();
    let candidates: Vec<Candidate> = records.iter().filter_map(candidate_from_record).collect();
    if candidates.len() < total {
        debug!(
            dropped = total - candidates.len(),
            kept = candidates.len(),
            "skipped records without usable coordinates"
        );
    }
    Ok(candidates)
}

/// Build a candidate from one wire record.
///
/// The wire format carries coordinates as strings. A record where `lat` or
/// `lon` is missing, non-string or unparseable yields `None`; numbers are
/// not accepted for the coordinate fields.
fn candidate_from_record(record: &Map<String, Value>) -> Option<Candidate> {
    let latitude = parse_coordinate(record.get("lat"))?;
    let longitude = parse_coordinate(record.get("lon"))?;
    Some(Candidate {
        display_name: record
            .get("display_name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned(),
        latitude,
        longitude,
        importance: record
            .get("importance")
            .and_then(Value::as_f64)
            .unwrap_or_default(),
        category: record
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned(),
    })
}

fn parse_coordinate(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_str)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let body = br#"[{
            "display_name": "London, Greater London, England, United Kingdom",
            "lat": "51.5073219",
            "lon": "-0.1276474",
            "importance": 0.9407827616237295,
            "type": "administrative"
        }]"#;

        let candidates = decode_candidates(body).unwrap();
        assert_eq!(candidates.len(), 1);
        let candidate = &candidates[0];
        assert_eq!(
            candidate.display_name,
            "London, Greater London, England, United Kingdom"
        );
        assert_eq!(candidate.latitude, 51.5073219);
        assert_eq!(candidate.longitude, -0.1276474);
        assert_eq!(candidate.importance, 0.9407827616237295);
        assert_eq!(candidate.category, "administrative");
    }

    #[test]
    fn test_decode_empty_array() {
        assert_eq!(decode_candidates(b"[]").unwrap(), vec![]);
    }

    #[test]
    fn test_decode_preserves_response_order() {
        let body = br#"[
            {"display_name": "B", "lat": "2.0", "lon": "2.0"},
            {"display_name": "A", "lat": "1.0", "lon": "1.0"}
        ]"#;

        let names: Vec<String> = decode_candidates(body)
            .unwrap()
            .into_iter()
            .map(|candidate| candidate.display_name)
            .collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn test_missing_coordinates_skips_record() {
        let body = br#"[
            {"display_name": "Z"},
            {"display_name": "kept", "lat": "1.5", "lon": "-2.5"},
            {"display_name": "no lon", "lat": "1.5"}
        ]"#;

        let candidates = decode_candidates(body).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].display_name, "kept");
    }

    #[test]
    fn test_numeric_coordinates_skip_record() {
        // Coordinates must arrive as strings; a numeric lat is malformed.
        let body = br#"[{"display_name": "X", "lat": 51.5, "lon": "-0.12"}]"#;
        assert!(decode_candidates(body).unwrap().is_empty());
    }

    #[test]
    fn test_unparseable_coordinates_skip_record() {
        let body = br#"[{"display_name": "X", "lat": "north", "lon": "-0.12"}]"#;
        assert!(decode_candidates(body).unwrap().is_empty());
    }

    #[test]
    fn test_optional_fields_default() {
        let body = br#"[{"lat": "1.0", "lon": "2.0"}]"#;

        let candidates = decode_candidates(body).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].display_name, "");
        assert_eq!(candidates[0].importance, 0.0);
        assert_eq!(candidates[0].category, "");
    }

    #[test]
    fn test_wrong_typed_optional_fields_default_but_keep_record() {
        let body = br#"[{
            "display_name": 7,
            "lat": "1.0",
            "lon": "2.0",
            "importance": "very",
            "type": null
        }]"#;

        let candidates = decode_candidates(body).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].display_name, "");
        assert_eq!(candidates[0].importance, 0.0);
        assert_eq!(candidates[0].category, "");
    }

    #[test]
    fn test_non_array_body_is_decode_error() {
        assert!(decode_candidates(br#"{"error": "rate limited"}"#).is_err());
        assert!(decode_candidates(b"not json at all").is_err());
    }

    #[test]
    fn test_array_of_non_objects_is_decode_error() {
        assert!(decode_candidates(b"[1, 2, 3]").is_err());
        assert!(decode_candidates(br#"["a", "b"]"#).is_err());
    }
}
