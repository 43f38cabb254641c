use crate::advisory::records::AdvisoryRecord;
use std::fmt;

/// Why a record produced no feature. Callers can log or count these; the
/// default pipeline only logs them at debug level.
#[derive(Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The record has no entry under the given coordinate key.
    MissingKey(String),
    /// The value under the given key is not interpretable as a finite number.
    NonNumericCoordinate(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SkipReason::MissingKey(key) => write!(f, "missing coordinate key '{}'", key),
            SkipReason::NonNumericCoordinate(key) => {
                write!(f, "non-numeric coordinate value under key '{}'", key)
            }
        }
    }
}

/// Interpret a JSON value as a coordinate: a number, or numeric-looking text.
/// Non-finite results (NaN, infinities) are rejected.
fn value_as_coordinate(value: &serde_json::Value) -> Option<f64> {
    let number = match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn extract_coordinate(record: &AdvisoryRecord, key: &str) -> Result<f64, SkipReason> {
    let value = record
        .get(key)
        .ok_or_else(|| SkipReason::MissingKey(key.to_string()))?;
    value_as_coordinate(value).ok_or_else(|| SkipReason::NonNumericCoordinate(key.to_string()))
}

/// Convert one advisory record into a GeoJSON point feature.
///
/// The geometry is `[longitude, latitude]` (GeoJSON x-then-y order). The
/// properties are a copy of the record with the two coordinate keys removed;
/// all other keys keep their order and their original value types.
pub fn record_to_point_feature(
    record: &AdvisoryRecord,
    lat_key: &str,
    lon_key: &str,
) -> Result<geojson::Feature, SkipReason> {
    let lat = extract_coordinate(record, lat_key)?;
    let lon = extract_coordinate(record, lon_key)?;

    let mut properties = record.clone();
    properties.remove(lat_key);
    properties.remove(lon_key);

    Ok(geojson::Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::from(&geo::Point::new(lon, lat))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{record_to_point_feature, SkipReason};
    use crate::advisory::records::AdvisoryRecord;

    fn record(value: serde_json::Value) -> AdvisoryRecord {
        value.as_object().unwrap().clone()
    }

    fn point_coordinates(feature: &geojson::Feature) -> Vec<f64> {
        match &feature.geometry.as_ref().unwrap().value {
            geojson::Value::Point(coords) => coords.clone(),
            other => panic!("expected a point geometry, got {:?}", other),
        }
    }

    #[rstest]
    #[case(json!({"Lat": "34.5", "Long": "-77.9"}), vec![-77.9, 34.5])] // numeric text
    #[case(json!({"Lat": 34.5, "Long": -77.9}), vec![-77.9, 34.5])] // JSON numbers
    #[case(json!({"Lat": 34, "Long": -78}), vec![-78.0, 34.0])] // integers
    #[case(json!({"Lat": " 34.5 ", "Long": " -77.9"}), vec![-77.9, 34.5])] // padded text
    fn test_coordinates_are_lon_lat_ordered(
        #[case] record_json: serde_json::Value,
        #[case] expected_coordinates: Vec<f64>,
    ) {
        let feature = record_to_point_feature(&record(record_json), "Lat", "Long").unwrap();
        assert_eq!(expected_coordinates, point_coordinates(&feature));
    }

    #[rstest]
    #[case(json!({"Long": "-77.9"}), SkipReason::MissingKey("Lat".to_string()))]
    #[case(json!({"Lat": "34.5"}), SkipReason::MissingKey("Long".to_string()))]
    #[case(
        json!({"Lat": "bad", "Long": "-77.9"}),
        SkipReason::NonNumericCoordinate("Lat".to_string())
    )]
    #[case(
        json!({"Lat": "34.5", "Long": null}),
        SkipReason::NonNumericCoordinate("Long".to_string())
    )]
    #[case(
        json!({"Lat": "NaN", "Long": "-77.9"}),
        SkipReason::NonNumericCoordinate("Lat".to_string())
    )]
    #[case(
        json!({"Lat": "inf", "Long": "-77.9"}),
        SkipReason::NonNumericCoordinate("Lat".to_string())
    )]
    #[case(
        json!({"Lat": [34.5], "Long": "-77.9"}),
        SkipReason::NonNumericCoordinate("Lat".to_string())
    )]
    fn test_malformed_records_report_skip_reason(
        #[case] record_json: serde_json::Value,
        #[case] expected_reason: SkipReason,
    ) {
        let result = record_to_point_feature(&record(record_json), "Lat", "Long");
        assert_eq!(expected_reason, result.unwrap_err());
    }

    #[test]
    fn test_properties_exclude_coordinate_keys_and_preserve_values() {
        let advisory = record(json!({
            "Advisory": "15A",
            "Lat": "33.9",
            "Long": "-74.6",
            "Wind": 115,
            "Pressure": null
        }));

        let feature = record_to_point_feature(&advisory, "Lat", "Long").unwrap();
        let properties = feature.properties.unwrap();

        let keys: Vec<&str> = properties.keys().map(String::as_str).collect();
        assert_eq!(vec!["Advisory", "Wind", "Pressure"], keys);
        assert_eq!(properties["Advisory"], "15A");
        assert_eq!(properties["Wind"], 115);
        assert_eq!(properties["Pressure"], serde_json::Value::Null);
    }

    #[test]
    fn test_custom_coordinate_keys() {
        let advisory = record(json!({"latitude": 25.0, "longitude": -80.0, "Wind": 40}));
        let feature = record_to_point_feature(&advisory, "latitude", "longitude").unwrap();
        assert_eq!(vec![-80.0, 25.0], point_coordinates(&feature));
        assert!(!feature.properties.unwrap().contains_key("latitude"));
    }
}
