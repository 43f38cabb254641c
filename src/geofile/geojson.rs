use anyhow::anyhow;
use std::{fs, io, path::Path};

use crate::advisory::records::AdvisoryRecord;
use crate::geofile::feature::record_to_point_feature;

/// Convert a list of advisory records into a GeoJSON feature collection.
///
/// Records are processed in input order; each record with readable, numeric
/// coordinates under `lat_key`/`lon_key` contributes one point feature, and
/// malformed records are skipped without aborting the batch. An empty input
/// yields an empty collection.
///
/// Identical or empty coordinate keys are a misconfiguration and fail fast.
pub fn advisories_to_feature_collection(
    records: &[AdvisoryRecord],
    lat_key: &str,
    lon_key: &str,
) -> anyhow::Result<geojson::FeatureCollection> {
    if lat_key.is_empty() || lon_key.is_empty() {
        return Err(anyhow!("Coordinate keys must be non-empty strings"));
    }
    if lat_key == lon_key {
        return Err(anyhow!(
            "Latitude and longitude keys must differ, both are '{}'",
            lat_key
        ));
    }

    let mut features = Vec::new();
    let mut skipped_count = 0;
    for record in records {
        match record_to_point_feature(record, lat_key, lon_key) {
            Ok(feature) => features.push(feature),
            Err(reason) => {
                log::debug!("Skipping advisory record: {}", reason);
                skipped_count += 1;
            }
        }
    }
    if skipped_count > 0 {
        log::info!(
            "Skipped {} of {} advisory records with missing or malformed coordinates",
            skipped_count,
            records.len()
        );
    }

    Ok(geojson::FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// Serialize the collection and write it to `output_filepath` in one shot.
pub fn write_feature_collection_to_geojson(
    feature_collection: geojson::FeatureCollection,
    output_filepath: &Path,
) -> io::Result<()> {
    let geojson_contents = geojson::GeoJson::from(feature_collection);
    fs::write(output_filepath, geojson_contents.to_string())
}
