use anyhow::Context;
use std::{fs::read_to_string, path::Path};

/// One flat storm-observation entry: attribute name to JSON value. Insertion
/// order is preserved (serde_json `preserve_order`).
pub type AdvisoryRecord = serde_json::Map<String, serde_json::Value>;

/// Read a JSON array of flat advisory objects from a local file.
///
/// A missing file, undecodable JSON, or any shape other than an array of
/// objects is a hard failure. Per-record coordinate problems are not checked
/// here; they are handled during conversion.
pub fn read_advisory_records(input_filepath: &Path) -> anyhow::Result<Vec<AdvisoryRecord>> {
    let contents = read_to_string(input_filepath)
        .with_context(|| format!("Could not read advisory file {:?}", input_filepath))?;
    let records: Vec<AdvisoryRecord> = serde_json::from_str(&contents).with_context(|| {
        format!(
            "Advisory file {:?} is not a JSON array of objects",
            input_filepath
        )
    })?;
    Ok(records)
}
