use anyhow::anyhow;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Endpoint serving the Hurricane Florence (2018) advisory history as a JSON array.
pub const FLORENCE_ADVISORY_URL: &str =
    "https://flhurricane.com/cyclone/stormhistory.php?j=1&year=2018&storm=6";

/// Filename the raw advisory list is persisted under inside the data directory.
pub const FLORENCE_JSON_FILENAME: &str = "florence_2018.json";

/// Fetch the raw advisory list with a single blocking GET. No retries.
///
/// A non-success status is an error carrying both the status code and the
/// response body, so the operator can see what the server actually said.
pub fn download_advisory_data(url: &str) -> anyhow::Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent("florence-geo")
        .build()?;
    let response = client.get(url).send()?;
    let status = response.status();
    let body = response.text().or(Err(anyhow!("No response text")))?;
    if !status.is_success() {
        return Err(anyhow!(
            "Failed to retrieve advisory data: status {}, body: {}",
            status,
            body
        ));
    }
    Ok(body)
}

/// Download the advisory list and persist it under `output_dir`, unless a
/// local copy already exists. Returns the path to the local file.
///
/// The response body must itself be valid JSON; it is re-serialized
/// pretty-printed before writing. Nothing is written on retrieval failure.
pub fn sync_advisory_data_to_file(url: &str, output_dir: &Path) -> anyhow::Result<PathBuf> {
    let output_filepath = output_dir.join(FLORENCE_JSON_FILENAME);
    if output_filepath.exists() {
        log::info!(
            "Local file exists for advisory data: {:?}",
            output_filepath.canonicalize()
        );
        return Ok(output_filepath);
    }

    log::info!("Downloading advisory data from {}", url);
    let advisory_data = download_advisory_data(url)?;
    let advisory_json: serde_json::Value = serde_json::from_str(&advisory_data)
        .map_err(|err| anyhow!("Advisory response is not valid JSON: {}", err))?;
    fs::write(&output_filepath, serde_json::to_string_pretty(&advisory_json)?)
        .or(Err(anyhow!("Could not write advisory data to file")))?;
    Ok(output_filepath)
}
