extern crate log;
pub mod advisory;
pub mod geofile;
use crate::advisory::download::{sync_advisory_data_to_file, FLORENCE_ADVISORY_URL};
use crate::advisory::records::read_advisory_records;
use crate::geofile::geojson::{advisories_to_feature_collection, write_feature_collection_to_geojson};
use anyhow::anyhow;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use std::{fs::read_to_string, path::Path};

/// Filename the feature collection is written under inside the data directory.
const FLORENCE_GEOJSON_FILENAME: &str = "florence_2018.geojson";

/// Convert cyclone advisory records to a GeoJSON point feature collection.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input config file.
    #[arg(short, long)]
    config_filepath: String,
}

#[derive(Deserialize, Debug)]
enum AdvisorySourceConfig {
    File {
        filepath: PathBuf,
    },
    Remote {
        #[serde(default = "default_advisory_url")]
        url: String,
    },
}

fn default_advisory_url() -> String {
    FLORENCE_ADVISORY_URL.to_string()
}

fn default_lat_key() -> String {
    "Lat".to_string()
}

fn default_lon_key() -> String {
    "Long".to_string()
}

#[derive(Deserialize, Debug)]
struct Config {
    advisory_source: AdvisorySourceConfig,
    data_dir: PathBuf,
    #[serde(default = "default_lat_key")]
    lat_key: String,
    #[serde(default = "default_lon_key")]
    lon_key: String,
}

fn try_main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }

    let args = Args::try_parse()?;
    if !Path::new(&args.config_filepath).exists() {
        return Err(anyhow!("Config file {} not found", &args.config_filepath));
    }
    let config_contents = read_to_string(args.config_filepath)?;
    let config: Config = serde_yaml::from_str(&config_contents)?;

    let input_filepath = match config.advisory_source {
        AdvisorySourceConfig::Remote { url } => {
            log::info!("Syncing advisory data from remote endpoint");
            sync_advisory_data_to_file(&url, &config.data_dir)?
        }
        AdvisorySourceConfig::File { filepath } => filepath,
    };

    let records = read_advisory_records(&input_filepath)?;
    log::info!("Read {} advisory records", records.len());

    let feature_collection =
        advisories_to_feature_collection(&records, &config.lat_key, &config.lon_key)?;
    log::info!(
        "Converted {} of {} records to point features",
        feature_collection.features.len(),
        records.len()
    );

    let output_filepath = config.data_dir.join(FLORENCE_GEOJSON_FILENAME);
    log::info!("Writing feature collection to {:?}", &output_filepath);
    write_feature_collection_to_geojson(feature_collection, &output_filepath)?;
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}
