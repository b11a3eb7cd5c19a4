use std::path::Path;
use std::time::Instant;

use anyhow::{Context, bail};
use log::{info, warn};
use name_age::algorithm::profile::{NameRequest, profile_names_with_progress};
use name_age::utils::logging::{create_main_progress_bar, finish_progress_bar};
use name_age::{EstimatorConfig, GenderedDatasets};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(data_dir) = args.next() else {
        bail!("usage: name-age <data-dir> <gender>:<name>...");
    };
    let requests = args
        .map(|arg| arg.parse::<NameRequest>())
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid name argument")?;
    if requests.is_empty() {
        warn!("No names requested");
        return Ok(());
    }

    let config = EstimatorConfig::from_env();
    config.validate().context("Invalid configuration")?;
    info!("{config}");

    let start = Instant::now();
    let datasets = GenderedDatasets::load_dir(Path::new(&data_dir))
        .with_context(|| format!("Failed to load datasets from {data_dir}"))?;
    info!("Loaded datasets in {:?}", start.elapsed());

    let progress = create_main_progress_bar(requests.len() as u64, Some("Profiling names"));
    let profiles = profile_names_with_progress(&datasets, &requests, &config, &progress)?;
    finish_progress_bar(&progress, Some("Done"));

    for profile in &profiles {
        println!("{} ({})", profile.name, profile.gender);
        println!("{}", profile.summary);
        println!("{}", serde_json::to_string_pretty(profile)?);
    }

    Ok(())
}
