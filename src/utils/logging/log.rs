//! Log lines for dataset loading and data quality

use std::path::Path;
use std::time::Duration;

/// Announce that a dataset file is about to be read
///
/// # Arguments
/// * `dataset` - What the file holds, e.g. "birth counts"
/// * `path` - File being read
pub fn log_load_start(dataset: &str, path: &Path) {
    log::info!("Reading {dataset} from {}", path.display());
}

/// Report a dataset file that was read and parsed
///
/// # Arguments
/// * `dataset` - What the file holds
/// * `path` - File that was read
/// * `records` - Number of records kept, with `unit` naming what they are
/// * `elapsed` - Time spent reading and parsing
pub fn log_load_complete(
    dataset: &str,
    path: &Path,
    records: usize,
    unit: &str,
    elapsed: Duration,
) {
    log::info!(
        "Read {dataset} from {}: {records} {unit} in {elapsed:.2?}",
        path.display()
    );
}

/// Log a data quality warning, with the dataset it came from when known
///
/// # Arguments
/// * `message` - Warning message
/// * `source` - Optional dataset label related to the warning
pub fn log_warning(message: &str, source: Option<&str>) {
    if let Some(source) = source {
        log::warn!("{source}: {message}");
    } else {
        log::warn!("{message}");
    }
}
