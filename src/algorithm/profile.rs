//! Name profiles
//!
//! Composes the estimator and the aggregator for a name looked up in the
//! loaded datasets. Profiling several names fans out over a rayon thread pool;
//! every profile reads the shared datasets and owns its output.

use std::fmt;
use std::str::FromStr;

use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::EstimatorConfig;
use crate::error::{EstimatorError, Result};
use crate::loader::GenderedDatasets;
use crate::models::{BirthCountSeries, Distribution, Gender, SummaryStats, SurvivalTable};

use super::distribution::estimate_with_config;
use super::statistics::summarize_with;

/// Estimated living population for one name and gender
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameProfile {
    /// Name as spelled in the source data
    pub name: String,
    /// Gender the name was looked up for
    pub gender: Gender,
    /// Per-year living estimates
    pub distribution: Distribution,
    /// Summary of the distribution
    pub summary: SummaryStats,
}

/// A name to profile, written `gender:name` on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRequest {
    /// Name to look up
    pub name: String,
    /// Gender to look it up for
    pub gender: Gender,
}

impl NameRequest {
    /// Create a request
    #[must_use]
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
        }
    }
}

impl FromStr for NameRequest {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self> {
        let (gender, name) = s
            .split_once(':')
            .ok_or_else(|| EstimatorError::format(format!("expected gender:name, got {s:?}")))?;
        Ok(Self::new(name.trim(), gender.parse()?))
    }
}

impl fmt::Display for NameRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.gender, self.name)
    }
}

/// Estimate and summarize a single series
#[must_use]
pub fn build_profile(
    name: &str,
    gender: Gender,
    births: &BirthCountSeries,
    survival: &SurvivalTable,
    config: &EstimatorConfig,
) -> NameProfile {
    let distribution = estimate_with_config(births, survival, config);
    let summary = summarize_with(&distribution, config.percentiles);
    NameProfile {
        name: name.to_string(),
        gender,
        distribution,
        summary,
    }
}

/// Profile a name, or `None` when the name is unknown for that gender
#[must_use]
pub fn profile_name(
    datasets: &GenderedDatasets,
    name: &str,
    gender: Gender,
    config: &EstimatorConfig,
) -> Option<NameProfile> {
    let dataset = datasets.dataset(gender);
    let Some(entry) = dataset.names.get(name) else {
        log::debug!("No {gender} birth counts for {name:?}");
        return None;
    };
    Some(build_profile(
        &entry.name,
        gender,
        &entry.series,
        &dataset.survival,
        config,
    ))
}

/// Profile several names in parallel
///
/// # Returns
/// Profiles in request order. Unknown names are left out.
///
/// # Errors
/// Returns an error if the configuration is invalid or the worker pool cannot
/// be created
pub fn profile_names(
    datasets: &GenderedDatasets,
    requests: &[NameRequest],
    config: &EstimatorConfig,
) -> Result<Vec<NameProfile>> {
    profile_names_with_progress(datasets, requests, config, &ProgressBar::hidden())
}

/// Profile several names in parallel, advancing a progress bar per name
///
/// # Errors
/// Returns an error if the configuration is invalid or the worker pool cannot
/// be created
pub fn profile_names_with_progress(
    datasets: &GenderedDatasets,
    requests: &[NameRequest],
    config: &EstimatorConfig,
    progress: &ProgressBar,
) -> Result<Vec<NameProfile>> {
    config.validate()?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.parallelism)
        .build()?;

    log::info!(
        "Profiling {} names on {} threads",
        requests.len(),
        config.parallelism
    );

    let profiles: Vec<NameProfile> = pool.install(|| {
        requests
            .par_iter()
            .progress_with(progress.clone())
            .filter_map(|request| profile_name(datasets, &request.name, request.gender, config))
            .collect()
    });

    let missing: Vec<String> = requests
        .iter()
        .filter(|request| !datasets.dataset(request.gender).names.contains(&request.name))
        .map(ToString::to_string)
        .collect();
    if !missing.is_empty() {
        log::warn!(
            "{} of {} names had no birth counts: {}",
            missing.len(),
            requests.len(),
            missing.join(", ")
        );
    }

    Ok(profiles)
}
