//! Summary statistics for an estimated distribution
//!
//! Every function here accepts an empty distribution and returns zero values
//! for it. Nothing in this module fails.

pub mod percentile;

pub use percentile::{age_range, median_age};

use crate::config::PercentileBounds;
use crate::models::{DistributionEntry, PeakBirthYear, SummaryStats, YearRange};

/// Estimated number of people alive across the whole distribution,
/// saturating at `u64::MAX`
#[must_use]
pub fn total_living(distribution: &[DistributionEntry]) -> u64 {
    distribution
        .iter()
        .map(|entry| entry.living_estimate)
        .fold(0u64, u64::saturating_add)
}

/// Birth year with the most births; the earliest year wins a tie
#[must_use]
pub fn peak_birth_year(distribution: &[DistributionEntry]) -> PeakBirthYear {
    distribution
        .iter()
        .fold(None::<&DistributionEntry>, |peak, entry| match peak {
            Some(peak) if peak.births >= entry.births => Some(peak),
            _ => Some(entry),
        })
        .map(|entry| PeakBirthYear {
            year: entry.year,
            births: entry.births,
        })
        .unwrap_or_default()
}

/// First and last birth year of an ascending distribution
#[must_use]
pub fn year_coverage(distribution: &[DistributionEntry]) -> YearRange {
    match (distribution.first(), distribution.last()) {
        (Some(first), Some(last)) => YearRange {
            earliest: first.year,
            latest: last.year,
        },
        _ => YearRange::default(),
    }
}

/// Summarize a distribution using the 10th/90th percentile age range
#[must_use]
pub fn summarize(distribution: &[DistributionEntry]) -> SummaryStats {
    summarize_with(distribution, PercentileBounds::default())
}

/// Summarize a distribution with custom age range percentiles
#[must_use]
pub fn summarize_with(
    distribution: &[DistributionEntry],
    percentiles: PercentileBounds,
) -> SummaryStats {
    let stats = SummaryStats {
        total_living: total_living(distribution),
        median_age: median_age(distribution),
        peak_birth_year: peak_birth_year(distribution),
        age_range: age_range(distribution, percentiles),
        year_range: year_coverage(distribution),
    };
    log::debug!(
        "Summarized {} cohorts: {} living, median age {}",
        distribution.len(),
        stats.total_living,
        stats.median_age
    );
    stats
}
