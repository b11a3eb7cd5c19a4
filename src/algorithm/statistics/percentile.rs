//! Median and percentile ages over the living population
//!
//! Both walk the distribution from the oldest cohort to the youngest while
//! accumulating living estimates ("cumulative-from-oldest"). A threshold is
//! located at the age of the first cohort where the running sum reaches it.

use std::cmp::Reverse;

use itertools::Itertools;

use crate::config::PercentileBounds;
use crate::models::{Age, AgeRange, DistributionEntry};

use super::total_living;

/// Entries ordered from oldest to youngest, ties keeping their input order
fn oldest_first(distribution: &[DistributionEntry]) -> impl Iterator<Item = &DistributionEntry> {
    distribution.iter().sorted_by_key(|entry| Reverse(entry.age))
}

/// Running `(entry, cumulative living)` pairs from oldest to youngest
fn cumulative_from_oldest(
    distribution: &[DistributionEntry],
) -> impl Iterator<Item = (&DistributionEntry, u64)> {
    oldest_first(distribution).scan(0u64, |cumulative, entry| {
        *cumulative = cumulative.saturating_add(entry.living_estimate);
        Some((entry, *cumulative))
    })
}

/// Weighted median age of the living population
///
/// # Returns
/// The age of the first cohort, oldest first, at which at least half of the
/// living population has been accumulated. `0` when nobody is estimated
/// alive.
#[must_use]
pub fn median_age(distribution: &[DistributionEntry]) -> Age {
    let total = total_living(distribution);
    if total == 0 {
        return 0;
    }

    let half = total as f64 / 2.0;
    cumulative_from_oldest(distribution)
        .find(|&(_, cumulative)| cumulative as f64 >= half)
        .map_or_else(
            || largest_cohort_age(distribution),
            |(entry, _)| entry.age,
        )
}

/// Age range between two percentiles of the living population
///
/// The upper percentile maps to the older end of the range: `upper` is the
/// age where the cumulative-from-oldest sum first reaches
/// `total * (1 - upper / 100)`. Likewise `lower` uses
/// `total * (1 - lower / 100)`. Out-of-range percentiles are clamped.
#[must_use]
pub fn age_range(distribution: &[DistributionEntry], percentiles: PercentileBounds) -> AgeRange {
    let total = total_living(distribution);
    if total == 0 {
        return AgeRange::default();
    }

    let PercentileBounds { lower, upper } = percentiles.normalized();
    let total = total as f64;
    let upper_threshold = total * (1.0 - upper / 100.0);
    let lower_threshold = total * (1.0 - lower / 100.0);

    let mut upper_age = None;
    let mut lower_age = None;
    for (entry, cumulative) in cumulative_from_oldest(distribution) {
        let cumulative = cumulative as f64;
        if upper_age.is_none() && cumulative >= upper_threshold {
            upper_age = Some(entry.age);
        }
        if lower_age.is_none() && cumulative >= lower_threshold {
            lower_age = Some(entry.age);
        }
        if upper_age.is_some() && lower_age.is_some() {
            break;
        }
    }

    let (youngest, oldest) = distribution
        .iter()
        .map(|entry| entry.age)
        .minmax()
        .into_option()
        .unwrap_or((0, 0));

    AgeRange {
        lower: lower_age.unwrap_or(youngest),
        upper: upper_age.unwrap_or(oldest),
    }
}

/// Age of the cohort with the largest living estimate, first one on ties
fn largest_cohort_age(distribution: &[DistributionEntry]) -> Age {
    distribution
        .iter()
        .reduce(|best, entry| {
            if entry.living_estimate > best.living_estimate {
                entry
            } else {
                best
            }
        })
        .map_or(0, |entry| entry.age)
}
