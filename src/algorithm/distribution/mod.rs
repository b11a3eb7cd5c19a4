//! Distribution estimation
//!
//! Turns a birth count series and a survival table into the estimated number
//! of people still alive from each birth year.

pub mod resolver;

pub use resolver::{
    CrossYearLookup, ExactLookup, LinearApproximation, Resolution, ResolutionSource,
    ResolverChain, SurvivalResolver,
};

use crate::config::EstimatorConfig;
use crate::models::{Age, BirthCountSeries, Distribution, DistributionEntry, SurvivalTable, Year};

/// Estimate the living distribution with the standard resolver chain
///
/// # Arguments
/// * `births` - Births per year for one name and gender
/// * `survival` - Survival table for the same gender
/// * `current_year` - Reference year for ages
///
/// # Returns
/// One entry per birth year with births, ascending by year. Years with no
/// births and years after `current_year` are left out.
#[must_use]
pub fn estimate_distribution(
    births: &BirthCountSeries,
    survival: &SurvivalTable,
    current_year: Year,
) -> Distribution {
    estimate_distribution_with(births, survival, current_year, &ResolverChain::default())
}

/// Estimate the living distribution using the reference year and hazard
/// from a configuration
#[must_use]
pub fn estimate_with_config(
    births: &BirthCountSeries,
    survival: &SurvivalTable,
    config: &EstimatorConfig,
) -> Distribution {
    let chain = ResolverChain::standard(config.fallback_hazard_per_year);
    estimate_distribution_with(births, survival, config.current_year, &chain)
}

/// Estimate the living distribution with an explicit resolver chain.
///
/// A year no resolver can answer for gets a living estimate of zero.
#[must_use]
pub fn estimate_distribution_with(
    births: &BirthCountSeries,
    survival: &SurvivalTable,
    current_year: Year,
    chain: &ResolverChain,
) -> Distribution {
    births
        .iter()
        .filter(|&(_, count)| count > 0)
        .filter_map(|(year, count)| {
            let Some(age) = age_in(year, current_year) else {
                log::debug!("Skipping birth year {year} after reference year {current_year}");
                return None;
            };

            let probability = match chain.resolve(survival, year, age) {
                Some(resolution) => resolution.probability,
                None => {
                    log::debug!("No survival probability for {year} at age {age}");
                    0.0
                }
            };

            Some(DistributionEntry::new(
                year,
                count,
                living_estimate(count, probability),
                age,
            ))
        })
        .collect()
}

/// Age of a birth cohort in the reference year, `None` for future years
#[must_use]
pub fn age_in(year: Year, current_year: Year) -> Option<Age> {
    Age::try_from(i64::from(current_year) - i64::from(year)).ok()
}

/// `round(births * probability)`, kept within `[0, births]`
#[must_use]
pub fn living_estimate(births: u64, probability: f64) -> u64 {
    let estimate = (births as f64 * probability).round();
    if estimate.is_finite() && estimate > 0.0 {
        (estimate as u64).min(births)
    } else {
        0
    }
}
