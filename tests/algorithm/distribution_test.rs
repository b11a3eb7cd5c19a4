//! Tests for distribution estimation

use name_age::algorithm::distribution::{
    ExactLookup, LinearApproximation, ResolutionSource, ResolverChain, estimate_distribution,
    estimate_distribution_with,
};
use name_age::{BirthCountSeries, DistributionEntry, SurvivalTable};

use crate::utils::{CURRENT_YEAR, certain_survival, reference_series};

#[test]
fn test_reference_scenario_distribution() {
    let survival = certain_survival([1996, 2000, 2004], 100);
    let distribution = estimate_distribution(&reference_series(), &survival, CURRENT_YEAR);

    assert_eq!(
        distribution,
        vec![
            DistributionEntry::new(1996, 100, 100, 29),
            DistributionEntry::new(2000, 200, 200, 25),
            DistributionEntry::new(2004, 100, 100, 21),
        ]
    );
}

#[test]
fn test_exact_probability_applied() {
    let births = BirthCountSeries::from([(1950, 1000)]);
    let mut curve = vec![1.0; 76];
    curve[75] = 0.637;
    let survival: SurvivalTable = [(1950, curve)].into_iter().collect();

    let distribution = estimate_distribution(&births, &survival, CURRENT_YEAR);
    assert_eq!(distribution[0].age, 75);
    assert_eq!(distribution[0].living_estimate, 637);
}

#[test]
fn test_cross_year_fallback_beats_linear() {
    // 1990 has no cohort table; 2010's table does not reach age 35 but 1980's does
    let births = BirthCountSeries::from([(1990, 1000)]);
    let mut older = vec![1.0; 46];
    older[35] = 0.9;
    let survival: SurvivalTable = [(1980, older), (2010, vec![1.0; 16])].into_iter().collect();

    let chain = ResolverChain::default();
    let resolution = chain.resolve(&survival, 1990, 35).unwrap();
    assert_eq!(resolution.source, ResolutionSource::CrossYear { donor_year: 1980 });

    let distribution = estimate_distribution(&births, &survival, CURRENT_YEAR);
    // Linear would give round(1000 * (1 - 35 * 0.012)) = 580
    assert_eq!(distribution[0].living_estimate, 900);
}

#[test]
fn test_cohort_too_short_uses_cross_year() {
    // The cohort's own table exists but stops before the needed age
    let births = BirthCountSeries::from([(2000, 500)]);
    let mut donor = vec![1.0; 30];
    donor[25] = 0.8;
    let survival: SurvivalTable = [(2000, vec![1.0; 10]), (1995, donor)].into_iter().collect();

    let distribution = estimate_distribution(&births, &survival, CURRENT_YEAR);
    assert_eq!(distribution[0].living_estimate, 400);
}

#[test]
fn test_linear_fallback_when_no_table_defines_age() {
    let births = BirthCountSeries::from([(1925, 1000), (1975, 1000), (2025, 1000)]);
    let survival: SurvivalTable = [(2020, vec![1.0; 5])].into_iter().collect();

    let distribution = estimate_distribution(&births, &survival, CURRENT_YEAR);
    let by_age: Vec<(u32, u64)> = distribution
        .iter()
        .map(|e| (e.age, e.living_estimate))
        .collect();

    // Age 100: max(0, 1 - 1.2) = 0; age 50: 1 - 0.6 = 0.4; age 0 is in the 2020 table
    assert_eq!(by_age, vec![(100, 0), (50, 400), (0, 1000)]);
}

#[test]
fn test_linear_boundary_values() {
    let linear = LinearApproximation::default();
    assert_eq!(linear.probability_at(0), 1.0);
    assert_eq!(linear.probability_at(100), 0.0);
    assert_eq!(linear.probability_at(250), 0.0);
}

#[test]
fn test_custom_chain_without_cross_year() {
    let births = BirthCountSeries::from([(1990, 1000)]);
    let survival = certain_survival([1980], 60);
    let chain = ResolverChain::empty()
        .with(ExactLookup)
        .with(LinearApproximation::new(0.01));

    let distribution = estimate_distribution_with(&births, &survival, CURRENT_YEAR, &chain);
    assert_eq!(distribution[0].living_estimate, 650);
}

#[test]
fn test_empty_inputs() {
    let survival = certain_survival([2000], 50);
    assert!(estimate_distribution(&BirthCountSeries::new(), &survival, CURRENT_YEAR).is_empty());

    // No survival data at all still yields entries via the linear tier
    let distribution = estimate_distribution(&reference_series(), &SurvivalTable::new(), CURRENT_YEAR);
    assert_eq!(distribution.len(), 3);
}

#[test]
fn test_nan_probability_falls_through() {
    let births = BirthCountSeries::from([(2000, 100)]);
    let mut curve = vec![1.0; 30];
    curve[25] = f64::NAN;
    let mut donor = vec![1.0; 30];
    donor[25] = 0.5;
    let survival: SurvivalTable = [(2000, curve), (1999, donor)].into_iter().collect();

    let distribution = estimate_distribution(&births, &survival, CURRENT_YEAR);
    assert_eq!(distribution[0].living_estimate, 50);
}
