//! Tests for name profiles over gendered datasets

use name_age::algorithm::extrapolation::FadeOutPolicy;
use name_age::algorithm::profile::build_profile;
use name_age::loader::{GenderDataset, NameIndex};
use name_age::{
    BirthCountSeries, EstimatorConfig, Gender, GenderedDatasets, NameRequest, profile_name,
    profile_names,
};

use crate::utils::{CURRENT_YEAR, certain_survival, declining_survival, reference_series};

fn datasets() -> GenderedDatasets {
    let mut female = NameIndex::new();
    female.insert("Emma", reference_series());
    female.insert("Ida", BirthCountSeries::from([(1950, 400), (1960, 300)]));

    let mut male = NameIndex::new();
    male.insert("Noah", BirthCountSeries::from([(2010, 250), (2015, 500)]));
    // Same name recorded for both genders with different counts
    male.insert("Emma", BirthCountSeries::from([(2000, 3)]));

    GenderedDatasets::new(
        GenderDataset::new(female, certain_survival(1940..=2024, 110)),
        GenderDataset::new(male, declining_survival(1940..=2024, 110)),
    )
}

fn config() -> EstimatorConfig {
    EstimatorConfig::new()
        .with_current_year(CURRENT_YEAR)
        .with_parallelism(2)
}

#[test]
fn test_profile_reference_name() {
    let profile = profile_name(&datasets(), "emma", Gender::Female, &config()).unwrap();
    assert_eq!(profile.name, "Emma");
    assert_eq!(profile.gender, Gender::Female);
    assert_eq!(profile.distribution.len(), 3);
    assert_eq!(profile.summary.total_living, 400);
    assert_eq!(profile.summary.median_age, 25);
}

#[test]
fn test_profile_is_gender_specific() {
    let datasets = datasets();
    let male = profile_name(&datasets, "Emma", Gender::Male, &config()).unwrap();
    assert_eq!(male.summary.peak_birth_year.births, 3);

    assert!(profile_name(&datasets, "Noah", Gender::Female, &config()).is_none());
    assert!(profile_name(&datasets, "Unknown", Gender::Male, &config()).is_none());
}

#[test]
fn test_profile_names_keeps_request_order() {
    let requests = vec![
        NameRequest::new("Noah", Gender::Male),
        NameRequest::new("Nobody", Gender::Female),
        NameRequest::new("Ida", Gender::Female),
        NameRequest::new("Emma", Gender::Female),
    ];

    let profiles = profile_names(&datasets(), &requests, &config()).unwrap();
    let names: Vec<&str> = profiles.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Noah", "Ida", "Emma"]);
}

#[test]
fn test_profile_names_matches_single_profiles() {
    let datasets = datasets();
    let requests = vec![
        NameRequest::new("Ida", Gender::Female),
        NameRequest::new("Noah", Gender::Male),
    ];

    let batch = profile_names(&datasets, &requests, &config()).unwrap();
    for (request, profile) in requests.iter().zip(&batch) {
        let single = profile_name(&datasets, &request.name, request.gender, &config()).unwrap();
        assert_eq!(&single, profile);
    }
}

#[test]
fn test_profile_names_rejects_invalid_config() {
    let requests = vec![NameRequest::new("Emma", Gender::Female)];
    let bad = config().with_percentiles(90.0, 10.0);
    assert!(profile_names(&datasets(), &requests, &bad).is_err());
}

#[test]
fn test_declining_survival_reduces_older_cohorts() {
    let profile = profile_name(&datasets(), "Noah", Gender::Male, &config()).unwrap();
    for entry in &profile.distribution {
        assert!(entry.living_estimate <= entry.births);
    }

    let older = build_profile(
        "Old",
        Gender::Male,
        &BirthCountSeries::from([(1940, 1000)]),
        &declining_survival(1940..=2024, 110),
        &config(),
    );
    // Age 85: 1 - (85/110)^3 is roughly 0.54
    assert_eq!(older.distribution[0].living_estimate, 539);
}

#[test]
fn test_fade_out_extends_profile_coverage() {
    let series = BirthCountSeries::from([(1960, 1000), (1961, 1000)]);
    let extended = FadeOutPolicy::new(1955, 0.8).extend(&series);
    let survival = certain_survival(1940..=2024, 110);

    let plain = build_profile("Ida", Gender::Female, &series, &survival, &config());
    let faded = build_profile("Ida", Gender::Female, &extended, &survival, &config());

    assert_eq!(plain.summary.year_range.earliest, 1960);
    assert_eq!(faded.summary.year_range.earliest, 1955);
    assert!(faded.summary.total_living > plain.summary.total_living);
}
