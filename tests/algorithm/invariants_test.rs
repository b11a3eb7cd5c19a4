//! Seeded randomized checks of the distribution and summary invariants

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use name_age::{BirthCountSeries, SurvivalTable, estimate_distribution, summarize};

use crate::utils::CURRENT_YEAR;

const ROUNDS: usize = 200;

fn random_series(rng: &mut StdRng) -> BirthCountSeries {
    (1900..=2030)
        .filter_map(|year| {
            if !rng.random_bool(0.6) {
                return None;
            }
            let births: u64 = if rng.random_bool(0.1) { 0 } else { rng.random_range(1..5000) };
            Some((year, births))
        })
        .collect()
}

fn random_survival(rng: &mut StdRng) -> SurvivalTable {
    (1900..=2024)
        .filter_map(|year| {
            if !rng.random_bool(0.3) {
                return None;
            }
            let length: usize = rng.random_range(0..=110);
            let mut alive = 1.0_f64;
            let curve = (0..length)
                .map(|_| {
                    let value = alive;
                    alive *= 1.0 - rng.random_range(0.0..0.05);
                    // Sprinkle in malformed values
                    if rng.random_bool(0.02) { f64::NAN } else { value }
                })
                .collect::<Vec<f64>>();
            Some((year, curve))
        })
        .collect()
}

#[test]
fn test_distribution_invariants_hold() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..ROUNDS {
        let births = random_series(&mut rng);
        let survival = random_survival(&mut rng);
        let distribution = estimate_distribution(&births, &survival, CURRENT_YEAR);

        for entry in &distribution {
            assert!(entry.births > 0);
            assert!(entry.year <= CURRENT_YEAR);
            assert_eq!(i64::from(entry.age), i64::from(CURRENT_YEAR - entry.year));
            assert!(entry.living_estimate <= entry.births);
            assert_eq!(births.get(entry.year), Some(entry.births));
        }

        assert!(distribution.windows(2).all(|pair| pair[0].year < pair[1].year));

        let expected_len = births
            .iter()
            .filter(|&(year, count)| count > 0 && year <= CURRENT_YEAR)
            .count();
        assert_eq!(distribution.len(), expected_len);
    }
}

#[test]
fn test_summary_invariants_hold() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..ROUNDS {
        let births = random_series(&mut rng);
        let survival = random_survival(&mut rng);
        let distribution = estimate_distribution(&births, &survival, CURRENT_YEAR);
        let stats = summarize(&distribution);

        let sum: u64 = distribution.iter().map(|e| e.living_estimate).sum();
        assert_eq!(stats.total_living, sum);

        if stats.total_living == 0 {
            assert_eq!(stats.median_age, 0);
            continue;
        }

        let min_age = distribution.iter().map(|e| e.age).min().unwrap();
        let max_age = distribution.iter().map(|e| e.age).max().unwrap();
        assert!((min_age..=max_age).contains(&stats.median_age));
        assert!(distribution.iter().any(|e| e.age == stats.median_age));

        assert!(stats.age_range.lower <= stats.median_age);
        assert!(stats.median_age <= stats.age_range.upper);

        let peak_births = distribution.iter().map(|e| e.births).max().unwrap();
        assert_eq!(stats.peak_birth_year.births, peak_births);
        let first_peak = distribution.iter().find(|e| e.births == peak_births).unwrap();
        assert_eq!(stats.peak_birth_year.year, first_peak.year);
    }
}
