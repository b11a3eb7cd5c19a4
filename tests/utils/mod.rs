use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use name_age::models::Year;
use name_age::{BirthCountSeries, SurvivalTable};

/// Reference year used throughout the tests
pub const CURRENT_YEAR: Year = 2025;

/// Births `{1996: 100, 2000: 200, 2004: 100}`
#[must_use]
pub fn reference_series() -> BirthCountSeries {
    BirthCountSeries::from([(1996, 100), (2000, 200), (2004, 100)])
}

/// Survival table where every cohort in `years` survives with certainty up
/// to `max_age`
#[must_use]
pub fn certain_survival(years: impl IntoIterator<Item = Year>, max_age: usize) -> SurvivalTable {
    years
        .into_iter()
        .map(|year| (year, vec![1.0; max_age + 1]))
        .collect()
}

/// Survival table with a smooth, declining curve per cohort
#[must_use]
pub fn declining_survival(years: impl IntoIterator<Item = Year>, max_age: usize) -> SurvivalTable {
    years
        .into_iter()
        .map(|year| {
            let curve = (0..=max_age)
                .map(|age| (1.0 - (age as f64 / 110.0).powi(3)).max(0.0))
                .collect::<Vec<f64>>();
            (year, curve)
        })
        .collect()
}

/// Fresh, empty scratch directory under the system temp dir
#[must_use]
pub fn scratch_dir(label: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let dir = std::env::temp_dir().join(format!(
        "name-age-{label}-{}-{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).expect("failed to clear scratch dir");
    }
    std::fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}
