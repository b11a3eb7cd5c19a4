//! Age-indexed survival probabilities per birth cohort

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::{Age, Year};

/// Survival probabilities for one gender, keyed by birth year.
///
/// Each cohort holds the fraction still alive at age 0, 1, 2, ... in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurvivalTable {
    cohorts: BTreeMap<Year, Vec<f64>>,
}

impl SurvivalTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the probabilities for a birth cohort, replacing any previous ones
    pub fn insert(&mut self, year: Year, probabilities: Vec<f64>) -> Option<Vec<f64>> {
        self.cohorts.insert(year, probabilities)
    }

    /// Raw probabilities for a birth cohort
    #[must_use]
    pub fn cohort(&self, year: Year) -> Option<&[f64]> {
        self.cohorts.get(&year).map(Vec::as_slice)
    }

    /// Survival probability for a cohort at an age.
    ///
    /// Returns `None` when the cohort is missing, the age lies beyond the
    /// cohort's table, or the stored value is not finite. Finite values are
    /// clamped into `[0, 1]`.
    #[must_use]
    pub fn probability(&self, year: Year, age: Age) -> Option<f64> {
        let cohort = self.cohorts.get(&year)?;
        let value = *cohort.get(usize::try_from(age).ok()?)?;
        value.is_finite().then(|| value.clamp(0.0, 1.0))
    }

    /// Cohort years from most recent to oldest
    pub fn years_most_recent_first(&self) -> impl Iterator<Item = Year> + '_ {
        self.cohorts.keys().rev().copied()
    }

    /// Number of cohorts
    #[must_use]
    pub fn len(&self) -> usize {
        self.cohorts.len()
    }

    /// Whether the table holds no cohorts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cohorts.is_empty()
    }
}

impl FromIterator<(Year, Vec<f64>)> for SurvivalTable {
    fn from_iter<T: IntoIterator<Item = (Year, Vec<f64>)>>(iter: T) -> Self {
        Self {
            cohorts: iter.into_iter().collect(),
        }
    }
}
