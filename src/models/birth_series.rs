//! Per-year birth counts for one name and gender

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::Year;

/// Birth counts keyed by birth year.
///
/// Years are sparse. A year with no entry is unmeasured, which is not the same
/// as a year with zero recorded births.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthCountSeries {
    counts: BTreeMap<Year, u64>,
}

impl BirthCountSeries {
    /// Create an empty series
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from signed raw counts, clamping negative counts to zero
    pub fn from_raw<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = (Year, i64)>,
    {
        raw.into_iter()
            .map(|(year, count)| (year, u64::try_from(count).unwrap_or(0)))
            .collect()
    }

    /// Record the births for a year, replacing any previous value
    pub fn insert(&mut self, year: Year, births: u64) -> Option<u64> {
        self.counts.insert(year, births)
    }

    /// Births recorded for a year, if the year was measured
    #[must_use]
    pub fn get(&self, year: Year) -> Option<u64> {
        self.counts.get(&year).copied()
    }

    /// Whether the year has a recorded value (zero included)
    #[must_use]
    pub fn contains_year(&self, year: Year) -> bool {
        self.counts.contains_key(&year)
    }

    /// Iterate `(year, births)` in ascending year order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Year, u64)> + '_ {
        self.counts.iter().map(|(&year, &births)| (year, births))
    }

    /// Number of measured years
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no year has been measured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Earliest measured year
    #[must_use]
    pub fn first_year(&self) -> Option<Year> {
        self.counts.keys().next().copied()
    }

    /// Latest measured year
    #[must_use]
    pub fn last_year(&self) -> Option<Year> {
        self.counts.keys().next_back().copied()
    }

    /// Sum of births over all measured years, saturating at `u64::MAX`
    #[must_use]
    pub fn total_births(&self) -> u64 {
        self.counts.values().copied().fold(0u64, u64::saturating_add)
    }
}

impl FromIterator<(Year, u64)> for BirthCountSeries {
    fn from_iter<T: IntoIterator<Item = (Year, u64)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(Year, u64); N]> for BirthCountSeries {
    fn from(pairs: [(Year, u64); N]) -> Self {
        pairs.into_iter().collect()
    }
}
