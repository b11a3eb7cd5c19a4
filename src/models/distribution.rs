//! Estimated living population per birth year

use serde::{Deserialize, Serialize};

use super::types::{Age, Year};

/// One birth year of an estimated age distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEntry {
    /// Birth year
    pub year: Year,
    /// Births recorded for the year
    pub births: u64,
    /// Estimated number of those born this year who are still alive
    pub living_estimate: u64,
    /// Age of the cohort in the reference year
    pub age: Age,
}

impl DistributionEntry {
    /// Create a new entry
    #[must_use]
    pub const fn new(year: Year, births: u64, living_estimate: u64, age: Age) -> Self {
        Self {
            year,
            births,
            living_estimate,
            age,
        }
    }

    /// Fraction of the cohort estimated to be alive, `0.0` for an empty cohort
    #[must_use]
    pub fn survival_ratio(&self) -> f64 {
        if self.births == 0 {
            0.0
        } else {
            self.living_estimate as f64 / self.births as f64
        }
    }
}

/// Ordered distribution, ascending by birth year with no duplicate years
pub type Distribution = Vec<DistributionEntry>;
