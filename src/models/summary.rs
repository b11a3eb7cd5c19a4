//! Summary statistics derived from a distribution
//!
//! All types default to zero values, which is what an empty distribution
//! summarizes to.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{Age, Year};

/// Birth year with the most recorded births
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakBirthYear {
    /// Birth year
    pub year: Year,
    /// Births recorded that year
    pub births: u64,
}

/// Percentile age range of the living population
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    /// Younger end of the range
    pub lower: Age,
    /// Older end of the range
    pub upper: Age,
}

/// Birth years covered by a distribution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    /// First birth year
    pub earliest: Year,
    /// Last birth year
    pub latest: Year,
}

/// Structure containing the summary of an estimated distribution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Estimated number of people alive
    pub total_living: u64,
    /// Median age of the living population
    pub median_age: Age,
    /// Birth year with the most births
    pub peak_birth_year: PeakBirthYear,
    /// Percentile age range of the living population
    pub age_range: AgeRange,
    /// Birth years covered
    pub year_range: YearRange,
}

impl SummaryStats {
    /// Whether the summary describes an empty population
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_living == 0
    }
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Living Population Summary:")?;
        writeln!(f, "  Estimated Living: {}", self.total_living)?;
        writeln!(f, "  Median Age: {}", self.median_age)?;
        writeln!(
            f,
            "  Age Range: {}-{}",
            self.age_range.lower, self.age_range.upper
        )?;
        writeln!(
            f,
            "  Peak Birth Year: {} ({} births)",
            self.peak_birth_year.year, self.peak_birth_year.births
        )?;
        writeln!(
            f,
            "  Years Covered: {}-{}",
            self.year_range.earliest, self.year_range.latest
        )
    }
}
