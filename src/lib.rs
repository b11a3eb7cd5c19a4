//! Estimate how many people with a given first name are alive today and how
//! old they are.
//!
//! Per-year birth counts for a name are combined with age-indexed survival
//! probabilities into an estimated age distribution, which is then summarized
//! (total living, median age, percentile age range, peak birth year).

pub mod algorithm;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{EstimatorConfig, PercentileBounds};
pub use error::{EstimatorError, Result};
pub use models::{
    AgeRange, BirthCountSeries, DistributionEntry, Gender, PeakBirthYear, SummaryStats,
    SurvivalTable, YearRange,
};

// Estimation
pub use algorithm::distribution::{estimate_distribution, estimate_distribution_with};
pub use algorithm::statistics::{summarize, summarize_with};

// Datasets and profiles
pub use algorithm::profile::{NameProfile, NameRequest, profile_name, profile_names};
pub use loader::{GenderedDatasets, NameIndex};
