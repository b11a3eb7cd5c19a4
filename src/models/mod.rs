//! Domain models for name age estimation
//!
//! This module contains the input tables (birth counts and survival
//! probabilities) and the derived structures (distribution and summary).

pub mod birth_series;
pub mod distribution;
pub mod summary;
pub mod survival;
pub mod types;

// Re-export commonly used types
pub use birth_series::BirthCountSeries;
pub use distribution::{Distribution, DistributionEntry};
pub use summary::{AgeRange, PeakBirthYear, SummaryStats, YearRange};
pub use survival::SurvivalTable;
pub use types::{Age, Gender, Year};
