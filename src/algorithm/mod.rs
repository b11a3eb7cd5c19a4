//! Estimation algorithms
//!
//! The distribution estimator and the statistics aggregator are independent
//! pure functions; [`profile`] composes them for names in loaded datasets.

pub mod distribution;
pub mod extrapolation;
pub mod profile;
pub mod statistics;

// Re-export commonly used items
pub use distribution::{ResolverChain, estimate_distribution, estimate_with_config};
pub use extrapolation::FadeOutPolicy;
pub use profile::{NameProfile, NameRequest, profile_name, profile_names};
pub use statistics::{summarize, summarize_with};
