//! Survival probability resolution strategies
//!
//! A probability for `(birth year, age)` is resolved by trying an ordered list
//! of strategies. The standard chain is:
//!
//! 1. [`ExactLookup`] - the cohort's own table at that age
//! 2. [`CrossYearLookup`] - any other cohort defining that age, most recent first
//! 3. [`LinearApproximation`] - `max(0, 1 - age * hazard)`
//!
//! Each strategy is usable on its own, so every tier can be tested in isolation.

use smallvec::SmallVec;

use crate::config::DEFAULT_FALLBACK_HAZARD;
use crate::models::{Age, SurvivalTable, Year};

/// Where a resolved probability came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    /// The birth year's own table
    Exact,
    /// Another cohort's table
    CrossYear {
        /// Cohort the probability was borrowed from
        donor_year: Year,
    },
    /// The linear hazard approximation
    Linear,
}

/// A resolved survival probability
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Probability in `[0, 1]`
    pub probability: f64,
    /// Strategy that produced it
    pub source: ResolutionSource,
}

/// A single strategy for resolving a survival probability
pub trait SurvivalResolver: Send + Sync {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Resolve the probability, or `None` to defer to the next strategy
    fn resolve(&self, table: &SurvivalTable, year: Year, age: Age) -> Option<Resolution>;
}

/// Exact lookup in the cohort's own table
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactLookup;

impl SurvivalResolver for ExactLookup {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn resolve(&self, table: &SurvivalTable, year: Year, age: Age) -> Option<Resolution> {
        table.probability(year, age).map(|probability| Resolution {
            probability,
            source: ResolutionSource::Exact,
        })
    }
}

/// Borrow the probability for the same age from another cohort.
///
/// Cohorts are searched from the most recent birth year backwards and the
/// first one defining the age is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossYearLookup;

impl SurvivalResolver for CrossYearLookup {
    fn name(&self) -> &'static str {
        "cross-year"
    }

    fn resolve(&self, table: &SurvivalTable, year: Year, age: Age) -> Option<Resolution> {
        table
            .years_most_recent_first()
            .filter(|&donor_year| donor_year != year)
            .find_map(|donor_year| {
                table.probability(donor_year, age).map(|probability| Resolution {
                    probability,
                    source: ResolutionSource::CrossYear { donor_year },
                })
            })
    }
}

/// Crude survival curve with a constant per-year hazard, used only when no
/// table defines the age
#[derive(Debug, Clone, Copy)]
pub struct LinearApproximation {
    /// Probability lost per year of age
    pub hazard_per_year: f64,
}

impl Default for LinearApproximation {
    fn default() -> Self {
        Self {
            hazard_per_year: DEFAULT_FALLBACK_HAZARD,
        }
    }
}

impl LinearApproximation {
    /// Create an approximation with the given per-year hazard
    #[must_use]
    pub const fn new(hazard_per_year: f64) -> Self {
        Self { hazard_per_year }
    }

    /// Approximate survival probability at an age
    #[must_use]
    pub fn probability_at(&self, age: Age) -> f64 {
        let probability = 1.0 - f64::from(age) * self.hazard_per_year;
        if probability.is_finite() {
            probability.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl SurvivalResolver for LinearApproximation {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn resolve(&self, _table: &SurvivalTable, _year: Year, age: Age) -> Option<Resolution> {
        Some(Resolution {
            probability: self.probability_at(age),
            source: ResolutionSource::Linear,
        })
    }
}

/// Ordered list of resolvers, tried in turn until one answers
pub struct ResolverChain {
    resolvers: SmallVec<[Box<dyn SurvivalResolver>; 3]>,
}

impl Default for ResolverChain {
    fn default() -> Self {
        Self::standard(DEFAULT_FALLBACK_HAZARD)
    }
}

impl std::fmt::Debug for ResolverChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.resolvers.iter().map(|r| r.name()))
            .finish()
    }
}

impl ResolverChain {
    /// Exact, then cross-year, then linear with the given hazard
    #[must_use]
    pub fn standard(hazard_per_year: f64) -> Self {
        Self::empty()
            .with(ExactLookup)
            .with(CrossYearLookup)
            .with(LinearApproximation::new(hazard_per_year))
    }

    /// A chain with no resolvers
    #[must_use]
    pub fn empty() -> Self {
        Self {
            resolvers: SmallVec::new(),
        }
    }

    /// Append a resolver to the end of the chain
    #[must_use]
    pub fn with<R: SurvivalResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Names of the resolvers in order
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }

    /// Resolve a probability using the first resolver that answers
    #[must_use]
    pub fn resolve(&self, table: &SurvivalTable, year: Year, age: Age) -> Option<Resolution> {
        self.resolvers.iter().find_map(|resolver| {
            let resolution = resolver.resolve(table, year, age)?;
            log::trace!(
                "Resolved survival for {year} at age {age} via {}: {}",
                resolver.name(),
                resolution.probability
            );
            Some(resolution)
        })
    }
}
