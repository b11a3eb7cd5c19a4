//! Configuration for the estimator.
//!
//! Every value here is a policy constant. The reference year in particular is
//! fixed rather than read from the clock so that results are reproducible;
//! [`EstimatorConfig::with_calendar_year`] opts into the wall clock explicitly.

use std::fmt;

use chrono::Datelike;

use crate::error::{EstimatorError, Result};

/// Default reference year for age calculation
pub const DEFAULT_CURRENT_YEAR: i32 = 2025;

/// Default per-year hazard for the linear survival approximation
pub const DEFAULT_FALLBACK_HAZARD: f64 = 0.012;

/// Environment variable overriding the reference year
pub const ENV_CURRENT_YEAR: &str = "NAME_AGE_CURRENT_YEAR";

/// Value of [`ENV_CURRENT_YEAR`] selecting the local calendar year
pub const CALENDAR_YEAR_KEYWORD: &str = "now";

/// Environment variable overriding the fallback hazard
pub const ENV_HAZARD: &str = "NAME_AGE_HAZARD";

/// Environment variable overriding the worker thread count
pub const ENV_THREADS: &str = "NAME_AGE_THREADS";

/// Percentiles bounding the reported age range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileBounds {
    /// Lower percentile, mapped to the younger end of the range
    pub lower: f64,
    /// Upper percentile, mapped to the older end of the range
    pub upper: f64,
}

impl Default for PercentileBounds {
    fn default() -> Self {
        Self {
            lower: 10.0,
            upper: 90.0,
        }
    }
}

impl PercentileBounds {
    /// Create bounds from two percentiles in `[0, 100]`
    #[must_use]
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Clamp both bounds into `[0, 100]` and put them in order.
    ///
    /// Non-finite values fall back to the default bound on that side.
    #[must_use]
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let clamp = |value: f64, fallback: f64| {
            if value.is_finite() {
                value.clamp(0.0, 100.0)
            } else {
                fallback
            }
        };
        let lower = clamp(self.lower, defaults.lower);
        let upper = clamp(self.upper, defaults.upper);
        if lower <= upper {
            Self { lower, upper }
        } else {
            Self {
                lower: upper,
                upper: lower,
            }
        }
    }
}

/// Configuration for distribution estimation and summary statistics
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// Reference year used to compute ages
    pub current_year: i32,
    /// Per-year hazard used when no survival table defines an age
    pub fallback_hazard_per_year: f64,
    /// Percentiles for the reported age range
    pub percentiles: PercentileBounds,
    /// Number of worker threads for batch profiling
    pub parallelism: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            current_year: DEFAULT_CURRENT_YEAR,
            fallback_hazard_per_year: DEFAULT_FALLBACK_HAZARD,
            percentiles: PercentileBounds::default(),
            parallelism: num_cpus::get(),
        }
    }
}

impl EstimatorConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reference year
    #[must_use]
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    /// Use the current calendar year from the local clock as reference year
    #[must_use]
    pub fn with_calendar_year(mut self) -> Self {
        self.current_year = chrono::Local::now().year();
        self
    }

    /// Set the fallback hazard
    #[must_use]
    pub fn with_fallback_hazard(mut self, hazard: f64) -> Self {
        self.fallback_hazard_per_year = hazard;
        self
    }

    /// Set the age range percentiles
    #[must_use]
    pub fn with_percentiles(mut self, lower: f64, upper: f64) -> Self {
        self.percentiles = PercentileBounds::new(lower, upper);
        self
    }

    /// Set the worker thread count for batch profiling
    #[must_use]
    pub fn with_parallelism(mut self, threads: usize) -> Self {
        self.parallelism = threads;
        self
    }

    /// Build a configuration from defaults overlaid with environment variables.
    ///
    /// Unparsable values are ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        let wants_calendar = std::env::var(ENV_CURRENT_YEAR)
            .is_ok_and(|raw| raw.trim().eq_ignore_ascii_case(CALENDAR_YEAR_KEYWORD));
        if wants_calendar {
            config = config.with_calendar_year();
        } else if let Some(year) = env_value::<i32>(ENV_CURRENT_YEAR) {
            config.current_year = year;
        }
        if let Some(hazard) = env_value::<f64>(ENV_HAZARD) {
            config.fallback_hazard_per_year = hazard;
        }
        if let Some(threads) = env_value::<usize>(ENV_THREADS) {
            config.parallelism = threads;
        }

        config
    }

    /// Check that all values are usable
    ///
    /// # Errors
    /// Returns an error if the hazard is negative or non-finite, a percentile
    /// lies outside `[0, 100]`, the percentiles are not strictly ordered, or
    /// parallelism is zero
    pub fn validate(&self) -> Result<()> {
        if !self.fallback_hazard_per_year.is_finite() || self.fallback_hazard_per_year < 0.0 {
            return Err(EstimatorError::invalid_config(format!(
                "fallback hazard must be a non-negative number, got {}",
                self.fallback_hazard_per_year
            )));
        }

        let PercentileBounds { lower, upper } = self.percentiles;
        for (label, value) in [("lower", lower), ("upper", upper)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(EstimatorError::invalid_config(format!(
                    "{label} percentile must be within [0, 100], got {value}"
                )));
            }
        }
        if lower >= upper {
            return Err(EstimatorError::invalid_config(format!(
                "lower percentile ({lower}) must be below upper percentile ({upper})"
            )));
        }

        if self.parallelism == 0 {
            return Err(EstimatorError::invalid_config(
                "parallelism must be at least 1",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for EstimatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Estimator Configuration:")?;
        writeln!(f, "  Current Year: {}", self.current_year)?;
        writeln!(f, "  Fallback Hazard: {}", self.fallback_hazard_per_year)?;
        writeln!(
            f,
            "  Age Range Percentiles: {}/{}",
            self.percentiles.lower, self.percentiles.upper
        )?;
        writeln!(f, "  Parallelism: {}", self.parallelism)
    }
}

fn env_value<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring unparsable value for {key}: {raw:?}");
            None
        }
    }
}
