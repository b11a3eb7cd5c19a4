//! Fade-out extrapolation for years before measurement began
//!
//! Birth records for a name usually start at some year. Extending coverage to
//! earlier decades needs an explicit assumption; the one here decays the first
//! measured count geometrically going back in time:
//!
//! `estimate(y) = round(boundary_count * ratio^(first_measured - y))`
//!
//! for every `y` in `[start_year, first_measured)`. This is a separate policy
//! applied to a series before estimation; the estimator never invokes it.

use crate::models::{BirthCountSeries, Year};

/// Default geometric decay per year going backwards
pub const DEFAULT_DECAY_RATIO: f64 = 0.9;

/// Longest span, in years, a fade-out may fill in
pub const MAX_FADE_OUT_YEARS: i64 = 200;

/// Geometric fade-out towards years before the first measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeOutPolicy {
    /// Earliest year to fill in
    pub start_year: Year,
    /// Fraction kept per year stepped back, in `(0, 1]`
    pub decay_ratio: f64,
}

impl FadeOutPolicy {
    /// Create a policy filling back to `start_year`
    #[must_use]
    pub const fn new(start_year: Year, decay_ratio: f64) -> Self {
        Self {
            start_year,
            decay_ratio,
        }
    }

    /// Policy with the default decay ratio
    #[must_use]
    pub const fn from_year(start_year: Year) -> Self {
        Self::new(start_year, DEFAULT_DECAY_RATIO)
    }

    /// Extend a series backwards from its first measured year.
    ///
    /// Measured years are never overwritten. The series is returned unchanged
    /// when it is empty, already starts at or before `start_year`, the decay
    /// ratio lies outside `(0, 1]`, or the gap to fill exceeds
    /// [`MAX_FADE_OUT_YEARS`].
    #[must_use]
    pub fn extend(&self, series: &BirthCountSeries) -> BirthCountSeries {
        let mut extended = series.clone();

        if !(self.decay_ratio > 0.0 && self.decay_ratio <= 1.0) {
            log::warn!(
                "Ignoring fade-out with decay ratio {} outside (0, 1]",
                self.decay_ratio
            );
            return extended;
        }

        let Some((boundary_year, boundary_count)) = series.iter().next() else {
            return extended;
        };

        let span = i64::from(boundary_year) - i64::from(self.start_year);
        if span > MAX_FADE_OUT_YEARS {
            log::warn!(
                "Ignoring fade-out from {} to {boundary_year}: {span} years exceeds {MAX_FADE_OUT_YEARS}",
                self.start_year
            );
            return extended;
        }

        for year in self.start_year..boundary_year {
            let distance = boundary_year - year;
            let estimate = (boundary_count as f64 * self.decay_ratio.powi(distance)).round();
            extended.insert(year, estimate as u64);
        }

        log::debug!(
            "Faded out {} years before {boundary_year}",
            extended.len() - series.len()
        );
        extended
    }
}
