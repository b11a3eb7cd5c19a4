//! Common domain type definitions
//!
//! This module contains the small shared types used by the data model and
//! the estimation algorithms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EstimatorError;

/// Calendar year of birth
pub type Year = i32;

/// Age in whole years
pub type Age = u32;

/// Gender a name series and survival table are recorded for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Female gender
    Female,
    /// Male gender
    Male,
}

impl Gender {
    /// Both genders, in the order datasets are conventionally stored
    pub const ALL: [Self; 2] = [Self::Female, Self::Male];

    /// Lowercase label used in file names and serialized output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

impl FromStr for Gender {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "f" | "female" | "girl" => Ok(Self::Female),
            "m" | "male" | "boy" => Ok(Self::Male),
            _ => Err(EstimatorError::UnknownGender(s.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
