//! Per-gender dataset bundles

use std::path::Path;

use crate::error::Result;
use crate::models::{Gender, SurvivalTable};
use crate::utils::validate_directory;

use super::{NameIndex, load_name_index, load_survival_table};

/// Birth counts and survival table for one gender
#[derive(Debug, Clone, Default)]
pub struct GenderDataset {
    /// Birth count series by name
    pub names: NameIndex,
    /// Survival probabilities by birth cohort
    pub survival: SurvivalTable,
}

impl GenderDataset {
    /// Bundle a name index with its survival table
    #[must_use]
    pub fn new(names: NameIndex, survival: SurvivalTable) -> Self {
        Self { names, survival }
    }
}

/// Datasets for both genders
#[derive(Debug, Clone, Default)]
pub struct GenderedDatasets {
    /// Female birth counts and survival
    pub female: GenderDataset,
    /// Male birth counts and survival
    pub male: GenderDataset,
}

impl GenderedDatasets {
    /// Bundle the two genders
    #[must_use]
    pub fn new(female: GenderDataset, male: GenderDataset) -> Self {
        Self { female, male }
    }

    /// Dataset for a gender
    #[must_use]
    pub fn dataset(&self, gender: Gender) -> &GenderDataset {
        match gender {
            Gender::Female => &self.female,
            Gender::Male => &self.male,
        }
    }

    /// Mutable dataset for a gender
    pub fn dataset_mut(&mut self, gender: Gender) -> &mut GenderDataset {
        match gender {
            Gender::Female => &mut self.female,
            Gender::Male => &mut self.male,
        }
    }

    /// Conventional birth count file name for a gender
    #[must_use]
    pub fn names_file(gender: Gender) -> String {
        format!("names_{gender}.json")
    }

    /// Conventional survival file name for a gender
    #[must_use]
    pub fn survival_file(gender: Gender) -> String {
        format!("survival_{gender}.json")
    }

    /// Load all four tables from a directory.
    ///
    /// Expects `names_female.json`, `names_male.json`, `survival_female.json`
    /// and `survival_male.json`.
    ///
    /// # Errors
    /// Returns an error if the directory or any file cannot be read or parsed
    pub fn load_dir(dir: &Path) -> Result<Self> {
        validate_directory(dir, "name and survival tables")?;

        let mut datasets = Self::default();
        for gender in Gender::ALL {
            let dataset = datasets.dataset_mut(gender);
            dataset.names = load_name_index(&dir.join(Self::names_file(gender)))?;
            dataset.survival = load_survival_table(&dir.join(Self::survival_file(gender)))?;
        }

        Ok(datasets)
    }
}
