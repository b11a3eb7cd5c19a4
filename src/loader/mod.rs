//! Dataset loading from normalized JSON tables
//!
//! Two JSON shapes are read, one file of each per gender:
//!
//! - birth counts: `{ "Emma": { "1996": 123, "1997": 140, ... }, ... }`
//! - survival: `{ "1996": [1.0, 0.995, 0.994, ...], ... }` indexed by age
//!
//! Loading is lenient about values (see [`coerce`]) and strict only about the
//! overall shape: a document that is not a JSON object is an error.

pub mod coerce;
pub mod datasets;

pub use datasets::{GenderDataset, GenderedDatasets};

use std::path::Path;
use std::time::Instant;

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

use crate::error::{EstimatorError, Result};
use crate::models::{BirthCountSeries, SurvivalTable};
use crate::utils::{log_load_complete, log_load_start, log_warning, safe_read_to_string};

use coerce::{coerce_count, coerce_probability, parse_year};

/// Birth count series for one gender, looked up by name.
///
/// Lookup ignores case and surrounding whitespace; the spelling first seen in
/// the source is kept for display.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    entries: FxHashMap<String, NamedSeries>,
}

/// A birth count series with the name as spelled in the source data
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries {
    /// Display spelling of the name
    pub name: String,
    /// Births per year
    pub series: BirthCountSeries,
}

impl NameIndex {
    /// Create an empty index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Add a name. A name already present under a different case is kept
    /// and the new series ignored.
    pub fn insert(&mut self, name: &str, series: BirthCountSeries) {
        let key = Self::key(name);
        if let Some(existing) = self.entries.get(&key) {
            log_warning(
                &format!(
                    "Duplicate name {name:?}, keeping series for {:?}",
                    existing.name
                ),
                Some("birth counts"),
            );
            return;
        }
        self.entries.insert(
            key,
            NamedSeries {
                name: name.trim().to_string(),
                series,
            },
        );
    }

    /// Look up a name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NamedSeries> {
        self.entries.get(&Self::key(name))
    }

    /// Whether the name is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&Self::key(name))
    }

    /// Display spellings of all names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.values().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of names
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no names
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_object(json: &str, what: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(map) => Ok(map),
        other => Err(EstimatorError::format(format!(
            "{what} must be a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a birth count document into a name index
///
/// # Errors
/// Returns an error if the document is not valid JSON or not an object
pub fn parse_name_index(json: &str) -> Result<NameIndex> {
    let document = parse_object(json, "birth count table")?;
    let mut index = NameIndex::new();

    for (name, years) in &document {
        let Value::Object(years) = years else {
            log_warning(
                &format!("Skipping {name:?}: expected an object of year counts"),
                Some("birth counts"),
            );
            continue;
        };
        index.insert(name, parse_series(name, years));
    }

    Ok(index)
}

fn parse_series(name: &str, years: &Map<String, Value>) -> BirthCountSeries {
    years
        .iter()
        .filter_map(|(key, value)| {
            let Some(year) = parse_year(key) else {
                log_warning(
                    &format!("Skipping year key {key:?} for {name:?}"),
                    Some("birth counts"),
                );
                return None;
            };
            Some((year, coerce_count(value)))
        })
        .collect()
}

/// Parse a survival document into a survival table
///
/// # Errors
/// Returns an error if the document is not valid JSON or not an object
pub fn parse_survival_table(json: &str) -> Result<SurvivalTable> {
    let document = parse_object(json, "survival table")?;

    let table: SurvivalTable = document
        .iter()
        .filter_map(|(key, value)| {
            let Some(year) = parse_year(key) else {
                log_warning(&format!("Skipping year key {key:?}"), Some("survival"));
                return None;
            };
            let Value::Array(probabilities) = value else {
                log_warning(
                    &format!("Skipping cohort {year}: expected an array of probabilities"),
                    Some("survival"),
                );
                return None;
            };
            Some((
                year,
                probabilities.iter().map(coerce_probability).collect::<Vec<f64>>(),
            ))
        })
        .collect();

    Ok(table)
}

/// Load a birth count file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_name_index(path: &Path) -> Result<NameIndex> {
    let start = Instant::now();
    log_load_start("birth counts", path);
    let index = parse_name_index(&safe_read_to_string(path, "birth counts")?)?;
    log_load_complete("birth counts", path, index.len(), "names", start.elapsed());
    Ok(index)
}

/// Load a survival table file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_survival_table(path: &Path) -> Result<SurvivalTable> {
    let start = Instant::now();
    log_load_start("survival table", path);
    let table = parse_survival_table(&safe_read_to_string(path, "survival table")?)?;
    log_load_complete("survival table", path, table.len(), "cohorts", start.elapsed());
    Ok(table)
}
