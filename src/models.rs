//! Plain domain records, independent of how they are stored.
//!
//! Each record carries the Sequencescape `internal_id` of its logical identity
//! and an `is_current` flag. Historical versions of a record are separate
//! values with the same `internal_id` and `is_current == false`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kinds of record the mapper layer knows how to persist.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModelKind {
    Sample,
    Study,
    Library,
    MultiplexedLibrary,
    Well,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelKind::Sample => "Sample",
            ModelKind::Study => "Study",
            ModelKind::Library => "Library",
            ModelKind::MultiplexedLibrary => "MultiplexedLibrary",
            ModelKind::Well => "Well",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sample {
    pub internal_id: i64,
    pub name: Option<String>,
    pub accession_number: Option<String>,
    pub organism: Option<String>,
    pub common_name: Option<String>,
    pub taxon_id: Option<i64>,
    pub gender: Option<String>,
    pub ethnicity: Option<String>,
    pub cohort: Option<String>,
    pub country_of_origin: Option<String>,
    pub geographical_region: Option<String>,
    pub is_current: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Study {
    pub internal_id: i64,
    pub name: Option<String>,
    pub accession_number: Option<String>,
    pub study_type: Option<String>,
    pub description: Option<String>,
    pub study_title: Option<String>,
    pub study_visibility: Option<String>,
    pub faculty_sponsor: Option<String>,
    pub is_current: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Library {
    pub internal_id: i64,
    pub name: Option<String>,
    pub library_type: Option<String>,
    pub is_current: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MultiplexedLibrary {
    pub internal_id: i64,
    pub name: Option<String>,
    pub is_current: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Well {
    pub internal_id: i64,
    pub name: Option<String>,
    pub is_current: bool,
}

impl Sample {
    /// Current sample with only its internal id set.
    pub fn new(internal_id: i64) -> Self {
        Self {
            internal_id,
            is_current: true,
            ..Self::default()
        }
    }
}

impl Study {
    /// Current study with only its internal id set.
    pub fn new(internal_id: i64) -> Self {
        Self {
            internal_id,
            is_current: true,
            ..Self::default()
        }
    }
}

impl Library {
    /// Current library with only its internal id set.
    pub fn new(internal_id: i64) -> Self {
        Self {
            internal_id,
            is_current: true,
            ..Self::default()
        }
    }
}

impl MultiplexedLibrary {
    /// Current multiplexed library with only its internal id set.
    pub fn new(internal_id: i64) -> Self {
        Self {
            internal_id,
            is_current: true,
            ..Self::default()
        }
    }
}

impl Well {
    /// Current well with only its internal id set.
    pub fn new(internal_id: i64) -> Self {
        Self {
            internal_id,
            is_current: true,
            ..Self::default()
        }
    }
}
