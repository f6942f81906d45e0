//! Constants used throughout the crate
//!
//! File names, defaults and SQL that would otherwise be scattered as magic
//! strings.

// Configuration
pub const CONFIG_FILE_NAME: &str = "sequencescape.toml";
pub const CONFIG_DIR_NAME: &str = "sequencescape";
pub const CONFIG_FILE_HEADER: &str = "# Sequencescape Mapper Configuration File";

// Database
pub const SUPPORTED_DIALECT: &str = "sqlite";
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///sequencescape.db";
/// Most values bound into a single `IN (...)` list. Longer lookups are split.
pub const MAX_IN_LIST_VALUES: usize = 500;

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Table definitions installed by [`crate::connector::Connector::install_schema`].
pub const SCHEMA: [&str; 6] = [
    r"
    CREATE TABLE IF NOT EXISTS sample (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        internal_id INTEGER NOT NULL,
        name TEXT,
        accession_number TEXT,
        organism TEXT,
        common_name TEXT,
        taxon_id INTEGER,
        gender TEXT,
        ethnicity TEXT,
        cohort TEXT,
        country_of_origin TEXT,
        geographical_region TEXT,
        is_current BOOLEAN NOT NULL DEFAULT 1
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS study (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        internal_id INTEGER NOT NULL,
        name TEXT,
        accession_number TEXT,
        study_type TEXT,
        description TEXT,
        study_title TEXT,
        study_visibility TEXT,
        faculty_sponsor TEXT,
        is_current BOOLEAN NOT NULL DEFAULT 1
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS library (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        internal_id INTEGER NOT NULL,
        name TEXT,
        library_type TEXT,
        is_current BOOLEAN NOT NULL DEFAULT 1
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS multiplexed_library (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        internal_id INTEGER NOT NULL,
        name TEXT,
        is_current BOOLEAN NOT NULL DEFAULT 1
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS well (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        internal_id INTEGER NOT NULL,
        name TEXT,
        is_current BOOLEAN NOT NULL DEFAULT 1
    )
    ",
    r"
    CREATE TABLE IF NOT EXISTS study_samples (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        study_internal_id INTEGER NOT NULL,
        sample_internal_id INTEGER NOT NULL,
        is_current BOOLEAN NOT NULL DEFAULT 1
    )
    ",
];
