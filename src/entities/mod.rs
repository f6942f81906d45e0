//! SeaORM entity models for the versioned Sequencescape tables.
//!
//! Every table keeps its own auto-increment `id` row key: several versions of
//! one logical record share an `internal_id`, and only the row flagged
//! `is_current` is authoritative.

pub mod library;
pub mod multiplexed_library;
pub mod sample;
pub mod study;
pub mod study_samples_link;
pub mod well;

