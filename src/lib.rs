//! Sequencescape mapper - persistence layer for Sequencescape records
//!
//! This library maps plain Sequencescape records (samples, studies,
//! libraries, multiplexed libraries and wells) onto versioned relational rows
//! and back. Rows are never updated in place: each record carries an
//! `is_current` flag and every query only sees current rows.
//!
//! # Modules
//!
//! * [`config`] - Configuration loading and validation
//! * [`connector`] - Connection strings and short-lived database sessions
//! * [`converter`] - Record ↔ row conversion and the record kind registry
//! * [`entities`] - SeaORM entity models for the stored tables
//! * [`mappers`] - The generic mapper and the study/sample associations
//! * [`models`] - Plain domain records
//!
//! # Example
//!
//! ```no_run
//! use sequencescape::{Connector, Mapper, ModelConverter, Sample, SqlMapper};
//!
//! # async fn run() -> sequencescape::Result<()> {
//! let connector = Connector::new("sqlite:///warehouse.db")?;
//! connector.install_schema().await?;
//!
//! let samples: SqlMapper<Sample> = SqlMapper::new(connector, &ModelConverter::standard())?;
//! samples.add(&[Sample::new(1)]).await?;
//! let current = samples.get_many_by_internal_id(&[1]).await?;
//! # Ok(())
//! # }
//! ```

/// Configuration module for managing application settings
pub mod config;

/// Constants and default values
pub mod constants;

/// Database connection handling
pub mod connector;

/// Conversion between domain records and stored rows
pub mod converter;

/// SeaORM entity models for database tables
pub mod entities;

/// Error types
pub mod error;

/// Logging setup
pub mod logger;

/// Mapper layer for database operations
pub mod mappers;

/// Domain records
pub mod models;

/// Identifying properties used for lookups
pub mod property;

pub use connector::{ConnectionString, Connector};
pub use converter::{Capabilities, ModelConverter, Record};
pub use error::{MapperError, Result};
pub use mappers::{Lookup, Mapper, SqlMapper};
pub use models::{Library, ModelKind, MultiplexedLibrary, Sample, Study, Well};
pub use property::Property;
pub use sea_orm::Value;
