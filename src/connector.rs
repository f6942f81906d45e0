//! Database connector handing out short-lived sessions.
//!
//! A [`Connector`] only remembers where the database lives. Every mapper
//! operation opens its own session through [`Connector::create_session`] and
//! closes it before returning.

use std::fmt;
use std::str::FromStr;

use log::{debug, info, warn};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::constants::{SCHEMA, SUPPORTED_DIALECT};
use crate::error::{MapperError, Result};

/// A `<dialect>:///<location>` connection string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionString {
    pub dialect: String,
    pub location: String,
}

impl ConnectionString {
    /// URL understood by the SQLite driver, creating the file when missing.
    pub fn driver_url(&self) -> String {
        let separator = if self.location.contains('?') { '&' } else { '?' };
        format!("{}://{}{}mode=rwc", self.dialect, self.location, separator)
    }
}

impl FromStr for ConnectionString {
    type Err = MapperError;

    fn from_str(s: &str) -> Result<Self> {
        let (dialect, location) = s.split_once(":///").ok_or_else(|| {
            MapperError::InvalidArgument(format!(
                "connection string '{s}' is not of the form <dialect>:///<location>"
            ))
        })?;

        if dialect.is_empty() || location.is_empty() {
            return Err(MapperError::InvalidArgument(format!(
                "connection string '{s}' must name both a dialect and a location"
            )));
        }
        if dialect != SUPPORTED_DIALECT {
            return Err(MapperError::InvalidArgument(format!(
                "unsupported dialect '{dialect}', only '{SUPPORTED_DIALECT}' is available"
            )));
        }

        Ok(Self {
            dialect: dialect.to_string(),
            location: location.to_string(),
        })
    }
}

impl fmt::Display for ConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:///{}", self.dialect, self.location)
    }
}

/// Factory for database sessions.
#[derive(Clone, Debug)]
pub struct Connector {
    url: String,
    // Keeps shared-cache in-memory databases alive between sessions
    _anchor: Option<DatabaseConnection>,
}

impl Connector {
    /// Connector for a `<dialect>:///<location>` connection string.
    pub fn new(connection_string: &str) -> Result<Self> {
        let parsed: ConnectionString = connection_string.parse()?;
        Ok(Self {
            url: parsed.driver_url(),
            _anchor: None,
        })
    }

    pub fn from_config(config: &DatabaseConfig) -> Result<Self> {
        Self::new(&config.url)
    }

    /// Connector for a fresh, isolated in-memory database with the schema installed.
    ///
    /// The database lives as long as the connector (or any clone of it).
    pub async fn in_memory() -> Result<Self> {
        let url = format!("sqlite:file:{}?mode=memory&cache=shared", Uuid::new_v4().simple());
        let mut connector = Self { url, _anchor: None };
        connector._anchor = Some(connector.create_session().await?);
        connector.install_schema().await?;
        Ok(connector)
    }

    /// Driver URL sessions are opened against.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Open a new single-connection session. Callers close it when done.
    pub async fn create_session(&self) -> Result<DatabaseConnection> {
        let mut options = ConnectOptions::new(self.url.clone());
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        debug!("Opening session on {}", self.url);
        Ok(Database::connect(options).await?)
    }

    /// Close a session opened by [`Connector::create_session`].
    ///
    /// Close failures are logged, not returned.
    pub async fn close_session(session: DatabaseConnection) {
        if let Err(err) = session.close().await {
            warn!("Failed to close session: {err}");
        }
    }

    /// Create every table that does not exist yet.
    pub async fn install_schema(&self) -> Result<()> {
        let session = self.create_session().await?;
        let outcome = Self::create_tables(&session).await;
        Self::close_session(session).await;
        outcome
    }

    async fn create_tables(session: &DatabaseConnection) -> Result<()> {
        for statement in SCHEMA {
            session.execute_unprepared(statement).await?;
        }
        info!("Installed schema ({} tables)", SCHEMA.len());
        Ok(())
    }
}
