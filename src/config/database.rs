// ABOUTME: Database configuration types for SQLite and PostgreSQL connections
// ABOUTME: Parses DATABASE_URL and derives the SQL dialect used for pagination clauses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

use sqlbind_core::constants::env_config;
use sqlbind_core::errors::{DatabaseError, DatabaseResult};
use tracing::debug;

use crate::database_plugins::shared::limits::Dialect;

/// Type-safe database location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// `PostgreSQL` connection
    PostgreSQL {
        /// `PostgreSQL` connection string
        connection_string: String,
    },
    /// In-memory `SQLite`
    #[default]
    Memory,
}

impl DatabaseUrl {
    /// Parse a connection URL
    ///
    /// Anything that is neither `sqlite:` nor `postgres(ql)://` is treated as
    /// a `SQLite` file path.
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        if let Some(path) = s.strip_prefix("sqlite:") {
            if path == ":memory:" {
                Self::Memory
            } else {
                Self::SQLite {
                    path: PathBuf::from(path),
                }
            }
        } else if s.starts_with("postgresql://") || s.starts_with("postgres://") {
            Self::PostgreSQL {
                connection_string: s.to_owned(),
            }
        } else {
            Self::SQLite {
                path: PathBuf::from(s),
            }
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::PostgreSQL { connection_string } => connection_string.clone(),
            Self::Memory => env_config::DEFAULT_DATABASE_URL.to_owned(),
        }
    }

    /// Check if this is a `SQLite` database
    #[must_use]
    pub const fn is_sqlite(&self) -> bool {
        matches!(self, Self::SQLite { .. } | Self::Memory)
    }

    /// Whether support for this backend was compiled in
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        match self {
            Self::SQLite { .. } | Self::Memory => cfg!(feature = "sqlite"),
            Self::PostgreSQL { .. } => cfg!(feature = "postgresql"),
        }
    }

    /// Dialect implied by the backend
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        match self {
            Self::SQLite { .. } | Self::Memory => Dialect::Sqlite,
            Self::PostgreSQL { .. } => Dialect::Postgres,
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database settings for the helper layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Where the database lives
    pub url: DatabaseUrl,
}

impl DatabaseConfig {
    /// Build configuration from `DATABASE_URL`
    ///
    /// An unset `DATABASE_URL` selects in-memory `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `DATABASE_URL` is empty or names a backend
    /// this build was compiled without
    pub fn from_env() -> DatabaseResult<Self> {
        let raw_url = env::var(env_config::DATABASE_URL)
            .unwrap_or_else(|_| env_config::DEFAULT_DATABASE_URL.to_owned());
        let url = DatabaseUrl::parse_url(&raw_url);
        if raw_url.trim().is_empty() || !url.is_enabled() {
            return Err(DatabaseError::invalid_config(
                env_config::DATABASE_URL,
                raw_url,
            ));
        }

        debug!(url = %url, dialect = ?url.dialect(), "Database configuration loaded");
        Ok(Self { url })
    }

    /// Dialect used to spell pagination clauses for this database
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.url.dialect()
    }
}
