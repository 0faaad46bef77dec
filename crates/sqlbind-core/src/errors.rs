// ABOUTME: Structured error types for parameter binding and database helpers
// ABOUTME: BindingError for statement slot failures, DatabaseError as the crate-level umbrella
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Types
//!
//! - `BindingError` - a positional statement rejected a bind
//! - `DatabaseError` - binding, query execution and configuration failures

use thiserror::Error;

/// Errors raised by a positional statement when a bind is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// Index is zero or beyond the statement's placeholder count
    #[error("parameter index {index} is out of range (statement has {parameter_count} placeholders)")]
    IndexOutOfRange {
        /// 1-based index that was requested
        index: usize,
        /// Number of placeholders the statement declares
        parameter_count: usize,
    },

    /// Statement was closed before the bind
    #[error("statement is closed")]
    StatementClosed,

    /// A placeholder was never bound
    #[error("no value bound for parameter {index}")]
    MissingParameter {
        /// 1-based index of the first unbound placeholder
        index: usize,
    },
}

/// Umbrella error for the database helpers
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Parameter binding failed
    #[error(transparent)]
    Binding(#[from] BindingError),

    /// The database client failed to run a query
    #[cfg(feature = "database-errors")]
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// A configuration value could not be interpreted
    #[error("invalid value {value:?} for {variable}")]
    InvalidConfig {
        /// Name of the offending setting
        variable: String,
        /// Raw value that was rejected
        value: String,
    },
}

impl DatabaseError {
    /// Create an invalid configuration error
    #[must_use]
    pub fn invalid_config(variable: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            variable: variable.into(),
            value: value.into(),
        }
    }
}

/// Result alias for the database helpers
pub type DatabaseResult<T> = Result<T, DatabaseError>;
