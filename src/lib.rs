// ABOUTME: Main library entry point for the sqlbind database helper layer
// ABOUTME: Nullable parameter binding, row-range pagination, and best-effort cleanup for sqlx
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # sqlbind
//!
//! Conventions that sit between application code and `sqlx`:
//!
//! - **Null-safe binding**: bind a value, or a typed SQL NULL when it is absent
//! - **Row ranges**: turn an inclusive `[from, to]` window into a
//!   `LIMIT`/`OFFSET` clause plus the matching bound parameters
//! - **Cleanup**: close resources and roll back transactions without letting
//!   cleanup failures escape
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sqlbind::database_plugins::{bind_limits, bind_text_or_null, limits_clause, BoundParameters};
//! use sqlbind::errors::BindingError;
//!
//! fn page(name: Option<&str>, from: i32, to: i32) -> Result<(String, BoundParameters), BindingError> {
//!     let sql = format!(
//!         "SELECT id FROM accounts WHERE name IS ? ORDER BY id{}",
//!         limits_clause(from, to)
//!     );
//!     let mut params = BoundParameters::for_sql(&sql);
//!     bind_text_or_null(&mut params, 1, name)?;
//!     bind_limits(2, &mut params, from, to)?;
//!     Ok((sql, params))
//! }
//! ```

/// Environment-only configuration
pub mod config;

/// Binding, paging and cleanup helpers plus the `SQLite` glue
pub mod database_plugins;

/// Error types re-exported from `sqlbind-core`
pub mod errors;

/// Structured logging setup
pub mod logging;

pub use sqlbind_core::pagination::{LimitWindow, RowRange};
pub use sqlbind_core::sql::{SqlType, SqlValue};
