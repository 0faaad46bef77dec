// ABOUTME: Core types and constants for the sqlbind helper layer
// ABOUTME: Foundation crate with error handling, SQL value types, and row-range pagination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # sqlbind Core
//!
//! Foundation crate providing the shared types used by the binding, paging and
//! cleanup helpers. It has no runtime dependencies beyond `serde`/`thiserror`,
//! and only pulls in `sqlx` when the `database-errors` feature is enabled.
//!
//! ## Modules
//!
//! - **errors**: `BindingError` and `DatabaseError`
//! - **constants**: SQL fragments, sentinels and environment variable names
//! - **sql**: `SqlType` and `SqlValue`
//! - **pagination**: `RowRange` and the `LimitWindow` it encodes to

/// Error types for parameter binding and database helpers
pub mod errors;

/// SQL fragments, sentinels and environment variable names
pub mod constants;

/// Declared column types and bound parameter values
pub mod sql;

/// Inclusive row ranges and their `LIMIT`/`OFFSET` window
pub mod pagination;
