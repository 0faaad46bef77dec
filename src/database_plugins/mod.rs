// ABOUTME: Database helper layer for sqlx-backed applications
// ABOUTME: Backend-neutral helpers in `shared`, feature-gated SQLite and PostgreSQL glue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Backend-neutral binding, paging and cleanup helpers
pub mod shared;

/// `SQLite` query building and cleanup implementations
#[cfg(feature = "sqlite")]
pub mod sqlite;

/// `PostgreSQL` query building and cleanup implementations
#[cfg(feature = "postgresql")]
pub mod postgres;

pub use shared::builders::{
    bind_bytes_or_null, bind_int_max_as_null, bind_int_zero_as_null, bind_long_or_null,
    bind_long_zero_as_null, bind_text_or_null, BoundParameters, PositionalBinder,
};
pub use shared::cleanup::{close_all, Closeable};
pub use shared::limits::{bind_limits, limits_clause, limits_clause_for, paginate, Dialect};
pub use shared::transactions::{rollback, Rollback};
