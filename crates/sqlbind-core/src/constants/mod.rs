// ABOUTME: Constants shared by the binding, paging and configuration layers
// ABOUTME: SQL clause fragments, absent-value sentinels and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list.

/// Row-range sentinels
pub mod rows {
    /// Upper bound meaning "no upper end" for a row range
    pub const UNBOUNDED: i32 = i32::MAX;

    /// First row of a result set
    pub const FIRST: i32 = 0;
}

/// Sentinel values for the legacy integer conventions
pub mod sentinels {
    /// "Zero means absent" sentinel for 32-bit columns
    pub const ZERO_I32: i32 = 0;

    /// "Zero means absent" sentinel for 64-bit columns
    pub const ZERO_I64: i64 = 0;

    /// "Max value means absent" sentinel for 32-bit columns
    pub const MAX_I32: i32 = i32::MAX;
}

/// `LIMIT`/`OFFSET` clause fragments with positional `?` placeholders
pub mod clauses {
    /// Limit and offset, both bound
    pub const LIMIT_OFFSET: &str = " LIMIT ? OFFSET ? ";

    /// Limit only
    pub const LIMIT: &str = " LIMIT ? ";

    /// Explicitly unbounded limit followed by a bound offset
    pub const UNBOUNDED_OFFSET: &str = " LIMIT NULL OFFSET ? ";

    /// `SQLite` spelling of an unbounded limit followed by a bound offset
    pub const SQLITE_UNBOUNDED_OFFSET: &str = " LIMIT -1 OFFSET ? ";

    /// No pagination
    pub const NONE: &str = "";
}

/// Statements issued by the cleanup helpers
pub mod statements {
    /// Abandon the connection's open transaction
    pub const ROLLBACK: &str = "ROLLBACK";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Database connection URL
    pub const DATABASE_URL: &str = "DATABASE_URL";

    /// Database URL used when `DATABASE_URL` is unset
    pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const SQLBIND: &str = "sqlbind";
}
