// ABOUTME: SQLite glue between positional parameters and sqlx queries
// ABOUTME: Applies BoundParameters in index order and wires sqlite into the cleanup helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `SQLite` implementation
//!
//! `sqlx` binds parameters in call order, so a `BoundParameters` statement is
//! flattened slot by slot onto a `sqlx::query`. Typed NULLs become a `None`
//! of the matching Rust type.

use anyhow::Result;
use async_trait::async_trait;
use sqlbind_core::constants::statements;
use sqlbind_core::errors::{BindingError, DatabaseResult};
use sqlbind_core::pagination::RowRange;
use sqlbind_core::sql::{SqlType, SqlValue};
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Connection, Sqlite, SqliteConnection, SqlitePool};
use tracing::debug;

use super::shared::builders::BoundParameters;
use super::shared::cleanup::Closeable;
use super::shared::limits::{paginate, Dialect};
use super::shared::transactions::Rollback;

/// Build a `sqlx` query from `sql` and its bound parameters
///
/// # Errors
/// Returns `MissingParameter` if any placeholder was left unbound
pub fn build_query(
    sql: &str,
    params: BoundParameters,
) -> Result<Query<'_, Sqlite, SqliteArguments<'_>>, BindingError> {
    let values = params.into_values()?;
    Ok(values
        .into_iter()
        .fold(sqlx::query(sql), |query, value| match value {
            SqlValue::Bytes(bytes) => query.bind(bytes),
            SqlValue::Text(text) => query.bind(text),
            SqlValue::Integer(n) => query.bind(n),
            SqlValue::BigInt(n) => query.bind(n),
            SqlValue::Null(SqlType::Binary) => query.bind(None::<Vec<u8>>),
            SqlValue::Null(SqlType::Varchar) => query.bind(None::<String>),
            SqlValue::Null(SqlType::BigInt) => query.bind(None::<i64>),
            SqlValue::Null(SqlType::Integer) => query.bind(None::<i32>),
        }))
}

/// Run a statement and return the number of affected rows
///
/// # Errors
/// Returns an error if a parameter is missing or the query fails
pub async fn execute(pool: &SqlitePool, sql: &str, params: BoundParameters) -> DatabaseResult<u64> {
    let result = build_query(sql, params)?.execute(pool).await?;
    Ok(result.rows_affected())
}

/// Fetch the rows `range` selects from `base_sql`
///
/// `params` holds the values for the placeholders of `base_sql`; the
/// pagination clause is appended and its parameters bound after them.
///
/// # Errors
/// Returns an error if the parameters do not match the placeholders or the
/// query fails
pub async fn fetch_range(
    pool: &SqlitePool,
    base_sql: &str,
    params: BoundParameters,
    range: RowRange,
) -> DatabaseResult<Vec<SqliteRow>> {
    let (sql, statement) = paginate(Dialect::Sqlite, base_sql, params, range)?;
    debug!(
        from = range.from,
        to = range.to,
        parameters = statement.len(),
        "Fetching row range"
    );

    Ok(build_query(&sql, statement)?.fetch_all(pool).await?)
}

#[async_trait]
impl Closeable for SqliteConnection {
    async fn close(self: Box<Self>) -> Result<()> {
        Connection::close(*self).await?;
        Ok(())
    }
}

#[async_trait]
impl Rollback for &mut SqliteConnection {
    async fn rollback(self) -> Result<()> {
        sqlx::query(statements::ROLLBACK).execute(self).await?;
        Ok(())
    }
}
