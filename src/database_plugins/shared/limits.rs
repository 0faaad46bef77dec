// ABOUTME: Row-range to LIMIT/OFFSET encoding for paginated queries
// ABOUTME: Clause text and bound parameters are derived from the same LimitWindow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Range encoder
//!
//! A paginated query is assembled in two steps that must agree:
//!
//! ```text
//! let sql = format!("SELECT ... ORDER BY height DESC{}", limits_clause(from, to));
//! let mut params = BoundParameters::for_sql(&sql);
//! let next = bind_limits(1, &mut params, from, to)?;
//! ```
//!
//! Both functions match on `RowRange::window()`, so the clause always has as
//! many placeholders as `bind_limits` binds, limit first and offset second.

use std::borrow::Cow;

use sqlbind_core::constants::clauses;
use sqlbind_core::errors::BindingError;
use sqlbind_core::pagination::{LimitWindow, RowRange};

use super::builders::{bind_value, count_placeholders, BoundParameters, PositionalBinder};

/// SQL dialect used to spell the pagination clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// `?` placeholders, `LIMIT NULL` for an unbounded limit
    #[default]
    Generic,
    /// `?` placeholders, `LIMIT -1` for an unbounded limit
    Sqlite,
    /// `$n` placeholders, `LIMIT ALL` for an unbounded limit
    Postgres,
}

/// Pagination clause for rows `from..=to`
///
/// Returns `" LIMIT ? OFFSET ? "`, `" LIMIT ? "`, `" LIMIT NULL OFFSET ? "`
/// or `""`; bind its parameters with [`bind_limits`].
#[must_use]
pub fn limits_clause(from: i32, to: i32) -> &'static str {
    generic_clause(RowRange::new(from, to).window())
}

/// Pagination clause for `range` spelled for `dialect`
///
/// `first_index` is the 1-based index of the clause's first placeholder; only
/// numbered placeholders (`Postgres`) depend on it.
#[must_use]
pub fn limits_clause_for(dialect: Dialect, range: RowRange, first_index: usize) -> Cow<'static, str> {
    let window = range.window();
    match dialect {
        Dialect::Generic => Cow::Borrowed(generic_clause(window)),
        Dialect::Sqlite => Cow::Borrowed(match window {
            LimitWindow::Offset { .. } => clauses::SQLITE_UNBOUNDED_OFFSET,
            _ => generic_clause(window),
        }),
        Dialect::Postgres => match window {
            LimitWindow::Unbounded => Cow::Borrowed(clauses::NONE),
            LimitWindow::Limit { .. } => Cow::Owned(format!(" LIMIT ${first_index} ")),
            LimitWindow::LimitOffset { .. } => Cow::Owned(format!(
                " LIMIT ${first_index} OFFSET ${} ",
                first_index + 1
            )),
            LimitWindow::Offset { .. } => {
                Cow::Owned(format!(" LIMIT ALL OFFSET ${first_index} "))
            }
        },
    }
}

/// Bind the pagination parameters for rows `from..=to` starting at `index`
///
/// Binds the limit (if any) then the offset (if any) and returns the next
/// unused index.
///
/// # Errors
/// Propagates the statement's error unchanged
pub fn bind_limits<B: PositionalBinder>(
    index: usize,
    statement: &mut B,
    from: i32,
    to: i32,
) -> Result<usize, B::Error> {
    bind_window(index, statement, RowRange::new(from, to).window())
}

/// Bind the parameters of an already computed window starting at `index`
///
/// # Errors
/// Propagates the statement's error unchanged
pub fn bind_window<B: PositionalBinder>(
    index: usize,
    statement: &mut B,
    window: LimitWindow,
) -> Result<usize, B::Error> {
    let mut next = index;
    for value in window.parameters() {
        statement.bind_i32(next, value)?;
        next += 1;
    }
    Ok(next)
}

/// Append the pagination clause for `range` to `base_sql` and bind everything
///
/// `params` must hold exactly one value per placeholder of `base_sql`. The
/// returned statement carries those values followed by the pagination
/// parameters.
///
/// # Errors
/// Returns `IndexOutOfRange` if `params` holds more values than `base_sql`
/// has placeholders, or `MissingParameter` if it holds fewer or has a gap
pub fn paginate(
    dialect: Dialect,
    base_sql: &str,
    params: BoundParameters,
    range: RowRange,
) -> Result<(String, BoundParameters), BindingError> {
    let parameter_count = count_placeholders(base_sql);
    let values = params.into_values()?;
    if values.len() > parameter_count {
        return Err(BindingError::IndexOutOfRange {
            index: parameter_count + 1,
            parameter_count,
        });
    }
    if values.len() < parameter_count {
        return Err(BindingError::MissingParameter {
            index: values.len() + 1,
        });
    }

    let first_index = parameter_count + 1;
    let sql = format!(
        "{base_sql}{}",
        limits_clause_for(dialect, range, first_index)
    );
    let mut statement = BoundParameters::for_sql(&sql);
    for (slot, value) in values.iter().enumerate() {
        bind_value(&mut statement, slot + 1, value)?;
    }
    bind_limits(first_index, &mut statement, range.from, range.to)?;
    Ok((sql, statement))
}

const fn generic_clause(window: LimitWindow) -> &'static str {
    match window {
        LimitWindow::LimitOffset { .. } => clauses::LIMIT_OFFSET,
        LimitWindow::Limit { .. } => clauses::LIMIT,
        LimitWindow::Offset { .. } => clauses::UNBOUNDED_OFFSET,
        LimitWindow::Unbounded => clauses::NONE,
    }
}
