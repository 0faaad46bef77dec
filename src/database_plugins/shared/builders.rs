// ABOUTME: Positional parameter binding with explicit, typed NULLs for absent values
// ABOUTME: PositionalBinder seam, the in-memory BoundParameters statement, and null-safe binders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Query parameter binding helpers
//!
//! `PositionalBinder` is the statement-binding interface the rest of the crate
//! is written against: 1-based positional binds of blobs, text, integers and
//! typed NULLs. `BoundParameters` implements it in memory so a statement can
//! be assembled before being handed to `sqlx`.
//!
//! The null-safe binders come in two flavours:
//! - `Option` based (`bind_bytes_or_null`, `bind_text_or_null`,
//!   `bind_long_or_null`), which is how new call sites should express absence
//! - sentinel based (`bind_int_zero_as_null`, `bind_int_max_as_null`,
//!   `bind_long_zero_as_null`) for columns whose stored convention uses an
//!   in-band value. Each convention has its own function; a column that can
//!   legitimately hold the sentinel must not use it.

use std::iter::Peekable;
use std::str::Chars;

use sqlbind_core::constants::sentinels;
use sqlbind_core::errors::BindingError;
use sqlbind_core::sql::{SqlType, SqlValue};

/// Statement accepting 1-based positional binds
///
/// Errors are the statement's own; the helpers in this crate never wrap them.
pub trait PositionalBinder {
    /// Error raised when the statement rejects a bind
    type Error;

    /// Bind a binary blob
    ///
    /// # Errors
    /// Returns the statement's error if the index is rejected
    fn bind_bytes(&mut self, index: usize, value: &[u8]) -> Result<(), Self::Error>;

    /// Bind text
    ///
    /// # Errors
    /// Returns the statement's error if the index is rejected
    fn bind_text(&mut self, index: usize, value: &str) -> Result<(), Self::Error>;

    /// Bind a 32-bit integer
    ///
    /// # Errors
    /// Returns the statement's error if the index is rejected
    fn bind_i32(&mut self, index: usize, value: i32) -> Result<(), Self::Error>;

    /// Bind a 64-bit integer
    ///
    /// # Errors
    /// Returns the statement's error if the index is rejected
    fn bind_i64(&mut self, index: usize, value: i64) -> Result<(), Self::Error>;

    /// Bind NULL declared as `sql_type`
    ///
    /// # Errors
    /// Returns the statement's error if the index is rejected
    fn bind_null(&mut self, index: usize, sql_type: SqlType) -> Result<(), Self::Error>;
}

impl<B: PositionalBinder + ?Sized> PositionalBinder for &mut B {
    type Error = B::Error;

    fn bind_bytes(&mut self, index: usize, value: &[u8]) -> Result<(), Self::Error> {
        (**self).bind_bytes(index, value)
    }

    fn bind_text(&mut self, index: usize, value: &str) -> Result<(), Self::Error> {
        (**self).bind_text(index, value)
    }

    fn bind_i32(&mut self, index: usize, value: i32) -> Result<(), Self::Error> {
        (**self).bind_i32(index, value)
    }

    fn bind_i64(&mut self, index: usize, value: i64) -> Result<(), Self::Error> {
        (**self).bind_i64(index, value)
    }

    fn bind_null(&mut self, index: usize, sql_type: SqlType) -> Result<(), Self::Error> {
        (**self).bind_null(index, sql_type)
    }
}

/// Bind `bytes`, or a BINARY NULL when absent
///
/// # Errors
/// Propagates the statement's error unchanged
pub fn bind_bytes_or_null<B: PositionalBinder>(
    statement: &mut B,
    index: usize,
    bytes: Option<&[u8]>,
) -> Result<(), B::Error> {
    match bytes {
        Some(bytes) => statement.bind_bytes(index, bytes),
        None => statement.bind_null(index, SqlType::Binary),
    }
}

/// Bind `text`, or a VARCHAR NULL when absent
///
/// # Errors
/// Propagates the statement's error unchanged
pub fn bind_text_or_null<B: PositionalBinder>(
    statement: &mut B,
    index: usize,
    text: Option<&str>,
) -> Result<(), B::Error> {
    match text {
        Some(text) => statement.bind_text(index, text),
        None => statement.bind_null(index, SqlType::Varchar),
    }
}

/// Bind `value`, or a BIGINT NULL when absent
///
/// # Errors
/// Propagates the statement's error unchanged
pub fn bind_long_or_null<B: PositionalBinder>(
    statement: &mut B,
    index: usize,
    value: Option<i64>,
) -> Result<(), B::Error> {
    match value {
        Some(value) => statement.bind_i64(index, value),
        None => statement.bind_null(index, SqlType::BigInt),
    }
}

/// Bind `value`, treating `0` as absent (INTEGER NULL)
///
/// # Errors
/// Propagates the statement's error unchanged
pub fn bind_int_zero_as_null<B: PositionalBinder>(
    statement: &mut B,
    index: usize,
    value: i32,
) -> Result<(), B::Error> {
    bind_int_or_null(statement, index, zero_as_none(value))
}

/// Bind `value`, treating `i32::MAX` as absent (INTEGER NULL)
///
/// # Errors
/// Propagates the statement's error unchanged
pub fn bind_int_max_as_null<B: PositionalBinder>(
    statement: &mut B,
    index: usize,
    value: i32,
) -> Result<(), B::Error> {
    bind_int_or_null(statement, index, max_as_none(value))
}

/// Bind `value`, treating `0` as absent (BIGINT NULL)
///
/// # Errors
/// Propagates the statement's error unchanged
pub fn bind_long_zero_as_null<B: PositionalBinder>(
    statement: &mut B,
    index: usize,
    value: i64,
) -> Result<(), B::Error> {
    bind_long_or_null(statement, index, long_zero_as_none(value))
}

/// Bind an already materialized value
///
/// # Errors
/// Propagates the statement's error unchanged
pub fn bind_value<B: PositionalBinder>(
    statement: &mut B,
    index: usize,
    value: &SqlValue,
) -> Result<(), B::Error> {
    match value {
        SqlValue::Bytes(bytes) => statement.bind_bytes(index, bytes),
        SqlValue::Text(text) => statement.bind_text(index, text),
        SqlValue::Integer(n) => statement.bind_i32(index, *n),
        SqlValue::BigInt(n) => statement.bind_i64(index, *n),
        SqlValue::Null(sql_type) => statement.bind_null(index, *sql_type),
    }
}

fn bind_int_or_null<B: PositionalBinder>(
    statement: &mut B,
    index: usize,
    value: Option<i32>,
) -> Result<(), B::Error> {
    match value {
        Some(value) => statement.bind_i32(index, value),
        None => statement.bind_null(index, SqlType::Integer),
    }
}

/// Read a "zero means absent" 32-bit column value
#[must_use]
pub const fn zero_as_none(value: i32) -> Option<i32> {
    if value == sentinels::ZERO_I32 {
        None
    } else {
        Some(value)
    }
}

/// Read a "max value means absent" 32-bit column value
#[must_use]
pub const fn max_as_none(value: i32) -> Option<i32> {
    if value == sentinels::MAX_I32 {
        None
    } else {
        Some(value)
    }
}

/// Read a "zero means absent" 64-bit column value
#[must_use]
pub const fn long_zero_as_none(value: i64) -> Option<i64> {
    if value == sentinels::ZERO_I64 {
        None
    } else {
        Some(value)
    }
}

/// Number of parameters `sql` declares
///
/// Anonymous `?` placeholders take the next number after the highest seen so
/// far; numbered `?NNN` and `$NNN` placeholders count up to their number.
/// Quoted literals and identifiers, `--` line comments and `/* */` block
/// comments are skipped. Named parameters (`:name`, `@name`, `$name`) are not
/// recognised.
#[must_use]
pub fn count_placeholders(sql: &str) -> usize {
    let mut highest = 0;
    let mut chars = sql.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\'' | '"' | '`' => skip_past(&mut chars, ch),
            '-' if chars.peek() == Some(&'-') => skip_past(&mut chars, '\n'),
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                skip_block_comment(&mut chars);
            }
            '?' => {
                highest = read_number(&mut chars).map_or(highest + 1, |n| highest.max(n));
            }
            '$' => {
                if let Some(n) = read_number(&mut chars) {
                    highest = highest.max(n);
                }
            }
            _ => {}
        }
    }
    highest
}

fn skip_past(chars: &mut Peekable<Chars<'_>>, end: char) {
    for ch in chars.by_ref() {
        if ch == end {
            return;
        }
    }
}

fn skip_block_comment(chars: &mut Peekable<Chars<'_>>) {
    while let Some(ch) = chars.next() {
        if ch == '*' && chars.peek() == Some(&'/') {
            chars.next();
            return;
        }
    }
}

fn read_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut number: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|ch| ch.to_digit(10)) {
        chars.next();
        number = Some(
            number
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
    }
    number
}

/// In-memory positional statement
///
/// Holds one slot per placeholder. A statement created with `for_sql` or
/// `with_capacity` rejects indexes beyond its placeholder count; one created
/// with `new` grows to fit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundParameters {
    slots: Vec<Option<SqlValue>>,
    parameter_count: Option<usize>,
    closed: bool,
}

impl BoundParameters {
    /// Create a statement that grows to fit any index
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a statement with exactly `parameter_count` placeholders
    #[must_use]
    pub fn with_capacity(parameter_count: usize) -> Self {
        Self {
            slots: vec![None; parameter_count],
            parameter_count: Some(parameter_count),
            closed: false,
        }
    }

    /// Create a statement sized to the placeholders in `sql`
    #[must_use]
    pub fn for_sql(sql: &str) -> Self {
        Self::with_capacity(count_placeholders(sql))
    }

    /// Close the statement; later binds fail with `StatementClosed`
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Whether the statement has been closed
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of slots currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the statement holds no slots
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Value bound at 1-based `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SqlValue> {
        index
            .checked_sub(1)
            .and_then(|slot| self.slots.get(slot))
            .and_then(Option::as_ref)
    }

    /// Take the bound values in placeholder order
    ///
    /// # Errors
    /// Returns `MissingParameter` for the first slot that was never bound
    pub fn into_values(self) -> Result<Vec<SqlValue>, BindingError> {
        self.slots
            .into_iter()
            .enumerate()
            .map(|(slot, value)| value.ok_or(BindingError::MissingParameter { index: slot + 1 }))
            .collect()
    }

    fn set(&mut self, index: usize, value: SqlValue) -> Result<(), BindingError> {
        if self.closed {
            return Err(BindingError::StatementClosed);
        }
        let slot = match index.checked_sub(1) {
            Some(slot) if self.parameter_count.is_none_or(|count| slot < count) => slot,
            _ => {
                return Err(BindingError::IndexOutOfRange {
                    index,
                    parameter_count: self.parameter_count.unwrap_or(self.slots.len()),
                })
            }
        };
        if slot >= self.slots.len() {
            self.slots.resize(slot + 1, None);
        }
        self.slots[slot] = Some(value);
        Ok(())
    }
}

impl PositionalBinder for BoundParameters {
    type Error = BindingError;

    fn bind_bytes(&mut self, index: usize, value: &[u8]) -> Result<(), Self::Error> {
        self.set(index, SqlValue::Bytes(value.to_vec()))
    }

    fn bind_text(&mut self, index: usize, value: &str) -> Result<(), Self::Error> {
        self.set(index, SqlValue::Text(value.to_owned()))
    }

    fn bind_i32(&mut self, index: usize, value: i32) -> Result<(), Self::Error> {
        self.set(index, SqlValue::Integer(value))
    }

    fn bind_i64(&mut self, index: usize, value: i64) -> Result<(), Self::Error> {
        self.set(index, SqlValue::BigInt(value))
    }

    fn bind_null(&mut self, index: usize, sql_type: SqlType) -> Result<(), Self::Error> {
        self.set(index, SqlValue::Null(sql_type))
    }
}
