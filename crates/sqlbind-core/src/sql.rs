// ABOUTME: Declared SQL column types and the values a positional statement holds
// ABOUTME: SqlType disambiguates bound NULLs, SqlValue is one bound placeholder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Column type declared when binding an explicit NULL
///
/// Some database clients cannot infer the type of an untyped NULL, so every
/// NULL bound by this crate carries the type of the column it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SqlType {
    /// Binary blob
    Binary,
    /// Variable-length text
    Varchar,
    /// 64-bit integer
    BigInt,
    /// 32-bit integer
    Integer,
}

impl SqlType {
    /// SQL name of the type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Binary => "BINARY",
            Self::Varchar => "VARCHAR",
            Self::BigInt => "BIGINT",
            Self::Integer => "INTEGER",
        }
    }
}

impl Display for SqlType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value bound to one statement placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlValue {
    /// Binary blob
    Bytes(Vec<u8>),
    /// Text
    Text(String),
    /// 32-bit integer
    Integer(i32),
    /// 64-bit integer
    BigInt(i64),
    /// NULL with its declared column type
    Null(SqlType),
}

impl SqlValue {
    /// Whether this value is a bound NULL
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null(_))
    }

    /// Column type this value binds as
    #[must_use]
    pub const fn sql_type(&self) -> SqlType {
        match self {
            Self::Bytes(_) => SqlType::Binary,
            Self::Text(_) => SqlType::Varchar,
            Self::Integer(_) => SqlType::Integer,
            Self::BigInt(_) => SqlType::BigInt,
            Self::Null(sql_type) => *sql_type,
        }
    }
}
