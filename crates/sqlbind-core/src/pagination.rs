// ABOUTME: Inclusive row ranges and the LIMIT/OFFSET window they encode to
// ABOUTME: Single source of truth for both clause text and bound pagination parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::rows;

/// Inclusive window `from..=to` of result rows
///
/// `to == i32::MAX` means the range has no upper end. A `to` below `from`, or
/// below zero, also yields no limit rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowRange {
    /// First row, 0-based
    pub from: i32,
    /// Last row, inclusive
    pub to: i32,
}

impl RowRange {
    /// Create a range covering rows `from..=to`
    #[must_use]
    pub const fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    /// Every row
    #[must_use]
    pub const fn all() -> Self {
        Self::new(rows::FIRST, rows::UNBOUNDED)
    }

    /// Every row from `from` onwards
    #[must_use]
    pub const fn starting_at(from: i32) -> Self {
        Self::new(from, rows::UNBOUNDED)
    }

    /// Number of rows the range is limited to, or 0 for no limit
    ///
    /// Computed in 64-bit so that extreme inputs saturate at `i32::MAX`
    /// instead of overflowing.
    #[must_use]
    pub fn limit(&self) -> i32 {
        if self.to >= 0 && self.to >= self.from && self.to < rows::UNBOUNDED {
            let span = i64::from(self.to) - i64::from(self.from) + 1;
            i32::try_from(span).unwrap_or(i32::MAX)
        } else {
            0
        }
    }

    /// The `LIMIT`/`OFFSET` window for this range
    #[must_use]
    pub fn window(&self) -> LimitWindow {
        let limit = self.limit();
        match (limit > 0, self.from > 0) {
            (true, true) => LimitWindow::LimitOffset {
                limit,
                offset: self.from,
            },
            (true, false) => LimitWindow::Limit { limit },
            (false, true) => LimitWindow::Offset { offset: self.from },
            (false, false) => LimitWindow::Unbounded,
        }
    }
}

impl Default for RowRange {
    fn default() -> Self {
        Self::all()
    }
}

impl From<(i32, i32)> for RowRange {
    fn from((from, to): (i32, i32)) -> Self {
        Self::new(from, to)
    }
}

/// Pagination shape of a row range
///
/// Clause rendering and parameter binding both match on this value, so the
/// number and order of placeholders always agrees with the values bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitWindow {
    /// No pagination
    Unbounded,
    /// `LIMIT ?`
    Limit {
        /// Row count
        limit: i32,
    },
    /// `LIMIT ? OFFSET ?`
    LimitOffset {
        /// Row count
        limit: i32,
        /// Rows skipped
        offset: i32,
    },
    /// Unbounded limit with `OFFSET ?`
    Offset {
        /// Rows skipped
        offset: i32,
    },
}

impl LimitWindow {
    /// Bound limit value, if any
    #[must_use]
    pub const fn limit(&self) -> Option<i32> {
        match self {
            Self::Limit { limit } | Self::LimitOffset { limit, .. } => Some(*limit),
            Self::Unbounded | Self::Offset { .. } => None,
        }
    }

    /// Bound offset value, if any
    #[must_use]
    pub const fn offset(&self) -> Option<i32> {
        match self {
            Self::LimitOffset { offset, .. } | Self::Offset { offset } => Some(*offset),
            Self::Unbounded | Self::Limit { .. } => None,
        }
    }

    /// Number of placeholders the clause carries
    #[must_use]
    pub const fn placeholder_count(&self) -> usize {
        match self {
            Self::Unbounded => 0,
            Self::Limit { .. } | Self::Offset { .. } => 1,
            Self::LimitOffset { .. } => 2,
        }
    }

    /// Parameter values in binding order: limit first, then offset
    pub fn parameters(&self) -> impl Iterator<Item = i32> {
        self.limit().into_iter().chain(self.offset())
    }
}
