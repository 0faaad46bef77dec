// ABOUTME: Database helpers shared by every backend
// ABOUTME: Parameter binding, row-range pagination, resource cleanup and rollback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Positional parameter binding with typed NULLs for absent values
pub mod builders;

/// Row-range to `LIMIT`/`OFFSET` encoding
pub mod limits;

/// Best-effort resource closing
pub mod cleanup;

/// Best-effort transaction rollback
pub mod transactions;
