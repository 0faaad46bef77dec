// ABOUTME: Structured error types for the database helpers re-exported from sqlbind-core
// ABOUTME: BindingError for rejected binds, DatabaseError for query and configuration failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use sqlbind_core::errors::*;
