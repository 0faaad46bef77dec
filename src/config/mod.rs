// ABOUTME: Configuration module for the database helper layer
// ABOUTME: Environment-only settings selecting the database URL and SQL dialect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration is read from environment variables only; there is no config
//! file.

/// Database URL and dialect configuration
pub mod database;

pub use database::{DatabaseConfig, DatabaseUrl};
