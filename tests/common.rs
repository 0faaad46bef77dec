// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides SQLite pools, recording binders, and scoped log capture
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `sqlbind`

use std::convert::Infallible;
use std::io;
use std::sync::{Arc, Mutex};

use sqlbind::database_plugins::PositionalBinder;
use sqlbind::{SqlType, SqlValue};
#[cfg(feature = "sqlite")]
use sqlx::sqlite::SqlitePoolOptions;
#[cfg(feature = "sqlite")]
use sqlx::SqlitePool;
use tracing::subscriber::DefaultGuard;
use tracing::Level;

/// Create an in-memory `SQLite` pool with a single connection
#[cfg(feature = "sqlite")]
pub async fn create_test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test pool")
}

/// Binder that records every call in order
#[derive(Debug, Default)]
pub struct RecordingBinder {
    pub calls: Vec<(usize, SqlValue)>,
}

impl RecordingBinder {
    pub fn values(&self) -> Vec<SqlValue> {
        self.calls.iter().map(|(_, value)| value.clone()).collect()
    }

    pub fn indexes(&self) -> Vec<usize> {
        self.calls.iter().map(|(index, _)| *index).collect()
    }
}

impl PositionalBinder for RecordingBinder {
    type Error = Infallible;

    fn bind_bytes(&mut self, index: usize, value: &[u8]) -> Result<(), Self::Error> {
        self.calls.push((index, SqlValue::Bytes(value.to_vec())));
        Ok(())
    }

    fn bind_text(&mut self, index: usize, value: &str) -> Result<(), Self::Error> {
        self.calls.push((index, SqlValue::Text(value.to_owned())));
        Ok(())
    }

    fn bind_i32(&mut self, index: usize, value: i32) -> Result<(), Self::Error> {
        self.calls.push((index, SqlValue::Integer(value)));
        Ok(())
    }

    fn bind_i64(&mut self, index: usize, value: i64) -> Result<(), Self::Error> {
        self.calls.push((index, SqlValue::BigInt(value)));
        Ok(())
    }

    fn bind_null(&mut self, index: usize, sql_type: SqlType) -> Result<(), Self::Error> {
        self.calls.push((index, SqlValue::Null(sql_type)));
        Ok(())
    }
}

/// Error raised by `RejectingBinder`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub index: usize,
}

/// Binder whose statement rejects every bind
#[derive(Debug, Default)]
pub struct RejectingBinder;

impl PositionalBinder for RejectingBinder {
    type Error = Rejected;

    fn bind_bytes(&mut self, index: usize, _value: &[u8]) -> Result<(), Self::Error> {
        Err(Rejected { index })
    }

    fn bind_text(&mut self, index: usize, _value: &str) -> Result<(), Self::Error> {
        Err(Rejected { index })
    }

    fn bind_i32(&mut self, index: usize, _value: i32) -> Result<(), Self::Error> {
        Err(Rejected { index })
    }

    fn bind_i64(&mut self, index: usize, _value: i64) -> Result<(), Self::Error> {
        Err(Rejected { index })
    }

    fn bind_null(&mut self, index: usize, _sql_type: SqlType) -> Result<(), Self::Error> {
        Err(Rejected { index })
    }
}

/// In-memory sink for formatted log lines
#[derive(Debug, Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Capture log output on the current thread until the guard is dropped
pub fn capture_logs() -> (LogBuffer, DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(move || writer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
