// ABOUTME: Best-effort release of database resources after a unit of work
// ABOUTME: Every resource is attempted and close failures are discarded without logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Resource closer
//!
//! Every resource is attempted in order and whatever error each close returns
//! is dropped. Nothing is logged.
//!
//! ```text
//! close_quietly!(Some(conn), None::<SqliteConnection>, Some(pool)).await;
//! ```

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Database, Pool};

/// A resource with an explicit, fallible close
#[async_trait]
pub trait Closeable: Send {
    /// Release the resource
    ///
    /// # Errors
    /// Returns an error if the underlying client fails to close cleanly
    async fn close(self: Box<Self>) -> Result<()>;
}

/// Close every resource in order, ignoring `None` entries and close failures
pub async fn close_all<'a, I>(resources: I)
where
    I: IntoIterator<Item = Option<Box<dyn Closeable + 'a>>>,
{
    for resource in resources.into_iter().flatten() {
        let _ = resource.close().await;
    }
}

/// Box an optional resource for [`close_all`]
#[must_use]
pub fn boxed<'a, C: Closeable + 'a>(resource: Option<C>) -> Option<Box<dyn Closeable + 'a>> {
    resource.map(|resource| Box::new(resource) as Box<dyn Closeable + 'a>)
}

/// Close any number of `Option<impl Closeable>` resources, ignoring failures
///
/// Expands to a future that must be awaited.
#[macro_export]
macro_rules! close_quietly {
    ($($resource:expr),+ $(,)?) => {
        $crate::database_plugins::shared::cleanup::close_all([
            $($crate::database_plugins::shared::cleanup::boxed($resource)),+
        ])
    };
}

#[async_trait]
impl<DB: Database> Closeable for Pool<DB> {
    async fn close(self: Box<Self>) -> Result<()> {
        Pool::<DB>::close(&self).await;
        Ok(())
    }
}
