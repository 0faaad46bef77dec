// ABOUTME: Best-effort transaction rollback for failure-recovery paths
// ABOUTME: Rollback failures are logged through tracing and never returned to the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Rollback helper
//!
//! A failed rollback is logged at `error` level and swallowed; the calling
//! path continues with its own error.
//!
//! ## Example Usage
//!
//! ```text
//! let mut tx = pool.begin().await?;
//! if let Err(e) = insert_block(&mut tx, &block).await {
//!     rollback(Some(tx)).await;
//!     return Err(e);
//! }
//! tx.commit().await?;
//! ```
//!
//! Log output goes to whichever `tracing` subscriber is installed; tests can
//! scope one with `tracing::subscriber::set_default`.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Database, Transaction};
use tracing::{debug, error};

/// A connection or transaction that can be rolled back
#[async_trait]
pub trait Rollback: Send {
    /// Roll back the pending transaction
    ///
    /// # Errors
    /// Returns an error if the database rejects the rollback
    async fn rollback(self) -> Result<()>;
}

#[async_trait]
impl<DB: Database> Rollback for Transaction<'_, DB> {
    async fn rollback(self) -> Result<()> {
        Transaction::rollback(self).await?;
        Ok(())
    }
}

/// Roll back `connection` if present, logging and swallowing any failure
pub async fn rollback<C: Rollback>(connection: Option<C>) {
    let Some(connection) = connection else {
        return;
    };
    match connection.rollback().await {
        Ok(()) => debug!("Transaction rolled back"),
        Err(e) => error!(error = %e, detail = ?e, "Transaction rollback failed"),
    }
}
