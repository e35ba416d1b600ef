//! Transaction coordinator seam.
//!
//! The coordinator is an external collaborator: it hands out transactional
//! scopes under a named label, and the handle exposes explicit `begin` and
//! `commit` steps. All three operations are asynchronous so that lock
//! acquisition happens cooperatively, never synchronously inside an
//! already-active transactional frame. Failures at this layer are never
//! recovered by this crate; they propagate to the caller as-is.

use async_trait::async_trait;
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TxError {
    /// Lock acquisition failed; a conflicting transaction holds the scope.
    #[error("CONFLICT: {0}")]
    Conflict(String),
    #[error("BEGIN_FAILED: {0}")]
    BeginFailed(String),
    /// Commit-time failure, e.g. the coordinator's own validation.
    #[error("COMMIT_FAILED: {0}")]
    CommitFailed(String),
}

// ── Traits ────────────────────────────────────────────────────────────────

/// A live transaction handle.
#[async_trait]
pub trait Transaction: Send {
    async fn begin(&mut self) -> Result<(), TxError>;
    async fn commit(&mut self) -> Result<(), TxError>;
}

/// Hands out transactional scopes under a named label.
#[async_trait]
pub trait TransactionCoordinator: Send + Sync {
    type Tx: Transaction;

    /// Acquire a transaction scope for a unit of work labeled `label`.
    async fn act(&self, label: &str) -> Result<Self::Tx, TxError>;
}
