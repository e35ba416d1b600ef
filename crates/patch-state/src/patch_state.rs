//! Transactional patch application.
//!
//! `apply_patch` is the synchronous diff-then-apply composition;
//! `apply_patch_state` wraps it in a transaction scope acquired from an
//! external coordinator. Only field-level assignment failures are swallowed
//! (logged and skipped); coordinator failures propagate to the caller.

use crate::apply::apply;
use crate::diff::diff;
use crate::log::{TracingSink, WarnSink};
use crate::tx::{Transaction, TransactionCoordinator, TxError};
use crate::types::{Fields, Patch, StateRecord};

/// Component name for the default sink and the transaction label.
const COMPONENT: &str = "apply_patch_state";

/// Diff `patch` against `state` and apply the differing fields, reporting
/// skipped fields through the default tracing-backed sink.
///
/// Returns the applied patch: the subset of the actual patch that was
/// successfully written.
pub fn apply_patch<S>(state: &mut S, patch: &Patch) -> Fields
where
    S: StateRecord + ?Sized,
{
    apply_patch_with(state, patch, &TracingSink::new(COMPONENT))
}

/// Like [`apply_patch`], with an explicit diagnostic sink.
pub fn apply_patch_with<S, L>(state: &mut S, patch: &Patch, log: &L) -> Fields
where
    S: StateRecord + ?Sized,
    L: WarnSink + ?Sized,
{
    let actual = diff(state, patch);
    apply(state, &actual, log)
}

/// Apply `patch` to `state` inside a transaction scope acquired from
/// `coordinator`.
///
/// The scope is awaited rather than taken synchronously, so calling from
/// within another in-progress transactional context (e.g. a reactive
/// callback already holding a lock) acquires the lock cooperatively. The
/// transaction is explicitly begun before the diff and committed after the
/// last field; acquire, begin, and commit failures propagate unchanged.
pub async fn apply_patch_state<C, S>(
    coordinator: &C,
    state: &mut S,
    patch: &Patch,
) -> Result<Fields, TxError>
where
    C: TransactionCoordinator + ?Sized,
    S: StateRecord + ?Sized,
{
    apply_patch_state_with(coordinator, state, patch, &TracingSink::new(COMPONENT)).await
}

/// Like [`apply_patch_state`], with an explicit diagnostic sink.
pub async fn apply_patch_state_with<C, S, L>(
    coordinator: &C,
    state: &mut S,
    patch: &Patch,
    log: &L,
) -> Result<Fields, TxError>
where
    C: TransactionCoordinator + ?Sized,
    S: StateRecord + ?Sized,
    L: WarnSink + ?Sized,
{
    let mut tx = coordinator.act(COMPONENT).await?;
    tx.begin().await?;
    let applied = apply_patch_with(state, patch, log);
    tx.commit().await?;
    Ok(applied)
}

// ── Tests ─────────────────────────────────────────────────────────────────
