//! patch-state: transactional, best-effort patch application for dynamic
//! state records.
//!
//! Given a mutable record and a partial patch, compute the subset of fields
//! that actually changed (by deep equality), apply them one field at a time
//! inside an externally coordinated transaction scope, and tolerate
//! per-field validation failures without aborting the whole update.
//!
//! The transaction coordinator, the diagnostic sink, and the state record
//! itself are injected collaborators; this crate only consumes their
//! contracts.

pub mod apply;
pub mod diff;
pub mod equal;
pub mod log;
pub mod patch_state;
pub mod tx;
pub mod types;

pub use apply::apply;
pub use diff::diff;
pub use equal::{deep_equal, deep_equal_opt};
pub use log::{SinkError, TracingSink, WarnSink};
pub use patch_state::{apply_patch, apply_patch_state, apply_patch_state_with, apply_patch_with};
pub use tx::{Transaction, TransactionCoordinator, TxError};
pub use types::{FieldError, Fields, Patch, StateRecord};
