//! Diagnostic sink for warnings emitted while applying a patch.
//!
//! The sink is an injected collaborator: the default implementation
//! forwards to the `tracing` infrastructure, and tests substitute recording
//! or failing sinks. A sink is itself allowed to fail; callers fall back to
//! the standard error stream with the same message content.

use thiserror::Error;

/// Failure reported by a diagnostic sink.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct SinkError(pub String);

/// Receives warning messages. Implementations must not panic.
pub trait WarnSink {
    fn warn(&self, message: &str) -> Result<(), SinkError>;
}

/// Default sink: forwards warnings to `tracing` under a component name.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    component: &'static str,
}

impl TracingSink {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl WarnSink for TracingSink {
    fn warn(&self, message: &str) -> Result<(), SinkError> {
        tracing::warn!(component = self.component, "{message}");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
