//! Core types: patches, field subsets, and the state record seam.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use thiserror::Error;

// ── Field subsets ─────────────────────────────────────────────────────────

/// Ordered field→value map. Both the actual patch (fields that differ from
/// current state) and the applied patch (fields successfully written) take
/// this shape.
pub type Fields = Map<String, Value>;

// ── Errors ────────────────────────────────────────────────────────────────

/// Error raised by a state record that rejects a field assignment, e.g.
/// because the value fails an internal range or type constraint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldError {
    message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// ── Patch ─────────────────────────────────────────────────────────────────

/// A proposed partial update to a state record.
///
/// Entries map field names to proposed values and iterate in insertion
/// order. An entry may be explicitly undefined (see
/// [`insert_undefined`](Patch::insert_undefined)): such an entry proposes
/// nothing, rather than requesting a clear, and the differ skips it
/// entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    entries: IndexMap<String, Option<Value>>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Propose `value` for `field`, replacing any earlier proposal.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) {
        self.entries.insert(field.into(), Some(value));
    }

    /// Mention `field` without proposing a value for it.
    pub fn insert_undefined(&mut self, field: impl Into<String>) {
        self.entries.insert(field.into(), None);
    }

    /// True if the patch mentions `field`, with or without a value.
    pub fn contains_field(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order. `None` marks an explicitly undefined
    /// proposal.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }
}

impl From<Map<String, Value>> for Patch {
    fn from(fields: Map<String, Value>) -> Self {
        Self {
            entries: fields.into_iter().map(|(k, v)| (k, Some(v))).collect(),
        }
    }
}

impl FromIterator<(String, Value)> for Patch {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k, Some(v))).collect(),
        }
    }
}

// ── State record seam ─────────────────────────────────────────────────────

/// A mutable record of named fields, owned by the caller.
///
/// Assignment is fallible: implementations are free to validate values and
/// reject an assignment with a [`FieldError`]. A rejected assignment must
/// leave the field's current value untouched.
pub trait StateRecord {
    /// Current value of `field`, or `None` when the field is absent.
    fn get(&self, field: &str) -> Option<&Value>;

    /// Assign `value` to `field`, replacing any current value.
    fn set(&mut self, field: &str, value: Value) -> Result<(), FieldError>;
}

/// Plain JSON-object-backed state. Assignment never fails.
impl StateRecord for Map<String, Value> {
    fn get(&self, field: &str) -> Option<&Value> {
        Map::get(self, field)
    }

    fn set(&mut self, field: &str, value: Value) -> Result<(), FieldError> {
        self.insert(field.to_string(), value);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
