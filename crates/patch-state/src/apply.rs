//! Resilient field application: write each changed field, skip rejects.

use crate::log::WarnSink;
use crate::types::{Fields, StateRecord};

/// Apply each field of `actual` to `state`, in order, returning the subset
/// that was successfully written.
///
/// A field the record rejects is logged and skipped; it never prevents the
/// remaining fields from being applied, and this function never fails as a
/// whole. Mutation happens one field at a time, so each write is
/// independently visible even when a later field is rejected.
pub fn apply<S, L>(state: &mut S, actual: &Fields, log: &L) -> Fields
where
    S: StateRecord + ?Sized,
    L: WarnSink + ?Sized,
{
    let mut applied = Fields::new();
    for (field, value) in actual {
        match state.set(field, value.clone()) {
            Ok(()) => {
                applied.insert(field.clone(), value.clone());
            }
            Err(err) => {
                warn_or_stderr(log, &format!("failed to set field {field} on state: {err}"));
            }
        }
    }
    applied
}

/// Emit through the sink; a sink failure falls back to stderr with the same
/// message content. Logging never aborts the apply loop.
fn warn_or_stderr<L: WarnSink + ?Sized>(log: &L, message: &str) {
    if log.warn(message).is_err() {
        eprintln!("patch-state: {message}");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::SinkError;
    use crate::types::FieldError;
    use serde_json::{json, Map, Value};
    use std::cell::RefCell;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    /// Record that rejects temperatures below absolute zero.
    struct ThermoState {
        fields: Fields,
    }

    impl ThermoState {
        fn new(value: Value) -> Self {
            Self {
                fields: fields(value),
            }
        }
    }

    impl StateRecord for ThermoState {
        fn get(&self, field: &str) -> Option<&Value> {
            self.fields.get(field)
        }

        fn set(&mut self, field: &str, value: Value) -> Result<(), FieldError> {
            if field == "temp" {
                let in_range = value.as_f64().map(|t| t >= -273.15).unwrap_or(false);
                if !in_range {
                    return Err(FieldError::new(format!("temperature {value} out of range")));
                }
            }
            self.fields.insert(field.to_string(), value);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        messages: RefCell<Vec<String>>,
    }

    impl WarnSink for RecordingSink {
        fn warn(&self, message: &str) -> Result<(), SinkError> {
            self.messages.borrow_mut().push(message.to_string());
            Ok(())
        }
    }

    struct FailingSink;

    impl WarnSink for FailingSink {
        fn warn(&self, _message: &str) -> Result<(), SinkError> {
            Err(SinkError("sink down".to_string()))
        }
    }

    #[test]
    fn applies_every_accepted_field() {
        let mut state: Map<String, Value> = fields(json!({"a": 1}));
        let actual = fields(json!({"a": 2, "b": 3}));
        let applied = apply(&mut state, &actual, &RecordingSink::default());
        assert_eq!(applied, actual);
        assert_eq!(state, fields(json!({"a": 2, "b": 3})));
    }

    #[test]
    fn rejected_field_is_logged_and_skipped() {
        let mut state = ThermoState::new(json!({"temp": 20}));
        let actual = fields(json!({"temp": -300}));
        let sink = RecordingSink::default();

        let applied = apply(&mut state, &actual, &sink);

        assert!(applied.is_empty());
        assert_eq!(state.fields, fields(json!({"temp": 20})));
        let messages = sink.messages.borrow();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("temp"));
        assert!(messages[0].contains("out of range"));
    }

    #[test]
    fn rejected_field_does_not_block_later_fields() {
        let mut state = ThermoState::new(json!({"temp": 20, "name": "old"}));
        let actual = fields(json!({"temp": -300, "name": "new"}));
        let sink = RecordingSink::default();

        let applied = apply(&mut state, &actual, &sink);

        assert_eq!(applied, fields(json!({"name": "new"})));
        assert_eq!(state.fields, fields(json!({"temp": 20, "name": "new"})));
        assert_eq!(sink.messages.borrow().len(), 1);
    }

    #[test]
    fn failing_sink_does_not_abort_the_loop() {
        let mut state = ThermoState::new(json!({"temp": 20}));
        let actual = fields(json!({"temp": -300, "name": "new"}));

        let applied = apply(&mut state, &actual, &FailingSink);

        assert_eq!(applied, fields(json!({"name": "new"})));
        assert_eq!(state.fields, fields(json!({"temp": 20, "name": "new"})));
    }

    #[test]
    fn empty_actual_patch_is_a_noop() {
        let mut state: Map<String, Value> = fields(json!({"a": 1}));
        let applied = apply(&mut state, &Fields::new(), &RecordingSink::default());
        assert!(applied.is_empty());
        assert_eq!(state, fields(json!({"a": 1})));
    }
}
