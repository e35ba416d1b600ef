//! Patch diff: compute the subset of a patch that actually changes state.

use crate::equal::deep_equal_opt;
use crate::types::{Fields, Patch, StateRecord};

/// Compute the actual patch: the fields of `patch` whose proposed values
/// differ from the state's current values under deep equality.
///
/// Explicitly undefined entries propose nothing and never appear in the
/// result, regardless of the state's current value. Fields the state lacks
/// compare as absent, so proposing any value for them (null included)
/// counts as a change. Pure function over its inputs; the result preserves
/// patch iteration order.
pub fn diff<S>(state: &S, patch: &Patch) -> Fields
where
    S: StateRecord + ?Sized,
{
    let mut actual = Fields::new();
    for (field, proposed) in patch.iter() {
        // An undefined entry is "do not propose this field", not "clear it".
        let Some(proposed) = proposed else { continue };
        if !deep_equal_opt(state.get(field), Some(proposed)) {
            actual.insert(field.to_owned(), proposed.clone());
        }
    }
    actual
}

// ── Tests ─────────────────────────────────────────────────────────────────
