//! Deep equality over dynamically-shaped values.
//!
//! Structural recursion over the tagged value model (scalar | sequence |
//! record). Null only equals null, absent only equals absent, and values of
//! differing fundamental kind are never equal. Numbers compare numerically
//! across integer/float representations.

use serde_json::{Number, Value};

/// Performs a deep equality check between two values.
///
/// Sequences are equal iff they have the same length and all elements are
/// pairwise deep-equal, in order. Records are equal iff, over the union of
/// both records' keys, every key's values are pairwise deep-equal (a
/// missing key is the absent value).
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use patch_state::equal::deep_equal;
///
/// assert!(deep_equal(&json!({"a": [1, 2]}), &json!({"a": [1, 2]})));
/// assert!(!deep_equal(&json!({"a": [1, 2]}), &json!({"a": [1, 2, 3]})));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,

        // Sequences
        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a.iter().zip(arr_b).all(|(va, vb)| deep_equal(va, vb))
        }

        // Records: compare over the union of keys so the check stays
        // symmetric; a key missing on one side is the absent value.
        (Value::Object(obj_a), Value::Object(obj_b)) => obj_a
            .keys()
            .chain(obj_b.keys().filter(|k| !obj_a.contains_key(k.as_str())))
            .all(|key| deep_equal_opt(obj_a.get(key), obj_b.get(key))),

        // Different kinds are never equal
        _ => false,
    }
}

/// Deep equality where either side may be absent.
///
/// Absent equals only absent; in particular, absent and null are distinct.
pub fn deep_equal_opt(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => deep_equal(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Numeric comparison across integer and float representations, so `1`
/// equals `1.0`.
fn number_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
