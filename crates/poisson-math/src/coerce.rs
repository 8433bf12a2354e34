//! Weakly typed input boundary.
//!
//! The model core only accepts typed values (`i64` counts, `&[f64]`-like
//! samples). Callers holding loosely typed data (JSON payloads, values from a
//! scripting layer) convert through this module first:
//!
//! - [`coerce_count`] turns a value into an integer count the way a dynamic
//!   `int()` conversion would, or reports that it cannot.
//! - [`coerce_samples`] requires a list of numbers and reports
//!   [`PoissonError::TypeKind`] otherwise.

use serde_json::Value;
use tracing::trace;

use crate::error::{PoissonError, Result};

/// Convert a loosely typed value into an integer count.
///
/// - Integers map to themselves.
/// - Finite floats truncate toward zero when the result fits in `i64`.
/// - Strings are trimmed and parsed as a base-10 integer with an optional
///   sign; `_` may separate digits (`"1_000"`). `"3.5"` is rejected.
/// - Booleans map to `0` / `1`.
/// - Null, arrays, and objects are rejected.
///
/// # Example
/// ```
/// use poisson_math::coerce::coerce_count;
/// use serde_json::json;
///
/// assert_eq!(coerce_count(&json!(3.9)), Some(3));
/// assert_eq!(coerce_count(&json!(" 7 ")), Some(7));
/// assert_eq!(coerce_count(&json!("seven")), None);
/// ```
pub fn coerce_count(value: &Value) -> Option<i64> {
    let out = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i),
            // Integers above i64::MAX arrive as u64 and do not fit.
            None if n.is_u64() => None,
            None => n.as_f64().and_then(truncate_to_i64),
        },
        Value::String(s) => parse_int_literal(s),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };
    if out.is_none() {
        trace!(kind = json_kind(value), "value not coercible to a count");
    }
    out
}

/// Require a list of numbers and return them as `f64`.
///
/// Length is not checked here; the model enforces its own minimum.
///
/// Booleans are not numbers here, unlike in [`coerce_count`]: a `true` in
/// observed data is far more likely a malformed payload than a count of one.
pub fn coerce_samples(value: &Value) -> Result<Vec<f64>> {
    let items = value.as_array().ok_or_else(|| PoissonError::TypeKind {
        found: json_kind(value).to_string(),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_f64().ok_or_else(|| PoissonError::TypeKind {
                found: format!("array containing {} at index {}", json_kind(item), idx),
            })
        })
        .collect()
}

/// Short name of a JSON value's type, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn truncate_to_i64(x: f64) -> Option<i64> {
    if !x.is_finite() {
        return None;
    }
    let t = x.trunc();
    // i64::MIN is exactly -2^63; i64::MAX rounds up to 2^63 as f64.
    if t < i64::MIN as f64 || t >= i64::MAX as f64 {
        return None;
    }
    Some(t as i64)
}

fn parse_int_literal(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first().copied()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }

    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if negative {
        format!("-{}", cleaned).parse().ok()
    } else {
        cleaned.parse().ok()
    }
}
