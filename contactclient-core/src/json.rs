//! JSON shape predicates and the queue-spread clamp
//!
//! Several entity fields store raw JSON text whose top-level shape is
//! constrained (object or array). The two predicates here are shared by every
//! field that carries such a constraint. Empty or whitespace-only text always
//! passes: absence is not an error.

use serde_json::Value;

/// Lower bound of the queue-spread range (days).
pub const SPREAD_MIN: i64 = 1;

/// Upper bound of the queue-spread range (days).
pub const SPREAD_MAX: i64 = 7;

/// True when `text` is empty or parses as a JSON value whose top level is an
/// object.
pub fn is_json_object_text(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return true;
    }
    matches!(serde_json::from_str::<Value>(trimmed), Ok(Value::Object(_)))
}

/// True when `text` is empty or parses as a JSON value whose top level is an
/// array.
pub fn is_json_array_text(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return true;
    }
    matches!(serde_json::from_str::<Value>(trimmed), Ok(Value::Array(_)))
}

/// Constrain a queue-spread value to `[SPREAD_MIN, SPREAD_MAX]`.
/// Out-of-range values are replaced with the nearest bound, not rejected.
pub fn clamp_spread(value: i64) -> i64 {
    value.clamp(SPREAD_MIN, SPREAD_MAX)
}

/// Defensive read of a queue-spread value out of loosely-typed form data.
///
/// Accepts integers, floats (truncated), and numeric strings. Anything
/// unparseable degrades to `SPREAD_MIN`. The result is always clamped.
pub fn spread_from_value(value: &Value) -> i64 {
    let raw = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(SPREAD_MIN),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .or_else(|_| s.trim().parse::<f64>().map(|f| f as i64))
            .unwrap_or(SPREAD_MIN),
        _ => SPREAD_MIN,
    };
    clamp_spread(raw)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_predicate_accepts_objects_and_empties() {
        assert!(is_json_object_text(""));
        assert!(is_json_object_text("   \n\t"));
        assert!(is_json_object_text("{}"));
        assert!(is_json_object_text(r#"{"url": "https://example.com"}"#));
    }

    #[test]
    fn test_object_predicate_rejects_arrays_and_scalars() {
        assert!(!is_json_object_text("[]"));
        assert!(!is_json_object_text("[1, 2]"));
        assert!(!is_json_object_text("42"));
        assert!(!is_json_object_text("\"text\""));
        assert!(!is_json_object_text("true"));
        assert!(!is_json_object_text("null"));
        assert!(!is_json_object_text("{not json"));
    }

    #[test]
    fn test_array_predicate_accepts_arrays_and_empties() {
        assert!(is_json_array_text(""));
        assert!(is_json_array_text("  "));
        assert!(is_json_array_text("[]"));
        assert!(is_json_array_text(r#"[{"day": "sunday"}]"#));
    }

    #[test]
    fn test_array_predicate_rejects_objects_and_scalars() {
        assert!(!is_json_array_text("{}"));
        assert!(!is_json_array_text("7"));
        assert!(!is_json_array_text("\"text\""));
        assert!(!is_json_array_text("[unterminated"));
    }

    #[test]
    fn test_clamp_spread_bounds() {
        assert_eq!(clamp_spread(99), 7);
        assert_eq!(clamp_spread(-3), 1);
        assert_eq!(clamp_spread(0), 1);
        assert_eq!(clamp_spread(1), 1);
        assert_eq!(clamp_spread(4), 4);
        assert_eq!(clamp_spread(7), 7);
        assert_eq!(clamp_spread(8), 7);
    }

    #[test]
    fn test_spread_from_value_degrades_to_minimum() {
        assert_eq!(spread_from_value(&json!(null)), SPREAD_MIN);
        assert_eq!(spread_from_value(&json!("not a number")), SPREAD_MIN);
        assert_eq!(spread_from_value(&json!({})), SPREAD_MIN);
        assert_eq!(spread_from_value(&json!([])), SPREAD_MIN);
    }

    #[test]
    fn test_spread_from_value_parses_loose_inputs() {
        assert_eq!(spread_from_value(&json!(3)), 3);
        assert_eq!(spread_from_value(&json!(3.9)), 3);
        assert_eq!(spread_from_value(&json!("5")), 5);
        assert_eq!(spread_from_value(&json!(" 6 ")), 6);
        assert_eq!(spread_from_value(&json!(99)), 7);
        assert_eq!(spread_from_value(&json!(-3)), 1);
    }
}

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// For any integer, the clamped spread lies in [1, 7] and clamping is
        /// idempotent.
        #[test]
        fn prop_clamp_spread_in_range_and_idempotent(n in any::<i64>()) {
            let clamped = clamp_spread(n);
            prop_assert!((SPREAD_MIN..=SPREAD_MAX).contains(&clamped));
            prop_assert_eq!(clamp_spread(clamped), clamped);
        }

        /// Any JSON object text passes the object predicate and fails the
        /// array predicate.
        #[test]
        fn prop_object_text_classified(
            keys in proptest::collection::vec("[a-z]{1,8}", 0..5),
        ) {
            let mut map = serde_json::Map::new();
            for (i, key) in keys.into_iter().enumerate() {
                map.insert(key, serde_json::json!(i));
            }
            let text = serde_json::to_string(&serde_json::Value::Object(map)).unwrap();
            prop_assert!(is_json_object_text(&text));
            prop_assert!(!is_json_array_text(&text));
        }

        /// Any JSON array text passes the array predicate and fails the
        /// object predicate.
        #[test]
        fn prop_array_text_classified(items in proptest::collection::vec(any::<i32>(), 0..8)) {
            let text = serde_json::to_string(&items).unwrap();
            prop_assert!(is_json_array_text(&text));
            prop_assert!(!is_json_object_text(&text));
        }

        /// Scalar JSON text fails both predicates.
        #[test]
        fn prop_scalar_text_rejected(n in any::<i64>()) {
            let text = n.to_string();
            prop_assert!(!is_json_object_text(&text));
            prop_assert!(!is_json_array_text(&text));
        }

        /// The defensive reader never escapes the valid range.
        #[test]
        fn prop_spread_from_value_in_range(n in any::<i64>()) {
            let v = spread_from_value(&serde_json::json!(n));
            prop_assert!((SPREAD_MIN..=SPREAD_MAX).contains(&v));
        }
    }
}
