//! Structured fields attached to log records
//!
//! Fields are kept in a `BTreeMap` so keys are unique and always iterate in
//! ascending order. Console rendering relies on that order being stable.

use serde_json::Value;
use std::collections::BTreeMap;

/// Field name to arbitrary JSON value
pub type Fields = BTreeMap<String, Value>;

/// Render a field value for a console line
///
/// Strings are written bare, everything else uses its JSON text.
///
/// # Example
///
/// ```
/// use faultline_core_types::render_value;
/// use serde_json::json;
///
/// assert_eq!(render_value(&json!("db down")), "db down");
/// assert_eq!(render_value(&json!(5432)), "5432");
/// assert_eq!(render_value(&json!(null)), "null");
/// ```
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings_render_unquoted() {
        assert_eq!(render_value(&json!("login")), "login");
        assert_eq!(render_value(&json!("")), "");
    }

    #[test]
    fn test_scalars_render_as_json() {
        assert_eq!(render_value(&json!(123)), "123");
        assert_eq!(render_value(&json!(1.5)), "1.5");
        assert_eq!(render_value(&json!(true)), "true");
    }

    #[test]
    fn test_composites_render_as_json() {
        assert_eq!(render_value(&json!([1, 2])), "[1,2]");
        assert_eq!(render_value(&json!({"a": 1})), "{\"a\":1}");
    }

    #[test]
    fn test_fields_iterate_sorted() {
        let mut fields = Fields::new();
        fields.insert("zeta".to_string(), json!(1));
        fields.insert("alpha".to_string(), json!(2));
        let keys: Vec<_> = fields.keys().cloned().collect();
        assert_eq!(keys, vec!["alpha", "zeta"]);
    }
}
