use serde_json::Value;

/// The textual form used both as comparison identity and for display.
///
/// Strings render as their raw content without quotes. Everything else
/// renders as compact JSON with object keys in sorted order, so two objects
/// holding the same members always share one form.
pub fn canonical_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        // sorted keys rely on serde_json's BTreeMap-backed Map (no `preserve_order`)
        other => other.to_string(),
    }
}
