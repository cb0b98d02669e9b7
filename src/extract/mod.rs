mod ext;

use serde_json::Value;

pub use ext::ValueExt;

/// Collects every non-null value reached by following `path` through `doc`.
///
/// Keys are consumed on objects. When an array is met before the path is
/// exhausted, the current key is applied to each element in turn and the
/// results are concatenated in element order. A missing key or a scalar met
/// mid-path contributes nothing; extraction never fails.
///
/// If the value at the end of the path is itself an array, its non-null
/// elements are returned (one level), otherwise the value itself is.
pub fn extract<'a>(doc: &'a Value, path: &[String]) -> Vec<&'a Value> {
    let mut reached = Vec::new();
    walk(doc, path, &mut reached);
    reached
}

fn walk<'a>(value: &'a Value, path: &[String], reached: &mut Vec<&'a Value>) {
    let Some((key, rest)) = path.split_first() else {
        collect_leaf(value, reached);
        return;
    };

    match value {
        Value::Object(map) => match map.get(key) {
            Some(child) => walk(child, rest, reached),
            None => tracing::trace!(key = %key, "key not present, branch yields nothing"),
        },
        // broadcast: the key is not consumed by the array itself
        Value::Array(items) => {
            for item in items {
                walk(item, path, reached);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            tracing::trace!(
                key = %key,
                found = value_type_desc(value),
                "cannot descend into a scalar, branch yields nothing"
            );
        }
    }
}

fn collect_leaf<'a>(value: &'a Value, reached: &mut Vec<&'a Value>) {
    match value {
        Value::Null => {}
        Value::Array(items) => reached.extend(items.iter().filter(|item| !item.is_null())),
        other => reached.push(other),
    }
}

fn value_type_desc(val: &Value) -> &'static str {
    match val {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
