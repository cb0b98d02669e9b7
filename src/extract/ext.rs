use crate::path::{KeyPath, PathError};

use super::extract;

pub trait ValueExt {
    /// Parses `keys` as a comma-separated key list and extracts along it.
    fn extract_at(&self, keys: &str) -> Result<Vec<&serde_json::Value>, PathError>;
    fn extract_path(&self, path: &KeyPath) -> Vec<&serde_json::Value>;
}

impl ValueExt for serde_json::Value {
    fn extract_at(&self, keys: &str) -> Result<Vec<&serde_json::Value>, PathError> {
        let path = KeyPath::try_from(keys)?;

        Ok(extract(self, &path))
    }

    fn extract_path(&self, path: &KeyPath) -> Vec<&serde_json::Value> {
        extract(self, path)
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use serde_json::json;

    use super::*;

    #[test]
    fn test_extract_at_parses_and_extracts() {
        let doc = json!({"data": {"users": [{"id": "u1"}, {"id": "u2"}]}});
        let_assert!(Ok(values) = doc.extract_at("data,users,id"));
        check!(values == [&json!("u1"), &json!("u2")]);
    }

    #[test]
    fn test_extract_at_rejects_empty_key_list() {
        let doc = json!({"a": 1});
        check!(doc.extract_at("") == Err(PathError::Empty));
    }

    #[test]
    fn test_extract_path_matches_extract_at() {
        let doc = json!({"a,b": [{"c": 1}, {"c": 2}]});
        let_assert!(Ok(path) = KeyPath::new(["a,b", "c"]));
        let_assert!(Ok(by_str) = doc.extract_at("a\\,b,c"));
        check!(doc.extract_path(&path) == by_str);
    }
}
