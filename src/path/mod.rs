mod error;
mod parser;

use std::{fmt, ops::Deref, str::FromStr};

pub use error::PathError;

/// An ordered, non-empty list of field names used to walk into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    keys: Vec<String>,
}

impl KeyPath {
    /// Builds a path from already split field names.
    pub fn new<I, S>(keys: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        if keys.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(KeyPath { keys })
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl Deref for KeyPath {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.keys
    }
}

impl<'a> IntoIterator for &'a KeyPath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl FromStr for KeyPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_key_list(s)
    }
}

impl TryFrom<&str> for KeyPath {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Renders the path back in its comma-separated form, escaping where needed.
impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            for c in key.chars() {
                match c {
                    ',' => f.write_str("\\,")?,
                    '\\' => f.write_str("\\\\")?,
                    c => write!(f, "{c}")?,
                }
            }
        }
        Ok(())
    }
}
