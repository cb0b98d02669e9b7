mod canonical;

use std::{collections::BTreeSet, ops::Deref};

use serde::Serialize;

pub use canonical::canonical_form;

/// Values present on only one side, by canonical string form, each sorted.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub only_in_first: Vec<String>,
    pub only_in_second: Vec<String>,
}

impl Comparison {
    pub fn new(only_in_first: Vec<String>, only_in_second: Vec<String>) -> Self {
        Comparison {
            only_in_first,
            only_in_second,
        }
    }

    /// True when both sides reduce to the same set.
    pub fn is_empty(&self) -> bool {
        self.only_in_first.is_empty() && self.only_in_second.is_empty()
    }

    /// The same comparison seen from the other side.
    pub fn swapped(self) -> Self {
        Comparison {
            only_in_first: self.only_in_second,
            only_in_second: self.only_in_first,
        }
    }
}

/// Compares two value collections as sets of their canonical string forms.
///
/// Identity is textual, so the number `1` and the string `"1"` count as the
/// same value. Duplicates on one side collapse into a single entry.
pub fn compare<A, B>(first: A, second: B) -> Comparison
where
    A: IntoIterator,
    A::Item: Deref<Target = serde_json::Value>,
    B: IntoIterator,
    B::Item: Deref<Target = serde_json::Value>,
{
    let first = canonical_set(first);
    let second = canonical_set(second);

    // BTreeSet iteration order is the lexicographic order of the forms
    Comparison {
        only_in_first: first.difference(&second).cloned().collect(),
        only_in_second: second.difference(&first).cloned().collect(),
    }
}

fn canonical_set<I>(values: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: Deref<Target = serde_json::Value>,
{
    values
        .into_iter()
        .map(|value| canonical_form(&value))
        .collect()
}
