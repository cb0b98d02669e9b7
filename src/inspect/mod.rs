use std::time::Duration;

use crate::{
    compare::{Comparison, compare},
    extract::extract,
    fetch::{Fetch, FetchError},
    path::KeyPath,
};

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// One side of the comparison: where to fetch from and what to extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    pub keys: KeyPath,
}

impl Endpoint {
    pub fn new(url: impl Into<String>, keys: KeyPath) -> Self {
        Endpoint {
            url: url.into(),
            keys,
        }
    }
}

/// Fetches both endpoints in order, extracts each along its own key path and
/// compares the results.
///
/// The first fetch failure aborts the run; nothing is extracted or compared
/// from a partially fetched pair.
pub fn inspect<F>(
    fetcher: &F,
    first: &Endpoint,
    second: &Endpoint,
    timeout: Duration,
) -> Result<Comparison, FetchError>
where
    F: Fetch + ?Sized,
{
    let first_doc = fetcher.fetch(&first.url, timeout)?;
    let second_doc = fetcher.fetch(&second.url, timeout)?;

    let first_values = extract(&first_doc, &first.keys);
    let second_values = extract(&second_doc, &second.keys);
    tracing::debug!(
        first = first_values.len(),
        second = second_values.len(),
        "extracted values"
    );

    let comparison = compare(first_values, second_values);
    tracing::info!(
        only_in_first = comparison.only_in_first.len(),
        only_in_second = comparison.only_in_second.len(),
        "compared endpoints"
    );

    Ok(comparison)
}
