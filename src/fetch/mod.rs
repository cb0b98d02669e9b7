mod error;

use std::time::Duration;

use reqwest::{blocking::Client, header::ACCEPT};
use serde_json::Value;

pub use error::FetchError;

/// Retrieves a JSON document from a URL.
pub trait Fetch {
    fn fetch(&self, url: &str, timeout: Duration) -> Result<Value, FetchError>;
}

impl<F> Fetch for F
where
    F: Fn(&str, Duration) -> Result<Value, FetchError>,
{
    fn fetch(&self, url: &str, timeout: Duration) -> Result<Value, FetchError> {
        self(url, timeout)
    }
}

/// Blocking HTTP `GET` that expects a 2xx response with a JSON body.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        HttpFetcher::default()
    }

    pub fn with_client(client: Client) -> Self {
        HttpFetcher { client }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str, timeout: Duration) -> Result<Value, FetchError> {
        tracing::debug!(url, ?timeout, "fetching document");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .map_err(|e| FetchError::request(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(url, status.as_u16()));
        }

        let body = response.text().map_err(|e| FetchError::request(url, e))?;
        tracing::debug!(url, bytes = body.len(), %status, "received document");

        serde_json::from_str(&body).map_err(|e| FetchError::invalid_json(url, e))
    }
}
