#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Error fetching data from {url}: request timed out")]
    Timeout { url: String },

    #[error("Error fetching data from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error fetching data from {url}: HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("Error fetching data from {url}: response is not valid JSON: {source}")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn request(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            return FetchError::Timeout {
                url: url.to_string(),
            };
        }
        FetchError::Request {
            url: url.to_string(),
            source,
        }
    }

    pub fn status(url: &str, status: u16) -> Self {
        FetchError::Status {
            url: url.to_string(),
            status,
        }
    }

    pub fn invalid_json(url: &str, source: serde_json::Error) -> Self {
        FetchError::InvalidJson {
            url: url.to_string(),
            source,
        }
    }

    /// The URL whose retrieval failed.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Timeout { url }
            | FetchError::Request { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::InvalidJson { url, .. } => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn test_messages_name_the_url() {
        check!(
            FetchError::status("http://example.com", 502).to_string()
                == "Error fetching data from http://example.com: HTTP status 502"
        );
        check!(
            FetchError::Timeout { url: "http://example.com".to_string() }.to_string()
                == "Error fetching data from http://example.com: request timed out"
        );

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FetchError::invalid_json("http://example.com", json_err);
        check!(err.url() == "http://example.com");
        check!(
            err.to_string()
                .starts_with("Error fetching data from http://example.com: response is not valid JSON:")
        );
    }
}
