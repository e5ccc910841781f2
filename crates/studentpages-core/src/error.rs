//! Fetch error types.
//!
//! Defined in `studentpages-core` so every data source reports failures the
//! same way and the CLI can print them without knowing which source ran.

use thiserror::Error;

/// Errors that can occur while retrieving a remote dataset.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP error {status} from {url}")]
    Http { url: String, status: u16 },

    /// The request never produced a response.
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// The body was not the JSON array we expected.
    #[error("failed to decode JSON from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    /// The URL the failed request was addressed to.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Http { url, .. }
            | FetchError::Network { url, .. }
            | FetchError::Decode { url, .. } => url,
        }
    }

    /// The HTTP status, when the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_carries_status() {
        let err = FetchError::Http {
            url: "http://example.test/data.json".into(),
            status: 503,
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.url(), "http://example.test/data.json");
        assert!(err.to_string().contains("HTTP error 503"));
    }

    #[test]
    fn decode_error_has_no_status() {
        let err = FetchError::Decode {
            url: "u".into(),
            message: "expected array".into(),
        };
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("expected array"));
    }
}
