//! The HTTP seam. Everything that touches the network goes through [`Transport`],
//! so the station caches and the archive decoder can be driven by canned bodies in tests.

use log::{debug, info, warn};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus { url: String, status: u16 },
}

/// A blocking GET that returns the full response body.
///
/// Implementations must report non-success statuses as [`FetchError::HttpStatus`]
/// rather than handing back an error page as data.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// [`Transport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Creates a transport. `timeout` overrides reqwest's default request timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::blocking::Client::builder().gzip(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::ClientBuild)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        info!("Downloading {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP error for {}: {}", url, status);
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))?;
        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}

/// Decodes a text body. DWD publishes its text files as ISO-8859-1, so anything
/// that is not valid UTF-8 is read as Latin-1 (one byte per character).
pub(crate) fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockTransport;
    use super::*;

    #[test]
    fn test_decode_text_keeps_utf8() {
        let text = decode_text("Baden-Württemberg".as_bytes().to_vec());
        assert_eq!(text, "Baden-Württemberg");
    }

    #[test]
    fn test_decode_text_falls_back_to_latin1() {
        // "Württemberg" in ISO-8859-1: 0xFC is 'ü'
        let bytes = vec![b'W', 0xFC, b'r', b't', b't'];
        assert_eq!(decode_text(bytes), "Württ");
    }

    #[test]
    fn test_mock_counts_requests_and_fails_on_demand() {
        let mock = MockTransport::new();
        mock.serve("http://x/a", "body");
        mock.fail_next("http://x/a", 1);

        let first = mock.get("http://x/a");
        assert!(matches!(
            first,
            Err(FetchError::HttpStatus { status: 503, .. })
        ));
        assert_eq!(mock.get("http://x/a").unwrap(), b"body".to_vec());
        assert_eq!(mock.requests("http://x/a"), 2);

        let missing = mock.get("http://x/missing");
        assert!(matches!(
            missing,
            Err(FetchError::HttpStatus { status: 404, .. })
        ));
    }
}
