//! HTTP client for the records endpoint.
//!
//! All filtering happens client-side after the fetch; the only parameter sent
//! to the backend is `limit`. Fetches are not retried automatically.

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::http_client;

use super::Record;
use super::config::ApiSettings;

/// Default `limit` query parameter for a records fetch.
pub const DEFAULT_FETCH_LIMIT: u32 = 1000;

/// Upper bound on the response body we are willing to buffer.
const MAX_RESPONSE_BYTES: usize = 8 * 1024 * 1024;

const RECORDS_PATH: &str = "requisitions";

/// Errors produced by a records fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The configured base URL does not form a valid endpoint.
    #[error("Invalid records endpoint {url}: {source}")]
    Endpoint {
        url: String,
        source: url::ParseError,
    },
    /// The request could not be completed.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        source: Box<ureq::Error>,
    },
    /// The response body could not be read (including oversize bodies).
    #[error("Failed to read records response: {0}")]
    Read(#[from] std::io::Error),
    /// The response body is not the expected JSON envelope.
    #[error("Failed to decode records response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The service answered but reported failure.
    #[error("{0}")]
    Service(String),
}

/// Response envelope shared by the backend's list endpoints.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Option<Vec<Record>>,
    #[serde(default)]
    error: Option<String>,
}

/// Client for the records endpoint, bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct FetchClient {
    records_url: Url,
}

impl FetchClient {
    /// Build a client from settings, validating the endpoint up front.
    pub fn new(settings: &ApiSettings) -> Result<Self, FetchError> {
        let raw = format!("{}/{RECORDS_PATH}", settings.base_url.trim_end_matches('/'));
        let records_url = Url::parse(&raw).map_err(|source| FetchError::Endpoint {
            url: raw,
            source,
        })?;
        Ok(Self { records_url })
    }

    /// Fetch up to `limit` records. All-or-nothing: any failure yields an
    /// error and no partial data.
    pub fn get_records(&self, limit: u32) -> Result<Vec<Record>, FetchError> {
        let mut url = self.records_url.clone();
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        let response = http_client::agent()
            .request_url("GET", &url)
            .call()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source: Box::new(source),
            })?;
        let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)?;
        let envelope: Envelope = serde_json::from_slice(&bytes)?;
        if !envelope.success {
            return Err(FetchError::Service(
                envelope
                    .error
                    .unwrap_or_else(|| "Service reported failure".to_string()),
            ));
        }
        Ok(envelope.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::tests::serve_once;
    use crate::records::Status;

    fn client_for(base_url: String) -> FetchClient {
        FetchClient::new(&ApiSettings {
            base_url,
            fetch_limit: DEFAULT_FETCH_LIMIT,
        })
        .unwrap()
    }

    fn json_response(body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        )
    }

    #[test]
    fn decodes_a_successful_envelope() {
        let body = r#"{"success":true,"data":[
            {"id":201,"customerName":"Pineapple Inc.","status":"Accepted"},
            {"id":202,"customerName":"ME Inc.","status":"Escalated"}
        ]}"#;
        let base = serve_once(json_response(body));
        let records = client_for(base).get_records(1000).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, Status::Accepted);
        // Unrecognized wire statuses decode instead of failing the fetch.
        assert_eq!(records[1].status, Status::Unknown);
    }

    #[test]
    fn service_failure_surfaces_the_reported_message() {
        let body = r#"{"success":false,"error":"network error"}"#;
        let base = serve_once(json_response(body));
        let err = client_for(base).get_records(1000).unwrap_err();
        assert!(matches!(err, FetchError::Service(_)));
        assert_eq!(err.to_string(), "network error");
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let base = serve_once(json_response("<html>oops</html>"));
        let err = client_for(base).get_records(1000).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn invalid_base_url_is_rejected_up_front() {
        let err = FetchClient::new(&ApiSettings {
            base_url: "not a url".into(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
        })
        .unwrap_err();
        assert!(matches!(err, FetchError::Endpoint { .. }));
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let client = client_for("http://localhost:8080/api/".into());
        assert_eq!(
            client.records_url.as_str(),
            "http://localhost:8080/api/requisitions"
        );
    }
}
