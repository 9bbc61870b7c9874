use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Everything that can end a proxied request early.
///
/// Each variant maps to one status code and a fixed message; the wrapped
/// cause is only ever logged, never sent to the caller.
#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),

    #[error("failed to reach OMDB: {0}")]
    UpstreamUnreachable(#[source] reqwest::Error),

    #[error("OMDB responded with status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("failed to read OMDB response: {0}")]
    ResponseReadError(#[source] reqwest::Error),

    #[error("failed to decode OMDB response: {0}")]
    DecodeError(#[from] serde_json::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ProxyError::UpstreamUnreachable(_)
            | ProxyError::ResponseReadError(_)
            | ProxyError::UpstreamStatus(_)
            | ProxyError::DecodeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The plain-text body returned to the caller.
    pub fn message(&self) -> &'static str {
        match self {
            ProxyError::InvalidRequest(message) => *message,
            ProxyError::UpstreamUnreachable(_) => "Failed to reach OMDB",
            ProxyError::UpstreamStatus(_) => "OMDB returned an error status",
            ProxyError::ResponseReadError(_) => "Failed to read response from OMDB",
            ProxyError::DecodeError(_) => "Failed to parse OMDB response",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:#}", self);
        } else {
            tracing::debug!("{}", self);
        }
        (status, self.message()).into_response()
    }
}

#[test]
fn test_invalid_request_keeps_its_message() {
    let err = ProxyError::InvalidRequest("Missing title query parameter");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.message(), "Missing title query parameter");
}

#[test]
fn test_decode_error_hides_cause() {
    let cause = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err = ProxyError::from(cause);
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message(), "Failed to parse OMDB response");
}

#[test]
fn test_upstream_status_is_internal_error() {
    let err = ProxyError::UpstreamStatus(reqwest::StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.to_string().contains("503"));
}
