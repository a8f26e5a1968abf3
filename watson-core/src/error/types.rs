//! Core error type.

use serde_json::Value;
use thiserror::Error;

/// Broad classification of a [`WatsonError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Raised while building the request; nothing was sent.
    Local,
    /// Transport failure (DNS, TLS, connection reset, timeout).
    Network,
    /// Could not obtain credentials for the request.
    Authentication,
    /// The service answered with a 4xx status.
    Client,
    /// The service answered with a 5xx status.
    Server,
    /// The service answered 2xx but the body did not match the expected shape.
    Decode,
}

/// Errors produced by service calls.
#[derive(Error, Debug, Clone)]
pub enum WatsonError {
    /// A path parameter could not be placed into the endpoint template.
    #[error("Failed to percent-encode path: {path}")]
    UrlEncoding { path: String },

    /// No service URL was configured for the client.
    #[error("No service URL configured")]
    NoEndpoint,

    /// Request body encoding failed.
    #[error("Failed to serialize request body: {0}")]
    Serialization(String),

    /// Response body decoding failed.
    #[error("Failed to decode response: {0}")]
    Deserialization(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Transport level failure.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Non-2xx response from the service.
    #[error("API error {status_code}: {message}")]
    Api {
        status_code: u16,
        message: String,
        /// Raw diagnostics; `metadata["response"]` holds the error body.
        metadata: Option<Value>,
    },
}

impl WatsonError {
    /// Create an API error without metadata.
    pub fn api_error(status_code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
            metadata: None,
        }
    }

    /// Create an API error carrying the decoded error body.
    pub fn api_error_with_metadata(
        status_code: u16,
        message: impl Into<String>,
        metadata: Value,
    ) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
            metadata: Some(metadata),
        }
    }

    /// HTTP status code, when the error came from a service response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self.status_code(), Some(400..=499))
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status_code(), Some(500..=599))
    }

    /// Error metadata, when present.
    pub fn metadata(&self) -> Option<&Value> {
        match self {
            Self::Api { metadata, .. } => metadata.as_ref(),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UrlEncoding { .. }
            | Self::NoEndpoint
            | Self::Serialization(_)
            | Self::ConfigurationError(_)
            | Self::InvalidParameter(_) => ErrorCategory::Local,
            Self::HttpError(_) => ErrorCategory::Network,
            Self::AuthenticationError(_) => ErrorCategory::Authentication,
            Self::Deserialization(_) => ErrorCategory::Decode,
            Self::Api { status_code, .. } if *status_code >= 500 => ErrorCategory::Server,
            Self::Api { .. } => ErrorCategory::Client,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_categories() {
        let e = WatsonError::api_error(404, "Not Found");
        assert_eq!(e.status_code(), Some(404));
        assert!(e.is_client_error());
        assert!(!e.is_server_error());
        assert_eq!(e.category(), ErrorCategory::Client);

        let e = WatsonError::api_error_with_metadata(503, "busy", json!({"response": "busy"}));
        assert!(e.is_server_error());
        assert_eq!(e.category(), ErrorCategory::Server);
        assert_eq!(e.metadata().unwrap()["response"], "busy");
    }

    #[test]
    fn local_errors_have_no_status() {
        let e = WatsonError::UrlEncoding {
            path: "/v1/{x}".into(),
        };
        assert_eq!(e.status_code(), None);
        assert_eq!(e.category(), ErrorCategory::Local);
        assert_eq!(WatsonError::NoEndpoint.category(), ErrorCategory::Local);
        assert_eq!(e.to_string(), "Failed to percent-encode path: /v1/{x}");
    }
}
