//! Type Conversions for WatsonError
//!
//! This module contains From trait implementations for converting
//! common error types into WatsonError.

use super::types::WatsonError;

impl From<reqwest::Error> for WatsonError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for WatsonError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for WatsonError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::ConfigurationError(format!("Invalid header value: {err}"))
    }
}

impl From<reqwest::header::InvalidHeaderName> for WatsonError {
    fn from(err: reqwest::header::InvalidHeaderName) -> Self {
        Self::ConfigurationError(format!("Invalid header name: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: WatsonError = json_err.into();
        assert!(matches!(err, WatsonError::Serialization(_)));
    }

    #[test]
    fn test_from_invalid_header_value() {
        let bad = reqwest::header::HeaderValue::from_str("line\nbreak").unwrap_err();
        let err: WatsonError = bad.into();
        assert!(matches!(err, WatsonError::ConfigurationError(_)));
    }
}
