//! Response decoding.
//!
//! Successful bodies decode into the declared type (JSON), pass through as
//! bytes, or are discarded. Error bodies go through a fixed priority chain to
//! find a human readable message:
//!
//! 1. `errors[0].message`
//! 2. `error` (string)
//! 3. `message`
//! 4. the status reason phrase

use crate::error::WatsonError;
use crate::types::WatsonResponse;
use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::collections::HashMap;

/// Response as received, before decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl RawResponse {
    /// Decode a JSON body into `T`.
    pub fn json<T: DeserializeOwned>(self) -> Result<WatsonResponse<T>, WatsonError> {
        let result = decode_json(&self.body)?;
        Ok(WatsonResponse::new(result, self.status.as_u16(), self.headers))
    }

    /// Pass the body through untouched.
    pub fn bytes(self) -> WatsonResponse<Bytes> {
        WatsonResponse::new(self.body, self.status.as_u16(), self.headers)
    }

    /// Discard the body.
    pub fn empty(self) -> WatsonResponse<()> {
        WatsonResponse::new((), self.status.as_u16(), self.headers)
    }
}

/// Decode a JSON body. On failure the message includes the head of the body.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, WatsonError> {
    serde_json::from_slice(body).map_err(|e| {
        let head: String = String::from_utf8_lossy(body).chars().take(200).collect();
        WatsonError::Deserialization(format!("{e}; body: {head}"))
    })
}

/// Build the error for a non-2xx response.
///
/// `metadata["response"]` holds the body as JSON when it parses, otherwise
/// as text.
pub fn decode_error(status: StatusCode, body: &[u8]) -> WatsonError {
    let fallback = || {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    };

    match serde_json::from_slice::<Value>(body) {
        Ok(parsed) => {
            let message = error_message(&parsed).unwrap_or_else(fallback);
            WatsonError::api_error_with_metadata(
                status.as_u16(),
                message,
                json!({ "response": parsed }),
            )
        }
        Err(_) => WatsonError::api_error_with_metadata(
            status.as_u16(),
            fallback(),
            json!({ "response": String::from_utf8_lossy(body) }),
        ),
    }
}

/// Message extracted from an error document, if any field matches.
pub fn error_message(body: &Value) -> Option<String> {
    let nested = body
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(|first| first.get("message"))
        .and_then(Value::as_str);
    if let Some(message) = nested {
        return Some(message.to_string());
    }
    if let Some(message) = body.get("error").and_then(Value::as_str) {
        return Some(message.to_string());
    }
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(err: WatsonError) -> String {
        match err {
            WatsonError::Api { message, .. } => message,
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn nested_errors_array_wins() {
        let body = br#"{"errors":[{"code":"missing_field","message":"first"}],"error":"second","message":"third"}"#;
        assert_eq!(message_of(decode_error(StatusCode::BAD_REQUEST, body)), "first");
    }

    #[test]
    fn error_field_beats_message_field() {
        let body = br#"{"message":"from message","error":"from error","code":400}"#;
        let err = decode_error(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.status_code(), Some(400));
        assert_eq!(err.metadata().unwrap()["response"]["code"], 400);
        assert_eq!(message_of(err), "from error");
    }

    #[test]
    fn message_field_is_used_last() {
        let body = br#"{"message":"only message"}"#;
        assert_eq!(message_of(decode_error(StatusCode::CONFLICT, body)), "only message");
    }

    #[test]
    fn non_string_error_field_is_skipped() {
        let body = br#"{"error":{"detail":"x"},"message":"fallback"}"#;
        assert_eq!(message_of(decode_error(StatusCode::BAD_REQUEST, body)), "fallback");
    }

    #[test]
    fn errors_entry_without_message_falls_through() {
        let body = br#"{"errors":[{"code":"x"}],"error":"plain"}"#;
        assert_eq!(message_of(decode_error(StatusCode::BAD_REQUEST, body)), "plain");
    }

    #[test]
    fn unparseable_body_uses_status_text() {
        let err = decode_error(StatusCode::SERVICE_UNAVAILABLE, b"<html>gateway</html>");
        assert_eq!(err.status_code(), Some(503));
        assert_eq!(err.metadata().unwrap()["response"], "<html>gateway</html>");
        assert_eq!(message_of(err), "Service Unavailable");
    }

    #[test]
    fn json_without_known_fields_uses_status_text() {
        let err = decode_error(StatusCode::NOT_FOUND, br#"{"code":404}"#);
        assert_eq!(message_of(err), "Not Found");
    }

    #[test]
    fn decode_json_reports_body_head() {
        let err = decode_json::<Vec<u32>>(b"{\"not\":\"a list\"}").unwrap_err();
        match err {
            WatsonError::Deserialization(msg) => assert!(msg.contains("a list")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
