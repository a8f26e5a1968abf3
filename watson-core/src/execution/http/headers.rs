//! HTTP Headers Utility
//!
//! Builders for the headers every service request carries.

use crate::defaults;
use crate::error::WatsonError;
use base64::Engine;
use once_cell::sync::Lazy;
use reqwest::header::{
    ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT,
};
use std::collections::HashMap;

static DEFAULT_USER_AGENT: Lazy<String> = Lazy::new(|| {
    format!(
        "{}/{} {}/{}",
        defaults::http::SDK_NAME,
        defaults::http::SDK_VERSION,
        std::env::consts::OS,
        std::env::consts::ARCH
    )
});

/// `watson-sdk-rust/{version} {os}/{arch}`
pub fn default_user_agent() -> &'static str {
    DEFAULT_USER_AGENT.as_str()
}

/// Value of the per-operation analytics header.
pub fn sdk_analytics_value(service_name: &str, service_version: &str, operation_id: &str) -> String {
    format!(
        "service_name={service_name};service_version={service_version};operation_id={operation_id};async=true"
    )
}

/// HTTP header builder for API requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Start from an existing header map.
    pub fn from_headers(headers: HeaderMap) -> Self {
        Self { headers }
    }

    /// Add Bearer token authorization
    pub fn with_bearer_auth(mut self, token: &str) -> Result<Self, WatsonError> {
        let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            WatsonError::ConfigurationError(format!("Invalid bearer token format: {e}"))
        })?;
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    /// Add Basic authorization from a username and password
    pub fn with_basic_auth(mut self, username: &str, password: &str) -> Result<Self, WatsonError> {
        let encoded =
            base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
        let value = HeaderValue::from_str(&format!("Basic {encoded}")).map_err(|e| {
            WatsonError::ConfigurationError(format!("Invalid basic credentials: {e}"))
        })?;
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    pub fn with_accept(self, accept: &str) -> Result<Self, WatsonError> {
        self.with_typed(ACCEPT, accept)
    }

    pub fn with_content_type(self, content_type: &str) -> Result<Self, WatsonError> {
        self.with_typed(CONTENT_TYPE, content_type)
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    pub fn with_user_agent(self, user_agent: &str) -> Result<Self, WatsonError> {
        self.with_typed(USER_AGENT, user_agent)
    }

    /// Add the analytics header identifying the calling operation.
    pub fn with_sdk_analytics(
        self,
        service_name: &str,
        service_version: &str,
        operation_id: &str,
    ) -> Result<Self, WatsonError> {
        let value = sdk_analytics_value(service_name, service_version, operation_id);
        self.with_header(defaults::http::SDK_ANALYTICS_HEADER, &value)
    }

    /// Add a custom header, replacing any previous value.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, WatsonError> {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            WatsonError::ConfigurationError(format!("Invalid header name '{name}': {e}"))
        })?;
        self.headers.insert(
            header_name,
            HeaderValue::from_str(value).map_err(|e| {
                WatsonError::ConfigurationError(format!("Invalid header value for '{name}': {e}"))
            })?,
        );
        Ok(self)
    }

    /// Add multiple custom headers; later values replace earlier ones.
    pub fn with_custom_headers(
        mut self,
        custom_headers: &HashMap<String, String>,
    ) -> Result<Self, WatsonError> {
        for (key, value) in custom_headers {
            self = self.with_header(key, value)?;
        }
        Ok(self)
    }

    pub fn build(self) -> HeaderMap {
        self.headers
    }

    fn with_typed(mut self, name: HeaderName, value: &str) -> Result<Self, WatsonError> {
        let value = HeaderValue::from_str(value).map_err(|e| {
            WatsonError::ConfigurationError(format!("Invalid header value for '{name}': {e}"))
        })?;
        self.headers.insert(name, value);
        Ok(self)
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a HeaderMap to lowercased `name -> value` pairs.
///
/// Values that are not valid UTF-8 are dropped. Repeated headers keep the
/// last value.
pub fn headermap_to_hashmap(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(k, v)| {
            v.to_str()
                .ok()
                .map(|v_str| (k.as_str().to_string(), v_str.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_builder() {
        let headers = HttpHeaderBuilder::new()
            .with_bearer_auth("test-token")
            .unwrap()
            .with_json_content_type()
            .with_user_agent("test-agent")
            .unwrap()
            .build();

        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer test-token");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(USER_AGENT).unwrap(), "test-agent");
    }

    #[test]
    fn basic_auth_is_base64_encoded() {
        let headers = HttpHeaderBuilder::new()
            .with_basic_auth("apikey", "secret")
            .unwrap()
            .build();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Basic YXBpa2V5OnNlY3JldA==");
    }

    #[test]
    fn custom_headers_override_earlier_values() {
        let mut extra = HashMap::new();
        extra.insert("Accept".to_string(), "audio/wav".to_string());
        let headers = HttpHeaderBuilder::new()
            .with_accept("application/json")
            .unwrap()
            .with_custom_headers(&extra)
            .unwrap()
            .build();
        assert_eq!(headers.get(ACCEPT).unwrap(), "audio/wav");
    }

    #[test]
    fn analytics_header_format() {
        let headers = HttpHeaderBuilder::new()
            .with_sdk_analytics("conversation", "v2", "createSession")
            .unwrap()
            .build();
        assert_eq!(
            headers.get("x-ibmcloud-sdk-analytics").unwrap(),
            "service_name=conversation;service_version=v2;operation_id=createSession;async=true"
        );
    }

    #[test]
    fn invalid_header_name_is_configuration_error() {
        let err = HttpHeaderBuilder::new()
            .with_header("bad header", "v")
            .err()
            .unwrap();
        assert!(matches!(err, WatsonError::ConfigurationError(_)));
    }

    #[test]
    fn user_agent_names_the_sdk() {
        assert!(default_user_agent().starts_with("watson-sdk-rust/"));
        assert!(default_user_agent().contains(std::env::consts::OS));
    }
}
