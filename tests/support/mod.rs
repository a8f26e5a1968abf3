//! Shared helpers for the mock API tests.
#![allow(dead_code)]

use std::sync::Arc;
use watson::auth::{Authenticator, BearerTokenAuthenticator};
use wiremock::Request;
use wiremock::matchers::{HeaderExactMatcher, header};

pub const TOKEN: &str = "test-token";

pub fn bearer() -> Arc<dyn Authenticator> {
    Arc::new(BearerTokenAuthenticator::new(TOKEN).expect("valid token"))
}

/// Matcher for the analytics header of one operation.
pub fn analytics(service: &str, version: &str, operation: &str) -> HeaderExactMatcher {
    header(
        "x-ibmcloud-sdk-analytics",
        format!("service_name={service};service_version={version};operation_id={operation};async=true")
            .as_str(),
    )
}

/// True when the request carried no body.
pub fn no_body(req: &Request) -> bool {
    req.body.is_empty()
}

/// True when the body is the JSON encoding of a model with no fields set.
pub fn empty_json_object(req: &Request) -> bool {
    req.body == b"{}"
        && req
            .headers
            .get("content-type")
            .is_some_and(|v| v.as_bytes() == b"application/json")
}

/// Query pairs in wire order.
pub fn query_pairs(req: &Request) -> Vec<(String, String)> {
    req.url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Number of multipart sections named `name`.
pub fn multipart_parts(req: &Request, name: &str) -> usize {
    String::from_utf8_lossy(&req.body)
        .matches(&format!("Content-Disposition: form-data; name=\"{name}\""))
        .count()
}
