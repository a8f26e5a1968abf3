//! Request building and execution.
//!
//! A [`RestRequest`] collects the pieces of one call: method, path, query,
//! headers and body. Build-time failures (bad path parameters, body encoding)
//! are held until [`RestRequest::send`], which reports them before touching
//! the network.
//!
//! Headers are layered in this order, later layers replacing earlier ones:
//!
//! 1. client default headers
//! 2. SDK analytics header
//! 3. User-Agent
//! 4. operation headers (`Accept`, `Content-Type`, and the like)
//! 5. per-call headers
//! 6. `Authorization` from the authenticator

use crate::error::WatsonError;
use crate::execution::http::{HttpHeaderBuilder, HttpRequestContext, headermap_to_hashmap};
use crate::execution::multipart::MultipartFormData;
use crate::execution::response::{RawResponse, decode_error};
use crate::service::ServiceCore;
use crate::types::WatsonResponse;
use bytes::Bytes;
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Substitute `{name}` placeholders with percent-encoded path segments.
///
/// Fails when a placeholder has no (or an empty) value, a value has no
/// placeholder, or a brace is left open. A placeholder may appear more than
/// once.
pub fn expand_path(template: &str, params: &[(&str, &str)]) -> Result<String, WatsonError> {
    let fail = || WatsonError::UrlEncoding {
        path: template.to_string(),
    };

    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    let mut used: Vec<&str> = Vec::with_capacity(params.len());
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(fail)?;
        let name = &after[..close];
        let value = params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .filter(|value| !value.is_empty())
            .ok_or_else(fail)?;
        out.push_str(&urlencoding::encode(value));
        if !used.contains(&name) {
            used.push(name);
        }
        rest = &after[close + 1..];
    }
    let unused = params.iter().any(|(key, _)| !used.contains(key));
    if rest.contains('}') || unused {
        return Err(fail());
    }
    out.push_str(rest);
    Ok(out)
}

enum Body {
    Bytes(Bytes),
    Multipart(reqwest::multipart::Form),
}

/// One service call under construction.
pub struct RestRequest<'a> {
    core: &'a ServiceCore,
    method: Method,
    operation_id: String,
    path: Result<String, WatsonError>,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    body: Option<Body>,
    error: Option<WatsonError>,
}

impl<'a> RestRequest<'a> {
    pub(crate) fn new(
        core: &'a ServiceCore,
        method: Method,
        operation_id: &str,
        path_template: &str,
        path_params: &[(&str, &str)],
    ) -> Self {
        let mut request = Self {
            core,
            method,
            operation_id: operation_id.to_string(),
            path: expand_path(path_template, path_params),
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
            error: None,
        };

        let info = core.info();
        let base = HttpHeaderBuilder::new()
            .with_custom_headers(core.default_headers())
            .and_then(|b| b.with_sdk_analytics(info.name, info.api_version, operation_id))
            .and_then(|b| b.with_user_agent(core.user_agent()));
        match base {
            Ok(builder) => request.headers = builder.build(),
            Err(e) => request.error = Some(e),
        }

        if let Some(version) = info.version.as_deref() {
            request.query.push(("version".to_string(), version.to_string()));
        }
        request
    }

    fn fail(&mut self, error: WatsonError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn set_header(mut self, name: HeaderName, value: &str) -> Self {
        match HeaderValue::from_str(value) {
            Ok(v) => {
                self.headers.insert(name, v);
            }
            Err(e) => self.fail(WatsonError::ConfigurationError(format!(
                "Invalid header value for '{name}': {e}"
            ))),
        }
        self
    }

    pub fn accept(self, accept: &str) -> Self {
        self.set_header(ACCEPT, accept)
    }

    pub fn accept_json(self) -> Self {
        self.accept("application/json")
    }

    pub fn content_type(self, content_type: &str) -> Self {
        self.set_header(CONTENT_TYPE, content_type)
    }

    /// Operation-specific header.
    pub fn header(self, name: &str, value: &str) -> Self {
        match HeaderName::from_bytes(name.as_bytes()) {
            Ok(header_name) => self.set_header(header_name, value),
            Err(e) => {
                let mut this = self;
                this.fail(WatsonError::ConfigurationError(format!(
                    "Invalid header name '{name}': {e}"
                )));
                this
            }
        }
    }

    /// Operation-specific header, skipped when absent.
    pub fn header_opt(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.header(name, &v.to_string()),
            None => self,
        }
    }

    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Query parameter, skipped when absent.
    pub fn query_opt(self, name: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(name, v),
            None => self,
        }
    }

    /// Comma-joined list parameter, skipped when absent.
    pub fn query_list<S: AsRef<str>>(self, name: &str, values: Option<&[S]>) -> Self {
        match values {
            Some(values) => {
                let joined = values
                    .iter()
                    .map(AsRef::as_ref)
                    .collect::<Vec<_>>()
                    .join(",");
                self.query(name, joined)
            }
            None => self,
        }
    }

    /// JSON body, always sent.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        match serde_json::to_vec(body) {
            Ok(data) => {
                self.body = Some(Body::Bytes(Bytes::from(data)));
                self.content_type("application/json")
            }
            Err(e) => {
                self.fail(WatsonError::Serialization(format!("request body: {e}")));
                self
            }
        }
    }

    /// `multipart/form-data` body. The boundary and `Content-Type` are set
    /// when the request is sent.
    pub fn multipart(mut self, form: MultipartFormData) -> Self {
        match form.into_form() {
            Ok(form) => self.body = Some(Body::Multipart(form)),
            Err(e) => self.fail(e),
        }
        self
    }

    /// Raw body with an explicit content type.
    pub fn body(mut self, data: impl Into<Bytes>, content_type: &str) -> Self {
        self.body = Some(Body::Bytes(data.into()));
        self.content_type(content_type)
    }

    /// Execute the call. Non-2xx responses become [`WatsonError::Api`].
    pub async fn send(self) -> Result<RawResponse, WatsonError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let path = self.path?;
        let service_url = self.core.service_url().ok_or(WatsonError::NoEndpoint)?;

        let mut url = reqwest::Url::parse(&format!("{}{}", service_url.trim_end_matches('/'), path))
            .map_err(|e| {
                WatsonError::ConfigurationError(format!("Invalid service URL '{service_url}': {e}"))
            })?;
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in &self.query {
                pairs.append_pair(k, v);
            }
        }

        let mut headers = HttpHeaderBuilder::from_headers(self.headers)
            .with_custom_headers(self.core.call_headers())?
            .build();
        if matches!(self.body, Some(Body::Multipart(_))) {
            // reqwest writes the boundary-carrying Content-Type itself.
            headers.remove(CONTENT_TYPE);
        }
        self.core.authenticator().authenticate(&mut headers).await?;

        let ctx = HttpRequestContext {
            service_name: self.core.info().name.to_string(),
            operation_id: self.operation_id.clone(),
            method: self.method.clone(),
            url: url.to_string(),
        };
        tracing::debug!(target: "watson::http", operation=%ctx.operation_id, method=%ctx.method, url=%ctx.url, "sending request");

        let mut builder = self
            .core
            .http_client()
            .request(self.method.clone(), url)
            .headers(headers.clone());
        builder = match self.body {
            Some(Body::Bytes(data)) => builder.body(data),
            Some(Body::Multipart(form)) => builder.multipart(form),
            None => builder,
        };
        for interceptor in self.core.interceptors() {
            builder = interceptor.on_before_send(&ctx, builder, &headers)?;
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = WatsonError::from(e);
                for interceptor in self.core.interceptors() {
                    interceptor.on_error(&ctx, &err);
                }
                return Err(err);
            }
        };

        let status = response.status();
        for interceptor in self.core.interceptors() {
            interceptor.on_response(&ctx, status.as_u16(), response.headers())?;
        }
        let response_headers = headermap_to_hashmap(response.headers());
        let body = response.bytes().await?;
        tracing::debug!(target: "watson::http", operation=%ctx.operation_id, status=%status.as_u16(), bytes=body.len(), "received response");

        if !status.is_success() {
            let err = decode_error(status, &body);
            tracing::warn!(target: "watson::http", operation=%ctx.operation_id, status=%status.as_u16(), err=%err, "service returned an error");
            for interceptor in self.core.interceptors() {
                interceptor.on_error(&ctx, &err);
            }
            return Err(err);
        }

        Ok(RawResponse {
            status,
            headers: response_headers,
            body,
        })
    }

    /// Execute and decode a JSON body.
    pub async fn send_json<T: DeserializeOwned>(self) -> Result<WatsonResponse<T>, WatsonError> {
        self.send().await?.json()
    }

    /// Execute and return the body bytes.
    pub async fn send_bytes(self) -> Result<WatsonResponse<Bytes>, WatsonError> {
        Ok(self.send().await?.bytes())
    }

    /// Execute and discard the body.
    pub async fn send_empty(self) -> Result<WatsonResponse<()>, WatsonError> {
        Ok(self.send().await?.empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_path_is_unchanged() {
        assert_eq!(expand_path("/v1/voices", &[]).unwrap(), "/v1/voices");
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let path = expand_path(
            "/v1/customizations/{customization_id}/words/{word}",
            &[("customization_id", "a/b c"), ("word", "naïve?#%")],
        )
        .unwrap();
        assert_eq!(path, "/v1/customizations/a%2Fb%20c/words/na%C3%AFve%3F%23%25");
        assert!(reqwest::Url::parse(&format!("https://example.com{path}")).is_ok());
    }

    #[test]
    fn missing_or_empty_parameters_fail() {
        let err = expand_path("/v2/assistants/{assistant_id}/sessions", &[]).unwrap_err();
        assert!(matches!(err, WatsonError::UrlEncoding { .. }));

        let err = expand_path("/v2/assistants/{assistant_id}", &[("assistant_id", "")]).unwrap_err();
        assert!(matches!(err, WatsonError::UrlEncoding { .. }));
    }

    #[test]
    fn repeated_placeholders_share_one_value() {
        let path = expand_path("/v1/{id}/copy/{id}", &[("id", "a b")]).unwrap();
        assert_eq!(path, "/v1/a%20b/copy/a%20b");
        assert!(expand_path("/v1/{id}/copy/{id}", &[("id", "a"), ("other", "b")]).is_err());
    }

    #[test]
    fn unused_parameters_and_unbalanced_braces_fail() {
        assert!(expand_path("/v1/voices", &[("voice", "x")]).is_err());
        assert!(expand_path("/v1/voices/{voice", &[("voice", "x")]).is_err());
        assert!(expand_path("/v1/voices/voice}", &[]).is_err());
    }
}
