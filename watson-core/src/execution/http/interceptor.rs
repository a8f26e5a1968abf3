//! HTTP Interceptor interfaces
//!
//! Interceptors can observe and tweak request builders before send, observe
//! responses, and be notified of errors. The hooks run inline with the call,
//! so they should stay cheap.

use crate::error::WatsonError;
use reqwest::header::HeaderMap;

/// Context passed to interceptors describing the request.
#[derive(Clone, Debug)]
pub struct HttpRequestContext {
    pub service_name: String,
    pub operation_id: String,
    pub method: reqwest::Method,
    pub url: String,
}

/// HTTP interceptor trait
pub trait HttpInterceptor: Send + Sync {
    /// Called before sending a request. Return the (possibly modified)
    /// builder or an error to short-circuit the request.
    fn on_before_send(
        &self,
        _ctx: &HttpRequestContext,
        builder: reqwest::RequestBuilder,
        _headers: &HeaderMap,
    ) -> Result<reqwest::RequestBuilder, WatsonError> {
        Ok(builder)
    }

    /// Called once response headers arrive, for any status.
    fn on_response(
        &self,
        _ctx: &HttpRequestContext,
        _status: u16,
        _headers: &HeaderMap,
    ) -> Result<(), WatsonError> {
        Ok(())
    }

    /// Called when sending fails or the service answers with an error.
    fn on_error(&self, _ctx: &HttpRequestContext, _error: &WatsonError) {}
}

/// A simple logging interceptor backed by `tracing` (no sensitive data).
#[derive(Clone, Debug, Default)]
pub struct LoggingInterceptor;

impl HttpInterceptor for LoggingInterceptor {
    fn on_before_send(
        &self,
        ctx: &HttpRequestContext,
        builder: reqwest::RequestBuilder,
        _headers: &HeaderMap,
    ) -> Result<reqwest::RequestBuilder, WatsonError> {
        tracing::debug!(target: "watson::http", service=%ctx.service_name, operation=%ctx.operation_id, method=%ctx.method, url=%ctx.url, "sending request");
        Ok(builder)
    }

    fn on_response(
        &self,
        ctx: &HttpRequestContext,
        status: u16,
        _headers: &HeaderMap,
    ) -> Result<(), WatsonError> {
        tracing::debug!(target: "watson::http", service=%ctx.service_name, operation=%ctx.operation_id, status=%status, "response received");
        Ok(())
    }

    fn on_error(&self, ctx: &HttpRequestContext, error: &WatsonError) {
        tracing::debug!(target: "watson::http", service=%ctx.service_name, operation=%ctx.operation_id, url=%ctx.url, err=%error, "request error");
    }
}
