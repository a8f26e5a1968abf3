//! Shared state behind every service client.

use crate::auth::Authenticator;
use crate::execution::http::HttpInterceptor;
use crate::execution::request::RestRequest;
use reqwest::Method;
use std::collections::HashMap;
use std::sync::Arc;

/// Identity of a service API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    /// Service name used for analytics and credential lookup.
    pub name: &'static str,
    /// API major version reported in analytics (`V1`, `V2`, ...).
    pub api_version: &'static str,
    /// Release date sent as the `version` query parameter, when the API takes one.
    pub version: Option<String>,
}

impl ServiceInfo {
    pub fn new(name: &'static str, api_version: &'static str) -> Self {
        Self {
            name,
            api_version,
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// Read-only configuration shared by the calls of one client.
///
/// Cloning is cheap; the HTTP client and authenticator are shared.
#[derive(Clone)]
pub struct ServiceCore {
    pub(crate) info: ServiceInfo,
    pub(crate) service_url: Option<String>,
    pub(crate) default_headers: HashMap<String, String>,
    pub(crate) call_headers: HashMap<String, String>,
    pub(crate) user_agent: String,
    pub(crate) authenticator: Arc<dyn Authenticator>,
    pub(crate) http_client: reqwest::Client,
    pub(crate) interceptors: Vec<Arc<dyn HttpInterceptor>>,
}

impl std::fmt::Debug for ServiceCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceCore")
            .field("info", &self.info)
            .field("service_url", &self.service_url)
            .field("authentication", &self.authenticator.authentication_type())
            .finish_non_exhaustive()
    }
}

impl ServiceCore {
    /// Start a request for one operation.
    ///
    /// `operation_id` is reported in the analytics header; `path_template`
    /// placeholders are filled from `path_params`.
    pub fn request(
        &self,
        method: Method,
        operation_id: &str,
        path_template: &str,
        path_params: &[(&str, &str)],
    ) -> RestRequest<'_> {
        RestRequest::new(self, method, operation_id, path_template, path_params)
    }

    pub fn info(&self) -> &ServiceInfo {
        &self.info
    }

    pub fn service_url(&self) -> Option<&str> {
        self.service_url.as_deref()
    }

    pub fn set_service_url(&mut self, url: Option<String>) {
        self.service_url = url;
    }

    pub fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Headers applied after the operation's own headers.
    pub fn call_headers(&self) -> &HashMap<String, String> {
        &self.call_headers
    }

    /// Copy of this core whose calls also send `headers`.
    pub fn with_call_headers(&self, headers: HashMap<String, String>) -> Self {
        let mut core = self.clone();
        core.call_headers.extend(headers);
        core
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }

    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    pub fn interceptors(&self) -> &[Arc<dyn HttpInterceptor>] {
        &self.interceptors
    }
}
