//! Builder core shared by the service client builders.
//!
//! Each service builder wraps a [`ServiceBuilderCore`] and adds nothing but
//! its own defaults, so every client is configured the same way.

use crate::auth::{Authenticator, ServiceProperties};
use crate::error::WatsonError;
use crate::execution::http::{
    HttpInterceptor, LoggingInterceptor, build_http_client_from_config, default_user_agent,
};
use crate::service::{ServiceCore, ServiceInfo};
use crate::types::HttpConfig;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct ServiceBuilderCore {
    pub info: ServiceInfo,
    /// Service URL; the default endpoint unless overridden.
    pub service_url: Option<String>,
    pub authenticator: Option<Arc<dyn Authenticator>>,
    /// Transport settings. `headers` become the client default headers.
    pub http_config: HttpConfig,
    /// Custom reqwest client (takes precedence over `http_config` transport settings).
    pub http_client: Option<reqwest::Client>,
    pub http_interceptors: Vec<Arc<dyn HttpInterceptor>>,
    /// Install the built-in logging interceptor.
    pub http_debug: bool,
}

impl ServiceBuilderCore {
    pub fn new(info: ServiceInfo, default_url: &str) -> Self {
        Self {
            info,
            service_url: Some(default_url.to_string()),
            authenticator: None,
            http_config: HttpConfig::default(),
            http_client: None,
            http_interceptors: Vec::new(),
            http_debug: false,
        }
    }

    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    pub fn authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.http_config.headers.insert(name.into(), value.into());
        self
    }

    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.http_config.headers.extend(headers);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.http_config.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.connect_timeout = Some(timeout);
        self
    }

    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.http_config.proxy = Some(proxy.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.http_config.user_agent = Some(user_agent.into());
        self
    }

    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.http_config.disable_ssl_verification = disable;
        self
    }

    /// Replace the whole HTTP configuration.
    pub fn http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = config;
        self
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn with_http_interceptor(mut self, interceptor: Arc<dyn HttpInterceptor>) -> Self {
        self.http_interceptors.push(interceptor);
        self
    }

    pub fn http_debug(mut self, enabled: bool) -> Self {
        self.http_debug = enabled;
        self
    }

    /// Apply the credentials, URL and TLS settings found in the environment
    /// for this service.
    pub fn from_environment(self) -> Result<Self, WatsonError> {
        let props = ServiceProperties::load(self.info.name)?;
        self.with_properties(&props)
    }

    pub fn with_properties(mut self, props: &ServiceProperties) -> Result<Self, WatsonError> {
        self.authenticator = Some(props.authenticator()?);
        if let Some(url) = props.url() {
            self.service_url = Some(url.to_string());
        }
        if props.disable_ssl() {
            self.http_config.disable_ssl_verification = true;
        }
        Ok(self)
    }

    pub fn build(self) -> Result<ServiceCore, WatsonError> {
        let authenticator = self.authenticator.ok_or_else(|| {
            WatsonError::ConfigurationError(format!(
                "An authenticator is required to build the {} client",
                self.info.name
            ))
        })?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => build_http_client_from_config(&self.http_config)?,
        };

        let mut interceptors = self.http_interceptors;
        if self.http_debug {
            interceptors.push(Arc::new(LoggingInterceptor));
        }

        let user_agent = self
            .http_config
            .user_agent
            .clone()
            .unwrap_or_else(|| default_user_agent().to_string());

        tracing::debug!(target: "watson::client", service=%self.info.name, auth=%authenticator.authentication_type(), "client configured");

        Ok(ServiceCore {
            info: self.info,
            service_url: self.service_url,
            default_headers: self.http_config.headers,
            call_headers: HashMap::new(),
            user_agent,
            authenticator,
            http_client,
            interceptors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::NoAuthAuthenticator;

    fn info() -> ServiceInfo {
        ServiceInfo::new("discovery", "v2").with_version("2020-08-30")
    }

    #[test]
    fn build_requires_authenticator() {
        let err = ServiceBuilderCore::new(info(), "https://example.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, WatsonError::ConfigurationError(_)));
    }

    #[test]
    fn build_collects_settings() {
        let core = ServiceBuilderCore::new(info(), "https://example.com")
            .authenticator(Arc::new(NoAuthAuthenticator))
            .service_url("https://override.example.com")
            .header("X-Watson-Learning-Opt-Out", "true")
            .http_debug(true)
            .build()
            .unwrap();
        assert_eq!(core.service_url(), Some("https://override.example.com"));
        assert_eq!(
            core.default_headers().get("X-Watson-Learning-Opt-Out").map(String::as_str),
            Some("true")
        );
        assert_eq!(core.interceptors().len(), 1);
        assert!(core.user_agent().starts_with("watson-sdk-rust/"));
        assert_eq!(core.info().version.as_deref(), Some("2020-08-30"));
    }

    #[test]
    fn properties_override_url_and_auth() {
        let props = ServiceProperties::from_vars(
            "discovery",
            vec![
                ("DISCOVERY_AUTH_TYPE".to_string(), "bearerToken".to_string()),
                ("DISCOVERY_BEARER_TOKEN".to_string(), "tok".to_string()),
                ("DISCOVERY_URL".to_string(), "https://env.example.com".to_string()),
                ("DISCOVERY_DISABLE_SSL".to_string(), "true".to_string()),
            ],
        );
        let builder = ServiceBuilderCore::new(info(), "https://example.com")
            .with_properties(&props)
            .unwrap();
        assert!(builder.http_config.disable_ssl_verification);
        let core = builder.build().unwrap();
        assert_eq!(core.service_url(), Some("https://env.example.com"));
        assert_eq!(core.authenticator().authentication_type(), "bearerToken");
    }
}
