//! Shared builder and client plumbing for the service facades.

/// Delegating setters from a service builder to its `ServiceBuilderCore`.
macro_rules! impl_service_builder {
    ($builder:ident => $client:ident) => {
        impl $builder {
            /// Override the service endpoint.
            pub fn service_url(mut self, url: impl Into<String>) -> Self {
                self.core = self.core.service_url(url);
                self
            }

            pub fn authenticator(
                mut self,
                authenticator: ::std::sync::Arc<dyn ::watson_core::auth::Authenticator>,
            ) -> Self {
                self.core = self.core.authenticator(authenticator);
                self
            }

            /// Header sent with every request from this client.
            pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.core = self.core.header(name, value);
                self
            }

            pub fn headers(mut self, headers: ::std::collections::HashMap<String, String>) -> Self {
                self.core = self.core.headers(headers);
                self
            }

            pub fn timeout(mut self, timeout: ::std::time::Duration) -> Self {
                self.core = self.core.timeout(timeout);
                self
            }

            pub fn connect_timeout(mut self, timeout: ::std::time::Duration) -> Self {
                self.core = self.core.connect_timeout(timeout);
                self
            }

            pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
                self.core = self.core.proxy(proxy);
                self
            }

            pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
                self.core = self.core.user_agent(user_agent);
                self
            }

            /// Accept invalid TLS certificates. Only for test deployments.
            pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
                self.core = self.core.disable_ssl_verification(disable);
                self
            }

            pub fn http_config(mut self, config: ::watson_core::types::HttpConfig) -> Self {
                self.core = self.core.http_config(config);
                self
            }

            pub fn with_http_client(mut self, client: ::reqwest::Client) -> Self {
                self.core = self.core.with_http_client(client);
                self
            }

            pub fn with_http_interceptor(
                mut self,
                interceptor: ::std::sync::Arc<dyn ::watson_core::execution::http::HttpInterceptor>,
            ) -> Self {
                self.core = self.core.with_http_interceptor(interceptor);
                self
            }

            /// Log each request and response at debug level.
            pub fn http_debug(mut self, enabled: bool) -> Self {
                self.core = self.core.http_debug(enabled);
                self
            }

            /// Take credentials, URL and TLS settings from the environment or
            /// an `ibm-credentials.env` file.
            pub fn from_environment(mut self) -> Result<Self, ::watson_core::WatsonError> {
                self.core = self.core.from_environment()?;
                Ok(self)
            }

            pub fn build(self) -> Result<$client, ::watson_core::WatsonError> {
                Ok($client {
                    core: self.core.build()?,
                })
            }
        }
    };
}

/// Accessors every service client shares.
macro_rules! impl_service_client {
    ($client:ident) => {
        impl $client {
            pub fn service_url(&self) -> Option<&str> {
                self.core.service_url()
            }

            pub fn set_service_url(&mut self, url: impl Into<String>) {
                self.core.set_service_url(Some(url.into()));
            }

            /// A handle whose calls also send `headers`, applied after each
            /// operation's own headers.
            pub fn with_headers(&self, headers: ::std::collections::HashMap<String, String>) -> Self {
                Self {
                    core: self.core.with_call_headers(headers),
                }
            }

            pub fn core(&self) -> &::watson_core::ServiceCore {
                &self.core
            }
        }
    };
}
