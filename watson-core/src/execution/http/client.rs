//! HTTP client construction.

use crate::error::WatsonError;
use crate::types::HttpConfig;

/// Build a `reqwest::Client` from an [`HttpConfig`].
///
/// Default headers in the config are not installed on the client; the
/// request pipeline merges them so that per-call headers can override them.
pub fn build_http_client_from_config(cfg: &HttpConfig) -> Result<reqwest::Client, WatsonError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = cfg.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = cfg.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(proxy_url) = &cfg.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| WatsonError::ConfigurationError(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }
    if cfg.disable_ssl_verification {
        tracing::warn!(target: "watson::http", "TLS certificate verification is disabled");
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder
        .build()
        .map_err(|e| WatsonError::ConfigurationError(format!("Failed to build HTTP client: {e}")))
}
