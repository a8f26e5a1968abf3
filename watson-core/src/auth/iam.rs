//! IBM Cloud IAM authentication.
//!
//! Exchanges an API key for an access token and caches it. A cached token is
//! reused until 80% of its lifetime has elapsed; concurrent callers share one
//! refresh.

use crate::auth::Authenticator;
use crate::defaults;
use crate::error::WatsonError;
use crate::execution::http::HttpHeaderBuilder;
use crate::execution::response::decode_error;
use crate::types::HttpConfig;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Token document returned by the IAM token endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IamToken {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub token_type: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
    /// Expiry as a unix timestamp.
    pub expiration: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    refresh_at: i64,
    expires_at: i64,
}

impl CachedToken {
    fn from_token(token: IamToken, now: i64) -> Self {
        let expires_at = if token.expiration > 0 {
            token.expiration
        } else {
            now + token.expires_in
        };
        let lifetime = token.expires_in.max(0) as f64;
        let refresh_at = expires_at - (lifetime * (1.0 - defaults::auth::IAM_REFRESH_FRACTION)) as i64;
        Self {
            token: token.access_token,
            refresh_at,
            expires_at,
        }
    }

    fn is_fresh(&self, now: i64) -> bool {
        now < self.refresh_at && now < self.expires_at
    }
}

/// Authenticator backed by an IAM API key.
#[derive(Clone)]
pub struct IamAuthenticator {
    apikey: SecretString,
    url: String,
    client_id: Option<String>,
    client_secret: Option<SecretString>,
    http: reqwest::Client,
    cache: Arc<Mutex<Option<CachedToken>>>,
}

impl std::fmt::Debug for IamAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamAuthenticator")
            .field("url", &self.url)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl IamAuthenticator {
    pub fn new(apikey: impl Into<String>) -> Result<Self, WatsonError> {
        let apikey: String = apikey.into();
        if apikey.trim().is_empty() {
            return Err(WatsonError::ConfigurationError(
                "IAM authentication requires an API key".to_string(),
            ));
        }
        if apikey.starts_with('{') || apikey.starts_with('"') {
            return Err(WatsonError::ConfigurationError(
                "IAM API key must not be wrapped in braces or quotes".to_string(),
            ));
        }
        let http = crate::execution::http::build_http_client_from_config(
            &HttpConfig::builder()
                .timeout(Some(defaults::auth::TOKEN_REQUEST_TIMEOUT))
                .build(),
        )?;
        Ok(Self {
            apikey: SecretString::from(apikey),
            url: defaults::auth::IAM_URL.to_string(),
            client_id: None,
            client_secret: None,
            http,
            cache: Arc::new(Mutex::new(None)),
        })
    }

    /// Token endpoint override.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Client credentials sent to the token endpoint as Basic auth.
    pub fn with_client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        let secret: String = client_secret.into();
        self.client_id = Some(client_id.into());
        self.client_secret = Some(SecretString::from(secret));
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Accept invalid TLS certificates from the token endpoint.
    pub fn disable_ssl_verification(mut self, disable: bool) -> Result<Self, WatsonError> {
        if disable {
            self.http = crate::execution::http::build_http_client_from_config(
                &HttpConfig::builder()
                    .timeout(Some(defaults::auth::TOKEN_REQUEST_TIMEOUT))
                    .disable_ssl_verification(true)
                    .build(),
            )?;
        }
        Ok(self)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// A valid access token, fetching a new one when the cached token is stale.
    pub async fn access_token(&self) -> Result<String, WatsonError> {
        let mut cache = self.cache.lock().await;
        let now = chrono::Utc::now().timestamp();
        if let Some(cached) = cache.as_ref()
            && cached.is_fresh(now)
        {
            return Ok(cached.token.clone());
        }

        let token = self.request_token().await?;
        let cached = CachedToken::from_token(token, chrono::Utc::now().timestamp());
        let access = cached.token.clone();
        *cache = Some(cached);
        Ok(access)
    }

    /// Call the token endpoint without touching the cache.
    pub async fn request_token(&self) -> Result<IamToken, WatsonError> {
        tracing::debug!(target: "watson::auth", url=%self.url, "requesting IAM token");

        let body = format!(
            "grant_type={}&apikey={}&response_type=cloud_iam",
            urlencoding::encode(defaults::auth::IAM_GRANT_TYPE),
            urlencoding::encode(self.apikey.expose_secret())
        );

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let (Some(id), Some(secret)) = (&self.client_id, &self.client_secret) {
            let auth = HttpHeaderBuilder::new()
                .with_basic_auth(id, secret.expose_secret())?
                .build();
            headers.extend(auth);
        }

        let response = self
            .http
            .post(&self.url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| WatsonError::AuthenticationError(format!("IAM token request failed: {e}")))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| WatsonError::AuthenticationError(format!("IAM token request failed: {e}")))?;

        if !status.is_success() {
            let err = decode_error(status, &bytes);
            tracing::warn!(target: "watson::auth", status=%status.as_u16(), "IAM token request rejected");
            return Err(WatsonError::AuthenticationError(format!(
                "IAM token request rejected: {err}"
            )));
        }

        serde_json::from_slice::<IamToken>(&bytes).map_err(|e| {
            WatsonError::AuthenticationError(format!("Invalid IAM token response: {e}"))
        })
    }
}

#[async_trait]
impl Authenticator for IamAuthenticator {
    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), WatsonError> {
        let token = self.access_token().await?;
        let built = HttpHeaderBuilder::new().with_bearer_auth(&token)?.build();
        headers.extend(built);
        Ok(())
    }

    fn authentication_type(&self) -> &'static str {
        "iam"
    }
}
