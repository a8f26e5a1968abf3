//! Authentication helpers.
//!
//! An [`Authenticator`] places credentials on an outgoing request. It runs
//! after every other header has been merged, so its `Authorization` value
//! always wins.

use crate::error::WatsonError;
use crate::execution::http::HttpHeaderBuilder;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::sync::{Arc, RwLock};

pub mod environment;
pub mod iam;

pub use environment::{ServiceProperties, authenticator_from_environment};
pub use iam::{IamAuthenticator, IamToken};

/// Attaches credentials to request headers.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Add credential headers to an outgoing request.
    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), WatsonError>;

    /// Short name used in logs and configuration (`iam`, `basic`, ...).
    fn authentication_type(&self) -> &'static str;
}

/// Sends requests without credentials.
#[derive(Debug, Clone, Default)]
pub struct NoAuthAuthenticator;

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    async fn authenticate(&self, _headers: &mut HeaderMap) -> Result<(), WatsonError> {
        Ok(())
    }

    fn authentication_type(&self) -> &'static str {
        "noAuth"
    }
}

/// HTTP Basic authentication.
#[derive(Debug, Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: SecretString,
}

impl BasicAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, WatsonError> {
        let username = username.into();
        let password: String = password.into();
        if username.is_empty() || password.is_empty() {
            return Err(WatsonError::ConfigurationError(
                "Basic authentication requires a username and a password".to_string(),
            ));
        }
        if username.contains(':') {
            return Err(WatsonError::ConfigurationError(
                "Basic authentication username must not contain ':'".to_string(),
            ));
        }
        Ok(Self {
            username,
            password: SecretString::from(password),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), WatsonError> {
        let built = HttpHeaderBuilder::new()
            .with_basic_auth(&self.username, self.password.expose_secret())?
            .build();
        headers.extend(built);
        Ok(())
    }

    fn authentication_type(&self) -> &'static str {
        "basic"
    }
}

/// A bearer token managed by the caller.
///
/// The token can be swapped while clients holding this authenticator keep
/// running.
#[derive(Debug, Clone)]
pub struct BearerTokenAuthenticator {
    token: Arc<RwLock<SecretString>>,
}

impl BearerTokenAuthenticator {
    pub fn new(token: impl Into<String>) -> Result<Self, WatsonError> {
        let token: String = token.into();
        if token.is_empty() {
            return Err(WatsonError::ConfigurationError(
                "Bearer token must not be empty".to_string(),
            ));
        }
        Ok(Self {
            token: Arc::new(RwLock::new(SecretString::from(token))),
        })
    }

    /// Replace the token used by subsequent requests.
    pub fn set_token(&self, token: impl Into<String>) {
        let token: String = token.into();
        match self.token.write() {
            Ok(mut guard) => *guard = SecretString::from(token),
            Err(poisoned) => *poisoned.into_inner() = SecretString::from(token),
        }
    }

    fn current(&self) -> String {
        match self.token.read() {
            Ok(guard) => guard.expose_secret().to_string(),
            Err(poisoned) => poisoned.into_inner().expose_secret().to_string(),
        }
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), WatsonError> {
        let built = HttpHeaderBuilder::new()
            .with_bearer_auth(&self.current())?
            .build();
        headers.extend(built);
        Ok(())
    }

    fn authentication_type(&self) -> &'static str {
        "bearerToken"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    #[test]
    fn no_auth_leaves_headers_alone() {
        let mut headers = HeaderMap::new();
        tokio_test::block_on(NoAuthAuthenticator.authenticate(&mut headers)).unwrap();
        assert!(headers.is_empty());
        assert_eq!(NoAuthAuthenticator.authentication_type(), "noAuth");
    }

    #[tokio::test]
    async fn basic_auth_sets_authorization() {
        let auth = BasicAuthenticator::new("user", "pass").unwrap();
        let mut headers = HeaderMap::new();
        auth.authenticate(&mut headers).await.unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Basic dXNlcjpwYXNz");
        assert_eq!(auth.authentication_type(), "basic");
    }

    #[test]
    fn basic_auth_rejects_missing_credentials() {
        assert!(BasicAuthenticator::new("", "pass").is_err());
        assert!(BasicAuthenticator::new("us:er", "pass").is_err());
    }

    #[tokio::test]
    async fn bearer_token_overrides_existing_authorization() {
        let auth = BearerTokenAuthenticator::new("t1").unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Basic old".parse().unwrap());
        auth.authenticate(&mut headers).await.unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer t1");

        auth.set_token("t2");
        auth.authenticate(&mut headers).await.unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer t2");
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let auth = BasicAuthenticator::new("user", "hunter2").unwrap();
        assert!(!format!("{auth:?}").contains("hunter2"));
    }
}
