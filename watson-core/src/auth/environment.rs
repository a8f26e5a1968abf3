//! Service configuration from the environment.
//!
//! Properties are looked up under a prefix derived from the service name
//! (`text_to_speech` -> `TEXT_TO_SPEECH_`). Process environment variables are
//! consulted first, then a credentials file in `.env` syntax:
//!
//! 1. the file named by `IBM_CREDENTIALS_FILE`
//! 2. `./ibm-credentials.env`
//! 3. `$HOME/ibm-credentials.env`

use crate::auth::{
    Authenticator, BasicAuthenticator, BearerTokenAuthenticator, IamAuthenticator,
    NoAuthAuthenticator,
};
use crate::defaults;
use crate::error::WatsonError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Properties configured for one service, keyed without the prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceProperties {
    values: HashMap<String, String>,
}

impl ServiceProperties {
    /// Read properties for `service_name` from the process environment and,
    /// when none are set there, from the first credentials file found.
    pub fn load(service_name: &str) -> Result<Self, WatsonError> {
        let from_env = Self::from_vars(service_name, std::env::vars());
        if !from_env.is_empty() {
            return Ok(from_env);
        }
        match credentials_file() {
            Some(path) => Self::from_file(service_name, &path),
            None => Ok(Self::default()),
        }
    }

    /// Properties from `{PREFIX}_{KEY}` pairs.
    pub fn from_vars<I>(service_name: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let prefix = format!("{}_", env_prefix(service_name));
        let values = vars
            .into_iter()
            .filter_map(|(k, v)| {
                k.strip_prefix(&prefix)
                    .filter(|key| !key.is_empty())
                    .map(|key| (key.to_ascii_uppercase(), v))
            })
            .collect();
        Self { values }
    }

    /// Properties from a credentials file.
    pub fn from_file(service_name: &str, path: &Path) -> Result<Self, WatsonError> {
        let iter = dotenvy::from_path_iter(path).map_err(|e| {
            WatsonError::ConfigurationError(format!(
                "Failed to read credentials file {}: {e}",
                path.display()
            ))
        })?;
        let mut pairs = Vec::new();
        for item in iter {
            let pair = item.map_err(|e| {
                WatsonError::ConfigurationError(format!(
                    "Invalid line in credentials file {}: {e}",
                    path.display()
                ))
            })?;
            pairs.push(pair);
        }
        Ok(Self::from_vars(service_name, pairs))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(&key.to_ascii_uppercase())
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Service URL override.
    pub fn url(&self) -> Option<&str> {
        self.get("URL")
    }

    pub fn disable_ssl(&self) -> bool {
        self.flag("DISABLE_SSL")
    }

    pub fn auth_disable_ssl(&self) -> bool {
        self.flag("AUTH_DISABLE_SSL")
    }

    fn apikey(&self) -> Option<&str> {
        self.get("APIKEY").or_else(|| self.get("IAM_APIKEY"))
    }

    fn auth_url(&self) -> Option<&str> {
        self.get("AUTH_URL").or_else(|| self.get("IAM_URL"))
    }

    fn flag(&self, key: &str) -> bool {
        self.get(key)
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false)
    }

    /// Build the authenticator these properties describe.
    ///
    /// Without an explicit `AUTH_TYPE` an API key selects IAM, then a
    /// username/password pair selects Basic, then a bearer token.
    pub fn authenticator(&self) -> Result<Arc<dyn Authenticator>, WatsonError> {
        let auth_type = match self.get("AUTH_TYPE") {
            Some(t) => t.to_ascii_lowercase(),
            None if self.apikey().is_some() => "iam".to_string(),
            None if self.get("USERNAME").is_some() && self.get("PASSWORD").is_some() => {
                "basic".to_string()
            }
            None if self.get("BEARER_TOKEN").is_some() => "bearertoken".to_string(),
            None => {
                return Err(WatsonError::ConfigurationError(
                    "No credentials found in the environment".to_string(),
                ));
            }
        };

        match auth_type.as_str() {
            "iam" => {
                let apikey = self.apikey().ok_or_else(|| {
                    WatsonError::ConfigurationError("IAM authentication requires APIKEY".into())
                })?;
                let mut iam = IamAuthenticator::new(apikey)?
                    .disable_ssl_verification(self.auth_disable_ssl())?;
                if let Some(url) = self.auth_url() {
                    iam = iam.with_url(url);
                }
                if let (Some(id), Some(secret)) = (self.get("CLIENT_ID"), self.get("CLIENT_SECRET"))
                {
                    iam = iam.with_client_credentials(id, secret);
                }
                Ok(Arc::new(iam))
            }
            "basic" => {
                let username = self.get("USERNAME").unwrap_or_default();
                let password = self.get("PASSWORD").unwrap_or_default();
                Ok(Arc::new(BasicAuthenticator::new(username, password)?))
            }
            "bearertoken" => {
                let token = self.get("BEARER_TOKEN").unwrap_or_default();
                Ok(Arc::new(BearerTokenAuthenticator::new(token)?))
            }
            "noauth" => Ok(Arc::new(NoAuthAuthenticator)),
            other => Err(WatsonError::ConfigurationError(format!(
                "Unsupported authentication type: {other}"
            ))),
        }
    }
}

/// Build an authenticator for `service_name` from the environment.
pub fn authenticator_from_environment(
    service_name: &str,
) -> Result<Arc<dyn Authenticator>, WatsonError> {
    ServiceProperties::load(service_name)?.authenticator()
}

/// `text-to-speech` -> `TEXT_TO_SPEECH`
pub fn env_prefix(service_name: &str) -> String {
    service_name.to_ascii_uppercase().replace('-', "_")
}

fn credentials_file() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var(defaults::auth::CREDENTIALS_FILE_ENV)
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }
    let mut candidates = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join(defaults::auth::CREDENTIALS_FILE_NAME));
    }
    if let Ok(home) = std::env::var("HOME") {
        candidates.push(PathBuf::from(home).join(defaults::auth::CREDENTIALS_FILE_NAME));
    }
    candidates.into_iter().find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn prefix_is_upper_snake() {
        assert_eq!(env_prefix("text-to-speech"), "TEXT_TO_SPEECH");
        assert_eq!(env_prefix("conversation"), "CONVERSATION");
    }

    #[test]
    fn ignores_other_services() {
        let props = ServiceProperties::from_vars(
            "discovery",
            vars(&[
                ("DISCOVERY_URL", "https://example.com"),
                ("CONVERSATION_APIKEY", "nope"),
            ]),
        );
        assert_eq!(props.url(), Some("https://example.com"));
        assert_eq!(props.get("APIKEY"), None);
    }

    #[test]
    fn infers_auth_type() {
        let iam = ServiceProperties::from_vars("svc", vars(&[("SVC_APIKEY", "k")]));
        assert_eq!(iam.authenticator().unwrap().authentication_type(), "iam");

        let basic = ServiceProperties::from_vars(
            "svc",
            vars(&[("SVC_USERNAME", "u"), ("SVC_PASSWORD", "p")]),
        );
        assert_eq!(basic.authenticator().unwrap().authentication_type(), "basic");

        let bearer = ServiceProperties::from_vars("svc", vars(&[("SVC_BEARER_TOKEN", "t")]));
        assert_eq!(
            bearer.authenticator().unwrap().authentication_type(),
            "bearerToken"
        );

        let none = ServiceProperties::from_vars("svc", vars(&[("SVC_AUTH_TYPE", "noAuth")]));
        assert_eq!(none.authenticator().unwrap().authentication_type(), "noAuth");
    }

    #[test]
    fn missing_credentials_are_configuration_errors() {
        let empty = ServiceProperties::default();
        assert!(matches!(
            empty.authenticator(),
            Err(WatsonError::ConfigurationError(_))
        ));

        let wrong = ServiceProperties::from_vars(
            "svc",
            vars(&[("SVC_AUTH_TYPE", "basic"), ("SVC_USERNAME", "u")]),
        );
        assert!(wrong.authenticator().is_err());

        let unknown = ServiceProperties::from_vars("svc", vars(&[("SVC_AUTH_TYPE", "cp4d")]));
        assert!(unknown.authenticator().is_err());
    }

    #[test]
    fn reads_credentials_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "TEXT_TO_SPEECH_APIKEY=abc123").unwrap();
        writeln!(file, "TEXT_TO_SPEECH_URL=https://tts.example.com").unwrap();
        writeln!(file, "TEXT_TO_SPEECH_DISABLE_SSL=true").unwrap();
        writeln!(file, "DISCOVERY_APIKEY=other").unwrap();
        file.flush().unwrap();

        let props = ServiceProperties::from_file("text_to_speech", file.path()).unwrap();
        assert_eq!(props.get("apikey"), Some("abc123"));
        assert_eq!(props.url(), Some("https://tts.example.com"));
        assert!(props.disable_ssl());
        assert!(!props.auth_disable_ssl());
        assert_eq!(props.authenticator().unwrap().authentication_type(), "iam");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServiceProperties::from_file("svc", &dir.path().join("absent.env")).unwrap_err();
        assert!(matches!(err, WatsonError::ConfigurationError(_)));
    }
}
