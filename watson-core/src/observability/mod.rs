//! Tracing subscriber setup.
//!
//! The SDK only emits `tracing` events (targets under `watson::`). Binaries
//! that want to see them can install a subscriber here or bring their own.
//!
//! ```rust,ignore
//! use watson_core::observability::{init_subscriber, OutputFormat, SubscriberConfig};
//!
//! init_subscriber(SubscriberConfig {
//!     log_level: tracing::Level::DEBUG,
//!     output_format: OutputFormat::Json,
//! })?;
//! ```

use crate::error::WatsonError;
use std::str::FromStr;

pub const LOG_LEVEL_VAR: &str = "WATSON_LOG_LEVEL";
pub const LOG_FORMAT_VAR: &str = "WATSON_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = WatsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(WatsonError::ConfigurationError(format!(
                "{LOG_FORMAT_VAR} must be `text` or `json`, got `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberConfig {
    /// Most verbose level shown for SDK targets.
    pub log_level: tracing::Level,
    pub output_format: OutputFormat,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            log_level: tracing::Level::INFO,
            output_format: OutputFormat::Text,
        }
    }
}

impl SubscriberConfig {
    /// Read the level and format from the environment, keeping the defaults
    /// for unset variables.
    pub fn from_env() -> Result<Self, WatsonError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, WatsonError> {
        let mut config = Self::default();
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = level.parse().map_err(|_| {
                WatsonError::ConfigurationError(format!(
                    "{LOG_LEVEL_VAR} must be one of trace, debug, info, warn, error; got `{level}`"
                ))
            })?;
        }
        if let Some(format) = lookup(LOG_FORMAT_VAR) {
            config.output_format = format.parse()?;
        }
        Ok(config)
    }

    /// The `env-filter` directive selecting SDK events at the configured level.
    pub fn filter_directive(&self) -> String {
        let level = self.log_level.as_str().to_ascii_lowercase();
        format!("watson={level},watson_core={level}")
    }
}

/// Install a global `fmt` subscriber filtered to the SDK targets.
///
/// Returns `Ok(())` without changes when a global subscriber is already set.
pub fn init_subscriber(config: SubscriberConfig) -> Result<(), WatsonError> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }
    let fmt = tracing_subscriber::fmt()
        .with_env_filter(config.filter_directive())
        .with_target(true);
    let installed = match config.output_format {
        OutputFormat::Json => fmt.json().try_init(),
        OutputFormat::Text => fmt.try_init(),
    };
    installed
        .map_err(|e| WatsonError::ConfigurationError(format!("Failed to initialize tracing: {e}")))
}

/// [`init_subscriber`] with [`SubscriberConfig::from_env`].
pub fn init_from_env() -> Result<(), WatsonError> {
    init_subscriber(SubscriberConfig::from_env()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_level_and_format() {
        let config = SubscriberConfig::from_lookup(|name| match name {
            LOG_LEVEL_VAR => Some("DEBUG".to_string()),
            LOG_FORMAT_VAR => Some("Json".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.log_level, tracing::Level::DEBUG);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.filter_directive(), "watson=debug,watson_core=debug");

        assert_eq!(SubscriberConfig::from_lookup(|_| None).unwrap(), SubscriberConfig::default());
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(SubscriberConfig::from_lookup(|name| {
            (name == LOG_LEVEL_VAR).then(|| "loud".to_string())
        })
        .is_err());
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn second_init_is_not_an_error() {
        assert!(init_subscriber(SubscriberConfig::default()).is_ok());
        assert!(init_subscriber(SubscriberConfig::default()).is_ok());
    }
}
