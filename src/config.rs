//! Webhook configuration.
//!
//! The crate defines no file format. [`WebhookConfig`] implements
//! `Deserialize` for embedding applications that load their own config,
//! and [`WebhookConfig::from_env`] covers the environment-variable case.

use std::time::Duration;

use serde::Deserialize;

use crate::webhook::WebhookError;

/// Environment variable names read by [`WebhookConfig::from_env`].
pub mod env {
    /// Webhook endpoint URL (required).
    pub const WEBHOOK_URL: &str = "ZOOM_WEBHOOK_URL";

    /// Verification token sent in the `X-Zoom-Token` header (required).
    pub const TOKEN: &str = "ZOOM_TOKEN";

    /// Request timeout in whole seconds (optional).
    pub const TIMEOUT_SECS: &str = "ZOOM_TIMEOUT_SECS";
}

/// Settings needed to build a [`WebhookClient`](crate::WebhookClient).
///
/// Values are not validated here; validation happens when the client is built.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WebhookConfig {
    /// Webhook endpoint URL
    pub webhook_url: String,

    /// Verification token
    pub token: String,

    /// Optional request timeout; `None` means no timeout. Zero is rejected.
    #[serde(default, rename = "timeout_secs", deserialize_with = "de_secs")]
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("webhook_url", &self.webhook_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn de_secs<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<u64>::deserialize(deserializer)? {
        Some(0) => Err(serde::de::Error::custom(
            "timeout_secs must be at least 1 second",
        )),
        secs => Ok(secs.map(Duration::from_secs)),
    }
}

impl WebhookConfig {
    /// Creates a configuration without a timeout.
    #[must_use]
    pub fn new(webhook_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            token: token.into(),
            timeout: None,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Config`] if a required variable is unset or
    /// the timeout is not a positive whole number of seconds.
    pub fn from_env() -> Result<Self, WebhookError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// See [`WebhookConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WebhookError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let required = |key: &'static str| {
            get(key).ok_or_else(|| WebhookError::config(format!("{key} is not set")))
        };

        let webhook_url = required(env::WEBHOOK_URL)?;
        let token = required(env::TOKEN)?;
        let timeout = get(env::TIMEOUT_SECS)
            .map(|raw| match raw.trim().parse::<u64>() {
                Ok(0) => Err(WebhookError::config(format!(
                    "{} must be at least 1 second",
                    env::TIMEOUT_SECS
                ))),
                Ok(secs) => Ok(Duration::from_secs(secs)),
                Err(e) => Err(WebhookError::config(format!(
                    "{} must be a whole number of seconds, got '{raw}': {e}",
                    env::TIMEOUT_SECS
                ))),
            })
            .transpose()?;

        Ok(Self {
            webhook_url,
            token,
            timeout,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
