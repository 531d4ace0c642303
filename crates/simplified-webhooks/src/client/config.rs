//! Client configuration and builder.
//!
//! This module provides the configuration type and builder pattern for
//! creating and customizing [`WebhooksClient`] instances.

use std::fmt;
use std::time::Duration;

use derive_builder::Builder;

use crate::error::{Error, Result};
use crate::{TRACING_TARGET_CONFIG, WebhooksClient};

/// Default values for configuration options.
mod defaults {
    /// Production API endpoint.
    pub const BASE_URL: &str = "https://api.simplified-webhooks.com";
}

/// Configuration for the Simplified Webhooks client.
///
/// Immutable once built. The only required value is the API key; everything
/// else falls back to a sensible default.
///
/// Note that no request timeout is applied unless one is set explicitly:
/// if the transport hangs, the call hangs with it. Callers that need an
/// upper bound should set [`WebhooksBuilder::with_request_timeout`] or wrap
/// calls in their own timeout.
#[derive(Clone, Builder)]
#[builder(
    name = "WebhooksBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate_config")
)]
pub struct WebhooksConfig {
    /// API key used as a bearer token on every request.
    api_key: String,

    /// Base URL for API requests.
    ///
    /// Defaults to the production endpoint. A single trailing slash, if
    /// present, is stripped at set time so request paths concatenate
    /// cleanly.
    #[builder(setter(custom), default = "WebhooksConfig::default_base_url()")]
    base_url: String,

    /// Optional timeout applied to every request.
    ///
    /// `None` (the default) means requests may wait indefinitely.
    #[builder(default)]
    request_timeout: Option<Duration>,

    /// User agent string sent with every request.
    #[builder(default = "WebhooksConfig::default_user_agent()")]
    user_agent: String,
}

impl WebhooksBuilder {
    /// Sets the base URL for API requests, stripping one trailing slash.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        let url = match url.strip_suffix('/') {
            Some(stripped) => stripped.to_string(),
            None => url,
        };
        self.base_url = Some(url);
        self
    }

    fn validate_config(&self) -> std::result::Result<(), String> {
        match &self.api_key {
            Some(api_key) if !api_key.trim().is_empty() => Ok(()),
            _ => Err("API key is required".to_string()),
        }
    }

    /// Builds the configuration and creates a client in one step.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use simplified_webhooks::{Result, WebhooksConfig};
    /// # fn example() -> Result<()> {
    /// let client = WebhooksConfig::builder()
    ///     .with_api_key("your-api-key")
    ///     .build_client()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build_client(self) -> Result<WebhooksClient> {
        let config = self.build()?;
        WebhooksClient::new(config)
    }
}

impl WebhooksConfig {
    /// Creates a new configuration builder.
    ///
    /// This is the recommended way to construct a `WebhooksConfig`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simplified_webhooks::WebhooksConfig;
    /// let config = WebhooksConfig::builder()
    ///     .with_api_key("your-api-key")
    ///     .with_base_url("https://staging.simplified-webhooks.com/")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.base_url(), "https://staging.simplified-webhooks.com");
    /// ```
    pub fn builder() -> WebhooksBuilder {
        WebhooksBuilder::default()
    }

    /// Creates a client from this configuration.
    pub fn build_client(self) -> Result<WebhooksClient> {
        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            api_key = %self.masked_api_key(),
            base_url = %self.base_url,
            "Building client from configuration"
        );

        WebhooksClient::new(self)
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns a masked version of the API key for safe display/logging.
    ///
    /// Shows the first 4 characters followed by "****", or just "****"
    /// if the key is shorter than 4 characters.
    pub fn masked_api_key(&self) -> String {
        if self.api_key.len() > 4 {
            format!("{}****", &self.api_key[..4])
        } else {
            "****".to_string()
        }
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the request timeout, if one was set.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Returns the user agent string.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn default_base_url() -> String {
        defaults::BASE_URL.to_string()
    }

    fn default_user_agent() -> String {
        format!("simplified-webhooks/{}", env!("CARGO_PKG_VERSION"))
    }
}

impl From<WebhooksBuilderError> for Error {
    fn from(error: WebhooksBuilderError) -> Self {
        Error::authentication(error.to_string())
    }
}

impl fmt::Debug for WebhooksConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhooksConfig")
            .field("api_key", &self.masked_api_key())
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
