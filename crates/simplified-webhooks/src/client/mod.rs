//! Simplified Webhooks client and configuration.
//!
//! This module provides the core client for the webhook registration API,
//! along with its configuration and builder.

pub use self::config::{WebhooksBuilder, WebhooksBuilderError, WebhooksConfig};
pub use self::webhooks_client::WebhooksClient;

pub mod config;
pub mod webhooks_client;
