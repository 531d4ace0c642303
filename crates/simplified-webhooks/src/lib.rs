#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for client operations.
///
/// Use this target for logging client initialization, outbound requests,
/// and request-level errors.
pub const TRACING_TARGET_CLIENT: &str = "simplified_webhooks::client";

/// Tracing target for configuration operations.
pub const TRACING_TARGET_CONFIG: &str = "simplified_webhooks::config";

mod client;
pub mod error;
#[doc(hidden)]
pub mod prelude;
pub mod request;
pub mod response;

pub use crate::client::{WebhooksBuilder, WebhooksBuilderError, WebhooksClient, WebhooksConfig};
pub use crate::error::{Error, Result};
pub use crate::request::{WebhookEvent, WebhookRegistration};
pub use crate::response::{ApiErrorResponse, WebhookResponse};
