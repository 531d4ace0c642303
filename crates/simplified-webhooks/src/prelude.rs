//! Prelude for the simplified-webhooks crate.
//!
//! This module re-exports the most commonly used types from the crate
//! to provide a convenient single import for users.

pub use crate::client::{WebhooksClient, WebhooksConfig};
pub use crate::error::{Error, Result};
pub use crate::request::{WebhookEvent, WebhookRegistration};
pub use crate::response::WebhookResponse;
