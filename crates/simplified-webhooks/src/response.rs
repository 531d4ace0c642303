//! API response types.

use serde::{Deserialize, Serialize};

/// Successful response from the register and delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    /// Human-readable status message.
    pub message: String,
    /// Identifier of the affected webhook.
    pub webhook_id: String,
}

/// Error body returned by the API on non-2xx responses.
///
/// The server sends any subset of these fields; a missing, empty, or
/// non-JSON body is equivalent to [`ApiErrorResponse::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// When the failure occurred, in the server's clock.
    pub timestamp: Option<String>,
    /// HTTP status code echoed in the body.
    pub status: Option<u16>,
    /// Short error classification.
    pub error: Option<String>,
    /// Human-readable failure description.
    pub message: Option<String>,
    /// Request field the failure is attributed to.
    pub path: Option<String>,
}
