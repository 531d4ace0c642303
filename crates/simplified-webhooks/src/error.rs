//! Error types for the Simplified Webhooks client.
//!
//! Every failure surfaced by the client is a variant of [`Error`]. Server
//! failures are classified by HTTP status code; anything that fails before
//! an HTTP response exists (DNS, connection, timeouts, body decoding) is a
//! [`Error::Transport`].

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for webhook operations.
///
/// This is a convenience type alias that defaults to using [`Error`] as the
/// error type. Most functions in this crate return this type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default message for authentication failures with no server-supplied text.
const DEFAULT_AUTH_MESSAGE: &str = "Invalid or missing API key";

/// Unified error type for webhook operations.
///
/// The server's field `path` (the offending request field) is only carried
/// by the variants the API reports it for: [`Error::Validation`] and
/// [`Error::NotFound`]. Authentication failures never carry a path, even
/// when the error body contains one.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server rejected the request payload (HTTP 400 or 422).
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        /// Field path the server attributed the failure to, if any.
        path: Option<String>,
    },

    /// The API key was missing, empty, or rejected by the server (HTTP 403).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The requested resource does not exist (HTTP 404).
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        /// Field path the server attributed the failure to, if any.
        path: Option<String>,
    },

    /// Any other non-2xx response from the API.
    #[error("API error: {status} - {message}")]
    Api {
        status: u16,
        message: String,
        path: Option<String>,
    },

    /// Transport-level failure: the request never produced an HTTP
    /// response, or the response body could not be decoded.
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<BoxedError>,
    },
}

impl Error {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Validation {
            message: message.into(),
            path,
        }
    }

    /// Creates an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates an authentication error with the default message.
    pub fn invalid_api_key() -> Self {
        Self::authentication(DEFAULT_AUTH_MESSAGE)
    }

    /// Creates a not-found error.
    pub fn not_found(message: impl Into<String>, path: Option<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            path,
        }
    }

    /// Creates a generic API error for an unmapped status code.
    pub fn api(status: u16, message: impl Into<String>, path: Option<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
            path,
        }
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Returns the human-readable message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::Authentication { message }
            | Self::NotFound { message, .. }
            | Self::Api { message, .. }
            | Self::Transport { message, .. } => message,
        }
    }

    /// Returns the HTTP status code associated with this error, if any.
    ///
    /// Transport failures happen before a response exists and carry none.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { .. } => Some(400),
            Self::Authentication { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Api { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }

    /// Returns the offending field path reported by the server, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Validation { path, .. }
            | Self::NotFound { path, .. }
            | Self::Api { path, .. } => path.as_deref(),
            Self::Authentication { .. } | Self::Transport { .. } => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport {
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_carries_path() {
        let error = Error::validation("Invalid table ID", Some("tableId".to_string()));

        assert_eq!(error.message(), "Invalid table ID");
        assert_eq!(error.status(), Some(400));
        assert_eq!(error.path(), Some("tableId"));
    }

    #[test]
    fn test_authentication_has_no_path() {
        let error = Error::authentication("Invalid API key");

        assert_eq!(error.message(), "Invalid API key");
        assert_eq!(error.status(), Some(403));
        assert!(error.path().is_none());
    }

    #[test]
    fn test_not_found() {
        let error = Error::not_found("Webhook not found", Some("/webhooks/delete/1".to_string()));

        assert_eq!(error.status(), Some(404));
        assert_eq!(error.path(), Some("/webhooks/delete/1"));
    }

    #[test]
    fn test_api_carries_actual_status() {
        let error = Error::api(503, "Service Unavailable", None);

        assert_eq!(error.status(), Some(503));
        assert!(error.path().is_none());
    }

    #[test]
    fn test_transport_has_no_status() {
        let error = Error::transport("connection refused");

        assert_eq!(error.message(), "connection refused");
        assert!(error.status().is_none());
        assert!(error.path().is_none());
    }

    #[test]
    fn test_default_auth_message() {
        let error = Error::invalid_api_key();

        assert_eq!(error.message(), "Invalid or missing API key");
    }

    #[test]
    fn test_display_includes_message() {
        let error = Error::api(500, "Internal Server Error", None);

        let display = error.to_string();
        assert!(display.contains("500"));
        assert!(display.contains("Internal Server Error"));
    }
}
