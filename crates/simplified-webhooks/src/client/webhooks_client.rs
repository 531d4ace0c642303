//! Webhooks client implementation.
//!
//! This module provides the main client for the webhook registration API.
//! It handles authentication, the shared request pipeline, and the mapping
//! of error responses onto the crate's [`Error`] kinds.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use super::WebhooksConfig;
use crate::TRACING_TARGET_CLIENT;
use crate::error::{Error, Result};
use crate::request::WebhookRegistration;
use crate::response::{ApiErrorResponse, WebhookResponse};

/// Client for the Simplified Webhooks registration API.
///
/// Cheap to clone; clones share the underlying connection pool. Each call
/// issues exactly one outbound request and carries no cross-call ordering
/// guarantee.
///
/// # Examples
///
/// ```no_run
/// use simplified_webhooks::{WebhookEvent, WebhookRegistration, WebhooksClient};
///
/// # async fn example() -> simplified_webhooks::Result<()> {
/// let client = WebhooksClient::from_api_key("your-api-key")?;
///
/// let registration = WebhookRegistration::new(
///     "appOlUtnojehnoTMY",
///     "tblWW2hL9oVjBb156",
///     WebhookEvent::RecordCreate,
///     "https://example.com/hook",
/// );
///
/// let response = client.register_webhook(&registration).await?;
/// client.delete_webhook(&response.webhook_id).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WebhooksClient {
    http: HttpClient,
    config: WebhooksConfig,
}

impl WebhooksClient {
    /// Creates a new client with the given configuration.
    ///
    /// No network activity happens here; the configuration's API key has
    /// already been validated by the builder.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key cannot be encoded as a header value
    /// or the HTTP client cannot be constructed.
    pub fn new(config: WebhooksConfig) -> Result<Self> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            base_url = %config.base_url(),
            timeout = ?config.request_timeout(),
            "Creating webhooks client"
        );

        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key()))
            .map_err(|e| Error::authentication(format!("Invalid API key: {}", e)))?;
        headers.insert(AUTHORIZATION, bearer);

        let mut builder = HttpClient::builder()
            .user_agent(config.user_agent())
            .default_headers(headers);

        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder.build()?;

        Ok(Self { http, config })
    }

    /// Creates a client from an API key, using default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if the key is empty.
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self> {
        let config = WebhooksConfig::builder().with_api_key(api_key).build()?;
        Self::new(config)
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &WebhooksConfig {
        &self.config
    }

    /// Registers a new webhook for the given base, table, and event.
    ///
    /// Sends `POST {base_url}/webhooks/register` with the registration
    /// serialized verbatim as the JSON body. The server validates the
    /// payload; the client performs no checks of its own.
    pub async fn register_webhook(
        &self,
        params: &WebhookRegistration,
    ) -> Result<WebhookResponse> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            base_id = %params.base_id,
            table_id = %params.table_id,
            event = %params.event,
            "Registering webhook"
        );

        let url = self.endpoint("/webhooks/register");
        let request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(params);

        let response: WebhookResponse = self.execute(request).await?;

        tracing::info!(
            target: TRACING_TARGET_CLIENT,
            webhook_id = %response.webhook_id,
            "Webhook registered"
        );

        Ok(response)
    }

    /// Deletes an existing webhook by its ID.
    ///
    /// Sends `DELETE {base_url}/webhooks/delete/{webhook_id}` with no body.
    /// The ID is interpolated into the path verbatim, so the caller is
    /// responsible for supplying a path-safe ID. The Content-Type header is
    /// sent even though the request has no body, for compatibility with the
    /// server.
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<WebhookResponse> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            webhook_id = %webhook_id,
            "Deleting webhook"
        );

        let url = self.endpoint(&format!("/webhooks/delete/{}", webhook_id));
        let request = self
            .http
            .delete(url)
            .header(CONTENT_TYPE, "application/json");

        let response: WebhookResponse = self.execute(request).await?;

        tracing::info!(
            target: TRACING_TARGET_CLIENT,
            webhook_id = %response.webhook_id,
            "Webhook deleted"
        );

        Ok(response)
    }

    /// Builds the full request URL for an API path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// Shared request pipeline for both operations.
    ///
    /// Transport failures (including response-body decode failures) convert
    /// to [`Error::Transport`]; non-2xx statuses are mapped onto the typed
    /// error kinds. Only 2xx counts as success.
    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let error = map_error_response(status, &body);

            tracing::error!(
                target: TRACING_TARGET_CLIENT,
                status = status.as_u16(),
                error = %error,
                "Request failed"
            );

            return Err(error);
        }

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            status = status.as_u16(),
            "Received response"
        );

        Ok(response.json().await?)
    }
}

/// Maps a non-2xx response onto the typed error kinds.
///
/// The body is decoded best-effort: a missing, empty, or non-JSON body
/// degrades to "no extra information" rather than masking the HTTP failure.
/// The message falls back to the status code's canonical reason phrase.
fn map_error_response(status: StatusCode, body: &[u8]) -> Error {
    let error_body: ApiErrorResponse = serde_json::from_slice(body).unwrap_or_default();

    let message = error_body
        .message
        .unwrap_or_else(|| reason_phrase(status));
    let path = error_body.path;

    match status.as_u16() {
        400 | 422 => Error::validation(message, path),
        // The API never attributes authentication failures to a field,
        // so the path is dropped here even when the body carries one.
        403 => Error::authentication(message),
        404 => Error::not_found(message, path),
        code => Error::api(code, message, path),
    }
}

/// Returns the canonical reason phrase for a status code.
fn reason_phrase(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}
