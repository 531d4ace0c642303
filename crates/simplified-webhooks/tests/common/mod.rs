//! Shared helpers for mock-server tests.

use simplified_webhooks::{WebhooksClient, WebhooksConfig};
use wiremock::MockServer;

/// API key used by all mock-server tests.
pub const TEST_API_KEY: &str = "test_api_key";

/// Starts a fresh mock server.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Builds a client pointed at the given mock server.
pub fn client_for(server: &MockServer) -> WebhooksClient {
    WebhooksConfig::builder()
        .with_api_key(TEST_API_KEY)
        .with_base_url(server.uri())
        .build_client()
        .expect("client should build")
}
