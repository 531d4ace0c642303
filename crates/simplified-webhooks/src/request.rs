//! Webhook registration request types.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Table events a webhook can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WebhookEvent {
    /// A record was created in the watched table.
    RecordCreate,
    /// A record was updated in the watched table.
    RecordUpdate,
    /// A record was deleted from the watched table.
    RecordDelete,
}

/// Parameters for registering a new webhook.
///
/// The payload is serialized exactly as given: no fields are filtered,
/// defaulted, or validated client-side. In particular `column_id` is only
/// meaningful for [`WebhookEvent::RecordUpdate`], but enforcing that is the
/// server's responsibility.
///
/// # Examples
///
/// ```
/// use simplified_webhooks::{WebhookEvent, WebhookRegistration};
///
/// let registration = WebhookRegistration::new(
///     "appOlUtnojehnoTMY",
///     "tblWW2hL9oVjBb156",
///     WebhookEvent::RecordUpdate,
///     "https://example.com/hook",
/// )
/// .with_column_ids(["fld5w6lzAB4okiL1L"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRegistration {
    /// ID of the base containing the watched table.
    pub base_id: String,
    /// ID of the table to watch.
    pub table_id: String,
    /// Event type to subscribe to.
    pub event: WebhookEvent,
    /// URL that will receive event notifications.
    pub webhook_url: String,
    /// Column IDs to watch for updates; omitted from the payload when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_id: Option<Vec<String>>,
}

impl WebhookRegistration {
    /// Creates a new registration for the given base, table, and event.
    pub fn new(
        base_id: impl Into<String>,
        table_id: impl Into<String>,
        event: WebhookEvent,
        webhook_url: impl Into<String>,
    ) -> Self {
        Self {
            base_id: base_id.into(),
            table_id: table_id.into(),
            event,
            webhook_url: webhook_url.into(),
            column_id: None,
        }
    }

    /// Sets the column IDs to watch for updates.
    pub fn with_column_ids<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_id = Some(columns.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_wire_format() {
        let json = serde_json::to_string(&WebhookEvent::RecordUpdate).unwrap();
        assert_eq!(json, "\"record_update\"");

        let event: WebhookEvent = serde_json::from_str("\"record_delete\"").unwrap();
        assert_eq!(event, WebhookEvent::RecordDelete);
    }

    #[test]
    fn test_event_string_forms() {
        use std::str::FromStr;

        assert_eq!(WebhookEvent::RecordCreate.to_string(), "record_create");
        assert_eq!(
            WebhookEvent::from_str("record_update").unwrap(),
            WebhookEvent::RecordUpdate
        );
        assert!(WebhookEvent::from_str("record_upsert").is_err());
    }

    #[test]
    fn test_registration_serializes_camel_case() {
        let registration = WebhookRegistration::new(
            "base123",
            "table123",
            WebhookEvent::RecordCreate,
            "https://example.com/hook",
        );

        let value = serde_json::to_value(&registration).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "baseId": "base123",
                "tableId": "table123",
                "event": "record_create",
                "webhookUrl": "https://example.com/hook",
            })
        );
    }

    #[test]
    fn test_registration_includes_column_ids_when_set() {
        let registration = WebhookRegistration::new(
            "base123",
            "table123",
            WebhookEvent::RecordUpdate,
            "https://example.com/hook",
        )
        .with_column_ids(["fldA", "fldB"]);

        let value = serde_json::to_value(&registration).unwrap();
        assert_eq!(value["columnId"], serde_json::json!(["fldA", "fldB"]));
    }

    #[test]
    fn test_column_ids_pass_through_for_any_event() {
        // The client never enforces that columnId is only used with
        // record_update; the server owns that validation.
        let registration = WebhookRegistration::new(
            "base123",
            "table123",
            WebhookEvent::RecordDelete,
            "https://example.com/hook",
        )
        .with_column_ids(["fldA"]);

        let value = serde_json::to_value(&registration).unwrap();
        assert_eq!(value["columnId"], serde_json::json!(["fldA"]));
    }
}
