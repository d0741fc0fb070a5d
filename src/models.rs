//! Request and result types.

use crate::config::ClientConfig;
use crate::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// An email to send through ProMailGate.
///
/// The payload is an arbitrary JSON object handed to the server-side template.
///
/// # Examples
/// ```
/// use promailgate_client::SendRequest;
///
/// let request = SendRequest::new("user@example.com")
///     .data("name", "Ada")
///     .data("order", 1042)
///     .return_id(false);
/// assert_eq!(request.recipient(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SendRequest {
    recipient: String,
    api_key: Option<String>,
    payload: Map<String, Value>,
    return_id: bool,
}

impl SendRequest {
    /// Start a request for `recipient` with an empty payload and `return_id = true`.
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            api_key: None,
            payload: Map::new(),
            return_id: true,
        }
    }

    /// Use this API key instead of the client's default.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Insert one payload entry.
    pub fn data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Replace the whole payload.
    pub fn payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = payload;
        self
    }

    /// Ask the server to return the new message ID (default: true).
    pub fn return_id(mut self, return_id: bool) -> Self {
        self.return_id = return_id;
        self
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Validate against `config` and build the wire body.
    ///
    /// The API key is resolved first, then the recipient checked.
    pub(crate) fn prepare<'a>(&'a self, config: &'a ClientConfig) -> Result<SendBody<'a>> {
        let api_key = config.resolve_api_key(self.api_key.as_deref())?;
        if self.recipient.is_empty() {
            return Err(Error::NoRecipientProvided);
        }
        Ok(self.body(api_key))
    }

    /// Wire body with the resolved key.
    pub(crate) fn body<'a>(&'a self, api_key: &'a str) -> SendBody<'a> {
        SendBody {
            api_key,
            recipient: &self.recipient,
            data: &self.payload,
            return_id: self.return_id,
        }
    }
}

/// JSON body of `POST /api/message/send`.
#[derive(Debug, Serialize)]
pub(crate) struct SendBody<'a> {
    pub api_key: &'a str,
    pub recipient: &'a str,
    pub data: &'a Map<String, Value>,
    pub return_id: bool,
}

/// Outcome of a successful send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendResult {
    /// The server created the message and returned its ID (HTTP 201).
    MessageId(String),
    /// The server accepted the message without an ID (HTTP 200).
    Accepted,
}

impl SendResult {
    /// The message ID, when the server provided one.
    pub fn message_id(&self) -> Option<&str> {
        match self {
            SendResult::MessageId(id) => Some(id.as_str()),
            SendResult::Accepted => None,
        }
    }
}

/// Status document returned by `GET /api/message/status/<id>`.
///
/// The schema belongs to the server, so it is passed through as decoded JSON.
pub type MessageStatus = Value;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        let request = SendRequest::new("user@example.com");
        assert!(request.return_id);
        assert!(request.payload.is_empty());
        assert_eq!(request.api_key, None);
    }

    #[test]
    fn body_matches_wire_format() {
        let request = SendRequest::new("user@example.com")
            .data("name", "Ada")
            .return_id(false);
        let body = serde_json::to_value(request.body("key-1")).unwrap();
        assert_eq!(
            body,
            json!({
                "api_key": "key-1",
                "recipient": "user@example.com",
                "data": {"name": "Ada"},
                "return_id": false
            })
        );
    }

    #[test]
    fn empty_payload_serializes_as_object() {
        let request = SendRequest::new("user@example.com");
        let body = serde_json::to_value(request.body("k")).unwrap();
        assert_eq!(body["data"], json!({}));
        assert_eq!(body["return_id"], json!(true));
    }

    #[test]
    fn payload_replaces_entries() {
        let mut map = Map::new();
        map.insert("b".to_string(), json!(2));
        let request = SendRequest::new("x@y").data("a", 1).payload(map.clone());
        assert_eq!(request.payload, map);
    }

    fn config(default_api_key: Option<&str>) -> ClientConfig {
        ClientConfig {
            endpoint: crate::Endpoint::Url("http://localhost".to_string()),
            verify_tls: true,
            default_api_key: default_api_key.map(str::to_string),
            proxy: None,
            user_agent: "test".to_string(),
        }
    }

    #[test]
    fn prepare_uses_default_key() {
        let cfg = config(Some("default"));
        let request = SendRequest::new("user@example.com");
        assert_eq!(request.prepare(&cfg).unwrap().api_key, "default");
    }

    #[test]
    fn prepare_prefers_request_key() {
        let cfg = config(Some("default"));
        let request = SendRequest::new("user@example.com").api_key("mine");
        assert_eq!(request.prepare(&cfg).unwrap().api_key, "mine");
    }

    #[test]
    fn prepare_checks_key_before_recipient() {
        let cfg = config(None);
        let err = SendRequest::new("").prepare(&cfg).unwrap_err();
        assert!(matches!(err, Error::NoApiKeyProvided));

        let err = SendRequest::new("").api_key("k").prepare(&cfg).unwrap_err();
        assert!(matches!(err, Error::NoRecipientProvided));
    }

    #[test]
    fn send_result_accessors() {
        assert_eq!(SendResult::MessageId("m1".into()).message_id(), Some("m1"));
        assert_eq!(SendResult::Accepted.message_id(), None);
    }
}
