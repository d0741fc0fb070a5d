//! Maps HTTP responses to results.
//!
//! Both clients read the status and the full body, then hand them here.

use crate::models::{MessageStatus, SendResult};
use crate::{Error, Result};
use reqwest::StatusCode;
use serde_json::Value;

const NO_ERROR_PROVIDED: &str = "No error provided";

/// Interpret a `POST /api/message/send` response.
pub(crate) fn send_result(status: StatusCode, body: &[u8]) -> Result<SendResult> {
    match status.as_u16() {
        201 => {
            let response: Value = serde_json::from_slice(body)?;
            response
                .get("message_id")
                .and_then(|v| v.as_str())
                .map(|id| SendResult::MessageId(id.to_string()))
                .ok_or(Error::ResponseParse("message_id"))
        }
        200 => Ok(SendResult::Accepted),
        401 => Err(Error::InvalidApiKey),
        400 => {
            let reason = send_error_reason(body);
            tracing::trace!(%reason, "send rejected");
            Err(Error::SendError { reason })
        }
        500 => Err(Error::UnknownSendError),
        other => Err(Error::UnknownResponse { status: other }),
    }
}

/// Interpret a `GET /api/message/status/<id>` response.
pub(crate) fn message_status(status: StatusCode, body: &[u8]) -> Result<MessageStatus> {
    match status.as_u16() {
        200 => Ok(serde_json::from_slice(body)?),
        404 => Err(Error::NoSuchMessage),
        500 => Err(Error::UnknownServerError),
        other => Err(Error::UnknownResponse { status: other }),
    }
}

/// `Reason` comes from the gateway itself, `message` from its web server.
fn send_error_reason(body: &[u8]) -> String {
    let Ok(response) = serde_json::from_slice::<Value>(body) else {
        return NO_ERROR_PROVIDED.to_string();
    };

    ["Reason", "message"]
        .iter()
        .find_map(|key| response.get(*key))
        .map(|v| match v.as_str() {
            Some(s) => s.to_string(),
            None => v.to_string(),
        })
        .unwrap_or_else(|| NO_ERROR_PROVIDED.to_string())
}
