//! Error type for ProMailGate operations.

use thiserror::Error;

/// Everything that can go wrong while talking to ProMailGate.
///
/// The first two variants are raised before any request leaves the process.
/// The status-code variants mirror the responses the service documents, and
/// the remaining ones cover transport and decoding failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither the call nor the client configuration supplied an API key.
    #[error("no API key has been provided")]
    NoApiKeyProvided,

    /// The recipient was empty.
    #[error("no recipient has been provided")]
    NoRecipientProvided,

    /// The server rejected the API key (HTTP 401).
    #[error("invalid API key")]
    InvalidApiKey,

    /// The server refused the message (HTTP 400).
    #[error("send error: {reason}")]
    SendError {
        /// Reason reported by the server, or `"No error provided"`.
        reason: String,
    },

    /// The server failed internally while sending (HTTP 500).
    #[error("internal server error during send")]
    UnknownSendError,

    /// No message exists with the requested ID (HTTP 404).
    #[error("no such message")]
    NoSuchMessage,

    /// The server failed internally while looking up a status (HTTP 500).
    #[error("unknown server error")]
    UnknownServerError,

    /// The server answered with a status code this client does not handle.
    #[error("unknown status code: {status}")]
    UnknownResponse {
        /// The literal HTTP status code.
        status: u16,
    },

    /// The builder was given neither a host nor a URL.
    #[error("no host or URL configured")]
    NoEndpoint,

    /// Transport-level failure (connection, TLS, proxy, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A success response carried a body that is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A success response was valid JSON but missed a required field.
    #[error("failed to parse response: missing `{0}`")]
    ResponseParse(&'static str),
}

impl Error {
    /// Returns `true` for failures detected before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::NoApiKeyProvided | Error::NoRecipientProvided)
    }

    /// The HTTP status code that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::InvalidApiKey => Some(401),
            Error::SendError { .. } => Some(400),
            Error::UnknownSendError | Error::UnknownServerError => Some(500),
            Error::NoSuchMessage => Some(404),
            Error::UnknownResponse { status } => Some(*status),
            Error::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
