//! Connection settings shared by the async and blocking clients.

use crate::{Error, Result};

/// Where the ProMailGate service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// A bare host (optionally `host:port`); the scheme comes from `use_tls`.
    Host { host: String, use_tls: bool },
    /// A full base URL, used verbatim.
    Url(String),
}

impl Endpoint {
    /// Base URL that API paths are appended to.
    pub fn base_url(&self) -> String {
        match self {
            Endpoint::Url(url) => url.clone(),
            Endpoint::Host { host, use_tls } => {
                let scheme = if *use_tls { "https" } else { "http" };
                format!("{scheme}://{host}")
            }
        }
    }
}

/// Immutable client configuration.
///
/// Built by [`ClientBuilder`](crate::ClientBuilder) and never changed afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) endpoint: Endpoint,
    pub(crate) verify_tls: bool,
    pub(crate) default_api_key: Option<String>,
    pub(crate) proxy: Option<String>,
    pub(crate) user_agent: String,
}

impl ClientConfig {
    /// The configured endpoint.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Base URL that API paths are appended to.
    pub fn base_url(&self) -> String {
        self.endpoint.base_url()
    }

    /// Whether TLS certificates are verified.
    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// The API key used when a send request does not carry its own.
    pub fn default_api_key(&self) -> Option<&str> {
        self.default_api_key.as_deref()
    }

    /// Proxy URL, if one was configured.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// User agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Pick the per-call key if present, else the default.
    pub(crate) fn resolve_api_key<'a>(&'a self, api_key: Option<&'a str>) -> Result<&'a str> {
        api_key
            .or(self.default_api_key.as_deref())
            .ok_or(Error::NoApiKeyProvided)
    }

    pub(crate) fn send_url(&self) -> String {
        format!("{}/api/message/send", self.base_url())
    }

    pub(crate) fn status_url(&self, message_id: &str) -> String {
        format!("{}/api/message/status/{}", self.base_url(), message_id)
    }
}
