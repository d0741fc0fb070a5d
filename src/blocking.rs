//! Blocking ProMailGate client.
//!
//! Same contract as the async [`Client`](crate::Client), backed by
//! `reqwest::blocking`. Do not call it from inside an async runtime.

use crate::client::headers;
use crate::config::ClientConfig;
use crate::models::{MessageStatus, SendRequest, SendResult};
use crate::{ClientBuilder, Result, response};

/// Blocking client for the ProMailGate send API.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    config: ClientConfig,
}

impl Client {
    /// Create a builder; finish it with [`ClientBuilder::build_blocking`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_config(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(!config.verify_tls)
            .user_agent(config.user_agent.as_str());

        if let Some(proxy_url) = &config.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let http = builder.build()?;
        Ok(Client { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> String {
        self.config.base_url()
    }

    pub fn verify_tls(&self) -> bool {
        self.config.verify_tls()
    }

    /// Send an email. See [`crate::Client::send_email`].
    ///
    /// # Examples
    /// ```no_run
    /// # use promailgate_client::{Client, SendRequest};
    /// let client = Client::builder()
    ///     .host("mail.example.com")
    ///     .default_api_key("my-key")
    ///     .build_blocking()?;
    /// let result = client.send_email(SendRequest::new("user@example.com"))?;
    /// println!("{:?}", result.message_id());
    /// # Ok::<(), promailgate_client::Error>(())
    /// ```
    pub fn send_email(&self, request: SendRequest) -> Result<SendResult> {
        let body = request.prepare(&self.config)?;
        let url = self.config.send_url();
        tracing::debug!(%url, "POST message send");

        let response = self
            .http
            .post(&url)
            .headers(headers())
            .json(&body)
            .send()?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "send response");
        let bytes = response.bytes()?;
        response::send_result(status, &bytes)
    }

    /// Fetch the delivery status of a sent message. See [`crate::Client::get_message_status`].
    pub fn get_message_status(&self, message_id: &str) -> Result<MessageStatus> {
        let url = self.config.status_url(message_id);
        tracing::debug!(%url, "GET message status");

        let response = self.http.get(&url).headers(headers()).send()?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "status response");
        let bytes = response.bytes()?;
        response::message_status(status, &bytes)
    }
}
