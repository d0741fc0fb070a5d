//! ProMailGate async client implementation.

use crate::config::{ClientConfig, Endpoint};
use crate::models::{MessageStatus, SendRequest, SendResult};
use crate::{Error, Result, response};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

/// Async client for the ProMailGate send API.
///
/// Every operation issues exactly one HTTP request and waits for the full
/// response. Use [`Client::builder`] to configure it.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for `host` with TLS on and no default API key.
    ///
    /// # Examples
    /// ```no_run
    /// # use promailgate_client::Client;
    /// let client = Client::new("mail.example.com")?;
    /// assert_eq!(client.base_url(), "https://mail.example.com");
    /// # Ok::<(), promailgate_client::Error>(())
    /// ```
    pub fn new(host: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().host(host).build()
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base URL that API paths are appended to.
    pub fn base_url(&self) -> String {
        self.config.base_url()
    }

    /// Whether TLS certificates are verified.
    pub fn verify_tls(&self) -> bool {
        self.config.verify_tls()
    }

    /// Get the proxy URL if one was configured.
    pub fn proxy(&self) -> Option<&str> {
        self.config.proxy()
    }

    /// Send an email.
    ///
    /// Fails with [`Error::NoApiKeyProvided`] or [`Error::NoRecipientProvided`]
    /// before touching the network when the request is incomplete.
    ///
    /// # Returns
    /// [`SendResult::MessageId`] on HTTP 201, [`SendResult::Accepted`] on HTTP 200.
    ///
    /// # Examples
    /// ```no_run
    /// # use promailgate_client::{Client, SendRequest};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), promailgate_client::Error> {
    /// let client = Client::builder()
    ///     .host("mail.example.com")
    ///     .default_api_key("my-key")
    ///     .build()?;
    /// let result = client
    ///     .send_email(SendRequest::new("user@example.com").data("name", "Ada"))
    ///     .await?;
    /// if let Some(id) = result.message_id() {
    ///     println!("queued as {id}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_email(&self, request: SendRequest) -> Result<SendResult> {
        let body = request.prepare(&self.config)?;
        let url = self.config.send_url();
        tracing::debug!(%url, "POST message send");

        let response = self
            .http
            .post(&url)
            .headers(headers())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "send response");
        let bytes = response.bytes().await?;
        response::send_result(status, &bytes)
    }

    /// Fetch the delivery status of a sent message.
    ///
    /// The server's JSON document is returned untouched.
    ///
    /// # Examples
    /// ```no_run
    /// # use promailgate_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), promailgate_client::Error> {
    /// let client = Client::new("mail.example.com")?;
    /// let status = client.get_message_status("abc-123").await?;
    /// println!("{}", status["MessageStatus"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_message_status(&self, message_id: &str) -> Result<MessageStatus> {
        let url = self.config.status_url(message_id);
        tracing::debug!(%url, "GET message status");

        let response = self.http.get(&url).headers(headers()).send().await?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "status response");
        let bytes = response.bytes().await?;
        response::message_status(status, &bytes)
    }
}

/// Headers sent with every request.
pub(crate) fn headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

const USER_AGENT_VALUE: &str = concat!("promailgate-client/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a ProMailGate client.
///
/// Start with [`Client::builder`]. Either [`host`](Self::host) or
/// [`url`](Self::url) must be set; a URL wins when both are.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    host: Option<String>,
    url: Option<String>,
    use_tls: bool,
    verify_tls: bool,
    default_api_key: Option<String>,
    proxy: Option<String>,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - No host or URL
    /// - `use_tls = true`
    /// - `verify_tls = true`
    /// - No default API key
    /// - No proxy
    /// - `promailgate-client/<version>` user agent
    pub fn new() -> Self {
        Self {
            host: None,
            url: None,
            use_tls: true,
            verify_tls: true,
            default_api_key: None,
            proxy: None,
            user_agent: USER_AGENT_VALUE.to_string(),
        }
    }

    /// Set the host (e.g. "mail.example.com" or "10.0.0.5:8080").
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set a full base URL (e.g. "https://gate.example.com/v1").
    ///
    /// Used verbatim; host and TLS settings are ignored.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Use `https` (default) or `http` when composing the URL from a host.
    pub fn use_tls(mut self, value: bool) -> Self {
        self.use_tls = value;
        self
    }

    /// Control whether TLS certificates are verified (default: true).
    pub fn verify_tls(mut self, value: bool) -> Self {
        self.verify_tls = value;
        self
    }

    /// API key used when a [`SendRequest`] does not carry one.
    pub fn default_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.default_api_key = Some(api_key.into());
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Freeze the settings into a [`ClientConfig`].
    pub fn into_config(self) -> Result<ClientConfig> {
        let endpoint = match (self.url, self.host) {
            (Some(url), _) => Endpoint::Url(url),
            (None, Some(host)) => Endpoint::Host {
                host,
                use_tls: self.use_tls,
            },
            (None, None) => return Err(Error::NoEndpoint),
        };

        Ok(ClientConfig {
            endpoint,
            verify_tls: self.verify_tls,
            default_api_key: self.default_api_key,
            proxy: self.proxy,
            user_agent: self.user_agent,
        })
    }

    /// Build the client. No network activity happens here.
    pub fn build(self) -> Result<Client> {
        let config = self.into_config()?;

        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(!config.verify_tls)
            .user_agent(config.user_agent.as_str());

        if let Some(proxy_url) = &config.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let http = builder.build()?;
        Ok(Client { http, config })
    }

    /// Build a [`blocking::Client`](crate::blocking::Client) with the same settings.
    #[cfg(feature = "blocking")]
    pub fn build_blocking(self) -> Result<crate::blocking::Client> {
        crate::blocking::Client::from_config(self.into_config()?)
    }
}
