//! # ProMailGate Client
//! Client for the ProMailGate email sending service: submit a message with [`Client::send_email`] and look up its delivery status with [`Client::get_message_status`].
//!
//! ## Configuration
//! Build a [`Client`] with [`ClientBuilder`]. Point it at either a bare host (the scheme follows `use_tls`) or a full base URL, which is used verbatim. A default API key can be stored on the client; a key set on an individual [`SendRequest`] always wins.
//!
//! ## Runtime requirements
//! [`Client`] is async and uses `reqwest`, so run it inside a Tokio (v1) runtime. Enable the `blocking` feature for [`blocking::Client`], which performs the same calls synchronously.
//!
//! ## Out of scope
//! No retries, batching, rate limiting or status caching. Each operation is exactly one HTTP request; wrap the client yourself if you need timeouts or retries.
//!
//! ## Errors
//! Missing API keys and empty recipients are rejected before any request is made. Every documented status code maps to its own [`Error`] variant; anything else becomes [`Error::UnknownResponse`] carrying the code. Transport failures surface as [`Error::Request`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Logging
//! Requests and response codes are emitted as `tracing` events at `debug` level. API keys are never logged.
//!
//! ## Example
//! ```no_run
//! use promailgate_client::{Client, SendRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), promailgate_client::Error> {
//!     let client = Client::builder()
//!         .host("mail.example.com")
//!         .default_api_key("my-api-key")
//!         .build()?;
//!
//!     let result = client
//!         .send_email(SendRequest::new("user@example.com").data("name", "Ada"))
//!         .await?;
//!
//!     if let Some(id) = result.message_id() {
//!         let status = client.get_message_status(id).await?;
//!         println!("{status}");
//!     }
//!     Ok(())
//! }
//! ```

#[cfg(feature = "blocking")]
pub mod blocking;
mod client;
mod config;
mod error;
mod models;
mod response;

pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, Endpoint};
pub use error::Error;
pub use models::{MessageStatus, SendRequest, SendResult};

/// Result type alias for ProMailGate operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
