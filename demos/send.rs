//! Send one message and print its status.
//!
//! ```text
//! PROMAILGATE_HOST=mail.example.com PROMAILGATE_API_KEY=... \
//!     cargo run --example send -- user@example.com
//! ```
//!
//! Set `PROMAILGATE_URL` instead of `PROMAILGATE_HOST` to use a full base URL.

use promailgate_client::{Client, SendRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let recipient = std::env::args()
        .nth(1)
        .ok_or("usage: send <recipient>")?;

    let mut builder = Client::builder();
    if let Ok(url) = std::env::var("PROMAILGATE_URL") {
        builder = builder.url(url);
    } else if let Ok(host) = std::env::var("PROMAILGATE_HOST") {
        builder = builder.host(host);
    }
    if let Ok(key) = std::env::var("PROMAILGATE_API_KEY") {
        builder = builder.default_api_key(key);
    }
    let client = builder.build()?;

    let request = SendRequest::new(recipient).data("source", "promailgate-client demo");
    let result = client.send_email(request).await?;

    match result.message_id() {
        Some(id) => {
            println!("Sent: {id}");
            let status = client.get_message_status(id).await?;
            println!("Status: {status:#}");
        }
        None => println!("Sent (no message ID returned)"),
    }

    Ok(())
}
