//! Outbound HTTP client for the identity provider.
//!
//! The only outbound call is the JWKS fetch, which happens inside a request,
//! so both the handshake and the whole exchange are bounded.

use reqwest::Client;
use std::time::Duration;

pub const JWKS_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub const JWKS_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn try_build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(JWKS_CONNECT_TIMEOUT)
        .timeout(JWKS_REQUEST_TIMEOUT)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}
