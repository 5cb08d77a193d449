//! Shared outbound HTTP client.

use std::time::Duration;

use crate::config::HttpTimeouts;

/// Build the `reqwest` client used for every backend call.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client(timeouts: HttpTimeouts) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .user_agent(concat!("episodes-server/", env!("CARGO_PKG_VERSION")))
        .build()
}
