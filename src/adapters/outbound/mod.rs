pub mod contact;
pub mod content;
pub mod persistence;

/// Join a backend base address and an API path
pub(crate) fn api_url(base_url: &str, path: &str) -> String {
    format!("{}/api/{}", base_url.trim_end_matches('/'), path)
}

use std::time::Duration;
use tracing::warn;

pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client shared by the outbound adapters
///
/// Falls back to a client without the request timeout if the TLS backend
/// cannot be initialised.
pub(crate) fn http_client() -> reqwest::Client {
    match reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build() {
        Ok(client) => client,
        Err(e) => {
            warn!(
                error = %e,
                timeout_secs = REQUEST_TIMEOUT.as_secs(),
                "Failed to build HTTP client, requests will run without a timeout"
            );
            reqwest::Client::new()
        }
    }
}
