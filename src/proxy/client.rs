use once_cell::sync::Lazy;
use std::time::Duration;

fn builder() -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .pool_idle_timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(32)
        .tcp_keepalive(Duration::from_secs(60))
}

/// Shared pooled client without a request timeout.
pub static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    builder()
        .build()
        .expect("Failed to create HTTP client")
});

pub fn client_with_timeout(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    builder().timeout(timeout).build()
}
