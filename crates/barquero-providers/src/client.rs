//! HTTP client configuration shared by the provider adapters.

use reqwest::Client;
use std::time::Duration;

/// Configuration for provider HTTP clients.
///
/// There are deliberately no retry or backoff settings here: a failed
/// request propagates to the caller unchanged, and the batch runner decides
/// what a failure means for the run.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout (separate from the request timeout).
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("barquero/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Builds a reqwest client from the given configuration.
///
/// Connections are pooled and kept alive so the adapters' sequential
/// requests (pagination pages, multiple assets on one provider) reuse them.
pub(crate) fn build_client(config: &ClientConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .pool_idle_timeout(Duration::from_secs(90))
        .tcp_nodelay(true)
        .tcp_keepalive(Duration::from_secs(60))
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(&config.user_agent)
        .gzip(true)
        .build()
}
