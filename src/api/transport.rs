//! Transport
//!
//! The raw byte-fetching seam between the client and the network.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{PokedexError, Result};

/// Fetches the body behind a URL.
///
/// Implementations do not retry; a failure is reported once.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Transport backed by a reqwest client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Transport(format!("{} returned {}", url, status)));
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_invalid_url_is_transport_error() {
        let transport = HttpTransport::new();

        let result = transport.fetch("not a url").await;
        assert!(matches!(result, Err(PokedexError::Transport(_))));
    }
}
