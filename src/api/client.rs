//! API Client
//!
//! Cache-first access to the catalog API with typed decoding.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::Transport;
use crate::cache::Cache;
use crate::error::Result;
use crate::models::{decode, Creature, LocationArea, LocationPage};

/// Client that answers from the cache when it can and from the transport
/// otherwise.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    cache: Cache,
    base_url: String,
}

impl ApiClient {
    /// Creates a client rooted at `base_url` (no trailing slash).
    pub fn new(transport: Arc<dyn Transport>, cache: Cache, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            cache,
            base_url: base_url.into(),
        }
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // == Cached Fetch ==
    /// Returns the body for `url`, from the cache if present.
    ///
    /// On a miss the body is fetched and cached under that exact URL before
    /// it is returned, even if it later fails to decode. A failed fetch
    /// caches an empty body, so repeats within the interval report a decode
    /// failure without touching the network.
    pub async fn fetch_cached(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            return Ok(body);
        }

        debug!(url, "cache miss, fetching");
        match self.transport.fetch(url).await {
            Ok(body) => {
                self.cache.add(url, body.clone()).await;
                Ok(body)
            }
            Err(e) => {
                warn!(url, error = %e, "fetch failed, caching empty body");
                self.cache.add(url, Vec::new()).await;
                Err(e)
            }
        }
    }

    /// One page of the location listing.
    pub async fn location_page(&self, url: &str) -> Result<LocationPage> {
        let body = self.fetch_cached(url).await?;
        decode(&body)
    }

    /// Encounters in the named location area.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        let body = self.fetch_cached(&url).await?;
        decode(&body)
    }

    /// Detail record for the named creature.
    pub async fn creature(&self, name: &str) -> Result<Creature> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let body = self.fetch_cached(&url).await?;
        decode(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PokedexError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Serves a fixed body for every URL and counts calls.
    struct FixedTransport {
        body: Option<Vec<u8>>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Transport for FixedTransport {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.body
                .clone()
                .ok_or_else(|| PokedexError::Transport(format!("{} unreachable", url)))
        }
    }

    fn client_with(body: Option<&[u8]>) -> (ApiClient, Arc<FixedTransport>) {
        let transport = Arc::new(FixedTransport {
            body: body.map(|b| b.to_vec()),
            calls: AtomicUsize::new(0),
        });
        let client = ApiClient::new(
            transport.clone(),
            Cache::new(Duration::from_secs(5)),
            "http://api.test",
        );
        (client, transport)
    }

    #[tokio::test]
    async fn test_fetch_cached_hits_transport_once() {
        let (client, transport) = client_with(Some(b"body"));

        assert_eq!(client.fetch_cached("http://api.test/x").await.unwrap(), b"body");
        assert_eq!(client.fetch_cached("http://api.test/x").await.unwrap(), b"body");

        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_caches_empty_body() {
        let (client, transport) = client_with(None);

        let first = client.creature("abra").await;
        let second = client.creature("abra").await;

        assert!(matches!(first, Err(PokedexError::Transport(_))));
        assert!(matches!(second, Err(PokedexError::Decode(_))));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            client.cache().get("http://api.test/pokemon/abra").await,
            Some(Vec::new())
        );
    }

    #[tokio::test]
    async fn test_undecodable_body_is_cached_and_reported() {
        let (client, transport) = client_with(Some(b"Not Found"));

        let first = client.creature("missingno").await;
        let second = client.creature("missingno").await;

        assert!(matches!(first, Err(PokedexError::Decode(_))));
        assert!(matches!(second, Err(PokedexError::Decode(_))));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_urls_built_from_base() {
        let (client, _) = client_with(Some(br#"{"pokemon_encounters": []}"#));

        client.location_area("pastoria-city-area").await.unwrap();

        assert!(client
            .cache()
            .get("http://api.test/location-area/pastoria-city-area")
            .await
            .is_some());
    }
}
