//! Remote token registry and its process-wide cache.
//!
//! The registry maps uppercase token symbols to on-chain metadata. The
//! cache is owned by the composition root and handed to the resolver; it
//! is not a module-level global.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use ethers::types::Address;
use reqwest::header::ACCEPT;
use tokio::sync::RwLock;

use crate::domain::token::TokenMetadata;
use crate::shared::error::{PayError, PayResult};

pub type TokenMap = HashMap<String, TokenMetadata>;

/// Source of the remote token list.
#[async_trait]
pub trait RegistryFetcher: Send + Sync {
    async fn fetch(&self) -> PayResult<TokenMap>;
}

/// Time-bounded cache over a `RegistryFetcher`.
///
/// Concurrent refreshes are not deduplicated: the list comes from an
/// idempotent source, so the last writer wins and staleness is bounded by
/// the TTL alone.
pub struct TokenRegistryCache {
    ttl: Duration,
    fetcher: Arc<dyn RegistryFetcher>,
    cached: RwLock<Option<CachedRegistry>>,
}

struct CachedRegistry {
    fetched_at: Instant,
    entries: Arc<TokenMap>,
}

impl TokenRegistryCache {
    pub fn new(fetcher: Arc<dyn RegistryFetcher>, ttl: Duration) -> Self {
        Self {
            ttl,
            fetcher,
            cached: RwLock::new(None),
        }
    }

    /// Current symbol map, refreshed when absent or older than the TTL.
    pub async fn registry(&self) -> PayResult<Arc<TokenMap>> {
        if let Some(entries) = self.fresh().await {
            return Ok(entries);
        }

        match self.fetcher.fetch().await {
            Ok(map) => {
                log::debug!("token registry refreshed: {} symbols", map.len());
                let entries = Arc::new(map);
                let mut cached = self.cached.write().await;
                *cached = Some(CachedRegistry {
                    fetched_at: Instant::now(),
                    entries: Arc::clone(&entries),
                });
                Ok(entries)
            }
            Err(e) => {
                // An expired copy is not a fallback: evict it and surface
                // the error so the next lookup retries.
                let mut cached = self.cached.write().await;
                *cached = None;
                Err(e)
            }
        }
    }

    async fn fresh(&self) -> Option<Arc<TokenMap>> {
        let cached = self.cached.read().await;
        cached
            .as_ref()
            .filter(|c| c.fetched_at.elapsed() < self.ttl)
            .map(|c| Arc::clone(&c.entries))
    }
}

/// 0x token list over HTTP.
pub struct HttpTokenRegistry {
    url: String,
    http: reqwest::Client,
}

impl HttpTokenRegistry {
    pub fn new(url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }
}

#[async_trait]
impl RegistryFetcher for HttpTokenRegistry {
    async fn fetch(&self) -> PayResult<TokenMap> {
        let response = self
            .http
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| PayError::registry_fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PayError::RegistryStatus(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| PayError::registry_fetch(e.to_string()))?;

        let records = extract_token_records(&body).ok_or(PayError::RegistryFormat)?;
        Ok(collect_token_map(records))
    }
}

/// 0x responses use `records`; older shapes used `tokens`.
fn extract_token_records(body: &serde_json::Value) -> Option<&Vec<serde_json::Value>> {
    body.get("records")
        .and_then(|v| v.as_array())
        .or_else(|| body.get("tokens").and_then(|v| v.as_array()))
}

/// Keep well-formed records, drop the rest. A malformed record never
/// aborts the whole fetch.
fn collect_token_map(records: &[serde_json::Value]) -> TokenMap {
    let mut map = TokenMap::new();
    for record in records {
        let Some(symbol) = record.get("symbol").and_then(|v| v.as_str()) else {
            continue;
        };
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            continue;
        }
        let Some(address) = record
            .get("address")
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse::<Address>().ok())
        else {
            continue;
        };
        let Some(decimals) = record
            .get("decimals")
            .and_then(|v| v.as_u64())
            .and_then(|d| u8::try_from(d).ok())
        else {
            continue;
        };
        map.insert(
            symbol.clone(),
            TokenMetadata {
                address,
                decimals,
                symbol: Some(symbol),
            },
        );
    }
    map
}
