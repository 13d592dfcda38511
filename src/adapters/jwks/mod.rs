use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::RwLock;
use tracing::{debug, error};
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    ports::jwks::{Jwks, JwksProvider},
};

/// Fetches the key set from the identity provider on every call.
#[derive(Clone)]
pub struct RemoteJwksProvider {
    client: Client,
    jwks_url: Url,
}

impl RemoteJwksProvider {
    pub fn new(client: Client, jwks_url: Url) -> Self {
        Self { client, jwks_url }
    }
}

#[async_trait]
impl JwksProvider for RemoteJwksProvider {
    async fn fetch(&self) -> AppResult<Jwks> {
        debug!(jwks_url = %self.jwks_url, "Fetching JWKS");

        let response = self
            .client
            .get(self.jwks_url.clone())
            .send()
            .await
            .map_err(|e| {
                error!(jwks_url = %self.jwks_url, error = %e, "JWKS request failed");
                AppError::Internal(format!("Failed to fetch JWKS: {}", e))
            })?;

        if !response.status().is_success() {
            error!(jwks_url = %self.jwks_url, status = %response.status(), "JWKS endpoint returned an error");
            return Err(AppError::Internal("Failed to fetch JWKS".into()));
        }

        response
            .json::<Jwks>()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to parse JWKS: {}", e)))
    }
}

struct CachedJwks {
    jwks: Jwks,
    fetched_at: Instant,
}

/// Serves a key set from memory until `ttl` elapses, then refetches.
///
/// Only installed when `JWKS_CACHE_TTL_SECS` is non-zero.
pub struct CachingJwksProvider {
    inner: Arc<dyn JwksProvider>,
    ttl: Duration,
    cache: RwLock<Option<CachedJwks>>,
}

impl CachingJwksProvider {
    pub fn new(inner: Arc<dyn JwksProvider>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cache: RwLock::new(None),
        }
    }
}

#[async_trait]
impl JwksProvider for CachingJwksProvider {
    async fn fetch(&self) -> AppResult<Jwks> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.fetched_at.elapsed() < self.ttl {
                    return Ok(cached.jwks.clone());
                }
            }
        }

        let mut cache = self.cache.write().await;
        // Another request may have refreshed while we waited for the lock.
        if let Some(cached) = cache.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                return Ok(cached.jwks.clone());
            }
        }

        let jwks = self.inner.fetch().await?;
        *cache = Some(CachedJwks {
            jwks: jwks.clone(),
            fetched_at: Instant::now(),
        });
        Ok(jwks)
    }
}
