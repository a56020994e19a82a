use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::models::Facility;
use crate::services::postgres::PostgresError;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Catalogue load failed: {0}")]
    LoadFailed(#[from] Arc<PostgresError>),
}

/// In-memory cache for the park catalogue
///
/// The catalogue changes rarely and every search needs all of it, so it is
/// held for a short TTL and shared by all workers. Concurrent misses for the
/// same key run the loader once.
#[derive(Clone)]
pub struct CatalogueCache {
    inner: moka::future::Cache<String, Arc<Vec<Facility>>>,
}

impl CatalogueCache {
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let inner = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();
        Self { inner }
    }

    /// Return the cached catalogue, running `load` on a miss
    pub async fn get_or_load<F>(&self, load: F) -> Result<Arc<Vec<Facility>>, CacheError>
    where
        F: Future<Output = Result<Vec<Facility>, PostgresError>>,
    {
        let key = CacheKey::catalogue();
        let catalogue = self
            .inner
            .try_get_with(key, async move {
                tracing::trace!("Catalogue cache miss, loading from database");
                load.await.map(Arc::new)
            })
            .await?;
        Ok(catalogue)
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Key for the full park catalogue
    pub fn catalogue() -> String {
        "catalogue:parks".to_string()
    }
}
