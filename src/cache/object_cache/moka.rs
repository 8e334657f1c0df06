use async_trait::async_trait;
use moka::{Expiry, future::Cache};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("moka", MokaCacheWrapper);

#[derive(Clone)]
struct CachedEntry {
    value: String,
    ttl: Duration,
}

/// 按条目 TTL 过期
struct EntryExpiry;

impl Expiry<String, CachedEntry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

pub struct MokaCacheWrapper {
    inner: Cache<String, CachedEntry>,
    default_ttl: Duration,
}

impl MokaCacheWrapper {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        if config.cache.memory.max_capacity == 0 {
            return Err("cache.memory.max_capacity must be greater than 0".to_string());
        }

        let inner = Cache::builder()
            .max_capacity(config.cache.memory.max_capacity)
            .expire_after(EntryExpiry)
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}, default TTL: {}s",
            config.cache.memory.max_capacity, config.cache.default_ttl
        );
        Ok(Self {
            inner,
            default_ttl: Duration::from_secs(config.cache.default_ttl),
        })
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        match self.inner.get(key).await {
            Some(entry) => {
                debug!("Cache hit: {}", key);
                CacheResult::Found(entry.value)
            }
            None => {
                debug!("Cache miss: {}", key);
                CacheResult::NotFound
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let ttl = if ttl == 0 {
            self.default_ttl
        } else {
            Duration::from_secs(ttl)
        };
        self.inner.insert(key, CachedEntry { value, ttl }).await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}
