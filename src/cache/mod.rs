//! 对象缓存层
//!
//! 后端以插件形式注册（`declare_object_cache_plugin!`），启动时按配置名称查找构造器。

pub mod object_cache;
pub mod register;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    /// 键存在但取值失败（连接错误、反序列化失败等）
    ExistsButNoValue,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    /// `ttl` 为 0 时使用后端默认过期时间
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

impl dyn ObjectCache {
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> CacheResult<T> {
        match self.get_raw(key).await {
            CacheResult::Found(json) => match serde_json::from_str::<T>(&json) {
                Ok(value) => CacheResult::Found(value),
                Err(_) => {
                    self.remove(key).await;
                    CacheResult::ExistsButNoValue
                }
            },
            CacheResult::NotFound => CacheResult::NotFound,
            CacheResult::ExistsButNoValue => CacheResult::ExistsButNoValue,
        }
    }

    pub async fn insert_json<T: Serialize>(&self, key: String, value: &T, ttl: u64) {
        if let Ok(json) = serde_json::to_string(value) {
            self.insert_raw(key, json, ttl).await;
        }
    }
}

/// 声明缓存插件，程序加载时自动注册到插件表
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ty) => {
        fn __construct_object_cache() -> $crate::cache::register::BoxedObjectCacheFuture {
            Box::pin(async {
                let cache =
                    <$ty>::new().map_err($crate::errors::MarketError::cache_connection)?;
                Ok::<Box<dyn $crate::cache::ObjectCache>, $crate::errors::MarketError>(
                    Box::new(cache),
                )
            })
        }

        #[ctor::ctor]
        unsafe fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(__construct_object_cache),
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::object_cache::moka::MokaCacheWrapper;
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_json_roundtrip_through_moka() {
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::new().unwrap());
        cache.insert_json("answer".to_string(), &vec![4, 2], 0).await;
        assert_eq!(
            cache.get_json::<Vec<i32>>("answer").await,
            CacheResult::Found(vec![4, 2])
        );

        cache.remove("answer").await;
        assert_eq!(
            cache.get_json::<Vec<i32>>("answer").await,
            CacheResult::NotFound
        );
    }

    #[tokio::test]
    async fn test_corrupted_entry_is_evicted() {
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::new().unwrap());
        cache
            .insert_raw("user:broken".to_string(), "{not json".to_string(), 0)
            .await;
        assert_eq!(
            cache.get_json::<Vec<i32>>("user:broken").await,
            CacheResult::ExistsButNoValue
        );
        assert_eq!(cache.get_raw("user:broken").await, CacheResult::NotFound);
    }

    #[test]
    fn test_builtin_plugins_registered() {
        assert!(register::get_object_cache_plugin("moka").is_some());
        assert!(register::get_object_cache_plugin("redis").is_some());
    }
}
