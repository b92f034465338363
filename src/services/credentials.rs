//! Provider API key retrieval and caching.
//!
//! The key lives in a cluster-managed secret store. The store itself is an
//! external collaborator behind the [`SecretStore`] trait; the default
//! implementation reads the conventional mounted secret volume. The
//! [`CredentialCache`] fills lazily on the first request and keeps the key
//! for the life of the process.

use crate::config::SecretStoreConfig;
use crate::error::WeatherError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// External credential provider.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the provider API key for the given namespace/secret pair.
    async fn fetch_api_key(
        &self,
        namespace: &str,
        secret_name: &str,
    ) -> Result<String, WeatherError>;
}

/// Reads the API key from a mounted secret volume, following the
/// `{mount_root}/{namespace}/{secret_name}/apiKey` layout the cluster
/// projects secrets into.
pub struct MountedSecretStore {
    mount_root: PathBuf,
}

impl MountedSecretStore {
    pub fn new(mount_root: impl Into<PathBuf>) -> Self {
        Self {
            mount_root: mount_root.into(),
        }
    }
}

#[async_trait]
impl SecretStore for MountedSecretStore {
    async fn fetch_api_key(
        &self,
        namespace: &str,
        secret_name: &str,
    ) -> Result<String, WeatherError> {
        let path = self
            .mount_root
            .join(namespace)
            .join(secret_name)
            .join("apiKey");
        debug!(path = %path.display(), "reading API key from secret mount");

        let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
            WeatherError::Credential(format!("failed to read secret {}: {e}", path.display()))
        })?;

        Ok(raw.trim().to_string())
    }
}

/// Process-lifetime cache in front of a [`SecretStore`].
///
/// Read-mostly: the common path is a shared read of the filled cache. A
/// stale or racing fill is harmless since every fill produces the same key.
pub struct CredentialCache {
    store: Arc<dyn SecretStore>,
    config: SecretStoreConfig,
    key: RwLock<Option<String>>,
}

impl CredentialCache {
    pub fn new(store: Arc<dyn SecretStore>, config: SecretStoreConfig) -> Self {
        Self {
            store,
            config,
            key: RwLock::new(None),
        }
    }

    /// Return the cached key, fetching it from the store on first use.
    ///
    /// An empty or whitespace-only key is treated as a credential failure,
    /// not a usable key.
    pub async fn get_or_fetch(&self) -> Result<String, WeatherError> {
        if let Some(key) = self.key.read().await.as_ref() {
            return Ok(key.clone());
        }

        info!(
            namespace = %self.config.namespace,
            secret = %self.config.secret_name,
            "fetching API key from secret store"
        );
        let key = self
            .store
            .fetch_api_key(&self.config.namespace, &self.config.secret_name)
            .await?;

        if key.trim().is_empty() {
            return Err(WeatherError::Credential("Missing API Key".to_string()));
        }

        *self.key.write().await = Some(key.clone());
        Ok(key)
    }

    /// Drop the cached key so the next request re-fetches it.
    pub async fn invalidate(&self) {
        *self.key.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingStore {
        key: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl SecretStore for CountingStore {
        async fn fetch_api_key(&self, _: &str, _: &str) -> Result<String, WeatherError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.key.to_string())
        }
    }

    fn cache_with(key: &'static str) -> (Arc<CountingStore>, CredentialCache) {
        let store = Arc::new(CountingStore {
            key,
            calls: AtomicUsize::new(0),
        });
        let cache = CredentialCache::new(store.clone(), SecretStoreConfig::default());
        (store, cache)
    }

    #[tokio::test]
    async fn fetches_once_and_caches() {
        let (store, cache) = cache_with("k8s-key");

        assert_eq!(cache.get_or_fetch().await.unwrap(), "k8s-key");
        assert_eq!(cache.get_or_fetch().await.unwrap(), "k8s-key");
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_key_is_a_credential_error() {
        let (store, cache) = cache_with("   ");

        let err = cache.get_or_fetch().await.unwrap_err();
        assert!(matches!(err, WeatherError::Credential(_)));
        assert_eq!(err.to_string(), "Missing API Key");

        // A failed fill must not poison the cache
        let _ = cache.get_or_fetch().await;
        assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_a_refetch() {
        let (store, cache) = cache_with("k8s-key");

        cache.get_or_fetch().await.unwrap();
        cache.invalidate().await;
        cache.get_or_fetch().await.unwrap();
        assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn mounted_store_reads_and_trims_the_key_file() {
        let dir = std::env::temp_dir().join(format!(
            "weather-history-api-secret-test-{}",
            std::process::id()
        ));
        let secret_dir = dir.join("default").join("wunderground-secret");
        tokio::fs::create_dir_all(&secret_dir).await.unwrap();
        tokio::fs::write(secret_dir.join("apiKey"), "abc123\n")
            .await
            .unwrap();

        let store = MountedSecretStore::new(&dir);
        let key = store
            .fetch_api_key("default", "wunderground-secret")
            .await
            .unwrap();
        assert_eq!(key, "abc123");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn mounted_store_missing_secret_is_a_credential_error() {
        let store = MountedSecretStore::new("/nonexistent-mount-root");
        let err = store.fetch_api_key("default", "missing").await.unwrap_err();
        assert!(matches!(err, WeatherError::Credential(_)));
    }
}
