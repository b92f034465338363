//! Credential store addressing.

use std::env;

/// Where the provider API key lives in the cluster's secret store.
#[derive(Debug, Clone)]
pub struct SecretStoreConfig {
    /// Namespace the secret is read from
    pub namespace: String,
    /// Name of the secret holding the API key
    pub secret_name: String,
    /// Root of the mounted secret volume
    pub mount_root: String,
}

impl Default for SecretStoreConfig {
    fn default() -> Self {
        Self {
            namespace: "default".to_string(),
            secret_name: "wunderground-secret".to_string(),
            mount_root: "/var/run/secrets".to_string(),
        }
    }
}

impl SecretStoreConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            namespace: env::var("SECRET_NAMESPACE").unwrap_or(defaults.namespace),
            secret_name: env::var("SECRET_NAME").unwrap_or(defaults.secret_name),
            mount_root: env::var("SECRET_MOUNT_ROOT").unwrap_or(defaults.mount_root),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_cluster_secret() {
        let config = SecretStoreConfig::default();
        assert_eq!(config.namespace, "default");
        assert_eq!(config.secret_name, "wunderground-secret");
        assert_eq!(config.mount_root, "/var/run/secrets");
    }
}
