//! Store client configuration.

/// Errors raised while reading client configuration. Always fatal.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set in the environment")]
    Missing(&'static str),
}

/// Endpoint and anonymous key of the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the store, without the `/api/v1` suffix.
    pub store_url: String,
    /// Public key sent in the `apikey` header of every request.
    pub anon_key: String,
}

impl ClientConfig {
    /// Load configuration from `PLANO_STORE_URL` and `PLANO_STORE_ANON_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        Ok(Self {
            store_url: required("PLANO_STORE_URL")?,
            anon_key: required("PLANO_STORE_ANON_KEY")?,
        })
    }
}
