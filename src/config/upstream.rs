//! Upstream weather provider addresses and client knobs.

use std::env;

/// Addresses of the two outbound dependencies plus the shared request
/// timeout applied to both.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the autocomplete service
    pub autocomplete_base_url: String,
    /// Base URL of the history API
    pub history_api_base_url: String,
    /// Bounded timeout for each outbound call, in seconds
    pub timeout_seconds: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            autocomplete_base_url: "http://autocomplete.wunderground.com".to_string(),
            history_api_base_url: "http://api.wunderground.com/api".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl UpstreamConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let autocomplete_base_url =
            env::var("AUTOCOMPLETE_BASE_URL").unwrap_or(defaults.autocomplete_base_url);

        let history_api_base_url =
            env::var("WEATHER_API_BASE_URL").unwrap_or(defaults.history_api_base_url);

        let timeout_seconds = env::var("UPSTREAM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_seconds);

        Self {
            autocomplete_base_url,
            history_api_base_url,
            timeout_seconds,
        }
    }
}
