//! Location resolution via the provider's autocomplete endpoint.

use crate::config::UpstreamConfig;
use crate::error::WeatherError;
use crate::models::AutocompleteResponse;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

/// Country code substituted when the caller leaves `country` empty.
/// A policy decision, not a user error.
pub const DEFAULT_COUNTRY: &str = "GB";

/// Opaque identifier for a resolved place in the history API's addressing
/// scheme (e.g. `/q/zmw:00000.1.03772`). Lives only within one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationToken(String);

impl LocationToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Resolves a free-text city/country pair into a [`LocationToken`].
pub struct LocationResolver {
    client: Client,
    base_url: String,
}

impl LocationResolver {
    pub fn new(client: Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            base_url: config.autocomplete_base_url.clone(),
        }
    }

    /// Look the city up against the autocomplete endpoint and take the
    /// first result's link field.
    ///
    /// First-result-wins is deliberate: the autocomplete upstream orders
    /// by relevance and this service does no ranking or disambiguation of
    /// its own.
    pub async fn resolve(&self, city: &str, country: &str) -> Result<LocationToken, WeatherError> {
        let country = if country.is_empty() {
            debug!("country not specified, defaulting to {DEFAULT_COUNTRY}");
            DEFAULT_COUNTRY
        } else {
            country
        };

        let mut url = Url::parse(&format!("{}/aq", self.base_url))
            .map_err(|e| WeatherError::upstream(&self.base_url, e))?;
        url.query_pairs_mut()
            .append_pair("query", city)
            .append_pair("c", country);
        debug!(url = %url, "querying autocomplete endpoint");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| WeatherError::upstream(url.as_str(), e))?;

        let autocomplete: AutocompleteResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::upstream(url.as_str(), e))?;

        let Some(first) = autocomplete.results.first() else {
            info!(city, "no autocomplete results");
            return Err(WeatherError::NotFound);
        };

        debug!(link = %first.link, "resolved location");
        Ok(LocationToken(first.link.clone()))
    }
}
