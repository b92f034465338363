//! Historical weather retrieval from the provider's history endpoint.

use crate::config::UpstreamConfig;
use crate::error::WeatherError;
use crate::models::HistoricalRecord;
use crate::services::LocationToken;
use reqwest::Client;
use tracing::{debug, info};
use url::form_urlencoded;

/// Fetches the decoded history record for a resolved location and date.
pub struct HistoryFetcher {
    client: Client,
    base_url: String,
}

impl HistoryFetcher {
    pub fn new(client: Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            base_url: config.history_api_base_url.clone(),
        }
    }

    /// Strip `-` or `/` separators to produce the provider's compact
    /// YYYYMMDD form. Each separator is replaced at most twice; anything
    /// beyond that is passed through as-is, with no further validation.
    pub fn normalize_date(date: &str) -> String {
        if date.contains('-') {
            date.replacen('-', "", 2)
        } else if date.contains('/') {
            date.replacen('/', "", 2)
        } else {
            date.to_string()
        }
    }

    /// Fetch and decode the history record for `token` on `date`.
    ///
    /// A decoded response with no daily summary entries is "no data" and
    /// surfaces as an error, never as a success with empty data. On
    /// success the record's `status` is stamped with 200.
    pub async fn fetch(
        &self,
        api_key: &str,
        token: &LocationToken,
        date: &str,
    ) -> Result<HistoricalRecord, WeatherError> {
        let date = Self::normalize_date(date);
        let encoded_date: String = form_urlencoded::byte_serialize(date.as_bytes()).collect();

        let url = format!(
            "{}/{}/history_{}{}.json",
            self.base_url,
            api_key,
            encoded_date,
            token.as_str()
        );
        debug!(url = %url, "querying history endpoint");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::upstream(&url, e))?;
        debug!(status = %response.status(), "history endpoint responded");

        let mut record: HistoricalRecord = response
            .json()
            .await
            .map_err(|e| WeatherError::upstream(&url, e))?;

        if record.history.daily_summary.is_empty() {
            info!(date = %date, token = token.as_str(), "history response had no daily summary");
            return Err(WeatherError::NoData);
        }

        record.status = 200;
        Ok(record)
    }
}
