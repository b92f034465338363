//! Request and response models for this API's own endpoints.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
}

/// Inbound request body for the history endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct WeatherQuery {
    /// Free-text city name (e.g., "birmingham")
    pub city: String,
    /// ISO country code; empty means "use the default country"
    #[serde(default)]
    pub country: String,
    /// Date in YYYYMMDD form, or with `-` / `/` separators
    pub date: String,
}

/// JSON error envelope returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_query_defaults_country_to_empty() {
        let query: WeatherQuery =
            serde_json::from_str(r#"{"city":"birmingham","date":"20170101"}"#).unwrap();
        assert_eq!(query.city, "birmingham");
        assert_eq!(query.country, "");
        assert_eq!(query.date, "20170101");
    }

    #[test]
    fn weather_query_rejects_missing_city() {
        let result = serde_json::from_str::<WeatherQuery>(r#"{"date":"20170101"}"#);
        assert!(result.is_err());
    }
}
