//! Wire models for the two upstream weather provider endpoints.
//!
//! Field names mirror the provider's JSON exactly. Numeric values arrive
//! as strings and are passed through untouched; this service does not
//! reinterpret them.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Autocomplete endpoint response. Each result's `l` field is a link
/// fragment usable as a location token in history URLs.
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct AutocompleteResponse {
    #[serde(rename = "RESULTS", default)]
    pub results: Vec<AutocompleteResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct AutocompleteResult {
    /// Location link, e.g. `/q/zmw:00000.1.03772`
    #[serde(rename = "l")]
    pub link: String,
}

/// Full decoded history response for one location/date.
///
/// `status` is not provider-supplied; the fetcher stamps it with 200 on a
/// successful fetch.
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HistoricalRecord {
    #[serde(default)]
    pub status: u16,
    pub response: ProviderInfo,
    pub history: History,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ProviderInfo {
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct History {
    #[serde(rename = "dailysummary", default)]
    pub daily_summary: Vec<DailySummary>,
    #[serde(default)]
    pub observations: Vec<Observation>,
}

/// One day's aggregated extrema and event flags. Flags are "0"/"1"
/// strings, extrema are numbers-as-strings, exactly as upstream emits
/// them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Apiv2Schema)]
pub struct DailySummary {
    #[serde(default)]
    pub fog: String,
    #[serde(default)]
    pub rain: String,
    #[serde(default)]
    pub maxtempm: String,
    #[serde(default)]
    pub mintempm: String,
    #[serde(default)]
    pub tornado: String,
    #[serde(default)]
    pub maxpressurem: String,
    #[serde(default)]
    pub minpressurem: String,
    #[serde(default)]
    pub maxwspdm: String,
    #[serde(default)]
    pub minwspdm: String,
}

/// Raw per-interval reading, passed through without normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Apiv2Schema)]
pub struct Observation {
    #[serde(default)]
    pub tempm: String,
    #[serde(default)]
    pub tempi: String,
    #[serde(default)]
    pub dewptm: String,
    #[serde(default)]
    pub dewpti: String,
    #[serde(default)]
    pub hum: String,
    #[serde(default)]
    pub wspdm: String,
    #[serde(default)]
    pub wspdi: String,
    #[serde(default)]
    pub wgustm: String,
    #[serde(default)]
    pub wgusti: String,
    #[serde(default)]
    pub wdird: String,
    #[serde(default)]
    pub wdire: String,
    #[serde(default)]
    pub vism: String,
    #[serde(default)]
    pub visi: String,
    #[serde(default)]
    pub pressurem: String,
    #[serde(default)]
    pub pressurei: String,
    #[serde(default)]
    pub windchillm: String,
    #[serde(default)]
    pub windchilli: String,
    #[serde(default)]
    pub heatindexm: String,
    #[serde(default)]
    pub heatindexi: String,
    #[serde(default)]
    pub precipm: String,
    #[serde(default)]
    pub precipi: String,
    #[serde(default)]
    pub conds: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub fog: String,
    #[serde(default)]
    pub rain: String,
    #[serde(default)]
    pub snow: String,
    #[serde(default)]
    pub hail: String,
    #[serde(default)]
    pub thunder: String,
    #[serde(default)]
    pub tornado: String,
    #[serde(default)]
    pub metar: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autocomplete_response_uses_provider_field_names() {
        let json = r#"{"RESULTS":[{"l":"/q/zmw:00000.1.03772","name":"London, United Kingdom"}]}"#;
        let resp: AutocompleteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].link, "/q/zmw:00000.1.03772");
    }

    #[test]
    fn empty_autocomplete_response_decodes() {
        let resp: AutocompleteResponse = serde_json::from_str(r#"{"RESULTS":[]}"#).unwrap();
        assert!(resp.results.is_empty());
    }

    #[test]
    fn historical_record_decodes_provider_shape() {
        let json = r#"{
            "response": {"version": "0.1"},
            "history": {
                "dailysummary": [{
                    "fog": "0", "rain": "1", "maxtempm": "17", "mintempm": "12",
                    "tornado": "0", "maxpressurem": "1014", "minpressurem": "1005",
                    "maxwspdm": "50", "minwspdm": "13"
                }],
                "observations": [{}]
            }
        }"#;
        let record: HistoricalRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, 0);
        assert_eq!(record.response.version, "0.1");
        assert_eq!(record.history.daily_summary.len(), 1);
        assert_eq!(record.history.daily_summary[0].rain, "1");
        assert_eq!(record.history.daily_summary[0].maxwspdm, "50");
        assert_eq!(record.history.observations.len(), 1);
    }

    #[test]
    fn daily_summary_serializes_with_provider_field_names() {
        let record = History {
            daily_summary: vec![DailySummary {
                fog: "0".into(),
                rain: "1".into(),
                ..Default::default()
            }],
            observations: vec![],
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""dailysummary""#));
        assert!(json.contains(r#""rain":"1""#));
    }
}
