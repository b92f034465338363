//! Weather History API - historical weather summaries by city and date.
//!
//! Given a city, optional country, and a date, this service resolves the
//! city to a provider location token via an autocomplete lookup, fetches
//! the historical weather record for that location/date, and returns the
//! decoded daily summary. The provider API key is read from a
//! cluster-managed secret store and cached for the life of the process.
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `models/` - Wire shapes for this API and the upstream provider
//! - `handlers/` - HTTP request handlers and the app factory
//! - `middleware/` - Request ID middleware for tracing
//! - `services/` - Credential cache, location resolver, history fetcher
//! - `config/` - Configuration structures and environment loading
//! - `error` - The error taxonomy and JSON error envelope
//!
//! ## Quick Start
//!
//! ```no_run
//! use weather_history_api::create_base_app;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let app = create_base_app();
//!     // Configure and run the server
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

// Re-export commonly used types and functions for convenience
pub use config::{SecretStoreConfig, UpstreamConfig};
pub use error::WeatherError;
pub use handlers::{create_app, create_base_app, create_openapi_spec, health, history, version};
pub use middleware::RequestIdMiddleware;
pub use models::{
    AutocompleteResponse, AutocompleteResult, DailySummary, ErrorBody, HealthResponse,
    HistoricalRecord, History, Observation, ProviderInfo, VersionResponse, WeatherQuery,
};
pub use services::{
    CredentialCache, DEFAULT_COUNTRY, HistoryFetcher, LocationResolver, LocationToken,
    MountedSecretStore, SecretStore,
};
