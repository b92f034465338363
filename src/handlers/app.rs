//! OpenAPI specification generation and app factory.

use crate::{
    config::{SecretStoreConfig, UpstreamConfig},
    error::WeatherError,
    handlers::{health, history, version},
    middleware::RequestIdMiddleware,
    services::{
        CredentialCache, HistoryFetcher, LocationResolver, MountedSecretStore, SecretStore,
    },
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};
use std::sync::Arc;
use std::time::Duration;

/// Creates the shared OpenAPI specification for the API
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Weather History API".into(),
            version: "1.0.0".into(),
            description: Some(
                "Historical weather summaries by city and date.\n\n\
                POST a JSON body `{\"city\": \"birmingham\", \"country\": \"\", \"date\": \"20170101\"}` \
                to `/api/history`. The city is resolved through the provider's autocomplete \
                endpoint (first match wins; an empty country defaults to GB) and the daily \
                summary for the date is returned as decoded from the provider.\n\n\
                Every failure returns a JSON `{status, message}` envelope with a 400 status."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Maps JSON body decode failures (including an empty body) onto the same
/// error envelope every other failure uses.
fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    WeatherError::Input(err.to_string()).into()
}

/// Creates the app with explicit configuration and credential store.
///
/// Tests use this to point the service at stub upstreams and an in-memory
/// secret store; `create_base_app` wires in the real ones.
pub fn create_app(
    upstream: UpstreamConfig,
    secrets: SecretStoreConfig,
    store: Arc<dyn SecretStore>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(upstream.timeout_seconds))
        .build()
        .expect("failed to build HTTP client");

    let resolver = LocationResolver::new(client.clone(), &upstream);
    let fetcher = HistoryFetcher::new(client, &upstream);
    let credentials = CredentialCache::new(store, secrets);

    App::new()
        .wrap(RequestIdMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(resolver))
        .app_data(web::Data::new(fetcher))
        .app_data(web::Data::new(credentials))
        .app_data(actix_web::web::JsonConfig::default().error_handler(json_error_handler))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/history").route(web::post().to(history)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}

/// Creates the app from environment configuration with the mounted
/// cluster secret store.
pub fn create_base_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let upstream = UpstreamConfig::from_env();
    let secrets = SecretStoreConfig::from_env();
    let store = Arc::new(MountedSecretStore::new(secrets.mount_root.clone()));
    create_app(upstream, secrets, store)
}
