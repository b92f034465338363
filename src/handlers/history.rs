//! Historical weather endpoint handler.

use crate::{
    models::{HistoricalRecord, WeatherQuery},
    services::{CredentialCache, HistoryFetcher, LocationResolver},
};
use actix_web::{Error, Result, web};
use paperclip::actix::api_v2_operation;
use tracing::info;

/// Historical weather endpoint
///
/// Resolves the city to a provider location token via autocomplete, then
/// fetches the historical record for that location and date. Single pass,
/// no retries; the first failing step terminates the request with a JSON
/// error envelope.
#[api_v2_operation(
    summary = "Historical Weather Endpoint",
    description = "Returns the daily weather summary (fog/rain/tornado flags, temperature, \
                   pressure and wind extrema) for a city and date. The date may be given as \
                   YYYYMMDD, YYYY-MM-DD or YYYY/MM/DD. An empty country defaults to GB.",
    tags("Weather"),
    responses(
        (status = 200, description = "Successful response", body = HistoricalRecord),
        (status = 400, description = "Bad Request - malformed input, unknown location, or no data for the date")
    )
)]
pub async fn history(
    query: web::Json<WeatherQuery>,
    credentials: web::Data<CredentialCache>,
    resolver: web::Data<LocationResolver>,
    fetcher: web::Data<HistoryFetcher>,
) -> Result<web::Json<HistoricalRecord>, Error> {
    info!(
        city = %query.city,
        country = %query.country,
        date = %query.date,
        "querying weather history"
    );

    let api_key = credentials.get_or_fetch().await?;
    let token = resolver.resolve(&query.city, &query.country).await?;
    let record = fetcher.fetch(&api_key, &token, &query.date).await?;

    Ok(web::Json(record))
}
