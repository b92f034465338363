use actix_web::HttpServer;
use tracing_subscriber::EnvFilter;
use weather_history_api::create_base_app;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging (run with RUST_LOG=info, for example)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bind = std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8084".to_string());
    tracing::info!(%bind, "starting weather history API");

    HttpServer::new(create_base_app).bind(&bind)?.run().await
}
