mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    if config.api_base_url.is_empty() {
        tracing::info!("CHAT_API_BASE_URL not set; browser will call the backend on the same origin");
    }

    let conf = leptos::prelude::get_configuration(None)?;
    let app = routes::app(&config, conf.leptos_options);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, api_base = %config.api_base_url, "groupchat host listening");
    axum::serve(listener, app).await?;
    Ok(())
}
