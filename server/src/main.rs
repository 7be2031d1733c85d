mod config;
mod routes;
mod state;

use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "invalid configuration"))?;
    tracing::info!(
        backend = %config.backend_url,
        request_secs = config.timeouts.request_secs,
        connect_secs = config.timeouts.connect_secs,
        "backend forwarder configured"
    );

    let state = state::AppState::new(&config)?;
    let app = routes::leptos_app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "academy portal listening");
    axum::serve(listener, app).await?;
    Ok(())
}
