mod app;
mod controller;
mod middlewares;
mod routes;
mod services;
mod types;
mod utils;
mod views;

use std::{error::Error, future::Future, io};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = app::AppConfig::from_env();
    info!("Starting board against {}", config.amt_host);

    let controller = app::gen_controller(&config);
    let app = app::gen_app(controller.clone());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(tokio::signal::ctrl_c()))
        .await?;

    controller.stop_polling().await;
    Ok(())
}

async fn shutdown_signal(signal: impl Future<Output = io::Result<()>>) {
    if let Err(e) = signal.await {
        // Without a handler the server runs until killed.
        error!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
