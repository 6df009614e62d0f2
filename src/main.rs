use clap::Parser;
use combigen::utils::{logger, validation::Validate};
use combigen::{app, GenerationService, MySqlStore, ServiceConfig};
use std::sync::Arc;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let config = ServiceConfig::parse();

    logger::init(config.verbose);

    tracing::info!("Starting combigen service");
    if config.verbose {
        tracing::debug!("Service config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let store = MySqlStore::connect(&config.database_url()).await?;
    let service = Arc::new(GenerationService::new(store));
    let router = app::router(service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("✅ Server is running on port {}", config.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }
}
