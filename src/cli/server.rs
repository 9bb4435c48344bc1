use std::sync::Arc;

use anyhow::Result;
use contact_desk_contact::ContactStore;
use contact_desk_notification::{Notifier, SmtpMailer};
use tower_http::compression::CompressionLayer;

use crate::routes::AppState;

pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting contact-desk server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    // A database that is down at startup is logged, requests fail until it recovers
    let store = ContactStore::connect_lazy(&config.database.url)?;
    match store.ensure_schema().await {
        Ok(()) => tracing::info!("Connected to contact database"),
        Err(e) => tracing::error!(error = %e, "Contact database connection failed"),
    }

    let mailer = SmtpMailer::new(&config.email)?;
    let notifier = Notifier::new(&config.email, Arc::new(mailer));

    let state = AppState {
        store: store.clone(),
        notifier,
    };

    let app = crate::routes::router(state, &config.server.public_dir)
        .layer(CompressionLayer::new().br(true).gzip(true));

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Closing database pool...");
    store.close().await;
    tracing::info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
