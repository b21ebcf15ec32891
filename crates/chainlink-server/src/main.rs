mod api;
mod middleware;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, build_cors, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = chainlink_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let catalog = chainlink_core::load_catalog(config.suppliers_path.as_deref())?;
    let directory = chainlink_core::load_directory(config.directory_path.as_deref())?;
    let dashboard = chainlink_core::load_dashboard(config.dashboard_path.as_deref())?;
    tracing::info!(
        env = %config.env,
        suppliers = catalog.suppliers.len(),
        listings = directory.listings.len(),
        "seed data loaded"
    );

    let cors = build_cors(config.cors_origin.as_deref())?;
    let app = build_app(AppState::new(&catalog, directory, dashboard), cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
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
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
