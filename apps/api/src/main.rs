use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::mysql::MySqlPoolOptions;
use tracing_subscriber::EnvFilter;

use customers_api::api::router::StaticFiles;
use customers_api::api::{router, AppState};
use customers_api::config::{AppConfig, StoreBackend};
use customers_api::domain::repositories::CustomerRepository;
use customers_api::infrastructure::balance_client::HttpBalanceClient;
use customers_api::infrastructure::repositories::{
    InMemoryCustomerRepository, MySqlCustomerRepository,
};
use customers_api::infrastructure::templates::WelcomeTemplate;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        port = config.port,
        store_backend = ?config.store_backend,
        balance_api_url = %config.balance_api_url,
        "Configuration loaded"
    );

    let customers = build_store(&config).await?;

    let balances = HttpBalanceClient::new(&config.balance_api_url, config.balance_api_timeout)?;
    let welcome = WelcomeTemplate::load(&config.template_path)?;

    let state = AppState::new(customers, Arc::new(balances), welcome);
    let app = router(
        state,
        Some(StaticFiles {
            prefix: config.static_prefix.clone(),
            dir: config.static_dir.clone(),
        }),
    );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn build_store(
    config: &AppConfig,
) -> Result<Arc<dyn CustomerRepository>, Box<dyn std::error::Error>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory customer store");
            Ok(Arc::new(InMemoryCustomerRepository::new()))
        }
        StoreBackend::MySql => {
            // Connect to database
            tracing::info!("Connecting to database...");
            let pool = MySqlPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(&config.database_url)
                .await?;

            let repo = MySqlCustomerRepository::new(pool);
            repo.ensure_schema().await?;

            tracing::info!("Database connected successfully");
            Ok(Arc::new(repo))
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::warn!("Shutdown signal received, draining connections...");
}
