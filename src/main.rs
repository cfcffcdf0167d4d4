use punchclock_reconcile::api::{AppState, create_router};
use punchclock_reconcile::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        std::env::var("RECONCILE_CONFIG_DIR").unwrap_or_else(|_| "./config/default".to_string());
    let bind_addr =
        std::env::var("RECONCILE_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        page_size = config.page_size(),
        midnight_policy = %config.midnight_policy(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(address = %bind_addr, "Reconciliation engine listening");
    axum::serve(listener, app).await?;

    Ok(())
}
