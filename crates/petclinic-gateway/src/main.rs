//! Pet Clinic HTTP/JSON Gateway binary.

use clap::Parser;
use petclinic_core::{seed, MemoryStore};
use petclinic_gateway::{create_router, AppState, Args, GatewayConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line args
    let args = Args::parse();

    // Initialize tracing
    let log_filter = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "petclinic_gateway={0},petclinic_core={0},tower_http=info",
                    log_filter
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GatewayConfig::from(&args);

    info!(
        listen = %config.listen_addr,
        seed_data = config.seed_data,
        "Starting Pet Clinic Gateway"
    );

    let store = if config.seed_data {
        seed::seeded_store()?
    } else {
        MemoryStore::with_pet_types(seed::pet_types())
    };

    // Create application state
    let state = AppState::with_store(store, config.clone());

    // Create router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Gateway listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
