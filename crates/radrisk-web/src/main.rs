//! radrisk web server
//!
//! Run with: cargo run -p radrisk-web

use radrisk_config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("radrisk=debug,info")),
        )
        .init();

    info!("Starting radrisk web server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    let addr = config.listen_addr()?;
    info!(
        "Configuration loaded. Profile: {:?}, models: {:?}, hormesis: {:?}",
        config.profile, config.site.models, config.site.hormesis
    );

    let state = radrisk_web::state::AppState::new(config)?;
    let app = radrisk_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
