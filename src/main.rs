use repairtrack::core::{Config, db};
use repairtrack::{AppState, create_router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load the configuration
    let config = Config::from_env()?;
    config.print_info();

    // Open the pool and bring the schema up to date
    let pool = db::connect(&config.database_url, config.max_connections).await?;
    info!("Database ready");

    // Build the router
    let state = Arc::new(AppState::new(pool));
    let app = create_router(state);

    // Start the server
    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
