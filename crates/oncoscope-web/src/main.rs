//! Oncoscope Web Server
//!
//! Run with: cargo run -p oncoscope-web

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = oncoscope_web::config::AppConfig::load()?;
    info!("Starting Oncoscope Web Server...");

    // Load the dataset once; it stays read-only for the process lifetime
    let table = oncoscope_dataset::load_table(&config.dataset_path)?;
    let state = oncoscope_web::state::AppState::new(table);

    // Build router
    let app = oncoscope_web::router::build_router(state);

    let addr = config.socket_addr()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
