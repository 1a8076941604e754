pub mod api;
pub mod config;
pub mod error;
pub mod openapi;
pub mod router;
pub mod services;
pub mod state;

use std::net::SocketAddr;

pub use config::Config;
pub use router::create_router;
pub use state::AppState;

pub async fn run_server(
    addr: SocketAddr,
    config: Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(config);
    let app = create_router(state);

    tracing::info!("Starting bridge server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
