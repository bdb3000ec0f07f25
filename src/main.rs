// src/main.rs

use ceiling_studio::{build_router, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let settings = Settings::from_env()?;
    let app_state = AppState::new(&settings)?;
    let app = build_router(app_state);

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    tracing::info!("API docs at http://{}/swagger-ui", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
