use tracing_subscriber::EnvFilter;

use footscreen_server::{AppState, config, router};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = config::load_config()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.json_logs {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    std::fs::create_dir_all(&config.data_dir)?;
    let state = AppState::new(config.data_dir.clone(), config.page_size);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        data_dir = %config.data_dir.display(),
        "footscreen server listening"
    );

    axum::serve(listener, router(state)).await?;
    Ok(())
}
