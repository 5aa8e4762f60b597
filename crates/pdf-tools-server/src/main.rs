use anyhow::{Context, Result};
use clap::Parser;
use pdf_tools_server::{AppState, ServerConfig, app};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();

    let default_level = if config.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    config
        .ensure_directories()
        .await
        .context("Failed to create working directories")?;

    let addr = config.socket_addr();
    log::info!(
        "Starting {} {} ({}) on {}",
        config.app_name,
        config.app_version,
        config.environment,
        addr
    );
    log::info!(
        "Writing PDFs to {}, compressing with {:?}",
        config.output_dir.display(),
        config.compressor
    );

    let state = AppState::new(config);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
