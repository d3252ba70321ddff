use alien_api::{Cli, ServerConfig, TITLE};
use alien_core::QueryService;
use alien_logging::SubscriberBuilder;
use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig::from_cli(&cli)?;

    // Keep the guard alive so file output is flushed on exit
    let _log_guard = SubscriberBuilder::new()
        .with_config(config.log.clone())
        .init();

    let service = QueryService::builtin();
    info!(title = TITLE, records = service.all().len(), "catalog loaded");

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, alien_api::router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl-c handler unavailable; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
