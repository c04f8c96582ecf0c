//! Metrolink server entry point.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use metrolink_server::{app, config};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "metrolink-server", about = "Metrolink Server", version)]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit.
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let cfg = config::load(args.config.as_deref()).context("failed to load configuration")?;

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    init_tracing(&cfg.logging);

    let router = app::build_app(&cfg).await?;

    let addr = format!("{}:{}", cfg.server.host, cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Metrolink server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Metrolink server stopped");
    Ok(())
}

fn init_tracing(cfg: &config::LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
