//! Implementation of the `docstore serve` command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;
use tracing::{info, warn};

use crate::adapters::http::DocumentHttpServer;
use crate::cli::load_config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::LoggerImpl;
use crate::infrastructure::setup::build_document_service;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind to (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,
}

pub async fn execute(args: ServeArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    ConfigLoader::validate(&config).context("Invalid server overrides")?;

    let _logger = LoggerImpl::init(&config.logging)?;

    let service = build_document_service(&config).await?;
    let server = DocumentHttpServer::new(service, config.server.clone());
    server.serve_with_shutdown(shutdown_signal()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for Ctrl-C, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
