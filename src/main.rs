//! Discount API Service
//!
//! A loyalty-program backend stub for point-of-sale clients.
//!
//! ## Overview
//!
//! The service exposes two endpoints, both requiring the auth token header:
//! 1. `GET /counterparty?search=...` - counterparty search
//! 2. `POST /counterparty/detail` - bonus balance of a counterparty at a retail store

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use discount_api::config::{Config, CONFIG_PATH_ENV};
use discount_api::ApiServer;

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

/// Main application entry point that initializes and runs the discount API.
///
/// This function:
/// 1. Initializes logging and tracing
/// 2. Loads configuration (`PORT` is required)
/// 3. Starts the API server and runs it until shutdown
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("Discount API Service");
        println!();
        println!("Usage: discount-api [OPTIONS]");
        println!();
        println!("Options:");
        println!("  --config <path>   Use a TOML config file (host, auth header name)");
        println!("  --help, -h        Show this help message");
        println!();
        println!("Environment variables:");
        println!("  PORT                        Port to listen on (required)");
        println!("  {}    Path to config file (overrides --config)", CONFIG_PATH_ENV);
        println!("  RUST_LOG                    Log filter (default: info)");
        return Ok(());
    }

    info!("Starting Discount API Service");

    // --config only applies when the environment does not already name a file
    if std::env::var(CONFIG_PATH_ENV).is_err() {
        if let Some(i) = args.iter().position(|arg| arg == "--config") {
            if let Some(path) = args.get(i + 1) {
                std::env::set_var(CONFIG_PATH_ENV, path);
                info!("Using custom config: {}", path);
            }
        }
    }

    let config = Config::load().inspect_err(|e| error!("{:#}", e))?;
    info!("Configuration loaded successfully");

    let api_server = ApiServer::new(config);
    api_server.run().await.inspect_err(|e| error!("{:#}", e))?;

    Ok(())
}
