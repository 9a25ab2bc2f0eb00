//! Dealership catalog service
//!
//! ```sh
//! # Default config ($DEALERSHIP_CONFIG or ~/.config/dealership/config.toml)
//! dealership-service
//!
//! # Custom config and port
//! dealership-service --config /etc/dealership/config.toml --port 9000
//!
//! # Validate config without starting
//! dealership-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use dealership::config::{default_config_path, AppConfig};
use dealership::server::{init_tracing, ServerHandle, ServerOptions};

/// REST backend for a vehicle dealership catalog.
#[derive(Parser, Debug)]
#[command(name = "dealership-service", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "DEALERSHIP_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the SQLite database file.
    #[arg(long)]
    db_path: Option<String>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Do not insert the demo catalog.
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    config.apply_env_overrides();
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config: {}", e);
            error!("Using default configuration.");
        }
    }

    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }
    if let Some(path) = cli.db_path {
        info!("CLI override: db_path = {}", path);
        config.database.path = path;
        config.database.url = None;
    }
    if cli.no_seed {
        config.seed.enabled = false;
    }

    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        println!("   Seed        : {}", config.seed.enabled);
        return Ok(());
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
