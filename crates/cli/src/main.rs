//! Bugjira command line entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod commands;

use args::{Cli, Command, LogFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env file if it exists
    let dotenv_result = dotenv::dotenv();

    // Initialize logging
    init_logging(cli.log_format)?;

    match dotenv_result {
        Ok(path) => debug!("Loaded environment variables from {}", path.display()),
        // Only warn if the error is not "file not found"
        Err(e) if !e.to_string().contains("No such file or directory") => {
            warn!("Could not load .env file: {}", e)
        }
        Err(_) => {}
    }

    let output = match cli.command {
        Command::Check { config } => commands::check(&config)?,
        Command::Fields { config, backend } => commands::fields(&config, backend.into())?,
        Command::Route { key } => commands::route(&key)?,
        Command::Init { path } => commands::init(&path)?,
    };

    print!("{}", output);
    Ok(())
}

/// Initialize logging based on environment variables
fn init_logging(format: Option<LogFormat>) -> Result<()> {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_format = match format {
        Some(LogFormat::Json) => "json".to_string(),
        Some(LogFormat::Pretty) => "pretty".to_string(),
        None => env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    // Logs go to stderr so command output stays clean
    let registry = tracing_subscriber::registry().with(env_filter);

    match log_format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize JSON logging")?;
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize pretty logging")?;
        }
    }

    info!(level = %log_level, format = %log_format, "Logging initialized");
    Ok(())
}
