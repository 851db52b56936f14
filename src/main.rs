//! Sahayak - an AI teaching assistant for multi-grade classrooms.
//!
//! Generates stories, lesson plans, worksheets, explanations and blackboard
//! visual aids through a hosted or local language model, and scores students'
//! reading attempts against the expected passage.

mod assessment;
mod commands;
mod config;
mod history;
mod llm;
mod output;
mod prompts;

use anyhow::Result;
use tokio::signal;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;

use config::AppConfig;

/// Wait for Ctrl+C or SIGTERM.
async fn wait_for_shutdown() {
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("🛑 Received Ctrl+C, cancelling...");
        }
        _ = async {
            #[cfg(unix)]
            {
                match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                    Ok(mut sigterm) => {
                        sigterm.recv().await;
                    }
                    Err(e) => {
                        debug!("Failed to register SIGTERM handler: {}", e);
                        std::future::pending::<()>().await;
                    }
                }
            }
            #[cfg(not(unix))]
            {
                std::future::pending::<()>().await;
            }
        } => {
            info!("🛑 Received SIGTERM, cancelling...");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let config = AppConfig::from_args();

    // Respect RUST_LOG env var, fallback to verbose flag, default to info.
    // Logs go to stderr so generated text on stdout can be piped.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(if config.verbose { "debug" } else { "info" }))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_timer(LocalTime::new(time::macros::format_description!("[hour]:[minute]:[second]")))
        .init();

    info!("📚 Sahayak v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.validate() {
        error!("❌ Configuration error: {}", e);
        std::process::exit(1);
    }
    config.log_config();

    tokio::select! {
        result = commands::run(&config) => {
            if let Err(e) = result {
                error!("❌ {:#}", e);
                std::process::exit(1);
            }
        }
        _ = wait_for_shutdown() => {
            std::process::exit(130);
        }
    }

    Ok(())
}
