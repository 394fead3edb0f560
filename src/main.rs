mod api;
mod classify;
mod config;
mod display;
mod error;
mod icons;
mod readings;

use anyhow::{Context, Result};

const DEFAULT_WINDOW_MINUTES: u32 = 1440;
const DEFAULT_MAX_COUNT: u32 = 1;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        // The menu-bar host renders stdout only, so the error text has to
        // land there rather than on stderr.
        println!("{e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load configuration
    let config = config::load_config()?;

    // Fetch the latest reading
    let timeout = std::time::Duration::from_secs(config.request_timeout_secs);
    let mut client = api::ShareClient::new(config.outside_us, timeout);
    let raw = client
        .fetch_latest(&config, DEFAULT_WINDOW_MINUTES, DEFAULT_MAX_COUNT)
        .await
        .context("Failed to fetch latest readings")?;

    // Normalize and render
    let readings = readings::normalize(raw)?;
    println!("{}", display::render(&readings, &config, chrono::Utc::now()));

    Ok(())
}
