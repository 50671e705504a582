//! Contact Book - Main entry point
//!
//! Sets up logging and configuration, creates an empty directory and prints
//! it page by page.

use anyhow::Result;
use contact_book::{Config, ContactDirectory};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can pick the filter
    let config = Config::from_env();
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only, stdout is for directory output)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let book = ContactDirectory::new();
    info!(page_size = config.page_size, "Contact book ready");

    for (number, page) in book.paginate(config.page_size)?.enumerate() {
        println!("Page {}", number + 1);
        for record in page {
            println!("  {}", record);
        }
    }

    Ok(())
}
