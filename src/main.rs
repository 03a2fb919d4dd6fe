//! Address Book - Main entry point
//!
//! Runs the interactive menu on stdin/stdout. Logs go to stderr.

use address_book::{AddressBook, Config, Session};
use anyhow::{Context, Result};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep the menu on stdout readable)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Default address book file: {}", config.book_file.display());

    let book = if config.autoload {
        match AddressBook::load_from_file(&config.book_file) {
            Ok(book) => book,
            Err(e) => {
                error!("Failed to load {}: {}", config.book_file.display(), e);
                return Err(e).with_context(|| {
                    format!("loading {}", config.book_file.display())
                });
            }
        }
    } else {
        AddressBook::new()
    };

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), book, config);
    session.run().context("interactive session failed")?;

    info!("Address book session finished");
    Ok(())
}
