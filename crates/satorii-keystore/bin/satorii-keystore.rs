//! satorii-keystore binary entry point.
//!
//! Parses the output path, initializes logging on stderr, writes the fixture
//! and prints a single confirmation line on stdout.

use anyhow::{Context, Result};
use satorii_keystore::{FixtureConfig, confirmation_message, write_fixture};
use tracing::Level;

fn main() -> Result<()> {
    let config = FixtureConfig::from_args();

    tracing_subscriber::fmt()
        .with_max_level(Level::from(config.log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Writing keystore fixture to {}", config.output.display());

    write_fixture(&config.output).with_context(|| {
        format!(
            "Could not create keystore fixture {}",
            config.output.display()
        )
    })?;

    println!("{}", confirmation_message(&config.output));
    Ok(())
}
