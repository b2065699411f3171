//! Fixture generator for the satorii keystore container
//!
//! This crate writes `satorii.keystore`, a fabricated 16-byte file shaped like
//! a keystore container. It carries no key material and exists only so code
//! paths that expect such a file can be exercised in tests.
//!
//! # Format
//!
//! Every field is an unsigned big-endian integer with a fixed value:
//!
//! - **Magic** (4 bytes): `0xFEEDFEED`
//! - **Version** (4 bytes): `1`
//! - **Entry count** (4 bytes): `1`
//! - **Placeholder entry** (4 bytes): `01 02 03 04`
//!
//! # Example
//!
//! ```no_run
//! use satorii_keystore::{DEFAULT_FIXTURE_PATH, confirmation_message, write_fixture};
//! use std::path::Path;
//!
//! # fn main() -> satorii_keystore::Result<()> {
//! write_fixture(DEFAULT_FIXTURE_PATH)?;
//! println!("{}", confirmation_message(Path::new(DEFAULT_FIXTURE_PATH)));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod fixture;
pub mod writer;

pub use config::{FixtureConfig, LogLevel};
pub use error::{KeystoreError, Result};
pub use fixture::{
    DEFAULT_FIXTURE_PATH, ENTRY_COUNT, FIXTURE_SIZE, HEADER_SIZE, KEYSTORE_MAGIC,
    KEYSTORE_VERSION, KeystoreFixture, KeystoreHeader, PLACEHOLDER_PAYLOAD, PlaceholderEntry,
};
pub use writer::{confirmation_message, write_fixture};
