//! Keystore fixture layout and binary encoding
//!
//! The fixture is a header followed by one placeholder entry:
//!
//! ```text
//! offset  size  field
//! 0       4     magic        0xFEEDFEED
//! 4       4     version      1
//! 8       4     entry_count  1
//! 12      4     entry        01 02 03 04
//! ```
//!
//! All integers are big-endian. Nothing about the layout varies at runtime.

use crate::error::Result;
use binrw::BinWrite;
use std::io::{Cursor, Seek, Write};

/// Magic number at the start of every keystore file
pub const KEYSTORE_MAGIC: u32 = 0xFEED_FEED;

/// Keystore format version written by the generator
pub const KEYSTORE_VERSION: u32 = 1;

/// Number of entries in the fixture
pub const ENTRY_COUNT: u32 = 1;

/// Placeholder bytes standing in for an entry's key material
pub const PLACEHOLDER_PAYLOAD: [u8; 4] = [0x01, 0x02, 0x03, 0x04];

/// Encoded header size in bytes
pub const HEADER_SIZE: usize = 12;

/// Encoded fixture size in bytes
pub const FIXTURE_SIZE: usize = HEADER_SIZE + PLACEHOLDER_PAYLOAD.len();

/// Default output path, relative to the working directory
pub const DEFAULT_FIXTURE_PATH: &str = "satorii.keystore";

/// Keystore header (12 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinWrite)]
#[bw(big)]
pub struct KeystoreHeader {
    /// Magic number identifying the file type
    pub magic: u32,
    /// Format version
    pub version: u32,
    /// Number of entries following the header
    pub entry_count: u32,
}

impl KeystoreHeader {
    /// Header with the fixed fixture values
    pub const fn new() -> Self {
        Self {
            magic: KEYSTORE_MAGIC,
            version: KEYSTORE_VERSION,
            entry_count: ENTRY_COUNT,
        }
    }
}

impl Default for KeystoreHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Opaque entry data with no key material behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinWrite)]
#[bw(big)]
pub struct PlaceholderEntry {
    /// Raw entry bytes
    pub payload: [u8; 4],
}

impl PlaceholderEntry {
    /// Entry with the fixed placeholder payload
    pub const fn new() -> Self {
        Self {
            payload: PLACEHOLDER_PAYLOAD,
        }
    }
}

impl Default for PlaceholderEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete keystore fixture: header plus its single entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, BinWrite)]
#[bw(big)]
pub struct KeystoreFixture {
    /// File header
    pub header: KeystoreHeader,
    /// The only entry
    pub entry: PlaceholderEntry,
}

impl KeystoreFixture {
    /// The fixture exactly as it is written to disk
    pub const fn new() -> Self {
        Self {
            header: KeystoreHeader::new(),
            entry: PlaceholderEntry::new(),
        }
    }

    /// Encode the fixture into a writer
    pub fn write_to<W: Write + Seek>(&self, writer: &mut W) -> Result<()> {
        self.write(writer)?;
        Ok(())
    }

    /// Encode the fixture into a fresh buffer of [`FIXTURE_SIZE`] bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::with_capacity(FIXTURE_SIZE));
        self.write_to(&mut cursor)?;
        Ok(cursor.into_inner())
    }
}

impl Default for KeystoreFixture {
    fn default() -> Self {
        Self::new()
    }
}
