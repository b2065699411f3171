//! Writes the keystore fixture to disk

use crate::error::{KeystoreError, Result};
use crate::fixture::KeystoreFixture;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Write the keystore fixture to `path`.
///
/// Any existing file at `path` is truncated first, so the result is always
/// exactly the 16-byte fixture. The buffer is written with a single
/// `write_all` call and the handle is closed on every return path.
///
/// A failed or short write is reported as [`KeystoreError::Io`]; whatever was
/// left on disk is not cleaned up.
pub fn write_fixture(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = KeystoreFixture::new().to_bytes()?;

    debug!(
        "Encoded keystore fixture ({} bytes): {}",
        bytes.len(),
        hex::encode(&bytes)
    );

    let mut file = File::create(path).map_err(|e| KeystoreError::io(path, e))?;
    file.write_all(&bytes).map_err(|e| KeystoreError::io(path, e))?;
    file.flush().map_err(|e| KeystoreError::io(path, e))?;

    info!("Wrote {} byte keystore fixture to {}", bytes.len(), path.display());
    Ok(())
}

/// Human-readable confirmation line for a fixture written to `path`
pub fn confirmation_message(path: &Path) -> String {
    format!("Created {}", path.display())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::fixture::{DEFAULT_FIXTURE_PATH, FIXTURE_SIZE};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_write_fixture_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_FIXTURE_PATH);

        write_fixture(&path).expect("write fixture");

        let data = std::fs::read(&path).unwrap();
        assert_eq!(data.len(), FIXTURE_SIZE);
        assert_eq!(data, KeystoreFixture::new().to_bytes().unwrap());
    }

    #[test]
    fn test_write_fixture_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join(DEFAULT_FIXTURE_PATH);

        let error = write_fixture(&path).expect_err("parent does not exist");
        match &error {
            KeystoreError::Io { path: failed, source } => {
                assert_eq!(failed, &path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            KeystoreError::Encode(e) => panic!("unexpected encode error: {e}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_confirmation_message_default_path() {
        assert_eq!(
            confirmation_message(Path::new(DEFAULT_FIXTURE_PATH)),
            "Created satorii.keystore"
        );
    }
}
