//! Persistence of the last notified document.
//!
//! The state is a single text file holding one canonical URL. Reads accept
//! whatever encoding an earlier deployment left behind; writes are always
//! plain UTF-8, so every completed run heals the file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::encoding::decode_state;
use crate::Result;

/// File-backed store for the canonical URL of the last notified document.
#[derive(Debug, Clone)]
pub struct SeenStateStore {
    path: PathBuf,
}

impl SeenStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored URL, trimmed.
    ///
    /// A missing, unreadable or undecodable file is empty state: at worst the
    /// current document is notified again.
    #[must_use]
    pub fn load(&self) -> String {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no state file yet");
                return String::new();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "state file unreadable, treating as empty");
                return String::new();
            }
        };

        match decode_state(&bytes) {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "treating state as empty");
                String::new()
            }
        }
    }

    /// Overwrite the state file with `canonical_url` as UTF-8, no framing.
    ///
    /// Parent directories are created as needed.
    pub fn save(&self, canonical_url: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, canonical_url)?;
        tracing::debug!(path = %self.path.display(), url = canonical_url, "state saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SeenStateStore {
        SeenStateStore::new(dir.path().join("last_seen.txt"))
    }

    fn temp_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"))
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = temp_dir();
        assert_eq!(store_in(&dir).load(), "");
    }

    #[test]
    fn save_then_load_trims() {
        let dir = temp_dir();
        let store = store_in(&dir);
        fs::write(store.path(), "  https://www.fia.com/a.pdf \r\n").unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(store.load(), "https://www.fia.com/a.pdf");
    }

    #[test]
    fn save_overwrites_with_utf8() {
        let dir = temp_dir();
        let store = store_in(&dir);
        fs::write(store.path(), b"\xFF\xFEh\x00").unwrap_or_else(|e| panic!("{e}"));

        store.save("https://www.fia.com/b.pdf").unwrap_or_else(|e| panic!("{e}"));

        let raw = fs::read(store.path()).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(raw, b"https://www.fia.com/b.pdf");
    }

    #[test]
    fn garbled_file_is_empty() {
        let dir = temp_dir();
        let store = store_in(&dir);
        fs::write(store.path(), b"\x00\x00\x00\x01").unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(store.load(), "");
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = temp_dir();
        let store = SeenStateStore::new(dir.path().join("state/nested/last_seen.txt"));
        store.save("").unwrap_or_else(|e| panic!("{e}"));
        assert!(store.path().exists());
        assert_eq!(store.load(), "");
    }
}
