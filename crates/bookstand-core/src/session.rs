//! Local session marker.
//!
//! The storefront kept a browser flag; the back office keeps a small JSON
//! file in the data directory so a sign-in survives restarts.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::constants::SESSION_FILE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub authenticated: bool,
    /// Unix seconds of the sign-in, shown in the status bar.
    pub established_at: u64,
}

/// Session store backed by a JSON file.
///
/// The in-memory state is authoritative for the running process; disk
/// failures are reported once through [`SessionStore::take_error`] and
/// never block a sign-in or sign-out.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    record: Option<SessionRecord>,
    last_error: Option<String>,
}

impl SessionStore {
    /// Load the marker from `data_dir`, tolerating a missing file. A file
    /// that exists but cannot be parsed counts as signed out.
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SESSION_FILE);
        let (record, last_error) = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<SessionRecord>(&contents) {
                Ok(record) => (record.authenticated.then_some(record), None),
                Err(err) => (None, Some(format!("session file is unreadable: {err}"))),
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => (None, None),
            Err(err) => (None, Some(format!("could not read session file: {err}"))),
        };
        Self {
            path,
            record,
            last_error,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.record.as_ref().is_some_and(|record| record.authenticated)
    }

    pub fn established_at(&self) -> Option<u64> {
        self.record.as_ref().map(|record| record.established_at)
    }

    /// Record a successful sign-in. The in-memory marker is set even when
    /// the file cannot be written.
    pub fn establish(&mut self) {
        let record = SessionRecord {
            authenticated: true,
            established_at: now_secs(),
        };
        if let Err(err) = self.persist(&record) {
            tracing::warn!(%err, "session marker not persisted");
            self.last_error = Some(format!("could not save session: {err}"));
        }
        self.record = Some(record);
    }

    /// Drop the marker in memory and on disk. Called on sign-out.
    pub fn clear(&mut self) {
        self.record = None;
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(%err, "session file not removed");
                self.last_error = Some(format!("could not remove session file: {err}"));
            }
        }
    }

    fn persist(&self, record: &SessionRecord) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// One-shot read of the most recent storage error.
    pub fn take_error(&mut self) -> Option<String> {
        self.last_error.take()
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_means_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::load(dir.path());
        assert!(!store.is_authenticated());
        assert!(store.take_error().is_none());
    }

    #[test]
    fn test_establish_persists_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::load(dir.path());
        store.establish();
        assert!(store.is_authenticated());
        assert!(store.take_error().is_none());

        let reloaded = SessionStore::load(dir.path());
        assert!(reloaded.is_authenticated());
        assert!(reloaded.established_at().is_some());
    }

    #[test]
    fn test_clear_removes_the_marker() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::load(dir.path());
        store.establish();
        store.clear();
        assert!(!store.is_authenticated());
        assert!(store.take_error().is_none());

        let reloaded = SessionStore::load(dir.path());
        assert!(!reloaded.is_authenticated());
    }

    #[test]
    fn test_clear_without_marker_is_quiet() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::load(dir.path());
        store.clear();
        assert!(store.take_error().is_none());
    }

    #[test]
    fn test_corrupt_file_counts_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SESSION_FILE), "{not json").unwrap();
        let mut store = SessionStore::load(dir.path());
        assert!(!store.is_authenticated());
        let error = store.take_error().unwrap();
        assert!(error.contains("unreadable"), "unexpected error: {error}");
        assert!(store.take_error().is_none());
    }

    #[test]
    fn test_establish_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deeper").join("state");
        let mut store = SessionStore::load(&nested);
        store.establish();
        assert!(store.take_error().is_none());
        assert!(SessionStore::load(&nested).is_authenticated());
    }
}
