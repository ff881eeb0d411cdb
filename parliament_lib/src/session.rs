//! Persistence of the chatbot session id.
//!
//! The session id is the only piece of chat state that outlives a run. It is
//! reached through the [`SessionStore`] capability so controllers never touch
//! storage directly: tests inject [`MemorySessionStore`], the CLI injects a
//! [`FileSessionStore`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::ParliamentError;

/// Get/set/clear access to a persisted chat session id.
///
/// Reads never fail: an unreadable store holds no session. Writes report
/// failures as [`ParliamentError::Session`]; losing the session id only
/// means the next exchange starts a new backend session.
pub trait SessionStore {
    fn get(&self) -> Option<String>;
    fn set(&self, session_id: &str) -> Result<(), ParliamentError>;
    fn clear(&self) -> Result<(), ParliamentError>;
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self) -> Option<String> {
        (**self).get()
    }
    fn set(&self, session_id: &str) -> Result<(), ParliamentError> {
        (**self).set(session_id)
    }
    fn clear(&self) -> Result<(), ParliamentError> {
        (**self).clear()
    }
}

/// In-process store. Lives as long as the value does.
#[derive(Default)]
pub struct MemorySessionStore {
    session_id: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `session_id`, as if persisted earlier.
    pub fn with_session(session_id: &str) -> Self {
        Self {
            session_id: Mutex::new(Some(session_id.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        self.session_id
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set(&self, session_id: &str) -> Result<(), ParliamentError> {
        *self.session_id.lock().unwrap_or_else(|e| e.into_inner()) = Some(session_id.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), ParliamentError> {
        *self.session_id.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct SessionFile {
    session_id: String,
}

/// Store backed by a small JSON file, so a session survives restarts.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Could not read session file {}: {}", self.path.display(), e);
                return None;
            }
        };
        match serde_json::from_str::<SessionFile>(&raw) {
            Ok(file) if !file.session_id.trim().is_empty() => Some(file.session_id),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(
                    "Ignoring corrupt session file {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    fn set(&self, session_id: &str) -> Result<(), ParliamentError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ParliamentError::Session(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }
        let body = serde_json::to_string(&SessionFile {
            session_id: session_id.to_string(),
        })
        .map_err(|e| ParliamentError::Session(format!("cannot serialize session: {}", e)))?;
        fs::write(&self.path, body).map_err(|e| {
            ParliamentError::Session(format!("cannot write {}: {}", self.path.display(), e))
        })
    }

    fn clear(&self) -> Result<(), ParliamentError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ParliamentError::Session(format!(
                "cannot remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(), None);
        store.set("abc").unwrap();
        assert_eq!(store.get().as_deref(), Some("abc"));
        store.clear().unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        FileSessionStore::new(&path).set("abc").unwrap();
        assert_eq!(FileSessionStore::new(&path).get().as_deref(), Some("abc"));
    }

    #[test]
    fn file_store_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        store.set("abc").unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.get(), None);
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn file_store_reports_write_failures() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let store = FileSessionStore::new(blocker.join("session.json"));

        let err = store.set("abc").unwrap_err();
        assert!(matches!(err, ParliamentError::Session(_)));
        assert!(err.to_string().starts_with("Session error: cannot create"));
        assert_eq!(store.get(), None);
    }

    #[test]
    fn file_store_reports_remove_failures() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the session path cannot be removed as a file.
        let path = dir.path().join("session.json");
        fs::create_dir(&path).unwrap();
        let store = FileSessionStore::new(&path);

        assert!(matches!(store.clear(), Err(ParliamentError::Session(_))));
    }

    #[test]
    fn corrupt_file_reads_as_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(FileSessionStore::new(&path).get(), None);
    }

    #[test]
    fn stores_work_through_references() {
        let store = MemorySessionStore::with_session("xyz");
        let by_ref: &dyn SessionStore = &store;
        assert_eq!(SessionStore::get(&by_ref).as_deref(), Some("xyz"));
    }
}
