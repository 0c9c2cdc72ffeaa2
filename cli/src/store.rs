//! File-backed session store.
//!
//! The file holds the raw token and nothing else; a trailing line break left
//! by an editor is ignored. A missing or unreadable file reads as "no session".

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rides::{AuthToken, SessionError, SessionStore};

/// File name used under `$HOME/.wheels`.
const SESSION_FILE_NAME: &str = "session";

/// Used when `$HOME` is not set.
const FALLBACK_SESSION_FILE: &str = ".wheels-session";

/// Default session file for `home`, the value of `$HOME` if any.
pub fn default_session_file(home: Option<&Path>) -> PathBuf {
    match home {
        Some(home) if !home.as_os_str().is_empty() => home.join(".wheels").join(SESSION_FILE_NAME),
        _ => PathBuf::from(FALLBACK_SESSION_FILE),
    }
}

#[derive(Clone, Debug)]
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

fn storage(err: io::Error) -> SessionError {
    SessionError::Storage(err.to_string())
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Some(raw.trim_end_matches(['\r', '\n']).to_owned()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to read session file");
                None
            }
        }
    }

    fn set(&self, token: &AuthToken) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(storage)?;
        }
        fs::write(&self.path, token.as_str()).map_err(storage)
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(storage(err)),
        }
    }
}
