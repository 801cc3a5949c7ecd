//! On-disk session registry: `{ "ids": [3, 7] }`.
//!
//! Loading never fails. A missing, unreadable, or malformed file means "no
//! saved sessions"; the user can always re-add accounts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tandem_common::{SessionError, SessionId};
use tracing::{debug, info, warn};

/// What was found at the state file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A well-formed registry, duplicates removed, order preserved.
    Loaded(Vec<SessionId>),
    /// No file at the path.
    Missing,
    /// The file exists but could not be read or has the wrong shape.
    Invalid(String),
}

impl LoadOutcome {
    /// Collapse to the saved identifiers, empty for anything but `Loaded`.
    pub fn into_ids(self) -> Vec<SessionId> {
        match self {
            LoadOutcome::Loaded(ids) => ids,
            LoadOutcome::Missing | LoadOutcome::Invalid(_) => Vec::new(),
        }
    }
}

#[derive(Deserialize)]
struct RegistryFile {
    ids: Vec<u32>,
}

#[derive(Serialize)]
struct RegistryFileRef<'a> {
    ids: &'a [SessionId],
}

/// Reads and rewrites the session state file.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    path: PathBuf,
}

impl SessionRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the state file. Problems are logged, never returned.
    pub fn load(&self) -> LoadOutcome {
        let outcome = read_registry(&self.path);
        match &outcome {
            LoadOutcome::Loaded(ids) => {
                debug!(path = %self.path.display(), count = ids.len(), "session registry loaded")
            }
            LoadOutcome::Missing => {
                debug!(path = %self.path.display(), "no session registry yet")
            }
            LoadOutcome::Invalid(reason) => {
                warn!(path = %self.path.display(), %reason, "ignoring unreadable session registry")
            }
        }
        outcome
    }

    /// Saved identifiers, in file order.
    pub fn list(&self) -> Vec<SessionId> {
        self.load().into_ids()
    }

    /// Overwrite the state file with `ids`.
    pub fn save(&self, ids: &[SessionId]) -> Result<(), SessionError> {
        let persist_err = |reason: String| SessionError::Persist {
            path: self.path.clone(),
            reason,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| persist_err(e.to_string()))?;
        }
        let json = serde_json::to_string(&RegistryFileRef { ids })
            .map_err(|e| persist_err(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| persist_err(e.to_string()))?;

        info!(path = %self.path.display(), count = ids.len(), "session registry saved");
        Ok(())
    }
}

fn read_registry(path: &Path) -> LoadOutcome {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return LoadOutcome::Missing,
        Err(e) => return LoadOutcome::Invalid(format!("read failed: {e}")),
    };

    parse_registry(&data)
}

/// Parse and shape-check a registry document.
pub(crate) fn parse_registry(data: &str) -> LoadOutcome {
    let file: RegistryFile = match serde_json::from_str(data) {
        Ok(file) => file,
        Err(e) => return LoadOutcome::Invalid(format!("malformed registry: {e}")),
    };

    let mut ids: Vec<SessionId> = Vec::with_capacity(file.ids.len());
    for raw in file.ids {
        let Some(id) = SessionId::new(raw) else {
            return LoadOutcome::Invalid(format!("invalid session id {raw}"));
        };
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    LoadOutcome::Loaded(ids)
}
