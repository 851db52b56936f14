//! Recent knowledge-base questions.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Language;

/// Number of questions kept.
pub const MAX_HISTORY: usize = 10;

/// Errors from loading or saving the history file.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("I/O error while {context} {path}: {source}")]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid history file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One asked question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question: String,
    pub language: Language,
    pub asked_at: String,
}

/// Newest-first list of recent questions, owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistory {
    entries: Vec<HistoryEntry>,
}

impl SearchHistory {
    /// Add an entry at the front, keeping at most [`MAX_HISTORY`] entries.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY);
    }

    /// Entry by 1-based position, newest first.
    pub fn get(&self, number: usize) -> Option<&HistoryEntry> {
        number.checked_sub(1).and_then(|idx| self.entries.get(idx))
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Load history from a JSON file; a missing file is an empty history.
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No history file at {}", path.display());
                return Ok(Self::default());
            }
            Err(source) => return Err(HistoryError::Io { context: "reading", path: path.to_path_buf(), source }),
        };

        let mut history: Self = serde_json::from_str(&data).map_err(|source| HistoryError::Json { path: path.to_path_buf(), source })?;
        history.entries.truncate(MAX_HISTORY);
        Ok(history)
    }

    /// Write history as JSON, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| HistoryError::Io { context: "creating", path: parent.to_path_buf(), source })?;
        }

        let data = serde_json::to_string_pretty(self).map_err(|source| HistoryError::Json { path: path.to_path_buf(), source })?;
        std::fs::write(path, data).map_err(|source| HistoryError::Io { context: "writing", path: path.to_path_buf(), source })?;
        debug!("Saved {} history entries to {}", self.entries.len(), path.display());
        Ok(())
    }
}
