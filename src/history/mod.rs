//! Knowledge-base search history.
//!
//! History is plain data: commands load it, pass it around by reference and
//! save it back. There is no process-wide store.

mod search;

pub use search::{HistoryEntry, SearchHistory};

/// File name of the history store inside the data directory.
pub const HISTORY_FILE: &str = "history.json";
