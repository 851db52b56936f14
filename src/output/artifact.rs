//! Saving generated material as text files.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;

use crate::config::Grade;

/// Errors from writing an artifact.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a saved file contains; determines its file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Content,
    LessonPlan,
    Worksheet(Grade),
    AllWorksheets,
    VisualAid,
    Knowledge,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Content => write!(f, "content"),
            Artifact::LessonPlan => write!(f, "lesson-plan"),
            Artifact::Worksheet(grade) => write!(f, "worksheet-class-{}", grade),
            Artifact::AllWorksheets => write!(f, "all-worksheets"),
            Artifact::VisualAid => write!(f, "visual-aid"),
            Artifact::Knowledge => write!(f, "knowledge"),
        }
    }
}

/// File name for an artifact created at `millis` since the Unix epoch.
pub fn artifact_file_name(artifact: Artifact, millis: i128) -> String {
    format!("sahayak-{}-{}.txt", artifact, millis)
}

/// Write text to `dir`, creating the directory if needed.
///
/// # Returns
/// Path of the written file.
pub fn save_text(dir: &Path, artifact: Artifact, text: &str) -> Result<PathBuf, OutputError> {
    std::fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir { path: dir.to_path_buf(), source })?;

    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let path = dir.join(artifact_file_name(artifact, millis));

    std::fs::write(&path, text).map_err(|source| OutputError::Write { path: path.clone(), source })?;
    info!("💾 Saved {} to {}", artifact, path.display());
    Ok(path)
}

/// Join per-grade worksheets into one document with a banner per class.
pub fn combine_worksheets(worksheets: &[(Grade, String)]) -> String {
    let rule = "=".repeat(43);
    worksheets
        .iter()
        .map(|(grade, content)| format!("\n{rule}\nCLASS {grade} WORKSHEET\n{rule}\n\n{content}\n"))
        .collect::<Vec<_>>()
        .join("\n")
}
