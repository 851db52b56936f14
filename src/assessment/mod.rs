//! Reading assessment module.
//!
//! Scores a recognized transcript against the passage a student was asked to
//! read, and keeps the bundled practice passages.

mod samples;
mod scorer;

use thiserror::Error;

pub use samples::{sample_text, sample_texts};
pub use scorer::{AssessmentResult, QualitativeBand, score};

/// Errors raised before an attempt can be scored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssessmentError {
    /// Speech recognition produced nothing usable.
    #[error("Could not recognize speech. Please try again.")]
    NoTranscript,

    /// No passage was chosen for the student to read.
    #[error("No text selected. Choose a sample or enter text to read.")]
    NoReference,
}

/// Score an attempt only when a transcript is available.
///
/// A missing or blank transcript means recognition failed; it is reported as
/// [`AssessmentError::NoTranscript`] and never reaches [`score`].
pub fn assess_attempt(reference: &str, transcript: Option<&str>) -> Result<AssessmentResult, AssessmentError> {
    if reference.trim().is_empty() {
        return Err(AssessmentError::NoReference);
    }

    match transcript {
        Some(text) if !text.trim().is_empty() => Ok(score(reference, text)),
        _ => Err(AssessmentError::NoTranscript),
    }
}
