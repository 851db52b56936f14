//! Reading assessment command.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use crate::assessment::{self, AssessmentError, AssessmentResult};
use crate::config::AssessArgs;

/// Pick the passage to score against: explicit text or a bundled sample.
pub fn resolve_reference(args: &AssessArgs) -> Result<String> {
    match (&args.reference, args.sample) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(number)) => assessment::sample_text(args.language, number)
            .map(str::to_string)
            .with_context(|| format!("No sample {} for {} (run `sahayak samples -l {}`)", number, args.language, args.language)),
        (None, None) => Err(AssessmentError::NoReference.into()),
    }
}

/// Obtain the transcript from `--spoken` or the first line of `input`.
///
/// Returns `None` when the recognizer produced nothing.
pub async fn read_transcript(args: &AssessArgs, mut input: impl AsyncBufRead + Unpin) -> Result<Option<String>> {
    if let Some(spoken) = &args.spoken {
        return Ok(Some(spoken.clone()));
    }

    debug!("Reading transcript from standard input");
    let mut line = String::new();
    let read = input.read_line(&mut line).await.context("Failed to read transcript")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Score one reading attempt.
pub async fn assess(args: &AssessArgs, input: impl AsyncBufRead + Unpin) -> Result<AssessmentResult> {
    let reference = resolve_reference(args)?;
    info!("📖 Expected ({}, {}): {}", args.language, args.language.locale(), reference);

    let transcript = read_transcript(args, input).await?;
    match assessment::assess_attempt(&reference, transcript.as_deref()) {
        Ok(result) => {
            info!("🎯 {} ({}% match, distance {})", result.band, result.percent, result.distance);
            Ok(result)
        }
        Err(e) => {
            warn!("🎤 {}", e);
            Err(e.into())
        }
    }
}

/// Terminal report for an assessment.
pub fn render_report(result: &AssessmentResult) -> String {
    let filled = usize::from(result.percent) / 5;
    let bar = format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled));

    format!(
        "Overall Score: {band}\n\
         Accuracy:      {bar} {percent}% match\n\
         Feedback:      {feedback}\n\
         Expected Text: {expected}\n\
         What You Said: {spoken}",
        band = result.band,
        percent = result.percent,
        feedback = result.band.feedback(),
        expected = result.reference,
        spoken = result.candidate,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::QualitativeBand;
    use crate::config::Language;
    use std::time::Duration;
    use tokio::io::{AsyncWriteExt, BufReader};

    fn assess_args(reference: Option<&str>, sample: Option<usize>, language: Language, spoken: Option<&str>) -> AssessArgs {
        AssessArgs {
            reference: reference.map(str::to_string),
            sample,
            language,
            spoken: spoken.map(str::to_string),
            json: false,
        }
    }

    #[tokio::test]
    async fn test_sample_reference_and_spoken_flag() {
        let args = assess_args(None, Some(1), Language::English, Some("the sun rise in the east."));
        let result = assess(&args, "".as_bytes()).await.expect("scored");
        assert_eq!(result.reference, "The sun rises in the east.");
        assert_eq!(result.percent, 96);
        assert_eq!(result.band, QualitativeBand::Excellent);
    }

    #[tokio::test]
    async fn test_transcript_from_input() {
        let args = assess_args(Some("Birds fly in the sky."), None, Language::English, None);
        let result = assess(&args, "birds fly in the sky.\n".as_bytes()).await.expect("scored");
        assert_eq!(result.candidate, "birds fly in the sky.");
        assert_eq!(result.similarity, 1.0);
    }

    #[tokio::test]
    async fn test_failed_recognition_short_circuits() {
        let args = assess_args(Some("बच्चे बगीचे में खेल रहे हैं।"), None, Language::Hindi, None);

        for input in ["", "\n", "   \n"] {
            let err = assess(&args, input.as_bytes()).await.expect_err("must not be scored");
            assert_eq!(err.downcast_ref::<AssessmentError>(), Some(&AssessmentError::NoTranscript));
        }
    }

    #[tokio::test]
    async fn test_pending_input_can_be_cancelled() {
        let args = assess_args(Some("Birds fly in the sky."), None, Language::English, None);
        let (writer, reader) = tokio::io::duplex(64);

        // The writer stays open, so the read must yield and be droppable
        let waiting = tokio::time::timeout(Duration::from_millis(50), read_transcript(&args, BufReader::new(reader))).await;
        assert!(waiting.is_err());
        drop(writer);
    }

    #[tokio::test]
    async fn test_transcript_from_async_stream() {
        let args = assess_args(Some("Birds fly in the sky."), None, Language::English, None);
        let (mut writer, reader) = tokio::io::duplex(64);

        let read = tokio::spawn(async move { read_transcript(&args, BufReader::new(reader)).await });
        writer.write_all(b"birds fly in the sky\r\nignored\n").await.expect("write transcript");

        let transcript = read.await.expect("join").expect("read");
        assert_eq!(transcript.as_deref(), Some("birds fly in the sky"));
    }

    #[test]
    fn test_missing_reference() {
        let args = assess_args(None, None, Language::Hindi, Some("text"));
        let err = resolve_reference(&args).expect_err("no reference");
        assert_eq!(err.downcast_ref::<AssessmentError>(), Some(&AssessmentError::NoReference));

        let args = assess_args(None, Some(9), Language::Marathi, Some("text"));
        assert!(resolve_reference(&args).is_err());
    }

    #[test]
    fn test_render_report() {
        let result = assessment::score("Water is essential for life.", "water is essential for life.");
        let report = render_report(&result);
        assert!(report.contains("Overall Score: Excellent"));
        assert!(report.contains("[####################] 100% match"));
        assert!(report.contains("Feedback:      Perfect pronunciation!"));
        assert!(report.contains("What You Said: water is essential for life."));
    }
}
