//! Generator commands: build a prompt, call the model, return the text.

use anyhow::{Context, Result};
use time::OffsetDateTime;
use time::macros::format_description;
use tracing::{error, info};

use crate::config::{AskArgs, ContentArgs, Grade, Language, LessonPlanArgs, VisualAidArgs, WorksheetArgs, normalize_grades};
use crate::history::{HistoryEntry, SearchHistory};
use crate::llm::{GenerationError, ImageInput, LlmClient};
use crate::prompts::{self, QUICK_QUESTIONS};

/// Reject blank free-text fields before spending a model call.
fn require(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("Please enter {}", what);
    }
    Ok(())
}

/// Log the provider error and replace it with the generic retry message.
fn retry_message(err: GenerationError) -> anyhow::Error {
    error!("❌ LLM error: {}", err);
    anyhow::anyhow!(err.user_message())
}

/// Generate hyper-local content.
pub async fn generate_content(client: &LlmClient, args: &ContentArgs) -> Result<String> {
    require(&args.topic, "a topic")?;

    info!("🧠 Creating {} for {} in {}", args.kind, args.grade.label(), args.language.display_name());
    let prompt = prompts::content_prompt(args.kind, args.grade, args.language, &args.topic);
    client.generate(&prompt).await.map_err(retry_message)
}

/// Generate a multi-grade lesson plan.
pub async fn generate_lesson_plan(client: &LlmClient, args: &LessonPlanArgs) -> Result<String> {
    require(&args.subject, "a subject")?;
    require(&args.topic, "a topic")?;
    let grades = normalize_grades(&args.grades);
    if grades.is_empty() {
        anyhow::bail!("Select at least one class");
    }

    info!("🧠 Planning \"{}\" ({}) for classes {:?}", args.topic.trim(), args.duration.describe(), grades.iter().map(Grade::value).collect::<Vec<_>>());
    let prompt = prompts::lesson_plan_prompt(&args.subject, &args.topic, &grades, args.duration);
    client.generate(&prompt).await.map_err(retry_message)
}

/// Generate one worksheet per selected class from a textbook photo.
///
/// Classes are processed in ascending order; the first failure aborts the
/// remaining classes.
pub async fn generate_worksheets(client: &LlmClient, args: &WorksheetArgs) -> Result<Vec<(Grade, String)>> {
    let grades = normalize_grades(&args.grades);
    if grades.is_empty() {
        anyhow::bail!("Select at least one class");
    }

    let image = ImageInput::from_path(&args.image).context("Failed to load textbook image")?;

    let mut worksheets = Vec::with_capacity(grades.len());
    for (i, grade) in grades.iter().enumerate() {
        info!("📸 Creating worksheet {}/{} for {}", i + 1, grades.len(), grade.label());
        let prompt = prompts::worksheet_prompt(*grade);
        let worksheet = client.generate_with_image(&prompt, &image).await.map_err(retry_message)?;
        worksheets.push((*grade, worksheet));
    }

    Ok(worksheets)
}

/// Resolve the question and answer language for the knowledge base.
pub fn resolve_question(args: &AskArgs, history: &SearchHistory) -> Result<(String, Language)> {
    let (question, language) = if let Some(number) = args.from_history {
        let entry = history.get(number).with_context(|| format!("No recent question {} (run `sahayak history`)", number))?;
        (entry.question.clone(), args.language.unwrap_or(entry.language))
    } else if let Some(number) = args.quick {
        let question = number
            .checked_sub(1)
            .and_then(|idx| QUICK_QUESTIONS.get(idx))
            .with_context(|| format!("Quick question must be between 1 and {}", QUICK_QUESTIONS.len()))?;
        (question.to_string(), args.language.unwrap_or_default())
    } else {
        (args.question.clone().unwrap_or_default(), args.language.unwrap_or_default())
    };

    require(&question, "a question")?;
    Ok((question.trim().to_string(), language))
}

/// Explain a question and record it in `history`.
///
/// History is only updated when the explanation was generated.
pub async fn ask(client: &LlmClient, args: &AskArgs, history: &mut SearchHistory) -> Result<String> {
    let (question, language) = resolve_question(args, history)?;

    info!("💡 Explaining \"{}\" in {}", question, language.display_name());
    let prompt = prompts::knowledge_prompt(&question, language);
    let explanation = client.generate(&prompt).await.map_err(retry_message)?;

    history.record(HistoryEntry { question, language, asked_at: local_timestamp() });
    Ok(explanation)
}

/// Generate blackboard drawing instructions.
pub async fn generate_visual_aid(client: &LlmClient, args: &VisualAidArgs) -> Result<String> {
    require(&args.description, "a description of what to draw")?;

    info!("🎨 Designing {} (e.g. {})", args.kind, args.kind.example());
    let prompt = prompts::visual_aid_prompt(args.kind, &args.description);
    client.generate(&prompt).await.map_err(retry_message)
}

/// Current time for history entries.
///
/// `now_local` fails on multi-threaded processes on some platforms, so the
/// UTC fallback is common; the offset is always written.
fn local_timestamp() -> String {
    format_timestamp(OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()))
}

fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second] [offset_hour sign:mandatory]:[offset_minute]"))
        .unwrap_or_else(|_| format!("{} UTC", at.unix_timestamp()))
}
