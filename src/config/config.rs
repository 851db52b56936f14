//! Application configuration and CLI argument parsing.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::catalog::{AidKind, ContentKind, Grade, Language, PlanDuration, parse_grade};
use crate::history::HISTORY_FILE;

/// Default hosted model.
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Default local model (multimodal, so worksheets from photos also work).
const DEFAULT_OLLAMA_MODEL: &str = "gemma3:4b";

const DEFAULT_SYSTEM_PROMPT: &str = "You are Sahayak, a teaching assistant for teachers in multi-grade Indian primary \
    schools with limited resources. Write clear, practical, age-appropriate material rooted in local culture.";

/// Text generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Google Gemini (requires an API key)
    Gemini,
    /// Local Ollama server
    Ollama,
    /// Offline sample content, no network access
    Demo,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Gemini => write!(f, "gemini"),
            Backend::Ollama => write!(f, "ollama"),
            Backend::Demo => write!(f, "demo"),
        }
    }
}

/// Teaching assistant configuration.
#[derive(Parser, Debug, Clone)]
#[command(name = "sahayak")]
#[command(author, version, about = "An AI teaching assistant for multi-grade classrooms", long_about = None)]
pub struct AppConfig {
    /// Generation backend (defaults to gemini when an API key is set, demo otherwise)
    #[arg(long, env = "SAHAYAK_BACKEND", value_enum, global = true)]
    pub backend: Option<Backend>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Model name (gemini-2.0-flash for Gemini, gemma3:4b for Ollama by default)
    #[arg(long, short = 'm', env = "SAHAYAK_MODEL", global = true)]
    pub model: Option<String>,

    /// Ollama API URL
    #[arg(long, short = 'u', env = "OLLAMA_URL", default_value = "http://localhost:11434", global = true)]
    pub ollama_url: String,

    /// System prompt for the LLM
    #[arg(long, short = 'p', default_value = DEFAULT_SYSTEM_PROMPT, global = true)]
    pub system_prompt: String,

    /// LLM temperature (0.0-2.0). Lower for factual explanations, higher for stories and poems
    #[arg(long, default_value = "0.7", value_parser = parse_temperature, global = true)]
    pub temperature: f32,

    /// Directory for files written with --save
    #[arg(long, short = 'o', env = "SAHAYAK_OUTPUT_DIR", default_value = ".", global = true)]
    pub output_dir: PathBuf,

    /// Directory for persistent data such as search history
    #[arg(long, env = "SAHAYAK_DATA_DIR", default_value_os_t = default_data_dir(), global = true)]
    pub data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Teacher tools.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Score a student's reading against the expected passage
    Assess(AssessArgs),

    /// List the bundled reading passages
    Samples {
        /// Only show passages in this language
        #[arg(long, short = 'l', value_enum)]
        language: Option<Language>,
    },

    /// Generate a story, poem, explanation, activity or worksheet
    Content(ContentArgs),

    /// Plan lessons for a multi-grade classroom
    LessonPlan(LessonPlanArgs),

    /// Create differentiated worksheets from a textbook photo
    Worksheet(WorksheetArgs),

    /// Get a simple explanation for a question
    Ask(AskArgs),

    /// Show recent questions
    History {
        /// Forget all recent questions
        #[arg(long)]
        clear: bool,
    },

    /// Get blackboard drawing instructions for a visual aid
    VisualAid(VisualAidArgs),

    /// List supported languages and their speech locales
    Languages,
}

#[derive(Args, Debug, Clone)]
pub struct AssessArgs {
    /// Passage the student was asked to read
    #[arg(long, short = 'r', conflicts_with = "sample")]
    pub reference: Option<String>,

    /// Use bundled passage number N (see `samples`)
    #[arg(long, short = 's')]
    pub sample: Option<usize>,

    /// Language of the passage
    #[arg(long, short = 'l', value_enum, default_value = "hindi")]
    pub language: Language,

    /// Recognized speech; read from standard input when omitted
    #[arg(long)]
    pub spoken: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ContentArgs {
    /// What to write about
    pub topic: String,

    /// Kind of content
    #[arg(long, short = 'k', value_enum, default_value = "story")]
    pub kind: ContentKind,

    /// Class (1-5)
    #[arg(long, short = 'g', default_value = "1", value_parser = parse_grade)]
    pub grade: Grade,

    /// Language to write in
    #[arg(long, short = 'l', value_enum, default_value = "hindi")]
    pub language: Language,

    /// Also save the result to the output directory
    #[arg(long)]
    pub save: bool,
}

#[derive(Args, Debug, Clone)]
pub struct LessonPlanArgs {
    /// Subject, e.g. "Mathematics / गणित"
    #[arg(long)]
    pub subject: String,

    /// Topic, e.g. "Fractions"
    #[arg(long, short = 't')]
    pub topic: String,

    /// Classes taught together, comma separated
    #[arg(long, short = 'g', value_delimiter = ',', default_value = "1,2,3", value_parser = parse_grade)]
    pub grades: Vec<Grade>,

    /// Span of the plan
    #[arg(long, short = 'd', value_enum, default_value = "week")]
    pub duration: PlanDuration,

    /// Also save the result to the output directory
    #[arg(long)]
    pub save: bool,
}

#[derive(Args, Debug, Clone)]
pub struct WorksheetArgs {
    /// Photo of a textbook page
    #[arg(long, short = 'i')]
    pub image: PathBuf,

    /// Classes to create worksheets for, comma separated
    #[arg(long, short = 'g', value_delimiter = ',', default_value = "1,2,3", value_parser = parse_grade)]
    pub grades: Vec<Grade>,

    /// Save each worksheet and a combined file to the output directory
    #[arg(long)]
    pub save: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AskArgs {
    /// Question to explain
    #[arg(conflicts_with_all = ["quick", "from_history"])]
    pub question: Option<String>,

    /// Ask quick question number N
    #[arg(long, conflicts_with = "from_history")]
    pub quick: Option<usize>,

    /// Repeat recent question number N (see `history`)
    #[arg(long)]
    pub from_history: Option<usize>,

    /// Language of the answer (defaults to hindi, or the language of a repeated question)
    #[arg(long, short = 'l', value_enum)]
    pub language: Option<Language>,

    /// Also save the result to the output directory
    #[arg(long)]
    pub save: bool,
}

#[derive(Args, Debug, Clone)]
pub struct VisualAidArgs {
    /// What to draw
    pub description: String,

    /// Kind of visual aid
    #[arg(long, short = 'k', value_enum, default_value = "diagram")]
    pub kind: AidKind,

    /// Also save the result to the output directory
    #[arg(long)]
    pub save: bool,
}

impl AppConfig {
    /// Parse configuration from command line arguments.
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Get the effective backend.
    ///
    /// Falls back to demo content when no API key is available.
    pub fn effective_backend(&self) -> Backend {
        self.backend.unwrap_or_else(|| if self.has_api_key() { Backend::Gemini } else { Backend::Demo })
    }

    /// Get the effective model name for the backend.
    pub fn effective_model(&self) -> &str {
        match (self.model.as_deref(), self.effective_backend()) {
            (Some(model), _) => model,
            (None, Backend::Gemini) => DEFAULT_GEMINI_MODEL,
            (None, Backend::Ollama) => DEFAULT_OLLAMA_MODEL,
            (None, Backend::Demo) => "sample-content",
        }
    }

    /// Get the path of the search history file.
    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(HISTORY_FILE)
    }

    fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.effective_backend() == Backend::Gemini && !self.has_api_key() {
            anyhow::bail!("Gemini backend requires an API key (set GEMINI_API_KEY or pass --api-key)");
        }

        if let Command::Worksheet(args) = &self.command {
            if !args.image.exists() {
                anyhow::bail!("Image file not found: {}", args.image.display());
            }
            if args.grades.is_empty() {
                anyhow::bail!("Select at least one class");
            }
        }

        if let Command::LessonPlan(args) = &self.command
            && args.grades.is_empty()
        {
            anyhow::bail!("Select at least one class");
        }

        Ok(())
    }

    /// Log the current configuration.
    pub fn log_config(&self) {
        info!("Configuration:");
        info!("  Backend: {}", self.effective_backend());
        info!("  Model: {}", self.effective_model());
        if self.effective_backend() == Backend::Ollama {
            info!("  Ollama URL: {}", self.ollama_url);
        }
        info!("  Temperature: {}", self.temperature);
        info!("  System prompt: {}...", &self.system_prompt.chars().take(50).collect::<String>());
        info!("  Output directory: {}", self.output_dir.display());
        info!("  Data directory: {}", self.data_dir.display());
    }
}

/// Get the default data directory (<platform data dir>/sahayak).
fn default_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("sahayak")
    } else {
        PathBuf::from(".sahayak")
    }
}

/// Parse and validate temperature value (0.0-2.0).
fn parse_temperature(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("'{}' is not a valid float", s))?;
    if (0.0..=2.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("temperature must be between 0.0 and 2.0, got {}", value))
    }
}
