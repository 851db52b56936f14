//! Subcommand handlers.

mod assess;
mod generate;
mod listing;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::{AppConfig, Command, Grade};
use crate::history::SearchHistory;
use crate::llm::LlmClient;
use crate::output::{self, Artifact};

/// Run the selected subcommand to completion.
pub async fn run(config: &AppConfig) -> Result<()> {
    match &config.command {
        Command::Assess(args) => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let result = assess::assess(args, stdin).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result).context("Failed to serialize assessment")?);
            } else {
                println!("{}", assess::render_report(&result));
            }
        }
        Command::Samples { language } => listing::print_samples(*language),
        Command::Languages => listing::print_languages(),
        Command::History { clear } => {
            let path = config.history_path();
            let mut history = SearchHistory::load(&path)?;
            if *clear {
                history.clear();
                history.save(&path)?;
                info!("🗑️  Cleared recent questions");
            } else {
                listing::print_history(&history);
            }
        }
        Command::Content(args) => {
            let client = LlmClient::new(config)?;
            let text = generate::generate_content(&client, args).await?;
            deliver(&config.output_dir, Artifact::Content, &text, args.save)?;
        }
        Command::LessonPlan(args) => {
            let client = LlmClient::new(config)?;
            let text = generate::generate_lesson_plan(&client, args).await?;
            deliver(&config.output_dir, Artifact::LessonPlan, &text, args.save)?;
        }
        Command::Worksheet(args) => {
            let client = LlmClient::new(config)?;
            let worksheets = generate::generate_worksheets(&client, args).await?;

            for (grade, text) in &worksheets {
                println!("── {} ──\n", grade.label());
                println!("{}\n", text.trim());
            }
            if args.save {
                save_worksheets(&config.output_dir, &worksheets)?;
            }
        }
        Command::Ask(args) => {
            let client = LlmClient::new(config)?;
            let path = config.history_path();
            let mut history = SearchHistory::load(&path)?;

            let text = generate::ask(&client, args, &mut history).await?;
            history.save(&path)?;
            deliver(&config.output_dir, Artifact::Knowledge, &text, args.save)?;
        }
        Command::VisualAid(args) => {
            let client = LlmClient::new(config)?;
            let text = generate::generate_visual_aid(&client, args).await?;
            deliver(&config.output_dir, Artifact::VisualAid, &text, args.save)?;
        }
    }

    Ok(())
}

/// Save one file per class, plus a combined file when there are several.
fn save_worksheets(dir: &Path, worksheets: &[(Grade, String)]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(worksheets.len() + 1);
    for (grade, text) in worksheets {
        paths.push(output::save_text(dir, Artifact::Worksheet(*grade), text)?);
    }
    if worksheets.len() > 1 {
        paths.push(output::save_text(dir, Artifact::AllWorksheets, &output::combine_worksheets(worksheets))?);
    }
    Ok(paths)
}

/// Print generated text and optionally save it.
fn deliver(dir: &Path, artifact: Artifact, text: &str, save: bool) -> Result<()> {
    println!("{}", text.trim());
    println!();

    if save {
        output::save_text(dir, artifact, text)?;
    } else {
        debug!("Not saving {} (pass --save to write a file)", artifact);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorksheetArgs;
    use std::io::Write;

    async fn demo_worksheets(grades: &[u8]) -> Vec<(Grade, String)> {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().expect("create temp file");
        file.write_all(b"\x89PNG").expect("write image bytes");

        let grades = grades.iter().map(|&g| Grade::new(g).expect("valid class")).collect();
        let args = WorksheetArgs { image: file.path().to_path_buf(), grades, save: true };
        generate::generate_worksheets(&LlmClient::demo(), &args).await.expect("demo worksheets")
    }

    fn saved_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .expect("read output dir")
            .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_save_worksheets_per_class_and_combined() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        let worksheets = demo_worksheets(&[3, 1]).await;

        let paths = save_worksheets(dir.path(), &worksheets).expect("save worksheets");
        assert_eq!(paths.len(), 3);

        let names = saved_names(dir.path());
        assert_eq!(names.len(), 3);
        assert!(names.iter().any(|n| n.starts_with("sahayak-worksheet-class-1-")));
        assert!(names.iter().any(|n| n.starts_with("sahayak-worksheet-class-3-")));

        let combined = names.iter().find(|n| n.starts_with("sahayak-all-worksheets-")).expect("combined file");
        let text = std::fs::read_to_string(dir.path().join(combined)).expect("read combined");
        let first = text.find("CLASS 1 WORKSHEET").expect("class 1 banner");
        let second = text.find("CLASS 3 WORKSHEET").expect("class 3 banner");
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_single_class_has_no_combined_file() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        let worksheets = demo_worksheets(&[2]).await;

        save_worksheets(dir.path(), &worksheets).expect("save worksheets");

        let names = saved_names(dir.path());
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("sahayak-worksheet-class-2-"));
        assert!(names[0].ends_with(".txt"));
    }
}
