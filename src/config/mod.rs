//! Configuration module for the teaching assistant.
//!
//! Provides CLI argument parsing and the fixed catalogs (languages, classes,
//! content kinds) that the generators offer.

mod catalog;
#[allow(clippy::module_inception)]
mod config;

pub use catalog::{AidKind, ContentKind, Grade, Language, PlanDuration, normalize_grades};
pub use config::{AppConfig, AskArgs, AssessArgs, Backend, Command, ContentArgs, LessonPlanArgs, VisualAidArgs, WorksheetArgs};
