//! Prompt construction for the content generators.

mod templates;

pub use templates::{QUICK_QUESTIONS, SUBJECTS, content_prompt, knowledge_prompt, lesson_plan_prompt, visual_aid_prompt, worksheet_prompt};
