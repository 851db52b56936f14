//! LLM client module for generating classroom material.
//!
//! Uses RIG with the Gemini provider (hosted) or Ollama (local), and falls
//! back to canned sample content when no API key is configured.

mod client;
mod demo;
mod error;
mod image;

pub use client::LlmClient;
pub use error::GenerationError;
pub use image::ImageInput;
