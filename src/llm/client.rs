//! Text generation client using RIG with Gemini or Ollama providers.

use anyhow::{Context, Result};
use rig::OneOrMany;
use rig::agent::Agent;
use rig::client::{CompletionClient, Nothing};
use rig::completion::Prompt;
use rig::message::{ImageMediaType, Message, UserContent};
use rig::providers::{gemini, ollama};
use tracing::{debug, info};

use super::demo;
use super::error::GenerationError;
use super::image::{ImageFormat, ImageInput};
use crate::config::{AppConfig, Backend};

/// Provider-specific agent behind the client.
enum Engine {
    Gemini(Agent<gemini::completion::CompletionModel>), // Hosted Gemini model
    Ollama(Agent<ollama::CompletionModel>),             // Local Ollama model
    Demo,                                               // Canned offline responses
}

/// Client for single-shot prompt generation.
///
/// Every call is independent: the generators never carry conversation
/// history between requests.
pub struct LlmClient {
    engine: Engine,
}

impl LlmClient {
    /// Create a new generation client for the configured backend.
    ///
    /// # Errors
    /// Returns an error if the provider client cannot be built or the Gemini
    /// backend is selected without an API key.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let backend = config.effective_backend();
        let model = config.effective_model();

        let engine = match backend {
            Backend::Gemini => {
                let api_key = config.api_key.as_deref().context("Gemini backend requires GEMINI_API_KEY or --api-key")?;
                info!("Using Gemini model: {}", model);

                let client = gemini::Client::builder()
                    .api_key(api_key)
                    .build()
                    .map_err(|e| GenerationError::client("gemini", e))
                    .context("Failed to create Gemini client")?;

                let agent = client
                    .agent(model)
                    .preamble(&config.system_prompt)
                    .temperature(f64::from(config.temperature))
                    .build();
                Engine::Gemini(agent)
            }
            Backend::Ollama => {
                info!("Connecting to Ollama at {}", config.ollama_url);
                info!("Using Ollama model: {}", model);

                let client = ollama::Client::builder()
                    .api_key(Nothing)
                    .base_url(&config.ollama_url)
                    .build()
                    .map_err(|e| GenerationError::client("ollama", e))
                    .context("Failed to create Ollama client")?;

                let agent = client
                    .agent(model)
                    .preamble(&config.system_prompt)
                    .temperature(f64::from(config.temperature))
                    .build();
                Engine::Ollama(agent)
            }
            Backend::Demo => {
                info!("Serving offline sample content (set GEMINI_API_KEY for real generation)");
                return Ok(Self::demo());
            }
        };

        Ok(Self { engine })
    }

    /// Offline client that only serves sample content.
    pub fn demo() -> Self {
        Self { engine: Engine::Demo }
    }

    /// Name of the active backend, for logging.
    pub fn backend_name(&self) -> &'static str {
        match self.engine {
            Engine::Gemini(_) => "gemini",
            Engine::Ollama(_) => "ollama",
            Engine::Demo => "demo",
        }
    }

    /// Generate text for a prompt.
    ///
    /// # Errors
    /// Returns an error if the provider request fails.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!("Prompt ({} chars) via {}", prompt.chars().count(), self.backend_name());

        let response = match &self.engine {
            Engine::Gemini(agent) => agent.prompt(prompt).await.map_err(|e| GenerationError::request("gemini", false, e))?,
            Engine::Ollama(agent) => agent.prompt(prompt).await.map_err(|e| GenerationError::request("ollama", false, e))?,
            Engine::Demo => demo::demo_content(prompt).to_string(),
        };

        debug!("Response: {} chars", response.chars().count());
        Ok(response)
    }

    /// Generate text for a prompt accompanied by an image.
    ///
    /// # Errors
    /// Returns an error if the multimodal message cannot be built or the
    /// provider request fails.
    pub async fn generate_with_image(&self, prompt: &str, image: &ImageInput) -> Result<String, GenerationError> {
        debug!("Image prompt ({} chars, {} image bytes) via {}", prompt.chars().count(), image.byte_len(), self.backend_name());

        let response = match &self.engine {
            Engine::Gemini(agent) => agent.prompt(image_message(prompt, image)?).await.map_err(|e| GenerationError::request("gemini", true, e))?,
            Engine::Ollama(agent) => agent.prompt(image_message(prompt, image)?).await.map_err(|e| GenerationError::request("ollama", true, e))?,
            Engine::Demo => demo::demo_image_content().to_string(),
        };

        debug!("Response: {} chars", response.chars().count());
        Ok(response)
    }
}

/// Build a user message holding the prompt text followed by the image.
fn image_message(prompt: &str, image: &ImageInput) -> Result<Message, GenerationError> {
    let content = OneOrMany::many(vec![
        UserContent::text(prompt),
        UserContent::image_base64(image.to_base64(), Some(media_type(image.format())), None),
    ])
    .map_err(|e| GenerationError::Image(e.to_string()))?;

    Ok(Message::User { content })
}

fn media_type(format: ImageFormat) -> ImageMediaType {
    match format {
        ImageFormat::Jpeg => ImageMediaType::JPEG,
        ImageFormat::Png => ImageMediaType::PNG,
        ImageFormat::Gif => ImageMediaType::GIF,
        ImageFormat::Webp => ImageMediaType::WEBP,
        ImageFormat::Heic => ImageMediaType::HEIC,
        ImageFormat::Heif => ImageMediaType::HEIF,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_demo_generate() {
        let client = LlmClient::demo();
        assert_eq!(client.backend_name(), "demo");

        let story = client.generate("Create a story for Class 1 students").await.expect("demo never fails");
        assert!(story.contains("Farmer Raju"));
    }

    #[tokio::test]
    async fn test_demo_generate_with_image() {
        let mut file = tempfile::Builder::new().suffix(".jpg").tempfile().expect("create temp file");
        file.write_all(&[0xff, 0xd8, 0xff]).expect("write image bytes");
        let image = ImageInput::from_path(file.path()).expect("load image");

        let client = LlmClient::demo();
        let analysis = client.generate_with_image("Analyze this textbook image", &image).await.expect("demo never fails");
        assert!(analysis.contains("Image Analysis Result"));
    }

    #[test]
    fn test_image_message_has_text_and_image() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().expect("create temp file");
        file.write_all(b"png").expect("write image bytes");
        let image = ImageInput::from_path(file.path()).expect("load image");

        match image_message("describe", &image).expect("build message") {
            Message::User { content } => assert_eq!(content.len(), 2),
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
