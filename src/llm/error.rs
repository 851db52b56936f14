//! Generation error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading an image to send with a prompt.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported image type for {path} (expected jpg, png, gif, webp, heic or heif)")]
    UnsupportedType { path: PathBuf },

    #[error("image file is empty: {path}")]
    Empty { path: PathBuf },
}

/// Errors from the text generation service.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The provider client could not be constructed.
    #[error("failed to create {backend} client: {message}")]
    Client { backend: &'static str, message: String },

    /// The provider rejected or failed the request.
    #[error("{backend} request failed: {message}")]
    Request { backend: &'static str, message: String, with_image: bool },

    /// The multimodal payload could not be assembled.
    #[error("invalid image payload: {0}")]
    Image(String),
}

impl GenerationError {
    pub(crate) fn client(backend: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Client { backend, message: err.to_string() }
    }

    pub(crate) fn request(backend: &'static str, with_image: bool, err: impl std::fmt::Display) -> Self {
        Self::Request { backend, message: err.to_string(), with_image }
    }

    /// Generic retry message suitable for showing to a teacher.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::Request { with_image: true, .. } | GenerationError::Image(_) => "Failed to analyze image and generate content.",
            _ => "Failed to generate content. Please check your API key and try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_depends_on_request_kind() {
        let text = GenerationError::request("gemini", false, "quota exceeded");
        let image = GenerationError::request("gemini", true, "quota exceeded");
        assert_eq!(text.user_message(), "Failed to generate content. Please check your API key and try again.");
        assert_eq!(image.user_message(), "Failed to analyze image and generate content.");
        assert_eq!(text.to_string(), "gemini request failed: quota exceeded");
    }
}
