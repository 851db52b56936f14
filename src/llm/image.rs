//! Image attachments for multimodal prompts.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use super::error::ImageError;

/// Media type of an attached image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Webp,
    Heic,
    Heif,
}

impl ImageFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::Webp),
            "heic" => Some(ImageFormat::Heic),
            "heif" => Some(ImageFormat::Heif),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Webp => "image/webp",
            ImageFormat::Heic => "image/heic",
            ImageFormat::Heif => "image/heif",
        }
    }
}

/// An image loaded into memory, ready to be sent with a prompt.
#[derive(Debug, Clone)]
pub struct ImageInput {
    bytes: Vec<u8>,
    format: ImageFormat,
}

impl ImageInput {
    /// Load an image from disk.
    ///
    /// # Errors
    /// Returns an error if the extension is not a supported image type, the
    /// file cannot be read, or it is empty.
    pub fn from_path(path: &Path) -> Result<Self, ImageError> {
        let format = ImageFormat::from_path(path).ok_or_else(|| ImageError::UnsupportedType { path: path.to_path_buf() })?;
        let bytes = std::fs::read(path).map_err(|source| ImageError::Read { path: path.to_path_buf(), source })?;

        if bytes.is_empty() {
            return Err(ImageError::Empty { path: path.to_path_buf() });
        }

        debug!("Loaded {} image ({} bytes) from {}", format.mime_type(), bytes.len(), path.display());
        Ok(Self { bytes, format })
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Base64 payload without a data-URL prefix.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("page.JPG")), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_path(Path::new("page.jpeg")), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_path(Path::new("scan.png")), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_path(Path::new("notes.pdf")), None);
        assert_eq!(ImageFormat::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn test_load_and_encode() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().expect("create temp file");
        file.write_all(b"abc").expect("write image bytes");

        let image = ImageInput::from_path(file.path()).expect("load image");
        assert_eq!(image.format(), ImageFormat::Png);
        assert_eq!(image.byte_len(), 3);
        assert_eq!(image.to_base64(), "YWJj");
    }

    #[test]
    fn test_empty_and_unsupported_files_rejected() {
        let empty = tempfile::Builder::new().suffix(".jpg").tempfile().expect("create temp file");
        assert!(matches!(ImageInput::from_path(empty.path()), Err(ImageError::Empty { .. })));

        let text = tempfile::Builder::new().suffix(".txt").tempfile().expect("create temp file");
        assert!(matches!(ImageInput::from_path(text.path()), Err(ImageError::UnsupportedType { .. })));
    }
}
