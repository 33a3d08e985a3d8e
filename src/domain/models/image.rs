use std::path::Path;

use serde::{Deserialize, Serialize};

/// Supported image encodings for analysis requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Detect the format from the file's leading magic bytes.
    ///
    /// This is the only validation performed on image data; anything
    /// deeper (dimensions, integrity, size limits) is out of scope.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
        const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

        if data.starts_with(JPEG_MAGIC) {
            Some(ImageFormat::Jpeg)
        } else if data.starts_with(PNG_MAGIC) {
            Some(ImageFormat::Png)
        } else {
            None
        }
    }

    /// Guess the format from a file extension (`jpg`, `jpeg`, `png`).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mime_type())
    }
}

/// One-shot image analysis input.
///
/// Ephemeral: the request produces exactly one response and is never
/// added to any conversation history. Analyzing the same image twice
/// is two independent gateway calls.
#[derive(Debug, Clone)]
pub struct ImageAnalysisRequest {
    data: Vec<u8>,
    format: ImageFormat,
    user_text: String,
}

impl ImageAnalysisRequest {
    pub fn new(data: Vec<u8>, format: ImageFormat) -> Self {
        Self {
            data,
            format,
            user_text: String::new(),
        }
    }

    pub fn with_user_text(mut self, text: impl Into<String>) -> Self {
        self.user_text = text.into();
        self
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn user_text(&self) -> &str {
        &self.user_text
    }
}
