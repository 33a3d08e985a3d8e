use std::path::Path;

use anyhow::Result;

use crate::domain::{DomainError, ImageAnalysisRequest, ImageFormat};

use super::super::Container;

/// Disclaimer printed under every analysis result, mirroring the one
/// the assistant is instructed to include in chat replies.
const ANALYSIS_DISCLAIMER: &str = "\
Important: this analysis is provided by an AI system and is not a substitute \
for professional medical diagnosis. Consult a qualified healthcare provider \
for proper medical evaluation.";

/// Shell-facing image analysis surface: load a file, run the use case,
/// render the result.
pub struct AnalyzeController<'a> {
    container: &'a Container,
}

impl<'a> AnalyzeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Analyze the image at `path`, with optional user text.
    ///
    /// The format is sniffed from the file's magic bytes, falling back
    /// to the extension. Unrecognized data is rejected before any
    /// gateway call; only JPEG and PNG are accepted.
    pub async fn analyze(&self, path: &str, user_text: Option<&str>) -> Result<String> {
        let path = Path::new(path);
        let data = std::fs::read(path).map_err(DomainError::from)?;

        let format = ImageFormat::sniff(&data)
            .or_else(|| ImageFormat::from_path(path))
            .ok_or_else(|| {
                DomainError::invalid_input(format!(
                    "{} is not a recognized JPEG or PNG image",
                    path.display()
                ))
            })?;

        let mut request = ImageAnalysisRequest::new(data, format);
        if let Some(text) = user_text {
            request = request.with_user_text(text);
        }

        let use_case = self.container.analyze_use_case();
        let result = use_case.execute(&request).await?;

        Ok(format!(
            "Analysis Result:\n\n{}\n\n{}",
            result, ANALYSIS_DISCLAIMER
        ))
    }
}
