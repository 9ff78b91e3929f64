//! Input manager for reading job descriptions, resumes and vocabularies

use crate::error::{Result, TailorError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::processing::vocabulary::Vocabulary;
use log::{debug, info};
use std::path::Path;

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(TailorError::MissingInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(TailorError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        debug!("Read {} characters from {}", text.chars().count(), path.display());
        Ok(text)
    }

    /// Like `extract_text`, but an empty (whitespace-only) document is a missing input
    pub async fn require_text(&self, path: &Path, label: &str) -> Result<String> {
        let text = self.extract_text(path).await?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TailorError::MissingInput(format!(
                "{} is empty: {}",
                label,
                path.display()
            )));
        }
        Ok(trimmed.to_string())
    }

    pub async fn load_vocabulary(&self, path: &Path) -> Result<Vocabulary> {
        if !path.exists() {
            return Err(TailorError::Configuration(format!(
                "Skill vocabulary not found: {}",
                path.display()
            )));
        }
        let text = PlainTextExtractor.extract(path).await?;
        let vocabulary = Vocabulary::parse(&text);
        info!("Loaded {} skills from {}", vocabulary.len(), path.display());
        Ok(vocabulary)
    }
}
