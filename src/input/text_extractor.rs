//! Text extraction from various file formats

use crate::error::{Result, TailorError};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Decode UTF-8, silently dropping invalid byte sequences
pub fn decode_permissive(mut bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    loop {
        match std::str::from_utf8(bytes) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(err) => {
                let (valid, rest) = bytes.split_at(err.valid_up_to());
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                let skip = err.error_len().unwrap_or(rest.len());
                bytes = &rest[skip..];
            }
        }
    }
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            TailorError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        Ok(decode_permissive(&bytes))
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        self.markdown_to_text(&decode_permissive(&bytes))
    }
}

impl MarkdownExtractor {
    /// Render markdown and strip tags, keeping one line per block
    pub fn markdown_to_text(&self, markdown: &str) -> Result<String> {
        let parser = Parser::new(markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        let text = html_output
            .replace("<br />", "\n")
            .replace("</p>", "\n\n")
            .replace("</li>", "\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let tags = Regex::new(r"<[^>]*>")?;
        let clean_text = tags.replace_all(&text, "");

        let lines: Vec<&str> = clean_text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_drops_invalid_bytes() {
        let bytes = b"Python\xff\xfe and SQL \xe2\x82";
        assert_eq!(decode_permissive(bytes), "Python and SQL ");
    }

    #[test]
    fn test_decode_keeps_valid_multibyte() {
        let text = "Résumé – naïve";
        assert_eq!(decode_permissive(text.as_bytes()), text);
    }

    #[test]
    fn test_markdown_flattening() {
        let md = "# Jane Doe\n\n## Education\n\n- **B.Tech**, State University, 2019\n\nSkills: *Python* & SQL\n";
        let text = MarkdownExtractor.markdown_to_text(md).unwrap();

        assert!(text.contains("Jane Doe"));
        assert!(text.contains("B.Tech, State University, 2019"));
        assert!(text.contains("Skills: Python & SQL"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
    }
}
