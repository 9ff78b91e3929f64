//! Contact details pulled from resume text

use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fields default to empty strings when not detected
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBlock {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

const LOCATION_SCAN_LINES: usize = 25;
const MAX_NAME_WORDS: usize = 5;

pub struct ContactExtractor {
    email: Regex,
    phone: Regex,
    name: Regex,
}

impl ContactExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            email: Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}")?,
            phone: Regex::new(r"\+?\d[\d\-\s()]{8,}\d")?,
            name: Regex::new(r"^[A-Za-z][A-Za-z\s.\-']{2,60}$")?,
        })
    }

    pub fn extract(&self, resume_text: &str) -> ContactBlock {
        let text = resume_text.trim();

        let email = self
            .email
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let phone = self
            .phone
            .find(text)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let name = lines
            .first()
            .filter(|first| {
                self.name.is_match(first) && first.split_whitespace().count() <= MAX_NAME_WORDS
            })
            .map(|first| first.to_string())
            .unwrap_or_default();

        let location = lines
            .iter()
            .take(LOCATION_SCAN_LINES)
            .filter(|line| line.to_lowercase().contains("location"))
            .find_map(|line| line.split(':').nth(1).map(|value| value.trim().to_string()))
            .unwrap_or_default();

        ContactBlock {
            name,
            email,
            phone,
            location,
        }
    }
}
