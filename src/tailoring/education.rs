//! Education block extraction from resume text

use crate::error::Result;
use crate::tailoring::tables::TailoringTables;
use regex::Regex;
use std::collections::HashSet;

const MAX_SECTION_LINES: usize = 5;
const MAX_FALLBACK_LINES: usize = 4;

pub struct EducationExtractor {
    heading_noise: Regex,
    bullet: Regex,
    degree: Regex,
    institution: Regex,
}

impl EducationExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            heading_noise: Regex::new(r"[^a-z\s&]")?,
            bullet: Regex::new(r"^\s*[-•]+\s*")?,
            degree: Regex::new(
                r"\b(?:bachelor|master)|\b(?:b\.?tech|m\.?tech|mba|ph\.?d|b\.?sc|m\.?sc|m\.?s)\b",
            )?,
            institution: Regex::new(r"\b(?:university|college|institute|school)\b")?,
        })
    }

    /// Lines under an education heading (up to 5), else degree/institution lines (up to 4)
    pub fn extract(&self, resume_text: &str, tables: &TailoringTables) -> Vec<String> {
        let raw = resume_text.trim();
        if raw.is_empty() {
            return Vec::new();
        }

        let lines: Vec<&str> = raw.lines().map(str::trim_end).collect();

        let start = lines
            .iter()
            .position(|line| tables.education_headings.contains(&self.heading_key(line)));

        match start {
            Some(index) => self.section_lines(&lines[index + 1..], tables),
            None => self.fallback_lines(&lines),
        }
    }

    fn section_lines(&self, lines: &[&str], tables: &TailoringTables) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .take_while(|line| !tables.stop_headings.contains(&self.heading_key(line)))
            .filter_map(|line| self.strip_bullet(line))
            .take(MAX_SECTION_LINES)
            .collect()
    }

    fn fallback_lines(&self, lines: &[&str]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for line in lines.iter().map(|line| line.trim()).filter(|line| !line.is_empty()) {
            let lower = line.to_lowercase();
            if !self.degree.is_match(&lower) && !self.institution.is_match(&lower) {
                continue;
            }
            if !seen.insert(lower) {
                continue;
            }
            if let Some(cleaned) = self.strip_bullet(line) {
                out.push(cleaned);
            }
            if out.len() >= MAX_FALLBACK_LINES {
                break;
            }
        }

        out
    }

    /// Lowercased line reduced to letters, spaces and `&`
    fn heading_key(&self, line: &str) -> String {
        self.heading_noise
            .replace_all(&line.trim().to_lowercase(), "")
            .trim()
            .to_string()
    }

    fn strip_bullet(&self, line: &str) -> Option<String> {
        let cleaned = self.bullet.replace(line, "").trim().to_string();
        (!cleaned.is_empty()).then_some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<String> {
        EducationExtractor::new()
            .unwrap()
            .extract(text, &TailoringTables::builtin())
    }

    #[test]
    fn test_block_under_heading_until_next_section() {
        let resume = "Jane Doe\n\nEDUCATION:\n- M.S. Computer Science, Rutgers University, 2021\n\n• B.Tech, JNTU, 2018\nSKILLS\nPython, SQL";
        assert_eq!(
            extract(resume),
            vec![
                "M.S. Computer Science, Rutgers University, 2021".to_string(),
                "B.Tech, JNTU, 2018".to_string(),
            ]
        );
    }

    #[test]
    fn test_block_is_capped_at_five_lines() {
        let resume = "Academic Background\n1\n2\n3\n4\n5\n6\n7";
        assert_eq!(extract(resume).len(), 5);
    }

    #[test]
    fn test_fallback_scans_for_degrees_and_institutions() {
        let resume = "Jane Doe\nBachelor of Science, State College, 2015\nWorked on systems and programs\nMBA - Night School\nbachelor of science, state college, 2015\nPhD candidate\nMasters in Data\nInstitute of Things";
        assert_eq!(
            extract(resume),
            vec![
                "Bachelor of Science, State College, 2015".to_string(),
                "MBA - Night School".to_string(),
                "PhD candidate".to_string(),
                "Masters in Data".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_education_at_all() {
        assert!(extract("Jane Doe\nPython developer").is_empty());
        assert!(extract("").is_empty());
    }
}
