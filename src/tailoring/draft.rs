//! Tailored resume assembly

use crate::config::TailoringConfig;
use crate::error::{Result, TailorError};
use crate::processing::comparator::SkillComparison;
use crate::processing::normalizer::Normalizer;
use crate::tailoring::contact::{ContactBlock, ContactExtractor};
use crate::tailoring::education::EducationExtractor;
use crate::tailoring::sections::SectionBuilder;
use crate::tailoring::tables::TailoringTables;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

const EDUCATION_PLACEHOLDER: &str = "Education details available upon request";

/// A drafted resume, section by section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailoredResume {
    pub job_title: String,
    pub contact: ContactBlock,
    pub summary: String,
    pub skills_line: String,
    pub experience: Vec<String>,
    pub projects: Vec<String>,
    pub education: Vec<String>,
}

impl TailoredResume {
    /// `title | location`, empty parts omitted
    pub fn header_line(&self) -> String {
        join_present(&[self.job_title.as_str(), self.contact.location.as_str()])
    }

    /// `phone | email`, empty parts omitted
    pub fn contact_line(&self) -> String {
        join_present(&[self.contact.phone.as_str(), self.contact.email.as_str()])
    }

    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        for line in [self.contact.name.clone(), self.header_line(), self.contact_line()] {
            if !line.is_empty() {
                lines.push(line);
            }
        }

        lines.push(String::new());
        lines.push("SUMMARY".to_string());
        lines.push(self.summary.clone());
        lines.push(String::new());
        lines.push("CORE SKILLS".to_string());
        lines.push(self.skills_line.clone());
        lines.push(String::new());
        lines.push("EXPERIENCE".to_string());
        lines.extend(self.experience.iter().map(|b| format!("- {}", b)));
        lines.push(String::new());
        lines.push("PROJECTS".to_string());
        lines.extend(self.projects.iter().map(|p| format!("- {}", p)));
        lines.push(String::new());
        lines.push("EDUCATION".to_string());
        if self.education.is_empty() {
            lines.push(format!("- {}", EDUCATION_PLACEHOLDER));
        } else {
            lines.extend(self.education.iter().map(|e| format!("- {}", e)));
        }

        format!("{}\n", lines.join("\n").trim())
    }
}

impl fmt::Display for TailoredResume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn join_present(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<&str>>()
        .join(" | ")
}

/// Drafts a resume from the job description, the resume and their skill comparison
pub struct ResumeTailor {
    tables: TailoringTables,
    settings: TailoringConfig,
    contact: ContactExtractor,
    education: EducationExtractor,
}

impl ResumeTailor {
    pub fn new(tables: TailoringTables, settings: TailoringConfig) -> Result<Self> {
        Ok(Self {
            tables,
            settings,
            contact: ContactExtractor::new()?,
            education: EducationExtractor::new()?,
        })
    }

    pub fn tailor(
        &self,
        jd_text: &str,
        resume_text: &str,
        comparison: &SkillComparison,
        normalizer: &Normalizer,
    ) -> Result<TailoredResume> {
        if jd_text.trim().is_empty() {
            return Err(TailorError::MissingInput("Job description is empty".to_string()));
        }
        if resume_text.trim().is_empty() {
            return Err(TailorError::MissingInput("Resume is empty".to_string()));
        }

        let sections = SectionBuilder::new(&self.tables, &self.settings);
        let job_title = sections.guess_job_title(jd_text);
        debug!("Guessed job title: {}", job_title);

        let matched = &comparison.matched;
        let missing = &comparison.missing;

        Ok(TailoredResume {
            summary: sections.summary(&job_title, matched, missing, jd_text, normalizer)?,
            skills_line: sections.skills_line(matched, missing),
            experience: sections.experience_bullets(matched, missing),
            projects: sections.project_bullets(matched),
            contact: self.contact.extract(resume_text),
            education: self.education.extract(resume_text, &self.tables),
            job_title,
        })
    }
}
