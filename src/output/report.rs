//! Comparison report with run metadata

use crate::processing::comparator::SkillComparison;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything a formatter needs to present one comparison run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub metadata: ReportMetadata,
    pub comparison: SkillComparison,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub job_description_path: String,
    pub resume_path: String,
    pub vocabulary_path: String,
    pub vocabulary_size: usize,
}

impl ReportMetadata {
    pub fn new(job: &Path, resume: &Path, vocabulary: &Path, vocabulary_size: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            job_description_path: job.display().to_string(),
            resume_path: resume.display().to_string(),
            vocabulary_path: vocabulary.display().to_string(),
            vocabulary_size,
        }
    }
}

impl ComparisonReport {
    pub fn new(metadata: ReportMetadata, comparison: SkillComparison) -> Self {
        Self { metadata, comparison }
    }

    /// Sorted matched skills, at most `limit`
    pub fn matched_preview(&self, limit: usize) -> Vec<&str> {
        self.comparison.matched.iter().take(limit).map(String::as_str).collect()
    }

    /// Sorted missing skills, at most `limit`
    pub fn missing_preview(&self, limit: usize) -> Vec<&str> {
        self.comparison.missing.iter().take(limit).map(String::as_str).collect()
    }
}
