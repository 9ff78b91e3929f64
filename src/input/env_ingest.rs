//! Pipeline ingestion: job description and resume text supplied through environment variables

use crate::error::Result;
use log::info;
use serde::Serialize;
use std::path::Path;
use tokio::fs;

pub const JD_ENV_VAR: &str = "JD";
pub const RESUME_ENV_VAR: &str = "RESUME";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    pub jd_chars: usize,
    pub resume_chars: usize,
}

/// Write `$JD` and `$RESUME` verbatim to the input files; unset variables become empty files
pub async fn ingest_from_env(jd_path: &Path, resume_path: &Path) -> Result<IngestSummary> {
    let jd = std::env::var(JD_ENV_VAR).unwrap_or_default();
    let resume = std::env::var(RESUME_ENV_VAR).unwrap_or_default();
    ingest_texts(&jd, &resume, jd_path, resume_path).await
}

pub async fn ingest_texts(
    jd: &str,
    resume: &str,
    jd_path: &Path,
    resume_path: &Path,
) -> Result<IngestSummary> {
    write_input(jd_path, jd).await?;
    write_input(resume_path, resume).await?;

    let summary = IngestSummary {
        jd_chars: jd.chars().count(),
        resume_chars: resume.chars().count(),
    };
    info!(
        "Saved inputs: {} ({} chars), {} ({} chars)",
        jd_path.display(),
        summary.jd_chars,
        resume_path.display(),
        summary.resume_chars
    );
    Ok(summary)
}

async fn write_input(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    fs::write(path, text).await?;
    Ok(())
}
