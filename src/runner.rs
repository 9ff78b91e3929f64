//! End-to-end runs: compare two documents, or draft a tailored resume to disk

use crate::config::Config;
use crate::error::Result;
use crate::input::manager::InputManager;
use crate::output::report::{ComparisonReport, ReportMetadata};
use crate::processing::analyzer::SkillAnalyzer;
use crate::processing::comparator::SkillComparison;
use crate::processing::lexicon::Lexicon;
use crate::tailoring::draft::{ResumeTailor, TailoredResume};
use crate::tailoring::tables::TailoringTables;
use log::info;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Result of a tailoring run
#[derive(Debug, Clone)]
pub struct TailorOutcome {
    pub output_path: PathBuf,
    pub resume: TailoredResume,
    pub report: ComparisonReport,
}

/// Input and output locations for one run
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub job_description: PathBuf,
    pub resume: PathBuf,
    pub vocabulary: PathBuf,
}

impl RunPaths {
    /// Configured paths, each overridable
    pub fn resolve(
        config: &Config,
        job: Option<PathBuf>,
        resume: Option<PathBuf>,
        vocabulary: Option<PathBuf>,
    ) -> Self {
        Self {
            job_description: job.unwrap_or_else(|| config.paths.job_description.clone()),
            resume: resume.unwrap_or_else(|| config.paths.resume.clone()),
            vocabulary: vocabulary.unwrap_or_else(|| config.paths.vocabulary.clone()),
        }
    }
}

pub struct Runner {
    config: Config,
    inputs: InputManager,
}

impl Runner {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            inputs: InputManager::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Built-in lexicon plus configured additions
    pub fn lexicon(&self) -> Result<Lexicon> {
        Ok(Lexicon::builtin()
            .with_aliases(&self.config.matching.extra_aliases)?
            .with_stopwords(&self.config.matching.extra_stopwords))
    }

    async fn analyzer(&self, vocabulary_path: &Path) -> Result<SkillAnalyzer> {
        let vocabulary = self.inputs.load_vocabulary(vocabulary_path).await?;
        SkillAnalyzer::new(&vocabulary, &self.lexicon()?)
    }

    fn report(paths: &RunPaths, analyzer: &SkillAnalyzer, comparison: SkillComparison) -> ComparisonReport {
        ComparisonReport::new(
            ReportMetadata::new(
                &paths.job_description,
                &paths.resume,
                &paths.vocabulary,
                analyzer.vocabulary_size(),
            ),
            comparison,
        )
    }

    /// Compare the documents. Empty documents are allowed and simply yield no skills.
    pub async fn compare(&self, paths: &RunPaths) -> Result<ComparisonReport> {
        info!("Comparing {} against {}", paths.resume.display(), paths.job_description.display());

        let jd_text = self.inputs.extract_text(&paths.job_description).await?;
        let resume_text = self.inputs.extract_text(&paths.resume).await?;
        let analyzer = self.analyzer(&paths.vocabulary).await?;

        let comparison = analyzer.compare(&jd_text, &resume_text);
        info!("Skill match: {}%", comparison.match_percent_display());

        Ok(Self::report(paths, &analyzer, comparison))
    }

    /// Draft a tailored resume and write it to `output_path`.
    /// Nothing is written unless both documents are present and non-empty.
    pub async fn tailor(&self, paths: &RunPaths, output_path: &Path) -> Result<TailorOutcome> {
        let jd_text = self.inputs.require_text(&paths.job_description, "Job description").await?;
        let resume_text = self.inputs.require_text(&paths.resume, "Resume").await?;
        let analyzer = self.analyzer(&paths.vocabulary).await?;

        let comparison = analyzer.compare(&jd_text, &resume_text);
        let tailor = ResumeTailor::new(TailoringTables::builtin(), self.config.tailoring.clone())?;
        let resume = tailor.tailor(&jd_text, &resume_text, &comparison, analyzer.normalizer())?;

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        fs::write(output_path, resume.render()).await?;
        info!("Wrote tailored resume to {}", output_path.display());

        Ok(TailorOutcome {
            output_path: output_path.to_path_buf(),
            resume,
            report: Self::report(paths, &analyzer, comparison),
        })
    }
}
