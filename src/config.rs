//! Configuration management for the resume tailor

use crate::error::{Result, TailorError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub paths: PathsConfig,
    pub tailoring: TailoringConfig,
    pub matching: MatchingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub job_description: PathBuf,
    pub resume: PathBuf,
    pub vocabulary: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailoringConfig {
    pub max_skill_items: usize,
    pub max_experience_bullets: usize,
    pub max_project_bullets: usize,
    pub summary_skill_count: usize,
}

/// User additions merged into the built-in lexicon
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
    #[serde(default)]
    pub extra_aliases: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    /// Maximum number of matched/missing skills listed in a summary
    pub list_limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for TailoringConfig {
    fn default() -> Self {
        Self {
            max_skill_items: 18,
            max_experience_bullets: 6,
            max_project_bullets: 2,
            summary_skill_count: 5,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                job_description: PathBuf::from("data/jd/jd.txt"),
                resume: PathBuf::from("data/resume/resume.txt"),
                vocabulary: PathBuf::from("data/skills_master.txt"),
                output: PathBuf::from("out/tailored_resume.txt"),
            },
            tailoring: TailoringConfig::default(),
            matching: MatchingConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                list_limit: 120,
            },
        }
    }
}

impl Config {
    /// Load from an explicit path, or from the user config dir (writing defaults on first run)
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(TailorError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        let config_path = Self::config_path();

        if config_path.exists() {
            Self::from_file(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| TailorError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| TailorError::Configuration(format!("Failed to serialize config: {}", e)))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-tailor")
            .join("config.toml")
    }
}
