//! CLI interface for the resume tailor

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-tailor")]
#[command(about = "Job description vs resume skill matching and resume tailoring")]
#[command(long_about = "Extract skills from a job description and a resume against a skills vocabulary, report matched and missing skills, and draft a tailored resume")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare job description and resume skills
    Compare {
        /// Path to job description file (TXT, MD, PDF)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Path to resume file (TXT, MD, PDF)
        #[arg(short, long)]
        resume: Option<PathBuf>,

        /// Path to the skills vocabulary
        #[arg(short, long)]
        skills: Option<PathBuf>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Draft a tailored resume
    Tailor {
        /// Path to job description file (TXT, MD, PDF)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Path to resume file (TXT, MD, PDF)
        #[arg(short, long)]
        resume: Option<PathBuf>,

        /// Path to the skills vocabulary
        #[arg(short, long)]
        skills: Option<PathBuf>,

        /// Where to write the draft
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Write the JD and RESUME environment variables to the input files
    Ingest {
        /// Destination for the job description
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Destination for the resume
        #[arg(short, long)]
        resume: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}
