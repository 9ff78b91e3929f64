//! Resume tailor: job description vs resume skill matching and resume drafting

use clap::Parser;
use log::{error, info};
use resume_tailor::cli::{self, Cli, Commands, ConfigAction};
use resume_tailor::config::OutputFormat;
use resume_tailor::input::env_ingest;
use resume_tailor::output::formatter::{formatter_for, ConsoleFormatter, OutputFormatter};
use resume_tailor::runner::{RunPaths, Runner};
use resume_tailor::{Config, Result, TailorError};
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Compare {
            job,
            resume,
            skills,
            output,
            save,
        } => {
            let format = match output {
                Some(name) => cli::parse_output_format(&name).map_err(TailorError::InvalidInput)?,
                None => config.output.format,
            };
            let formatter = formatter_for(format, config.output.color_output, config.output.list_limit);

            let paths = RunPaths::resolve(&config, job, resume, skills);
            let runner = Runner::new(config);
            let report = runner.compare(&paths).await?;

            let rendered = formatter.format_report(&report)?;
            print!("{}", rendered);

            if let Some(path) = save {
                // Saved reports never carry terminal color codes
                let plain = match format {
                    OutputFormat::Console => {
                        ConsoleFormatter::new(false, runner.config().output.list_limit).format_report(&report)?
                    }
                    OutputFormat::Json => rendered,
                };
                tokio::fs::write(&path, plain).await?;
                info!("Saved report to {}", path.display());
            }
        }

        Commands::Tailor {
            job,
            resume,
            skills,
            out,
        } => {
            let output_path = out.unwrap_or_else(|| config.paths.output.clone());
            let paths = RunPaths::resolve(&config, job, resume, skills);
            let runner = Runner::new(config);

            let outcome = runner.tailor(&paths, &output_path).await?;

            let formatter = ConsoleFormatter::new(
                runner.config().output.color_output,
                runner.config().output.list_limit,
            );
            print!("{}", formatter.format_report(&outcome.report)?);
            println!("\n✅ Tailored resume saved to: {}", outcome.output_path.display());
        }

        Commands::Ingest { job, resume } => {
            let jd_path = job.unwrap_or_else(|| config.paths.job_description.clone());
            let resume_path = resume.unwrap_or_else(|| config.paths.resume.clone());

            let summary = env_ingest::ingest_from_env(&jd_path, &resume_path).await?;

            println!("JD chars: {}", summary.jd_chars);
            println!("Resume chars: {}", summary.resume_chars);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                print!("{}", config.to_toml()?);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}
