//! Output formatters for comparison reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ComparisonReport;
use colored::Colorize;

/// Trait for formatting comparison reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ComparisonReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Plain summary for terminals, optionally colored
pub struct ConsoleFormatter {
    use_colors: bool,
    list_limit: usize,
}

/// JSON formatter for pipelines and structured consumers
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, list_limit: usize) -> Self {
        Self { use_colors, list_limit }
    }

    fn percent_label(&self, percent: f64) -> String {
        let text = format!("{:.2}", percent);
        if !self.use_colors {
            return text;
        }
        if percent >= 75.0 {
            text.green().bold().to_string()
        } else if percent >= 50.0 {
            text.yellow().bold().to_string()
        } else {
            text.red().bold().to_string()
        }
    }

    fn list(&self, items: &[&str]) -> String {
        let quoted: Vec<String> = items.iter().map(|s| format!("'{}'", s)).collect();
        format!("[{}]", quoted.join(", "))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ComparisonReport) -> Result<String> {
        let cmp = &report.comparison;
        let mut out = String::new();

        out.push_str(&format!("JD Skills Count: {}\n", cmp.jd_skills.len()));
        out.push_str(&format!("Resume Skills Count: {}\n", cmp.resume_skills.len()));
        out.push_str(&format!("Matched Skills Count: {}\n", cmp.matched.len()));
        out.push_str(&format!("Missing Skills Count: {}\n", cmp.missing.len()));
        out.push_str(&format!("Skill Match %: {}\n", self.percent_label(cmp.match_percent)));
        out.push_str(&format!(
            "\nMatched Skills: {}\n",
            self.list(&report.matched_preview(self.list_limit))
        ));
        out.push_str(&format!(
            "\nMissing Skills: {}\n",
            self.list(&report.missing_preview(self.list_limit))
        ));

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ComparisonReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Picks the formatter for the requested format
pub fn formatter_for(
    format: OutputFormat,
    use_colors: bool,
    list_limit: usize,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors, list_limit)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::ReportMetadata;
    use crate::processing::comparator::{DocumentSkills, SkillComparison};
    use std::path::Path;

    fn report() -> ComparisonReport {
        let jd = DocumentSkills {
            known: ["python", "sql", "aws", "airflow"].iter().map(|s| s.to_string()).collect(),
            dynamic: Default::default(),
        };
        let resume = DocumentSkills {
            known: ["python", "sql", "docker"].iter().map(|s| s.to_string()).collect(),
            dynamic: Default::default(),
        };
        ComparisonReport::new(
            ReportMetadata::new(Path::new("jd.txt"), Path::new("resume.txt"), Path::new("skills.txt"), 5),
            SkillComparison::compute(&jd, &resume),
        )
    }

    #[test]
    fn test_console_summary() {
        let text = ConsoleFormatter::new(false, 120).format_report(&report()).unwrap();

        assert!(text.contains("JD Skills Count: 4\n"));
        assert!(text.contains("Resume Skills Count: 3\n"));
        assert!(text.contains("Matched Skills Count: 2\n"));
        assert!(text.contains("Missing Skills Count: 2\n"));
        assert!(text.contains("Skill Match %: 50.00\n"));
        assert!(text.contains("Matched Skills: ['python', 'sql']"));
        assert!(text.contains("Missing Skills: ['airflow', 'aws']"));
    }

    #[test]
    fn test_console_lists_are_truncated() {
        let text = ConsoleFormatter::new(false, 1).format_report(&report()).unwrap();
        assert!(text.contains("Matched Skills: ['python']"));
        assert!(text.contains("Missing Skills: ['airflow']"));
    }

    #[test]
    fn test_json_report() {
        let formatter = formatter_for(OutputFormat::Json, false, 120);
        assert_eq!(formatter.supports_format(), OutputFormat::Json);

        let json = formatter.format_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["comparison"]["match_percent"], 50.0);
        assert_eq!(value["comparison"]["missing"][0], "airflow");
        assert_eq!(value["metadata"]["vocabulary_size"], 5);
    }
}
