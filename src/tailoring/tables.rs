//! Fixed phrase lists used when drafting a tailored resume

use std::collections::BTreeSet;

/// Immutable tailoring tables, built once and passed to the tailor
#[derive(Debug, Clone)]
pub struct TailoringTables {
    /// Checked in order against the lowercased job description; first hit wins
    pub title_candidates: Vec<String>,
    pub education_headings: BTreeSet<String>,
    pub stop_headings: BTreeSet<String>,
    /// Missing skills that are low-risk to claim familiarity with
    pub safe_missing: BTreeSet<String>,
    pub business_terms: BTreeSet<String>,
    /// Skills too generic to headline a summary
    pub summary_excluded: BTreeSet<String>,
    pub data_tooling: BTreeSet<String>,
    pub default_title: String,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn owned_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for TailoringTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TailoringTables {
    pub fn builtin() -> Self {
        Self {
            title_candidates: owned(&[
                "data engineer",
                "data analyst",
                "business analyst",
                "software engineer",
                "devops engineer",
                "cloud engineer",
                "project manager",
                "product manager",
                "accountant",
                "sales associate",
                "customer service",
                "marketing specialist",
                "hr specialist",
                "financial analyst",
            ]),
            education_headings: owned_set(&[
                "education",
                "academic background",
                "academics",
                "education & certifications",
                "qualification",
                "qualifications",
            ]),
            stop_headings: owned_set(&[
                "experience",
                "professional experience",
                "work experience",
                "projects",
                "skills",
                "technical skills",
                "certifications",
                "summary",
                "interests",
                "hobbies",
                "achievements",
                "publications",
            ]),
            safe_missing: owned_set(&["jupyter", "pandas", "data analysis", "etl", "elt"]),
            business_terms: owned_set(&[
                "stakeholders",
                "reporting",
                "dashboards",
                "documentation",
                "requirements",
                "quality",
                "automation",
                "monitoring",
                "compliance",
                "security",
            ]),
            summary_excluded: owned_set(&["data engineering"]),
            data_tooling: owned_set(&["python", "sql", "airflow", "etl", "elt"]),
            default_title: "Professional".to_string(),
        }
    }

    /// Sorted missing skills that appear on the safe list
    pub fn safe_missing_skills<'a>(&self, missing: &'a BTreeSet<String>) -> Vec<&'a str> {
        missing
            .iter()
            .filter(|skill| self.safe_missing.contains(*skill))
            .map(String::as_str)
            .collect()
    }
}
