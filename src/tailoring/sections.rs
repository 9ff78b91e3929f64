//! Resume section builders: title, summary, skills, experience and projects

use crate::config::TailoringConfig;
use crate::error::Result;
use crate::processing::normalizer::Normalizer;
use crate::processing::skill_matcher::SkillMatcher;
use crate::tailoring::tables::TailoringTables;
use std::collections::{BTreeSet, HashSet};

/// Condition under which an experience bullet is emitted
#[derive(Debug, Clone, Copy)]
enum Trigger {
    AnyMatched(&'static [&'static str]),
    Matched(&'static str),
    Missing(&'static str),
}

impl Trigger {
    fn fires(&self, matched: &BTreeSet<String>, missing: &BTreeSet<String>) -> bool {
        match self {
            Trigger::AnyMatched(skills) => skills.iter().any(|s| matched.contains(*s)),
            Trigger::Matched(skill) => matched.contains(*skill),
            Trigger::Missing(skill) => missing.contains(*skill),
        }
    }
}

const EXPERIENCE_TABLE: &[(Trigger, &str)] = &[
    (
        Trigger::AnyMatched(&["python", "sql"]),
        "Built and supported data workflows using Python and SQL, including validation and basic monitoring.",
    ),
    (
        Trigger::Matched("airflow"),
        "Automated scheduled workflows with Airflow DAGs to improve reliability and repeatability of pipeline runs.",
    ),
    (
        Trigger::Matched("dbt"),
        "Developed transformation models with dbt-style practices (staging to marts) and maintained reusable SQL logic.",
    ),
    (
        Trigger::Missing("dbt"),
        "Familiarity with dbt concepts for SQL-based transformations and modular modeling (staging to marts).",
    ),
    (
        Trigger::Matched("data modeling"),
        "Applied data modeling principles to produce analytics-ready datasets for reporting and downstream consumption.",
    ),
    (
        Trigger::Matched("data quality"),
        "Implemented data quality checks (nulls, schema, freshness) to reduce defects and improve trust in datasets.",
    ),
    (
        Trigger::Matched("aws"),
        "Worked with AWS services for data storage and processing while following access control and security basics.",
    ),
];

const FALLBACK_BULLETS: &[&str] = &[
    "Delivered JD-aligned responsibilities with a focus on quality, documentation, and measurable business outcomes.",
    "Collaborated with cross-functional stakeholders to translate requirements into clear deliverables.",
];

const SUMMARY_SAFE_MISSING: usize = 2;
const SUMMARY_BUSINESS_TERMS: usize = 2;
const TOOLS_BULLET_SKILLS: usize = 3;

/// Builds each section from the comparison results
pub struct SectionBuilder<'a> {
    tables: &'a TailoringTables,
    settings: &'a TailoringConfig,
}

impl<'a> SectionBuilder<'a> {
    pub fn new(tables: &'a TailoringTables, settings: &'a TailoringConfig) -> Self {
        Self { tables, settings }
    }

    /// First candidate title contained in the job description, title-cased
    pub fn guess_job_title(&self, jd_text: &str) -> String {
        let lowered = jd_text.to_lowercase();
        self.tables
            .title_candidates
            .iter()
            .find(|candidate| lowered.contains(candidate.as_str()))
            .map(|candidate| title_case(candidate))
            .unwrap_or_else(|| self.tables.default_title.clone())
    }

    pub fn summary(
        &self,
        job_title: &str,
        matched: &BTreeSet<String>,
        missing: &BTreeSet<String>,
        jd_text: &str,
        normalizer: &Normalizer,
    ) -> Result<String> {
        let strong: Vec<&str> = matched
            .iter()
            .filter(|skill| !self.tables.summary_excluded.contains(*skill))
            .map(String::as_str)
            .take(self.settings.summary_skill_count)
            .collect();

        let safe_missing: Vec<&str> = self
            .tables
            .safe_missing_skills(missing)
            .into_iter()
            .take(SUMMARY_SAFE_MISSING)
            .collect();

        let normalized_jd = normalizer.normalize(jd_text);
        let mut business_terms = Vec::new();
        for term in &self.tables.business_terms {
            if business_terms.len() == SUMMARY_BUSINESS_TERMS {
                break;
            }
            if SkillMatcher::entry_matches(term, &normalized_jd)? {
                business_terms.push(term.as_str());
            }
        }

        let mut parts = vec![format!(
            "{} with hands-on experience delivering JD-aligned work in a production environment.",
            job_title
        )];
        if !strong.is_empty() {
            parts.push(format!("Strengths include {}.", strong.join(", ")));
        }
        if !business_terms.is_empty() {
            parts.push(format!("Comfortable with {}.", business_terms.join(", ")));
        }
        if !safe_missing.is_empty() {
            parts.push(format!("Additional alignment: {}.", safe_missing.join(", ")));
        }

        Ok(parts.join(" "))
    }

    /// Matched skills then safe missing skills, de-duplicated and capped
    pub fn skills_line(&self, matched: &BTreeSet<String>, missing: &BTreeSet<String>) -> String {
        let mut seen = HashSet::new();
        let items: Vec<&str> = matched
            .iter()
            .map(String::as_str)
            .chain(self.tables.safe_missing_skills(missing))
            .filter(|skill| seen.insert(*skill))
            .take(self.settings.max_skill_items)
            .collect();
        items.join(", ")
    }

    pub fn experience_bullets(
        &self,
        matched: &BTreeSet<String>,
        missing: &BTreeSet<String>,
    ) -> Vec<String> {
        let mut bullets: Vec<String> = Vec::new();

        // matched and missing are disjoint, so at most one dbt line fires
        for (trigger, bullet) in EXPERIENCE_TABLE {
            if trigger.fires(matched, missing) {
                bullets.push(bullet.to_string());
            }
        }

        if bullets.is_empty() {
            bullets.extend(FALLBACK_BULLETS.iter().map(|b| b.to_string()));
        }

        let tools: Vec<&str> = self
            .tables
            .safe_missing_skills(missing)
            .into_iter()
            .take(TOOLS_BULLET_SKILLS)
            .collect();
        if !tools.is_empty() {
            bullets.push(format!(
                "Used tools aligned to the role including {} for analysis and validation.",
                tools.join(", ")
            ));
        }

        bullets.truncate(self.settings.max_experience_bullets);
        bullets
    }

    pub fn project_bullets(&self, matched: &BTreeSet<String>) -> Vec<String> {
        let mut projects = Vec::new();

        if matched.contains("github actions") || matched.contains("git") {
            projects.push("Job Match Copilot (GitHub Actions): Automates JD vs resume skill matching and produces tailored ATS resume output.".to_string());
        } else {
            projects.push("Job Match Copilot: Automated JD vs resume matching to identify skill gaps and tailor resume content.".to_string());
        }

        if !self.tables.data_tooling.is_disjoint(matched) {
            projects.push("Pipeline Mini-Project: Built a small ETL/ELT workflow using Python/SQL with basic validation and repeatable runs.".to_string());
        }

        projects.truncate(self.settings.max_project_bullets);
        projects
    }
}

/// Uppercase the first letter of each word
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::lexicon::Lexicon;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn with_builder<T>(f: impl FnOnce(&SectionBuilder) -> T) -> T {
        let tables = TailoringTables::builtin();
        let settings = TailoringConfig::default();
        let builder = SectionBuilder::new(&tables, &settings);
        f(&builder)
    }

    #[test]
    fn test_title_guess_follows_candidate_order() {
        with_builder(|b| {
            assert_eq!(
                b.guess_job_title("Software Engineer / Data Engineer hybrid role"),
                "Data Engineer"
            );
            assert_eq!(b.guess_job_title("Hiring an HR Specialist"), "Hr Specialist");
            assert_eq!(b.guess_job_title("Barista wanted"), "Professional");
        });
    }

    #[test]
    fn test_summary_parts() {
        let normalizer = Normalizer::new(&Lexicon::builtin()).unwrap();
        with_builder(|b| {
            let matched = set(&["sql", "python", "aws", "airflow", "docker", "git", "data engineering"]);
            let missing = set(&["pandas", "etl", "jupyter", "spark"]);
            let jd = "Work with stakeholders on reporting, dashboards and security.";

            let summary = b.summary("Data Engineer", &matched, &missing, jd, &normalizer).unwrap();

            assert_eq!(
                summary,
                "Data Engineer with hands-on experience delivering JD-aligned work in a production environment. \
                 Strengths include airflow, aws, docker, git, python. \
                 Comfortable with dashboards, reporting. \
                 Additional alignment: etl, jupyter."
            );
        });
    }

    #[test]
    fn test_summary_without_skills() {
        let normalizer = Normalizer::new(&Lexicon::builtin()).unwrap();
        with_builder(|b| {
            let summary = b
                .summary("Professional", &BTreeSet::new(), &BTreeSet::new(), "", &normalizer)
                .unwrap();
            assert_eq!(
                summary,
                "Professional with hands-on experience delivering JD-aligned work in a production environment."
            );
        });
    }

    #[test]
    fn test_skills_line_is_capped() {
        let tables = TailoringTables::builtin();
        let settings = TailoringConfig {
            max_skill_items: 3,
            ..TailoringConfig::default()
        };
        let builder = SectionBuilder::new(&tables, &settings);

        assert_eq!(
            builder.skills_line(&set(&["sql", "python"]), &set(&["pandas", "etl", "spark"])),
            "python, sql, etl"
        );
        assert_eq!(builder.skills_line(&BTreeSet::new(), &BTreeSet::new()), "");
    }

    #[test]
    fn test_experience_decision_table() {
        with_builder(|b| {
            let bullets = b.experience_bullets(&set(&["python", "airflow"]), &set(&["dbt"]));
            assert_eq!(bullets.len(), 3);
            assert!(bullets[0].starts_with("Built and supported data workflows"));
            assert!(bullets[1].contains("Airflow DAGs"));
            assert!(bullets[2].starts_with("Familiarity with dbt"));

            let bullets = b.experience_bullets(&set(&["dbt"]), &BTreeSet::new());
            assert_eq!(bullets.len(), 1);
            assert!(bullets[0].starts_with("Developed transformation models"));
        });
    }

    #[test]
    fn test_experience_fallback_and_tools() {
        with_builder(|b| {
            let bullets = b.experience_bullets(&set(&["excel"]), &set(&["pandas", "jupyter"]));
            assert_eq!(bullets.len(), 3);
            assert!(bullets[0].starts_with("Delivered JD-aligned"));
            assert!(bullets[1].starts_with("Collaborated"));
            assert_eq!(
                bullets[2],
                "Used tools aligned to the role including jupyter, pandas for analysis and validation."
            );
        });
    }

    #[test]
    fn test_experience_is_capped_at_six() {
        with_builder(|b| {
            let matched = set(&["python", "airflow", "dbt", "data modeling", "data quality", "aws"]);
            let bullets = b.experience_bullets(&matched, &set(&["etl"]));
            assert_eq!(bullets.len(), 6);
            assert!(bullets.iter().all(|b| !b.starts_with("Used tools")));
        });
    }

    #[test]
    fn test_project_bullets() {
        with_builder(|b| {
            let projects = b.project_bullets(&set(&["git", "sql"]));
            assert_eq!(projects.len(), 2);
            assert!(projects[0].contains("(GitHub Actions)"));
            assert!(projects[1].starts_with("Pipeline Mini-Project"));

            let projects = b.project_bullets(&set(&["excel"]));
            assert_eq!(projects.len(), 1);
            assert!(projects[0].starts_with("Job Match Copilot:"));
        });
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("devops engineer"), "Devops Engineer");
        assert_eq!(title_case(""), "");
    }
}
