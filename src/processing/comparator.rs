//! Set algebra between job-description skills and resume skills

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Skills detected in one document by the two classifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSkills {
    /// Vocabulary entries found in the normalized text
    pub known: BTreeSet<String>,
    /// Heuristic technology tokens found in the raw text
    pub dynamic: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillComparison {
    pub jd_skills: BTreeSet<String>,
    pub resume_skills: BTreeSet<String>,
    pub shared_dynamic: BTreeSet<String>,
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
    /// 0 to 100; 0 when the job description yielded no skills
    pub match_percent: f64,
}

impl SkillComparison {
    /// Dynamic tokens only count when both documents contain them
    pub fn compute(jd: &DocumentSkills, resume: &DocumentSkills) -> Self {
        let shared_dynamic: BTreeSet<String> =
            jd.dynamic.intersection(&resume.dynamic).cloned().collect();

        let jd_skills: BTreeSet<String> = jd.known.union(&shared_dynamic).cloned().collect();
        let resume_skills: BTreeSet<String> =
            resume.known.union(&shared_dynamic).cloned().collect();

        let matched: BTreeSet<String> = jd_skills.intersection(&resume_skills).cloned().collect();
        let missing: BTreeSet<String> = jd_skills.difference(&resume_skills).cloned().collect();

        let match_percent = if jd_skills.is_empty() {
            0.0
        } else {
            100.0 * matched.len() as f64 / jd_skills.len() as f64
        };

        Self {
            jd_skills,
            resume_skills,
            shared_dynamic,
            matched,
            missing,
            match_percent,
        }
    }

    /// Match percent rounded to two decimals, as printed
    pub fn match_percent_display(&self) -> String {
        format!("{:.2}", self.match_percent)
    }
}
