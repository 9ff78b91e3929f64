//! Skill analysis engine composing normalization, vocabulary matching and dynamic detection

use crate::error::Result;
use crate::processing::comparator::{DocumentSkills, SkillComparison};
use crate::processing::dynamic_tokens::DynamicTokenDetector;
use crate::processing::lexicon::Lexicon;
use crate::processing::normalizer::Normalizer;
use crate::processing::skill_matcher::SkillMatcher;
use crate::processing::vocabulary::Vocabulary;
use log::{debug, warn};

/// Runs both classifiers over a document and compares two documents
pub struct SkillAnalyzer {
    normalizer: Normalizer,
    matcher: SkillMatcher,
    detector: DynamicTokenDetector,
    vocabulary_size: usize,
}

impl SkillAnalyzer {
    pub fn new(vocabulary: &Vocabulary, lexicon: &Lexicon) -> Result<Self> {
        if vocabulary.is_empty() {
            warn!("Skill vocabulary is empty; only dynamic tokens can match");
        }

        Ok(Self {
            normalizer: Normalizer::new(lexicon)?,
            matcher: SkillMatcher::new(vocabulary)?,
            detector: DynamicTokenDetector::new(lexicon)?,
            vocabulary_size: vocabulary.len(),
        })
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Vocabulary entries in the text (normalizes first)
    pub fn known_skills(&self, text: &str) -> std::collections::BTreeSet<String> {
        self.matcher.find_known(&self.normalizer.normalize(text))
    }

    pub fn document_skills(&self, text: &str) -> DocumentSkills {
        let skills = DocumentSkills {
            known: self.known_skills(text),
            dynamic: self.detector.detect(text),
        };
        debug!(
            "Document skills: {} known, {} dynamic",
            skills.known.len(),
            skills.dynamic.len()
        );
        skills
    }

    pub fn compare(&self, jd_text: &str, resume_text: &str) -> SkillComparison {
        let jd = self.document_skills(jd_text);
        let resume = self.document_skills(resume_text);
        SkillComparison::compute(&jd, &resume)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }
}
