//! Vocabulary matching against normalized text

use crate::error::Result;
use crate::processing::vocabulary::Vocabulary;
use aho_corasick::AhoCorasick;
use regex::{Regex, RegexSet};
use std::collections::BTreeSet;

/// Finds vocabulary entries in normalized text.
///
/// Phrases and symbol-bearing entries (`node.js`, `c++`, `ci/cd`, `machine learning`)
/// match by plain containment. Bare words match on word boundaries so that `go`
/// is not found inside `going`.
pub struct SkillMatcher {
    phrase_entries: Vec<String>,
    phrase_matcher: Option<AhoCorasick>,
    word_entries: Vec<String>,
    word_matcher: RegexSet,
}

impl SkillMatcher {
    pub fn new(vocabulary: &Vocabulary) -> Result<Self> {
        let (phrase_entries, word_entries): (Vec<String>, Vec<String>) = vocabulary
            .iter()
            .map(str::to_string)
            .partition(|entry| Self::uses_containment(entry));

        // Standard match kind so overlapping search reports every contained entry
        let phrase_matcher = if phrase_entries.is_empty() {
            None
        } else {
            Some(AhoCorasick::new(&phrase_entries)?)
        };

        let word_patterns: Vec<String> = word_entries
            .iter()
            .map(|entry| format!(r"\b{}\b", regex::escape(entry)))
            .collect();
        let word_matcher = RegexSet::new(&word_patterns)?;

        Ok(Self {
            phrase_entries,
            phrase_matcher,
            word_entries,
            word_matcher,
        })
    }

    /// Entries with a space or any of `. # + /` are matched by containment
    pub fn uses_containment(entry: &str) -> bool {
        entry.contains(' ') || entry.contains(['.', '#', '+', '/'])
    }

    /// Vocabulary entries present in already-normalized text
    pub fn find_known(&self, normalized: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();

        if let Some(matcher) = &self.phrase_matcher {
            for mat in matcher.find_overlapping_iter(normalized) {
                found.insert(self.phrase_entries[mat.pattern().as_usize()].clone());
            }
        }

        for index in self.word_matcher.matches(normalized).iter() {
            found.insert(self.word_entries[index].clone());
        }

        found
    }

    /// Single-entry check with the same policy as `find_known`
    pub fn entry_matches(entry: &str, normalized: &str) -> Result<bool> {
        if Self::uses_containment(entry) {
            Ok(normalized.contains(entry))
        } else {
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(entry)))?;
            Ok(pattern.is_match(normalized))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::lexicon::Lexicon;
    use crate::processing::normalizer::Normalizer;

    fn matcher(entries: &[&str]) -> SkillMatcher {
        SkillMatcher::new(&Vocabulary::from_entries(entries.iter().copied())).unwrap()
    }

    #[test]
    fn test_word_boundary_rejects_substrings() {
        let m = matcher(&["go"]);
        assert!(m.find_known("going to work").is_empty());
        assert!(m.find_known("go build it").contains("go"));
    }

    #[test]
    fn test_symbol_entries_use_containment() {
        let m = matcher(&["node.js"]);
        assert!(m.find_known("we use node.js daily").contains("node.js"));
        assert!(m.find_known("we use nodejs daily").is_empty());
    }

    #[test]
    fn test_containment_accepts_embedded_symbol_entries() {
        // known false-positive risk of containment
        let m = matcher(&["c#"]);
        assert!(m.find_known("abc#def").contains("c#"));
    }

    #[test]
    fn test_phrases_and_overlaps() {
        let m = matcher(&["machine learning", "learning", "c++", "c", "ci/cd"]);
        let found = m.find_known("machine learning in c++ with ci/cd");
        let expected: BTreeSet<String> = ["machine learning", "learning", "c++", "c", "ci/cd"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_policy_split() {
        assert!(SkillMatcher::uses_containment("data modeling"));
        assert!(SkillMatcher::uses_containment("c++"));
        assert!(SkillMatcher::uses_containment("ci/cd"));
        assert!(!SkillMatcher::uses_containment("python"));
        assert!(!SkillMatcher::uses_containment("scikit-learn"));
    }

    #[test]
    fn test_matching_is_monotonic_in_vocabulary() {
        let normalizer = Normalizer::new(&Lexicon::builtin()).unwrap();
        let text = normalizer.normalize("Python, SQL, node.js and Go on AWS with CI/CD");

        let base = ["python", "go", "node.js"];
        let before = matcher(&base).find_known(&text);

        for extra in ["sql", "aws", "ci/cd", "rust", "going", "js"] {
            let mut entries: Vec<&str> = base.to_vec();
            entries.push(extra);
            let after = matcher(&entries).find_known(&text);
            assert!(before.is_subset(&after), "adding {:?} removed a match", extra);
        }
    }

    #[test]
    fn test_entry_matches_agrees_with_find_known() {
        let entries = ["go", "node.js", "data quality", "sql"];
        let m = matcher(&entries);
        let text = "sql data quality checks in go";
        let found = m.find_known(text);
        for entry in entries {
            assert_eq!(
                SkillMatcher::entry_matches(entry, text).unwrap(),
                found.contains(entry)
            );
        }
    }

    #[test]
    fn test_empty_vocabulary() {
        let m = matcher(&[]);
        assert!(m.find_known("python sql").is_empty());
    }
}
