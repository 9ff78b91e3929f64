//! Heuristic detection of technology-like tokens outside the vocabulary

use crate::error::Result;
use crate::processing::lexicon::Lexicon;
use regex::Regex;
use std::collections::BTreeSet;

/// Flags tokens such as `S3`, `EC2`, `Node.js`, `C++`, `JWT` or `OAuth` in raw text.
///
/// Candidates are collected broadly; the lexicon's exclusion lists then
/// drop common words, state names, legal boilerplate, domains and bare numbers.
pub struct DynamicTokenDetector {
    lexicon: Lexicon,
    digit_suffixed: Regex,
    dotted: Regex,
    acronym: Regex,
    word: Regex,
    token_split: Regex,
}

impl DynamicTokenDetector {
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        Ok(Self {
            lexicon: lexicon.clone(),
            // S3, EC2, Python3
            digit_suffixed: Regex::new(r"\b[A-Za-z]{1,10}\d{1,4}\b")?,
            // Node.js, ASP.NET, Socket.io
            dotted: Regex::new(r"(?i)\b[A-Za-z][A-Za-z0-9]*\.(?:js|net|io)\b")?,
            // JWT, SSO, IAM
            acronym: Regex::new(r"\b[A-Z]{2,6}\b")?,
            // candidates for OAuth, PyTorch, GraphQL
            word: Regex::new(r"\b[A-Za-z]{2,24}\b")?,
            token_split: Regex::new(r"[^A-Za-z0-9+#.]+")?,
        })
    }

    /// Lowercased candidates before exclusion filtering
    pub fn candidates(&self, text: &str) -> BTreeSet<String> {
        let mut tokens = BTreeSet::new();

        for pattern in [&self.digit_suffixed, &self.dotted, &self.acronym] {
            tokens.extend(pattern.find_iter(text).map(|m| m.as_str().to_lowercase()));
        }

        tokens.extend(
            self.word
                .find_iter(text)
                .map(|m| m.as_str())
                .filter(|w| is_mixed_case(w))
                .map(str::to_lowercase),
        );

        // C++ and C# end in non-word characters, so they are matched per token.
        // C++ may carry a standard version: C++17, C++20.
        for raw in self.token_split.split(text) {
            let token = raw.trim_end_matches('.');
            if token == "C#" {
                tokens.insert("c#".to_string());
            } else if let Some(version) = token.strip_prefix("C++") {
                if version.chars().all(|c| c.is_ascii_digit()) {
                    tokens.insert("c++".to_string());
                }
            }
        }

        tokens
    }

    /// Candidates that survive the exclusion lists
    pub fn detect(&self, text: &str) -> BTreeSet<String> {
        self.candidates(text)
            .into_iter()
            .filter(|token| !self.lexicon.is_excluded(token))
            .collect()
    }
}

/// Inner capital plus at least one lowercase letter: `OAuth`, `GitHub`, not `README`
fn is_mixed_case(word: &str) -> bool {
    word.chars().skip(1).any(|c| c.is_ascii_uppercase())
        && word.chars().any(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> DynamicTokenDetector {
        DynamicTokenDetector::new(&Lexicon::builtin()).unwrap()
    }

    #[test]
    fn test_cloud_and_auth_tokens() {
        let found = detector().detect("Deployed via AWS S3 and EC2 using OAuth");
        for expected in ["s3", "ec2", "oauth", "aws"] {
            assert!(found.contains(expected), "missing {}", expected);
        }
        for unwanted in ["deployed", "via", "and", "using"] {
            assert!(!found.contains(unwanted));
        }
    }

    #[test]
    fn test_state_names_and_common_words_are_dropped() {
        let d = detector();
        let text = "Located in TEXAS or NEW YORK. THE role IS hybrid. EEO employer, PLAN details.";
        let candidates = d.candidates(text);
        assert!(candidates.contains("texas"));
        assert!(candidates.contains("the"));

        let found = d.detect(text);
        for unwanted in ["texas", "new", "york", "the", "is", "eeo", "plan"] {
            assert!(!found.contains(unwanted), "kept {}", unwanted);
        }
    }

    #[test]
    fn test_symbol_languages() {
        let found = detector().detect("Strong C++ and C#, plus Node.js and ASP.NET.");
        assert!(found.contains("c++"));
        assert!(found.contains("c#"));
        assert!(found.contains("node.js"));
        assert!(found.contains("asp.net"));
    }

    #[test]
    fn test_versioned_cpp() {
        let found = detector().detect("Modern C++17 and C#/.NET");
        assert!(found.contains("c++"));
        assert!(found.contains("c#"));

        let found = detector().detect("C++20 ok");
        assert!(found.contains("c++"));

        assert!(!detector().detect("C++x and C++17b").contains("c++"));
    }

    #[test]
    fn test_mixed_case_names_and_credentials_are_dropped() {
        let d = detector();
        let found = d.detect("Apply on LinkedIn, PhD preferred. Worked at McKinsey with OAuth.");
        for unwanted in ["linkedin", "phd", "mckinsey"] {
            assert!(!found.contains(unwanted), "kept {}", unwanted);
        }
        assert!(found.contains("oauth"));
    }

    #[test]
    fn test_lowercase_c_is_not_a_language() {
        let found = detector().detect("section c# of the notes, or c++ maybe");
        assert!(!found.contains("c#"));
        assert!(!found.contains("c++"));
    }

    #[test]
    fn test_domains_and_numbers_are_dropped() {
        let found = detector().detect("Apply at careers.example.com or Socket.io, 2024 Q4 2025");
        assert!(!found.contains("socket.io"));
        assert!(!found.contains("2024"));
        assert!(found.contains("q4"));
    }

    #[test]
    fn test_mixed_case_identifiers() {
        let found = detector().detect("Built with PyTorch and GraphQL, see GitHub. REQUIREMENTS below.");
        assert!(found.contains("pytorch"));
        assert!(found.contains("graphql"));
        assert!(found.contains("github"));
        assert!(!found.contains("requirements"));
        assert!(!found.contains("built"));
    }

    #[test]
    fn test_plain_prose_yields_nothing() {
        assert!(detector().detect("we build reliable data pipelines every day").is_empty());
        assert!(detector().detect("").is_empty());
    }
}
