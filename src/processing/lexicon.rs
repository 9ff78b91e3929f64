//! Alias table and exclusion lists shared by normalization and dynamic detection

use crate::error::{Result, TailorError};
use std::collections::HashSet;

/// A token-aligned alias: `from` tokens are rewritten to `to` tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRule {
    pub from: Vec<String>,
    pub to: Vec<String>,
}

/// Immutable lookup tables built once and handed to each component
#[derive(Debug, Clone)]
pub struct Lexicon {
    aliases: Vec<AliasRule>,
    stopwords: HashSet<String>,
    us_states: HashSet<String>,
    legal_boilerplate: HashSet<String>,
    web_suffixes: Vec<String>,
}

const BUILTIN_ALIASES: &[(&str, &str)] = &[
    // language shortcuts
    ("js", "javascript"),
    ("ts", "typescript"),
    ("node js", "node.js"),
    ("golang", "go"),
    ("c sharp", "c#"),
    ("dot net", "dotnet"),
    ("asp net", "asp.net"),
    // cloud
    ("google cloud platform", "gcp"),
    ("google cloud", "gcp"),
    ("amazon web services", "aws"),
    // devops
    ("ci cd", "ci/cd"),
    ("k8s", "kubernetes"),
    ("argocd", "argo cd"),
    // data
    ("pyspark", "spark"),
    ("spark sql", "spark"),
    ("gcs", "cloud storage"),
];

const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "being", "by", "can", "could", "did",
    "do", "does", "doing", "for", "from", "had", "has", "have", "having", "he", "her", "hers",
    "him", "his", "i", "if", "in", "into", "is", "it", "its", "me", "my", "of", "on", "or",
    "our", "ours", "she", "so", "than", "that", "the", "their", "them", "they", "this",
    "those", "to", "was", "we", "were", "what", "when", "where", "which", "who", "why", "will",
    "with", "would", "you", "your",
    // all-caps boilerplate common in postings
    "usa", "eeo", "eoe", "pto", "llc", "inc", "ii", "iii", "faq",
    // mixed-case credentials, sites and firm names
    "phd", "mba", "linkedin", "youtube", "iphone", "ipad", "mckinsey", "mcdonald", "mcdonalds",
];

// Multi-word states are stored as their words; detected tokens are single words.
const US_STATES: &[&str] = &[
    "alabama", "alaska", "arizona", "arkansas", "california", "colorado", "connecticut",
    "delaware", "florida", "georgia", "hawaii", "idaho", "illinois", "indiana", "iowa",
    "kansas", "kentucky", "louisiana", "maine", "maryland", "massachusetts", "michigan",
    "minnesota", "mississippi", "missouri", "montana", "nebraska", "nevada", "new",
    "hampshire", "jersey", "mexico", "york", "north", "carolina", "dakota", "ohio",
    "oklahoma", "oregon", "pennsylvania", "rhode", "island", "south", "tennessee", "texas",
    "utah", "vermont", "virginia", "washington", "west", "wisconsin", "wyoming",
];

const LEGAL_BOILERPLATE: &[&str] = &[
    "equal", "employment", "opportunity", "ordinances", "notice", "notices", "non-sales",
    "incentive", "pay", "plan", "qualifications", "legal", "state-specific",
];

const WEB_SUFFIXES: &[&str] = &[".com", ".io", ".ai"];

/// Bound on alias rewrite passes; the built-in table settles in two
pub const MAX_ALIAS_PASSES: usize = 8;

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Characters that survive normalization
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '.' | '#' | '/' | '-')
}

fn alias_tokens(phrase: &str) -> Vec<String> {
    let cleaned: String = phrase
        .to_lowercase()
        .chars()
        .map(|c| if is_token_char(c) { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// Built-in tables
    pub fn builtin() -> Self {
        let mut lexicon = Self {
            aliases: Vec::new(),
            stopwords: to_set(STOPWORDS),
            us_states: to_set(US_STATES),
            legal_boilerplate: to_set(LEGAL_BOILERPLATE),
            web_suffixes: WEB_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        };
        for (from, to) in BUILTIN_ALIASES {
            lexicon.aliases.push(AliasRule {
                from: alias_tokens(from),
                to: alias_tokens(to),
            });
        }
        lexicon.sort_aliases();
        lexicon
    }

    /// An empty lexicon: no aliases, no exclusions
    pub fn empty() -> Self {
        Self {
            aliases: Vec::new(),
            stopwords: HashSet::new(),
            us_states: HashSet::new(),
            legal_boilerplate: HashSet::new(),
            web_suffixes: Vec::new(),
        }
    }

    /// Add or replace aliases. Rejects tables where a replacement contains a key.
    pub fn with_aliases<I, K, V>(mut self, aliases: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (from, to) in aliases {
            let from_tokens = alias_tokens(from.as_ref());
            if from_tokens.is_empty() {
                return Err(TailorError::Configuration(
                    "Alias key must not be empty".to_string(),
                ));
            }
            let rule = AliasRule {
                from: from_tokens,
                to: alias_tokens(to.as_ref()),
            };
            self.aliases.retain(|existing| existing.from != rule.from);
            self.aliases.push(rule);
        }
        self.validate_aliases()?;
        self.sort_aliases();
        Ok(self)
    }

    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    /// Alias rules, longest key first
    pub fn aliases(&self) -> &[AliasRule] {
        &self.aliases
    }

    /// True when a dynamic candidate should be discarded
    pub fn is_excluded(&self, token: &str) -> bool {
        let t = token.trim().to_lowercase();
        if t.chars().count() < 2 {
            return true;
        }
        if self.stopwords.contains(&t)
            || self.us_states.contains(&t)
            || self.legal_boilerplate.contains(&t)
        {
            return true;
        }
        if self.web_suffixes.iter().any(|suffix| t.ends_with(suffix.as_str())) {
            return true;
        }
        t.chars().all(|c| c.is_ascii_digit())
    }

    // Longest key wins: token count, then character length, then lexicographic.
    fn sort_aliases(&mut self) {
        self.aliases.sort_by(|a, b| {
            b.from
                .len()
                .cmp(&a.from.len())
                .then_with(|| key_len(b).cmp(&key_len(a)))
                .then_with(|| a.from.cmp(&b.from))
        });
    }

    fn validate_aliases(&self) -> Result<()> {
        for rule in &self.aliases {
            for other in &self.aliases {
                if rule.to.windows(other.from.len()).any(|w| w == other.from.as_slice()) {
                    return Err(TailorError::Configuration(format!(
                        "Alias '{}' -> '{}' produces alias key '{}'",
                        rule.from.join(" "),
                        rule.to.join(" "),
                        other.from.join(" ")
                    )));
                }
            }
        }
        Ok(())
    }
}

fn key_len(rule: &AliasRule) -> usize {
    rule.from.iter().map(String::len).sum()
}
