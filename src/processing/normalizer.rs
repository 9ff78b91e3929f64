//! Text normalization: lowercase, symbol-aware cleanup, alias rewriting

use crate::error::Result;
use crate::processing::lexicon::{AliasRule, Lexicon, MAX_ALIAS_PASSES};
use log::warn;
use regex::Regex;

/// Lowercases text, keeps `[a-z0-9 . + # / -]`, and rewrites aliases to canonical names
pub struct Normalizer {
    aliases: Vec<AliasRule>,
    disallowed: Regex,
}

impl Normalizer {
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        Ok(Self {
            aliases: lexicon.aliases().to_vec(),
            // keep + . # / - for c++, node.js, c#, ci/cd
            disallowed: Regex::new(r"[^a-z0-9\s+.#/\-]")?,
        })
    }

    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let cleaned = self.disallowed.replace_all(&lowered, " ");

        let mut tokens: Vec<String> = cleaned.split_whitespace().map(str::to_string).collect();
        for _ in 0..MAX_ALIAS_PASSES {
            match self.rewrite_once(&tokens) {
                Some(rewritten) => tokens = rewritten,
                None => return tokens.join(" "),
            }
        }
        if self.rewrite_once(&tokens).is_some() {
            warn!("Alias rewriting did not settle after {} passes", MAX_ALIAS_PASSES);
        }
        tokens.join(" ")
    }

    /// One left-to-right pass. Returns None when nothing was rewritten.
    /// Rules match whole whitespace tokens, so `js/ts` and `node-js` are left as written.
    fn rewrite_once(&self, tokens: &[String]) -> Option<Vec<String>> {
        let mut out = Vec::with_capacity(tokens.len());
        let mut changed = false;
        let mut i = 0;

        while i < tokens.len() {
            let rest = &tokens[i..];
            match self.aliases.iter().find(|rule| rest.starts_with(&rule.from)) {
                Some(rule) => {
                    out.extend(rule.to.iter().cloned());
                    i += rule.from.len();
                    changed = true;
                }
                None => {
                    out.push(tokens[i].clone());
                    i += 1;
                }
            }
        }

        changed.then_some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(&Lexicon::builtin()).unwrap()
    }

    #[test]
    fn test_lowercases_and_strips_symbols() {
        let n = normalizer();
        assert_eq!(
            n.normalize("Skills: C++, C#, Node.JS; CI/CD (AWS)!"),
            "skills c++ c# node.js ci/cd aws"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalizer().normalize(""), "");
        assert_eq!(normalizer().normalize("  \n\t "), "");
    }

    #[test]
    fn test_aliases_rewrite_whole_tokens_only() {
        let n = normalizer();
        assert_eq!(n.normalize("K8s and Golang"), "kubernetes and go");
        assert_eq!(n.normalize("json results"), "json results");
        assert_eq!(n.normalize("Node JS services"), "node.js services");
    }

    #[test]
    fn test_symbol_joined_tokens_are_not_aliased() {
        let n = normalizer();
        assert_eq!(n.normalize("JS/TS, node-js"), "js/ts node-js");
        assert_eq!(n.normalize("JS / TS"), "javascript / typescript");
    }

    #[test]
    fn test_longest_alias_wins() {
        let n = normalizer();
        assert_eq!(n.normalize("Google Cloud Platform"), "gcp");
        assert_eq!(n.normalize("Amazon Web Services, Google Cloud"), "aws gcp");
    }

    #[test]
    fn test_alias_chain_settles() {
        // pyspark -> spark makes "spark sql", which rewrites again
        let n = normalizer();
        assert_eq!(n.normalize("PySpark SQL"), "spark");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let n = normalizer();
        let samples = [
            "Node JS, TS and JS developers",
            "PySpark SQL sql pipelines on GCS",
            "C Sharp / dot net / ASP NET",
            "ci cd with ArgoCD on k8s",
            "Ünïcödé — “quotes” and émojis 🚀",
            "go-to person for golang",
            "",
        ];
        for sample in samples {
            let once = n.normalize(sample);
            assert_eq!(n.normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_empty_lexicon_leaves_tokens_alone() {
        let n = Normalizer::new(&Lexicon::empty()).unwrap();
        assert_eq!(n.normalize("K8s"), "k8s");
    }
}
