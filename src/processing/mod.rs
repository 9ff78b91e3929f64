//! Skill extraction and comparison module

pub mod lexicon;
pub mod vocabulary;
pub mod normalizer;
pub mod skill_matcher;
pub mod dynamic_tokens;
pub mod comparator;
pub mod analyzer;
