// Skill extraction: vocabulary lookup over single tokens and 2/3-token n-grams.
use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;

use crate::nlp::{RuleBasedAnalyzer, TextAnalyzer};

/// Reference terms, lower-cased. Candidates are case-folded before lookup.
pub const SKILL_VOCABULARY: [&str; 17] = [
    "bsc",
    "teaching",
    "maths",
    "math",
    "mathematics",
    "english",
    "language",
    "msc",
    "bed",
    "python",
    "java",
    "c++",
    "javascript",
    "data analysis",
    "machine learning",
    "communication",
    "leadership",
];

static SKILL_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SKILL_VOCABULARY.iter().copied().collect());

pub fn extract_skills(text: &str) -> BTreeSet<String> {
    extract_skills_with(&RuleBasedAnalyzer::new(), text)
}

/// Skills mentioned in `text`, keyed by the casing they appear with.
///
/// Only alphabetic tokens take part; a multi-word skill is found through the
/// n-gram of its words, so "Data Analysis" is reported while "Data" alone is
/// not. "Python" and "python" are distinct entries.
pub fn extract_skills_with<A: TextAnalyzer>(analyzer: &A, text: &str) -> BTreeSet<String> {
    let tokens: Vec<String> = analyzer
        .tokenize(text)
        .into_iter()
        .filter(|t| !t.is_empty() && t.chars().all(char::is_alphabetic))
        .collect();

    let mut found = BTreeSet::new();

    for token in &tokens {
        if SKILL_SET.contains(token.to_lowercase().as_str()) {
            found.insert(token.clone());
        }
    }

    for n in 2..=3 {
        for window in tokens.windows(n) {
            let ngram = window.join(" ");
            if SKILL_SET.contains(ngram.to_lowercase().as_str()) {
                found.insert(ngram);
            }
        }
    }

    found
}
