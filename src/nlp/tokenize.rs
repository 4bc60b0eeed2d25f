// Regex tokenizer, sentence splitter and closed-class POS tagger.
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ner, EntityChunk, Tag, TaggedToken, TextAnalyzer};

// Possessive clitic, decimal number, word (letters and digits together,
// hyphens allowed), then any other symbol on its own.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"['\x{2019}][sS]\b|\p{N}+(?:[.,]\p{N}+)+|[\p{Alphabetic}\p{N}]+(?:-[\p{Alphabetic}\p{N}]+)*|\S",
    )
    .unwrap()
});

static SENTENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^.!?\n]+(?:[.!?]+|\n|$)").unwrap()
});

static CLOSED_CLASS: Lazy<HashMap<&'static str, Tag>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for w in ["a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any"] {
        m.insert(w, Tag::Dt);
    }
    for w in [
        "of", "in", "at", "on", "for", "from", "with", "by", "to", "into", "about", "as",
        "during", "through", "under", "over", "between",
    ] {
        m.insert(w, Tag::In);
    }
    for w in ["and", "or", "but", "nor", "&"] {
        m.insert(w, Tag::Cc);
    }
    for w in ["i", "me", "my", "we", "our", "you", "your", "he", "she", "it", "they", "their"] {
        m.insert(w, Tag::Prp);
    }
    m
});

#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBasedAnalyzer;

impl RuleBasedAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

fn tag_token(token: &str) -> Tag {
    if let Some(&tag) = CLOSED_CLASS.get(token.to_lowercase().as_str()) {
        return tag;
    }
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_numeric() => Tag::Cd,
        Some(c) if c.is_uppercase() => Tag::Nnp,
        Some(c) if c.is_alphabetic() => Tag::Nn,
        _ => Tag::Punct,
    }
}

impl TextAnalyzer for RuleBasedAnalyzer {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        SENTENCE_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        TOKEN_PATTERN
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn pos_tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .map(|t| TaggedToken {
                text: t.clone(),
                tag: tag_token(t),
            })
            .collect()
    }

    fn chunk_entities(&self, tagged: &[TaggedToken]) -> Vec<EntityChunk> {
        ner::chunk(tagged)
    }
}
