// Text-analysis capabilities used by the extractors.
// The rule-based analyzer is lightweight; anything implementing
// `TextAnalyzer` (a statistical tagger, an NER model) can replace it.
pub mod ner;
pub mod tokenize;

use serde::{Deserialize, Serialize};

pub use tokenize::RuleBasedAnalyzer;

/// Coarse part-of-speech tags, named after their Penn Treebank counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tag {
    /// Capitalized word.
    Nnp,
    Nn,
    /// Number.
    Cd,
    Dt,
    In,
    Cc,
    Prp,
    Punct,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub text: String,
    pub tag: Tag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Organization,
    Person,
    Location,
}

/// A named-entity chunk: a run of tagged tokens joined by single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityChunk {
    pub label: EntityLabel,
    pub text: String,
}

/// Tokenization, tagging and entity chunking behind one seam.
///
/// The skill extractor only calls `tokenize`. `sentences`, `pos_tag` and
/// `chunk_entities` are an extension point for entity-based extractors
/// (organisations for education, people for contacts); nothing in the
/// parse pipeline calls them today.
pub trait TextAnalyzer {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;
    fn tokenize(&self, text: &str) -> Vec<String>;
    fn pos_tag(&self, tokens: &[String]) -> Vec<TaggedToken>;
    fn chunk_entities(&self, tagged: &[TaggedToken]) -> Vec<EntityChunk>;
}
