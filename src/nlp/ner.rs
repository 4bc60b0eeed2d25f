// Named-entity chunking over POS-tagged tokens.
// Runs of capitalized tokens become chunks; the suffix and gazetteer lists
// decide the label.
use std::collections::HashSet;

use once_cell::sync::Lazy;

use super::{EntityChunk, EntityLabel, Tag, TaggedToken};

static ORGANIZATION_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "inc", "llc", "corp", "corporation", "ltd", "limited", "company", "co", "group",
        "institute", "university", "college", "school", "academy", "foundation", "bank",
        "labs", "technologies",
    ]
    .iter()
    .copied()
    .collect()
});

static LOCATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "united states", "usa", "uk", "united kingdom", "new york", "california", "texas",
        "london", "paris", "tokyo", "beijing", "washington", "chicago", "los angeles",
        "san francisco", "boston", "seattle", "miami", "austin", "denver", "portland",
        "atlanta", "india", "canada", "germany",
    ]
    .iter()
    .copied()
    .collect()
});

// Lower-case words allowed inside a chunk when a capitalized token follows,
// as in "University of Leeds" or "Johnson & Johnson".
const CONNECTORS: [&str; 3] = ["of", "&", "and"];

fn label_for(tokens: &[&str]) -> Option<EntityLabel> {
    let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
    if lowered
        .iter()
        .any(|t| ORGANIZATION_SUFFIXES.contains(t.trim_end_matches('.')))
    {
        return Some(EntityLabel::Organization);
    }
    if LOCATIONS.contains(lowered.join(" ").as_str()) {
        return Some(EntityLabel::Location);
    }
    match tokens {
        [single] => {
            // Acronyms such as "MIT" or "IBM" are treated as organizations.
            let is_acronym = single.chars().count() >= 2 && single.chars().all(|c| c.is_uppercase());
            is_acronym.then_some(EntityLabel::Organization)
        }
        _ => Some(EntityLabel::Person),
    }
}

fn flush(current: &mut Vec<&str>, chunks: &mut Vec<EntityChunk>) {
    if let Some(label) = label_for(current) {
        chunks.push(EntityChunk {
            label,
            text: current.join(" "),
        });
    }
    current.clear();
}

pub(crate) fn chunk(tagged: &[TaggedToken]) -> Vec<EntityChunk> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for (i, tok) in tagged.iter().enumerate() {
        if tok.tag == Tag::Nnp {
            current.push(&tok.text);
            continue;
        }
        let next_is_proper = tagged.get(i + 1).map(|t| t.tag == Tag::Nnp).unwrap_or(false);
        let is_connector = CONNECTORS.contains(&tok.text.to_lowercase().as_str());
        if !current.is_empty() && is_connector && next_is_proper {
            current.push(&tok.text);
            continue;
        }
        if !current.is_empty() {
            flush(&mut current, &mut chunks);
        }
    }
    if !current.is_empty() {
        flush(&mut current, &mut chunks);
    }

    chunks
}
