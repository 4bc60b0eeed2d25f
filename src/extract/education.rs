// Line-oriented education extraction.
//
// A line is an education entry when any degree keyword occurs in it as a
// plain substring. Short abbreviations ("ba", "me", "ms") match generously;
// the education filter narrows the result.
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Checked in order; the first keyword contained in a line wins.
pub const DEGREE_KEYWORDS: [&str; 37] = [
    "bachelor", "bachelors", "b.a", "b.s", "b.sc", "b.e", "b.tech", "b.ed", "ba", "bs", "bsc",
    "be", "btech", "bed", "master", "masters", "m.a", "m.s", "m.sc", "m.e", "m.tech", "m.ed",
    "ma", "ms", "msc", "me", "mtech", "med", "mba", "pgdm", "doctorate", "ph.d", "phd",
    "doctor of philosophy", "associate", "diploma", "certification",
];

pub const INSTITUTION_KEYWORDS: [&str; 5] = ["university", "college", "institute", "school", "academy"];

// One capture pattern per degree keyword: the run of letters, spaces and dots
// around the keyword, which stops at commas, digits and other separators.
static DEGREE_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    DEGREE_KEYWORDS
        .iter()
        .map(|kw| {
            let pattern = format!(r"(?i)([A-Za-z\s.]*{}[A-Za-z\s.]*)", regex::escape(kw));
            (*kw, Regex::new(&pattern).unwrap())
        })
        .collect()
});

// A capitalized phrase ending in an institution keyword, e.g. "State University".
static INSTITUTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"([A-Z][A-Za-z\s]+(?i:{}))",
        INSTITUTION_KEYWORDS.join("|")
    ))
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub degree: String,
    pub institution: Option<String>,
}

impl EducationRecord {
    /// Degree and institution as one string; this is what the education
    /// filter matches against.
    pub fn text(&self) -> String {
        match &self.institution {
            Some(inst) => format!("{}, {}", self.degree, inst),
            None => self.degree.clone(),
        }
    }
}

impl fmt::Display for EducationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.degree)?;
        if let Some(inst) = &self.institution {
            writeln!(f, "Institution: {}", inst)?;
        }
        Ok(())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn find_institution(line: &str, line_lower: &str) -> Option<String> {
    if !INSTITUTION_KEYWORDS.iter().any(|kw| line_lower.contains(kw)) {
        return None;
    }
    INSTITUTION_PATTERN
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn find_degree(line: &str, keyword: &str, pattern: &Regex) -> String {
    pattern
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| capitalize(keyword))
}

/// One record per line that mentions a degree keyword, in document order.
/// Repeated lines produce repeated records.
pub fn extract_education(text: &str) -> Vec<EducationRecord> {
    text.split('\n')
        .filter_map(|line| {
            let line_lower = line.to_lowercase();
            let (keyword, pattern) = DEGREE_PATTERNS
                .iter()
                .find(|(kw, _)| line_lower.contains(kw))?;
            Some(EducationRecord {
                degree: find_degree(line, keyword, pattern),
                institution: find_institution(line, &line_lower),
            })
        })
        .collect()
}
