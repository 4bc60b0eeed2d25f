// Resume section detection.
//
// Lines are scanned top to bottom. A header line opens a section; following
// non-blank lines accumulate under it until the next header.
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Declaration order is also match priority when a line fits several kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Certifications,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            SectionKind::Summary => &["summary", "professional summary", "profile", "objective"],
            SectionKind::Experience => &["experience", "work experience", "employment", "work history"],
            SectionKind::Education => &["education", "academic", "qualifications", "educational background"],
            SectionKind::Skills => &["skills", "technical skills", "competencies", "expertise"],
            SectionKind::Projects => &["projects", "key projects", "project experience"],
            SectionKind::Certifications => &["certifications", "certificates", "professional certifications"],
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

struct HeaderKeyword {
    keyword: &'static str,
    decorated: Regex,
}

// Matches a keyword wrapped only in non-word characters: "### experience", "-- skills --".
static HEADER_KEYWORDS: Lazy<Vec<(SectionKind, Vec<HeaderKeyword>)>> = Lazy::new(|| {
    SectionKind::ALL
        .iter()
        .map(|&kind| {
            let keywords = kind
                .keywords()
                .iter()
                .map(|&keyword| HeaderKeyword {
                    keyword,
                    decorated: Regex::new(&format!(r"^\W*{}\W*$", regex::escape(keyword))).unwrap(),
                })
                .collect();
            (kind, keywords)
        })
        .collect()
});

impl HeaderKeyword {
    fn matches(&self, line: &str) -> bool {
        let kw = self.keyword;
        line == kw
            || line
                .strip_prefix(kw)
                .map(|rest| rest.starts_with(':'))
                .unwrap_or(false)
            || line
                .strip_suffix(kw)
                .map(|rest| rest.ends_with(' '))
                .unwrap_or(false)
            || self.decorated.is_match(line)
    }
}

/// The section a line introduces, if it is a header.
pub fn classify_header(line: &str) -> Option<SectionKind> {
    let line = line.trim().to_lowercase();
    HEADER_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| k.matches(&line)))
        .map(|(kind, _)| *kind)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeSection {
    pub kind: SectionKind,
    /// Trimmed body text, never empty.
    pub body: String,
}

impl ResumeSection {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body.lines()
    }
}

#[derive(Clone, Copy)]
enum State {
    NoActiveSection,
    InSection(SectionKind),
}

fn flush(kind: SectionKind, body: &mut String, sections: &mut Vec<ResumeSection>) {
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        let section = ResumeSection {
            kind,
            body: trimmed.to_string(),
        };
        match sections.iter_mut().find(|s| s.kind == kind) {
            Some(existing) => *existing = section,
            None => sections.push(section),
        }
    }
    body.clear();
}

/// Groups body lines under the headers found in `text`.
///
/// Sections with a blank body are dropped. A header seen twice keeps its
/// first position and the later body.
pub fn identify_sections(text: &str) -> Vec<ResumeSection> {
    let mut sections: Vec<ResumeSection> = Vec::new();
    let mut state = State::NoActiveSection;
    let mut current_text = String::new();

    for line in text.lines() {
        if let Some(kind) = classify_header(line) {
            if let State::InSection(prev) = state {
                flush(prev, &mut current_text, &mut sections);
            }
            state = State::InSection(kind);
            current_text.clear();
        } else if let State::InSection(_) = state {
            if !line.trim().is_empty() {
                current_text.push_str(line);
                current_text.push('\n');
            }
        }
    }

    if let State::InSection(kind) = state {
        flush(kind, &mut current_text, &mut sections);
    }

    debug!(count = sections.len(), "sections detected");
    sections
}
