// One parse request: read -> extract -> filter -> summarize.
use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::ParseOptions;
use crate::error::Result;
use crate::extract::{
    extract_education, extract_emails, extract_phone_numbers, extract_skills, EducationRecord,
};
use crate::reader::read_document;
use crate::sections::{identify_sections, ResumeSection};
use crate::summary::{build_summary, EntityCounts, ReportSummary};

/// Everything extracted from one resume, after filtering.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedResume {
    pub phone_numbers: Vec<String>,
    pub emails: Vec<String>,
    pub skills: BTreeSet<String>,
    pub education: Vec<EducationRecord>,
    pub sections: Vec<ResumeSection>,
    pub summary: ReportSummary,
}

/// Reads `path` and parses it. Nothing is extracted unless the file has a
/// supported extension and could be read in full.
pub fn parse_file(path: &Path, options: &ParseOptions) -> Result<ParsedResume> {
    let doc = read_document(path)?;
    info!(
        path = %path.display(),
        ext = %doc.extension,
        chars = doc.char_len(),
        "parsing resume"
    );
    Ok(parse_text(&doc.text, options))
}

/// Runs every extractor over `text`, then applies the filters in `options`.
///
/// The extractors are independent and run in parallel; the summary counts
/// the filtered collections.
pub fn parse_text(text: &str, options: &ParseOptions) -> ParsedResume {
    let ((phone_numbers, emails), ((skills, education), sections)) = rayon::join(
        || rayon::join(|| extract_phone_numbers(text), || extract_emails(text)),
        || {
            rayon::join(
                || rayon::join(|| extract_skills(text), || extract_education(text)),
                || identify_sections(text),
            )
        },
    );

    debug!(
        phones = phone_numbers.len(),
        emails = emails.len(),
        skills = skills.len(),
        education = education.len(),
        sections = sections.len(),
        "extracted"
    );

    let skills = options.skill_filter.apply(&skills);
    let education = options.education_level.apply(&education);

    let counts = EntityCounts {
        phones: phone_numbers.len(),
        emails: emails.len(),
        skills: skills.len(),
        education: education.len(),
    };
    let summary = build_summary(counts, &sections, text);

    ParsedResume {
        phone_numbers,
        emails,
        skills,
        education,
        sections,
        summary,
    }
}
