// Human-readable report assembled from one parse request.
use std::fmt;

use serde::Serialize;

use crate::sections::ResumeSection;

pub const SECTION_PREVIEW_CHARS: usize = 150;
pub const TEXT_PREVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionDigest {
    pub name: String,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum ReportBody {
    Sections(Vec<SectionDigest>),
    Preview(String),
}

/// Counts of what was found in the resume, plus a digest of its sections.
/// Rebuilt on every parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub phone_count: usize,
    pub email_count: usize,
    pub skill_count: usize,
    pub education_count: usize,
    pub body: ReportBody,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EntityCounts {
    pub phones: usize,
    pub emails: usize,
    pub skills: usize,
    pub education: usize,
}

fn take_chars(text: &str, n: usize) -> (&str, bool) {
    match text.char_indices().nth(n) {
        Some((idx, _)) => (&text[..idx], true),
        None => (text, false),
    }
}

fn section_preview(body: &str) -> String {
    let (head, truncated) = take_chars(body, SECTION_PREVIEW_CHARS);
    let mut preview = head.trim().to_string();
    if truncated {
        preview.push_str("...");
    }
    preview
}

/// Builds the report. With no detected sections it falls back to the first
/// 500 characters of the full text.
pub fn build_summary(counts: EntityCounts, sections: &[ResumeSection], full_text: &str) -> ReportSummary {
    let body = if sections.is_empty() {
        let (head, _) = take_chars(full_text, TEXT_PREVIEW_CHARS);
        ReportBody::Preview(format!("{}...", head.trim()))
    } else {
        ReportBody::Sections(
            sections
                .iter()
                .map(|s| SectionDigest {
                    name: s.kind.name().to_uppercase(),
                    preview: section_preview(&s.body),
                })
                .collect(),
        )
    };

    ReportSummary {
        phone_count: counts.phones,
        email_count: counts.emails,
        skill_count: counts.skills,
        education_count: counts.education,
        body,
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RESUME STATISTICS")?;
        writeln!(f, "Total Phone Numbers: {}", self.phone_count)?;
        writeln!(f, "Total Emails: {}", self.email_count)?;
        writeln!(f, "Total Skills Found: {}", self.skill_count)?;
        writeln!(f, "Educational Qualifications: {}", self.education_count)?;
        writeln!(f)?;

        match &self.body {
            ReportBody::Sections(digests) => {
                writeln!(f, "KEY SECTIONS DETECTED")?;
                for d in digests {
                    writeln!(f, "\n {}", d.name)?;
                    writeln!(f, "{}", d.preview)?;
                }
            }
            ReportBody::Preview(text) => {
                writeln!(f, "RESUME PREVIEW\n")?;
                writeln!(f, "{}", text)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SectionKind;

    fn counts() -> EntityCounts {
        EntityCounts {
            phones: 1,
            emails: 2,
            skills: 3,
            education: 4,
        }
    }

    #[test]
    fn test_section_digest() {
        let sections = vec![ResumeSection {
            kind: SectionKind::Experience,
            body: "Did things".to_string(),
        }];
        let summary = build_summary(counts(), &sections, "ignored");
        assert_eq!(
            summary.body,
            ReportBody::Sections(vec![SectionDigest {
                name: "EXPERIENCE".to_string(),
                preview: "Did things".to_string(),
            }])
        );
        let text = summary.to_string();
        assert!(text.starts_with("RESUME STATISTICS\nTotal Phone Numbers: 1\nTotal Emails: 2\n"));
        assert!(text.contains("Educational Qualifications: 4\n\nKEY SECTIONS DETECTED\n\n EXPERIENCE\nDid things\n"));
    }

    #[test]
    fn test_long_section_truncated_with_ellipsis() {
        let body = "x".repeat(200);
        let sections = vec![ResumeSection {
            kind: SectionKind::Skills,
            body,
        }];
        let summary = build_summary(counts(), &sections, "");
        match summary.body {
            ReportBody::Sections(d) => {
                assert_eq!(d[0].preview.len(), SECTION_PREVIEW_CHARS + 3);
                assert!(d[0].preview.ends_with("..."));
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_exactly_150_chars_not_truncated() {
        assert_eq!(section_preview(&"y".repeat(150)), "y".repeat(150));
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let body = "é".repeat(151);
        let preview = section_preview(&body);
        assert_eq!(preview.chars().count(), 153);
    }

    #[test]
    fn test_fallback_preview() {
        let text = format!("  {}", "a".repeat(600));
        let summary = build_summary(EntityCounts::default(), &[], &text);
        match &summary.body {
            ReportBody::Preview(p) => {
                assert_eq!(p, &format!("{}...", "a".repeat(498)));
            }
            other => panic!("unexpected body: {other:?}"),
        }
        assert!(summary.to_string().contains("RESUME PREVIEW\n\naaa"));
    }

    #[test]
    fn test_fallback_on_short_text_still_has_ellipsis() {
        let summary = build_summary(EntityCounts::default(), &[], "short");
        assert_eq!(summary.body, ReportBody::Preview("short...".to_string()));
    }
}
