//! Structured fact extraction from resume text.
//!
//! Phone numbers, email addresses, skill mentions and education records are
//! pulled from plain text with regular expressions and keyword lists, then
//! narrowed by user filters and summarized. File formats (PDF, DOCX, plain
//! text) are handled by [`reader`]; everything else works on a `&str`.
pub mod config;
pub mod error;
pub mod extract;
pub mod filter;
pub mod nlp;
pub mod pipeline;
pub mod reader;
pub mod sections;
pub mod summary;

pub use config::ParseOptions;
pub use error::ParseError;
pub use extract::EducationRecord;
pub use filter::{EducationLevel, SkillFilter};
pub use pipeline::{parse_file, parse_text, ParsedResume};
pub use sections::{ResumeSection, SectionKind};
pub use summary::ReportSummary;
