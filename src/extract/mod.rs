// Pattern extractors. Each one is a pure function of the input text.
pub mod contact;
pub mod education;
pub mod skills;

pub use contact::{extract_emails, extract_phone_numbers};
pub use education::{extract_education, EducationRecord};
pub use skills::{extract_skills, extract_skills_with, SKILL_VOCABULARY};
