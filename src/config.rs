use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::filter::{EducationLevel, SkillFilter};

pub const SKILLS_ENV: &str = "RESUME_PARSER_SKILLS";
pub const EDUCATION_ENV: &str = "RESUME_PARSER_EDUCATION";

/// User-supplied narrowing applied after extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseOptions {
    pub skill_filter: SkillFilter,
    pub education_level: EducationLevel,
}

impl ParseOptions {
    pub fn new(skill_filter: SkillFilter, education_level: EducationLevel) -> Self {
        Self {
            skill_filter,
            education_level,
        }
    }

    /// Explicit values win; otherwise `RESUME_PARSER_SKILLS` and
    /// `RESUME_PARSER_EDUCATION` are consulted.
    pub fn resolve(skills: Option<String>, education: Option<EducationLevel>) -> Result<Self> {
        Self::resolve_with(skills, education, |key| std::env::var(key).ok())
    }

    fn resolve_with<F>(
        skills: Option<String>,
        education: Option<EducationLevel>,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let skills = skills.or_else(|| lookup(SKILLS_ENV)).unwrap_or_default();
        let education_level = match education {
            Some(level) => level,
            None => match lookup(EDUCATION_ENV) {
                Some(raw) => raw
                    .parse::<EducationLevel>()
                    .map_err(|e| anyhow!("{EDUCATION_ENV}: {e}"))?,
                None => EducationLevel::Any,
            },
        };
        Ok(Self::new(SkillFilter::parse(&skills), education_level))
    }
}
