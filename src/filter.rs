// Post-extraction filters driven by user input.
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::extract::EducationRecord;

/// Comma-separated search terms, case-folded and trimmed. Empty terms are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillFilter {
    terms: Vec<String>,
}

impl SkillFilter {
    pub fn parse(input: &str) -> Self {
        let terms = input
            .to_lowercase()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Keeps skills whose case-folded text contains any search term.
    /// With no terms every skill passes.
    pub fn apply(&self, skills: &BTreeSet<String>) -> BTreeSet<String> {
        if self.terms.is_empty() {
            return skills.clone();
        }
        skills
            .iter()
            .filter(|skill| {
                let folded = skill.to_lowercase();
                self.terms.iter().any(|t| folded.contains(t.as_str()))
            })
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[default]
    Any,
    HighSchool,
    Bachelors,
    Masters,
    Phd,
    Professional,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 6] = [
        EducationLevel::Any,
        EducationLevel::HighSchool,
        EducationLevel::Bachelors,
        EducationLevel::Masters,
        EducationLevel::Phd,
        EducationLevel::Professional,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::Any => "Any",
            EducationLevel::HighSchool => "High School",
            EducationLevel::Bachelors => "Bachelor's",
            EducationLevel::Masters => "Master's",
            EducationLevel::Phd => "PhD",
            EducationLevel::Professional => "Professional Degree",
        }
    }

    /// Lower-case substrings that identify this level. Empty for `Any`.
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            EducationLevel::Any => &[],
            EducationLevel::HighSchool => &["high school", "secondary school", "ged", "a-level"],
            EducationLevel::Bachelors => &["bachelor", "b.a", "b.s", "bsc", "b.e", "b.tech", "btech", "b.ed"],
            EducationLevel::Masters => &["master", "m.a", "m.s", "msc", "m.e", "m.tech", "mtech", "m.ed", "mba"],
            EducationLevel::Phd => &["phd", "ph.d", "doctorate", "doctor of philosophy"],
            EducationLevel::Professional => &[
                "professional", "mba", "pgdm", "juris doctor", "j.d", "m.d", "doctor of medicine",
                "certification", "diploma",
            ],
        }
    }

    fn matches(self, record: &EducationRecord) -> bool {
        let text = record.text().to_lowercase();
        self.markers().iter().any(|m| text.contains(m))
    }

    /// Keeps records whose degree or institution mentions this level.
    pub fn apply(self, records: &[EducationRecord]) -> Vec<EducationRecord> {
        if self == EducationLevel::Any {
            return records.to_vec();
        }
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EducationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        match key.as_str() {
            "" | "any" => Ok(EducationLevel::Any),
            "highschool" => Ok(EducationLevel::HighSchool),
            "bachelors" | "bachelor" => Ok(EducationLevel::Bachelors),
            "masters" | "master" => Ok(EducationLevel::Masters),
            "phd" | "doctorate" => Ok(EducationLevel::Phd),
            "professional" | "professionaldegree" => Ok(EducationLevel::Professional),
            _ => Err(format!(
                "unknown education level '{}', expected one of: {}",
                s,
                EducationLevel::ALL.map(|l| l.label()).join(", ")
            )),
        }
    }
}
