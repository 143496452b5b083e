//! Static reference data served under `/api/data`.

use bacai_lang::{Language, Level, Subject};
use serde::{Deserialize, Serialize};

/// A curriculum subject with its names in every supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectEntry {
    /// Wire identifier.
    pub id: Subject,
    /// English name.
    pub name: String,
    /// Arabic name.
    pub name_ar: String,
    /// French name.
    pub name_fr: String,
}

impl From<Subject> for SubjectEntry {
    fn from(subject: Subject) -> Self {
        Self {
            id: subject,
            name: subject.display_name(Language::English).to_string(),
            name_ar: subject.display_name(Language::Arabic).to_string(),
            name_fr: subject.display_name(Language::French).to_string(),
        }
    }
}

/// An education level with its names and certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEntry {
    /// Wire identifier.
    pub id: Level,
    /// English name.
    pub name: String,
    /// Arabic name.
    pub name_ar: String,
    /// French name.
    pub name_fr: String,
    /// Certificate awarded at the end of the level.
    pub certificate: String,
    /// Typical duration.
    pub duration: String,
}

impl From<Level> for LevelEntry {
    fn from(level: Level) -> Self {
        Self {
            id: level,
            name: level.display_name(Language::English).to_string(),
            name_ar: level.display_name(Language::Arabic).to_string(),
            name_fr: level.display_name(Language::French).to_string(),
            certificate: level.certificate().to_string(),
            duration: level.duration().to_string(),
        }
    }
}

/// The six academic subjects.
#[must_use]
pub fn subjects() -> Vec<SubjectEntry> {
    Subject::ACADEMIC.into_iter().map(SubjectEntry::from).collect()
}

/// The three education levels, lowest first.
#[must_use]
pub fn levels() -> Vec<LevelEntry> {
    Level::ALL.into_iter().map(LevelEntry::from).collect()
}

/// Overview of the national curriculum.
#[must_use]
pub fn curriculum() -> serde_json::Value {
    serde_json::json!({
        "mauritania": {
            "system": "Baccalaureate system with BEPC and Baccalaureate certificates",
            "languages": ["Arabic", "French", "English"],
            "structure": {
                "6-15 years": "Compulsory basic education",
                "16-18 years": "Secondary lycée with specializations",
                "18+ years": "Higher education"
            },
            "specializations": [
                "Mathematics",
                "Sciences (Physics, Chemistry, Biology)",
                "Literature and Arts",
                "Quran and Arabic Studies",
                "Technical Education"
            ]
        }
    })
}
