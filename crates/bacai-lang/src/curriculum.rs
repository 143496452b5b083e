//! Curriculum alignment checks.

use crate::types::{Language, Level, Subject};

/// Returns `true` when the (subject, level, language) triple exists in the
/// curriculum.
///
/// Every level currently offers all six academic subjects in all three
/// languages, so alignment reduces to each part naming a known entry and the
/// subject not being `general`.
#[must_use]
pub fn validate_curriculum_alignment(subject: &str, level: &str, language: &str) -> bool {
    let Ok(level) = level.parse::<Level>() else {
        return false;
    };
    let Ok(subject) = subject.parse::<Subject>() else {
        return false;
    };
    let Ok(language) = language.parse::<Language>() else {
        return false;
    };
    is_offered(subject, level, language)
}

/// Typed form of [`validate_curriculum_alignment`].
#[must_use]
pub const fn is_offered(subject: Subject, _level: Level, _language: Language) -> bool {
    subject.is_academic()
}
