//! Keyword-based subject classification.
//!
//! Each language has its own keyword table. A subject's score is the number
//! of whole-word, case-insensitive occurrences of its keywords in the text;
//! the highest score wins, with ties going to the subject listed first.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::types::{Language, Subject};

/// Keywords for one subject within one language.
type SubjectKeywords = (Subject, &'static [&'static str]);

// ============================================================================
// Keyword tables
// ============================================================================

const ARABIC_KEYWORDS: [SubjectKeywords; 6] = [
    (
        Subject::Mathematics,
        &["الرياضيات", "معادلة", "حل", "رقم", "مساحة", "حجم", "زاوية"],
    ),
    (
        Subject::Sciences,
        &["الفيزياء", "الكيمياء", "الأحياء", "تجربة", "مادة", "طاقة"],
    ),
    (Subject::Arabic, &["قواعد", "نحو", "صرف", "بلاغة", "أدب", "شعر"]),
    (
        Subject::French,
        &["français", "grammaire", "conjugaison", "vocabulaire"],
    ),
    (Subject::English, &["english", "grammar", "vocabulary", "verb"]),
    (
        Subject::IslamicStudies,
        &["القرآن", "الحديث", "الشريعة", "الفقه", "السنة"],
    ),
];

const FRENCH_KEYWORDS: [SubjectKeywords; 6] = [
    (
        Subject::Mathematics,
        &[
            "mathématiques",
            "équation",
            "résoudre",
            "nombre",
            "surface",
            "volume",
            "angle",
        ],
    ),
    (
        Subject::Sciences,
        &["physique", "chimie", "biologie", "expérience", "matière", "énergie"],
    ),
    (
        Subject::Arabic,
        &["arabe", "grammaire", "conjugaison", "vocabulaire"],
    ),
    (
        Subject::French,
        &["français", "grammaire", "conjugaison", "littérature"],
    ),
    (Subject::English, &["anglais", "grammar", "vocabulary", "verb"]),
    (
        Subject::IslamicStudies,
        &["coran", "islam", "charia", "fiqh", "sounna"],
    ),
];

const ENGLISH_KEYWORDS: [SubjectKeywords; 6] = [
    (
        Subject::Mathematics,
        &[
            "mathematics",
            "equation",
            "solve",
            "number",
            "area",
            "volume",
            "angle",
            "calculate",
        ],
    ),
    (
        Subject::Sciences,
        &["physics", "chemistry", "biology", "experiment", "matter", "energy"],
    ),
    (Subject::Arabic, &["arabic", "grammar", "vocabulary", "language"]),
    (
        Subject::French,
        &["french", "grammar", "vocabulary", "conjugation"],
    ),
    (Subject::English, &["english", "grammar", "vocabulary", "verb"]),
    (
        Subject::IslamicStudies,
        &["quran", "islam", "sharia", "fiqh", "hadith", "sunnah"],
    ),
];

/// Returns the keyword table for `language`, in tie-breaking order.
#[must_use]
pub fn keywords(language: Language) -> &'static [SubjectKeywords] {
    match language {
        Language::Arabic => &ARABIC_KEYWORDS,
        Language::French => &FRENCH_KEYWORDS,
        Language::English => &ENGLISH_KEYWORDS,
    }
}

// ============================================================================
// Compiled matchers
// ============================================================================

/// One subject's compiled keyword patterns.
struct SubjectMatcher {
    subject: Subject,
    patterns: Vec<Regex>,
}

/// Compiles a table into whole-word, case-insensitive patterns.
///
/// `\b` is Unicode-aware, so Arabic and accented keywords get real word
/// boundaries.
fn compile(table: &[SubjectKeywords]) -> Vec<SubjectMatcher> {
    table
        .iter()
        .map(|&(subject, words)| SubjectMatcher {
            subject,
            patterns: words
                .iter()
                .filter_map(|word| {
                    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(word)))
                        .case_insensitive(true)
                        .build()
                        .ok()
                })
                .collect(),
        })
        .collect()
}

static ARABIC_MATCHERS: Lazy<Vec<SubjectMatcher>> = Lazy::new(|| compile(&ARABIC_KEYWORDS));
static FRENCH_MATCHERS: Lazy<Vec<SubjectMatcher>> = Lazy::new(|| compile(&FRENCH_KEYWORDS));
static ENGLISH_MATCHERS: Lazy<Vec<SubjectMatcher>> = Lazy::new(|| compile(&ENGLISH_KEYWORDS));

fn matchers(language: Language) -> &'static [SubjectMatcher] {
    match language {
        Language::Arabic => &ARABIC_MATCHERS,
        Language::French => &FRENCH_MATCHERS,
        Language::English => &ENGLISH_MATCHERS,
    }
}

// ============================================================================
// Scoring
// ============================================================================

/// Keyword hit count for one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubjectScore {
    /// The scored subject.
    pub subject: Subject,
    /// Number of keyword occurrences found.
    pub score: usize,
}

/// Scores `text` against every subject of the `language` table.
///
/// Results are returned in table order.
#[must_use]
pub fn score(text: &str, language: Language) -> Vec<SubjectScore> {
    let lowered = text.to_lowercase();
    matchers(language)
        .iter()
        .map(|matcher| SubjectScore {
            subject: matcher.subject,
            score: matcher
                .patterns
                .iter()
                .map(|pattern| pattern.find_iter(&lowered).count())
                .sum(),
        })
        .collect()
}

/// Guesses the subject of `text` using the keyword table of `language`.
///
/// Returns [`Subject::General`] when no keyword matches.
///
/// ```rust
/// use bacai_lang::{classify, Language, Subject};
///
/// assert_eq!(
///     classify("Balance this chemistry experiment", Language::English),
///     Subject::Sciences
/// );
/// assert_eq!(classify("Hello there", Language::English), Subject::General);
/// ```
#[must_use]
pub fn classify(text: &str, language: Language) -> Subject {
    let mut best = Subject::General;
    let mut max_score = 0;

    for entry in score(text, language) {
        if entry.score > max_score {
            max_score = entry.score;
            best = entry.subject;
        }
    }

    best
}

/// Like [`classify`], but takes a raw language code.
///
/// Unrecognized codes use the English table.
#[must_use]
pub fn classify_with_code(text: &str, code: &str) -> Subject {
    classify(text, Language::from_code(code).unwrap_or(Language::English))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn score_of(scores: &[SubjectScore], subject: Subject) -> usize {
        scores
            .iter()
            .find(|s| s.subject == subject)
            .map_or(0, |s| s.score)
    }

    #[test]
    fn test_english_mathematics() {
        let text = "Solve the equation for the unknown number";
        let scores = score(text, Language::English);
        assert_eq!(score_of(&scores, Subject::Mathematics), 3);
        assert_eq!(classify(text, Language::English), Subject::Mathematics);
    }

    #[test]
    fn test_no_matches_is_general() {
        assert_eq!(
            classify("The weather is nice today", Language::English),
            Subject::General
        );
    }

    #[test]
    fn test_empty_text_is_general() {
        assert_eq!(classify("", Language::Arabic), Subject::General);
        assert_eq!(classify("", Language::English), Subject::General);
    }

    #[test]
    fn test_whole_word_matching() {
        // "equations" and "numbers" are not the keywords "equation" and "number"
        assert_eq!(
            classify("equations with numbers", Language::English),
            Subject::General
        );
        assert_eq!(
            classify("an equation with a number", Language::English),
            Subject::Mathematics
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            classify("PHYSICS and Chemistry", Language::English),
            Subject::Sciences
        );
        assert_eq!(
            classify("ÉQUATION du second degré", Language::French),
            Subject::Mathematics
        );
    }

    #[test]
    fn test_repeated_keyword_counts_each_occurrence() {
        let scores = score("angle angle angle", Language::English);
        assert_eq!(score_of(&scores, Subject::Mathematics), 3);
    }

    #[test]
    fn test_tie_goes_to_first_subject_in_table() {
        // "grammar" scores for arabic, french and english alike
        assert_eq!(classify("grammar", Language::English), Subject::Arabic);
        // one mathematics hit and one sciences hit
        assert_eq!(
            classify("the energy of an angle", Language::English),
            Subject::Mathematics
        );
    }

    #[test]
    fn test_higher_score_beats_earlier_subject() {
        assert_eq!(
            classify("physics, chemistry and one angle", Language::English),
            Subject::Sciences
        );
    }

    #[test]
    fn test_french_table() {
        assert_eq!(
            classify("Une expérience de chimie sur l'énergie", Language::French),
            Subject::Sciences
        );
        assert_eq!(
            classify("La littérature et le français", Language::French),
            Subject::French
        );
    }

    #[test]
    fn test_arabic_table() {
        assert_eq!(
            classify("احسب مساحة المثلث ثم حجم المكعب", Language::Arabic),
            Subject::Mathematics
        );
        assert_eq!(
            classify("ما حكم الفقه في القرآن", Language::Arabic),
            Subject::IslamicStudies
        );
    }

    #[test]
    fn test_arabic_keyword_inside_longer_word_does_not_match() {
        // "حل" is a keyword but "حلول" is a different word
        let scores = score("حلول", Language::Arabic);
        assert_eq!(score_of(&scores, Subject::Mathematics), 0);
    }

    #[test]
    fn test_table_is_language_specific() {
        // "quran" is only an English keyword
        assert_eq!(classify("quran", Language::English), Subject::IslamicStudies);
        assert_eq!(classify("quran", Language::French), Subject::General);
    }

    #[test]
    fn test_unknown_code_falls_back_to_english_table() {
        assert_eq!(
            classify_with_code("solve this equation", "de"),
            Subject::Mathematics
        );
        assert_eq!(classify_with_code("coran", "fr"), Subject::IslamicStudies);
        assert_eq!(classify_with_code("coran", "xx"), Subject::General);
    }

    #[test]
    fn test_score_lists_every_subject_in_table_order() {
        let scores = score("nothing", Language::French);
        let subjects: Vec<Subject> = scores.iter().map(|s| s.subject).collect();
        assert_eq!(
            subjects,
            vec![
                Subject::Mathematics,
                Subject::Sciences,
                Subject::Arabic,
                Subject::French,
                Subject::English,
                Subject::IslamicStudies,
            ]
        );
        assert!(scores.iter().all(|s| s.score == 0));
    }

    #[test]
    fn test_every_keyword_compiles() {
        for language in Language::ALL {
            let table = keywords(language);
            let compiled = matchers(language);
            assert_eq!(table.len(), compiled.len());
            for ((_, words), matcher) in table.iter().zip(compiled) {
                assert_eq!(words.len(), matcher.patterns.len());
            }
        }
    }

    #[test]
    fn test_general_never_in_tables() {
        for language in Language::ALL {
            assert!(keywords(language)
                .iter()
                .all(|(subject, _)| subject.is_academic()));
        }
    }

    proptest! {
        #[test]
        fn prop_classification_is_deterministic(s in "\\PC{0,64}") {
            for language in Language::ALL {
                prop_assert_eq!(classify(&s, language), classify(&s, language));
            }
        }

        #[test]
        fn prop_digits_only_is_general(s in "[0-9 ]{0,32}") {
            for language in Language::ALL {
                prop_assert_eq!(classify(&s, language), Subject::General);
            }
        }
    }
}
