//! Script-based language detection.
//!
//! Arabic script is unambiguous per character, so a modest share of Arabic
//! codepoints is enough to call a text Arabic. French is only betrayed by
//! sparse diacritics, so its threshold is lower. Everything else is English,
//! which is the fallback rather than a positive detection.

use crate::types::Language;

/// Share of Arabic-block characters above which a text is Arabic.
pub const ARABIC_THRESHOLD: f64 = 0.3;

/// Share of French diacritic letters above which a text is French.
pub const FRENCH_THRESHOLD: f64 = 0.1;

/// Lowercase Latin letters carrying French diacritics.
const FRENCH_DIACRITICS: [char; 16] = [
    'à', 'â', 'ä', 'ç', 'é', 'è', 'ê', 'ë', 'ï', 'î', 'ô', 'ö', 'ù', 'û', 'ü', 'ÿ',
];

/// Returns `true` for codepoints in the Arabic block (U+0600–U+06FF).
const fn is_arabic(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}')
}

/// Returns `true` for French diacritic letters in either case.
fn is_french_diacritic(c: char) -> bool {
    c.to_lowercase().any(|lower| FRENCH_DIACRITICS.contains(&lower))
}

/// Guesses the language of `text`.
///
/// Ratios are taken over the number of non-whitespace characters. Empty or
/// whitespace-only input returns [`Language::English`] without computing any
/// ratio.
///
/// ```rust
/// use bacai_lang::{detect, Language};
///
/// assert_eq!(detect("حل المعادلة"), Language::Arabic);
/// assert_eq!(detect("Résoudre l'équation à côté"), Language::French);
/// assert_eq!(detect("Solve the equation"), Language::English);
/// assert_eq!(detect("   "), Language::English);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn detect(text: &str) -> Language {
    let mut arabic = 0usize;
    let mut french = 0usize;
    let mut total = 0usize;

    for c in text.chars().filter(|c| !c.is_whitespace()) {
        total += 1;
        if is_arabic(c) {
            arabic += 1;
        } else if is_french_diacritic(c) {
            french += 1;
        }
    }

    if total == 0 {
        return Language::English;
    }

    let total = total as f64;
    if arabic as f64 / total > ARABIC_THRESHOLD {
        Language::Arabic
    } else if french as f64 / total > FRENCH_THRESHOLD {
        Language::French
    } else {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_arabic_text() {
        assert_eq!(detect("ما هي مساحة الدائرة؟"), Language::Arabic);
    }

    #[test]
    fn test_french_text() {
        // 4 diacritics over 33 visible characters
        assert_eq!(detect("Résoudre l'équation du deuxième degré"), Language::French);
    }

    #[test]
    fn test_uppercase_french_diacritics_count() {
        assert_eq!(detect("ÉTÉ À"), Language::French);
    }

    #[test]
    fn test_plain_ascii_is_english() {
        assert_eq!(detect("What is the area of a circle?"), Language::English);
    }

    #[test]
    fn test_sparse_diacritics_stay_english() {
        // 1 diacritic over 28 visible characters is below 10%
        assert_eq!(detect("The café serves a great breakfast"), Language::English);
    }

    #[test]
    fn test_empty_and_whitespace_are_english() {
        assert_eq!(detect(""), Language::English);
        assert_eq!(detect(" \t\n "), Language::English);
    }

    #[test]
    fn test_arabic_threshold_is_strict() {
        // 3 Arabic characters out of 10 is exactly 0.3, not above it
        assert_eq!(detect("حلب abcdefg"), Language::English);
        assert_eq!(detect("حلبت abcdefg"), Language::Arabic);
    }

    #[test]
    fn test_arabic_wins_over_french() {
        assert_eq!(detect("é حل"), Language::Arabic);
    }

    #[test]
    fn test_mixed_arabic_minority() {
        // 2 Arabic letters among 19 Latin ones
        assert_eq!(detect("The word حل means solve it"), Language::English);
    }

    proptest! {
        #[test]
        fn prop_arabic_block_only_is_arabic(s in "[\u{0600}-\u{06FF}]{1,64}") {
            prop_assert_eq!(detect(&s), Language::Arabic);
        }

        #[test]
        fn prop_ascii_is_english(s in "[ -~]{0,128}") {
            prop_assert_eq!(detect(&s), Language::English);
        }

        #[test]
        fn prop_detection_is_deterministic(s in "\\PC{0,64}") {
            prop_assert_eq!(detect(&s), detect(&s));
        }

        #[test]
        fn prop_dense_diacritics_are_french(
            accents in "[àâäçéèêëïîôöùûüÿ]{2,8}",
            latin in "[a-z]{0,10}",
        ) {
            // at least 2 accents among at most 18 letters keeps the share above 10%
            let text = format!("{latin}{accents}");
            prop_assert_eq!(detect(&text), Language::French);
        }
    }
}
