//! Closed vocabularies carried on the wire.
//!
//! Every enum here serializes to the exact string the HTTP API and the model
//! service use, and parses back through [`std::str::FromStr`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LangError;

// ============================================================================
// Language
// ============================================================================

/// One of the three supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// Arabic (`ar`).
    #[serde(rename = "ar")]
    Arabic,
    /// French (`fr`).
    #[serde(rename = "fr")]
    French,
    /// English (`en`), also the detection fallback.
    #[default]
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// All languages, in the order they are advertised by the API.
    pub const ALL: [Self; 3] = [Self::Arabic, Self::French, Self::English];

    /// Returns the two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::French => "fr",
            Self::English => "en",
        }
    }

    /// Parses a two-letter code. Codes are matched exactly.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ar" => Some(Self::Arabic),
            "fr" => Some(Self::French),
            "en" => Some(Self::English),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| LangError::unknown("language", s, "ar, fr, en"))
    }
}

// ============================================================================
// Subject
// ============================================================================

/// The academic category of an exercise, concept or conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    /// Mathematics.
    Mathematics,
    /// Arabic language and literature.
    Arabic,
    /// French language and literature.
    French,
    /// English language.
    English,
    /// Physics, chemistry and biology.
    Sciences,
    /// Quran, hadith and jurisprudence.
    IslamicStudies,
    /// Fallback when nothing more specific applies.
    #[default]
    General,
}

impl Subject {
    /// The six academic subjects of the curriculum, excluding `General`.
    pub const ACADEMIC: [Self; 6] = [
        Self::Mathematics,
        Self::Arabic,
        Self::French,
        Self::English,
        Self::Sciences,
        Self::IslamicStudies,
    ];

    /// Returns the wire identifier of the subject.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mathematics => "mathematics",
            Self::Arabic => "arabic",
            Self::French => "french",
            Self::English => "english",
            Self::Sciences => "sciences",
            Self::IslamicStudies => "islamic_studies",
            Self::General => "general",
        }
    }

    /// Returns `true` for every subject except `General`.
    #[must_use]
    pub const fn is_academic(self) -> bool {
        !matches!(self, Self::General)
    }

    /// Returns the human-readable name of the subject in `language`.
    #[must_use]
    pub const fn display_name(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Mathematics, Language::English) => "Mathematics",
            (Self::Mathematics, Language::Arabic) => "الرياضيات",
            (Self::Mathematics, Language::French) => "Mathématiques",
            (Self::Sciences, Language::English | Language::French) => "Sciences",
            (Self::Sciences, Language::Arabic) => "العلوم",
            (Self::Arabic, Language::English) => "Arabic",
            (Self::Arabic, Language::Arabic) => "اللغة العربية",
            (Self::Arabic, Language::French) => "Arabe",
            (Self::French, Language::English) => "French",
            (Self::French, Language::Arabic) => "اللغة الفرنسية",
            (Self::French, Language::French) => "Français",
            (Self::English, Language::English) => "English",
            (Self::English, Language::Arabic) => "اللغة الإنجليزية",
            (Self::English, Language::French) => "Anglais",
            (Self::IslamicStudies, Language::English) => "Islamic Studies",
            (Self::IslamicStudies, Language::Arabic) => "الدراسات الإسلامية",
            (Self::IslamicStudies, Language::French) => "Études islamiques",
            (Self::General, Language::English) => "General",
            (Self::General, Language::Arabic) => "عام",
            (Self::General, Language::French) => "Général",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mathematics" => Ok(Self::Mathematics),
            "arabic" => Ok(Self::Arabic),
            "french" => Ok(Self::French),
            "english" => Ok(Self::English),
            "sciences" => Ok(Self::Sciences),
            "islamic_studies" => Ok(Self::IslamicStudies),
            "general" => Ok(Self::General),
            _ => Err(LangError::unknown(
                "subject",
                s,
                "mathematics, arabic, french, english, sciences, islamic_studies, general",
            )),
        }
    }
}

// ============================================================================
// Level
// ============================================================================

/// Education level within the national curriculum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Lower secondary, ending with the BEPC.
    SecondaryBasic,
    /// Upper secondary (lycée), ending with the baccalaureate.
    #[default]
    SecondaryLycee,
    /// Higher education.
    University,
}

impl Level {
    /// All levels, from lowest to highest.
    pub const ALL: [Self; 3] = [Self::SecondaryBasic, Self::SecondaryLycee, Self::University];

    /// Returns the wire identifier of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SecondaryBasic => "secondary_basic",
            Self::SecondaryLycee => "secondary_lycee",
            Self::University => "university",
        }
    }

    /// Returns the human-readable name of the level in `language`.
    #[must_use]
    pub const fn display_name(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::SecondaryBasic, Language::English) => "Secondary Basic",
            (Self::SecondaryBasic, Language::Arabic) => "التعليم الثانوي الأساسي",
            (Self::SecondaryBasic, Language::French) => "Secondaire fondamental",
            (Self::SecondaryLycee, Language::English) => "Secondary Lycée",
            (Self::SecondaryLycee, Language::Arabic) => "التعليم الثانوي الثانوي",
            (Self::SecondaryLycee, Language::French) => "Secondaire lycée",
            (Self::University, Language::English) => "University",
            (Self::University, Language::Arabic) => "التعليم الجامعي",
            (Self::University, Language::French) => "Université",
        }
    }

    /// Certificate awarded at the end of the level.
    #[must_use]
    pub const fn certificate(self) -> &'static str {
        match self {
            Self::SecondaryBasic => "BEPC",
            Self::SecondaryLycee => "Baccalaureate",
            Self::University => "Bachelor/Master/PhD",
        }
    }

    /// Typical duration of the level.
    #[must_use]
    pub const fn duration(self) -> &'static str {
        match self {
            Self::SecondaryBasic | Self::SecondaryLycee => "3 years",
            Self::University => "3-8 years",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "secondary_basic" => Ok(Self::SecondaryBasic),
            "secondary_lycee" => Ok(Self::SecondaryLycee),
            "university" => Ok(Self::University),
            _ => Err(LangError::unknown(
                "level",
                s,
                "secondary_basic, secondary_lycee, university",
            )),
        }
    }
}

// ============================================================================
// Request modes
// ============================================================================

/// How a solution should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolveMode {
    /// Full worked solution.
    #[default]
    StepByStep,
    /// Final answer only.
    AnswerOnly,
}

/// Depth of a concept explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    /// Short overview.
    Basic,
    /// Standard explanation.
    #[default]
    Detailed,
    /// Exhaustive explanation.
    Comprehensive,
}

/// Tone of the conversational tutor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TutorMode {
    /// Casual and warm.
    #[default]
    Friendly,
    /// Academic register.
    Formal,
    /// Emphasizes progress and motivation.
    Encouraging,
}

/// Difficulty tag on uploaded exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Easy.
    Easy,
    /// Medium.
    Medium,
    /// Hard.
    Hard,
}
