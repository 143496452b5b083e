//! BACAI language tooling
//!
//! Closed vocabularies shared by the gateway (languages, subjects, levels and
//! request modes), the script-based language detector and the keyword subject
//! classifier used to auto-route requests that omit `language` or `subject`.
//!
//! Everything in this crate is pure and synchronous: no I/O, no shared
//! mutable state. The keyword matchers are compiled once on first use.
//!
//! # Example
//!
//! ```rust
//! use bacai_lang::{classify, detect, Language, Subject};
//!
//! let text = "Solve the equation and find the number";
//! let language = detect(text);
//! assert_eq!(language, Language::English);
//! assert_eq!(classify(text, language), Subject::Mathematics);
//! ```

pub mod classify;
pub mod curriculum;
pub mod detect;
pub mod error;
pub mod types;

pub use classify::{classify, classify_with_code, keywords, score, SubjectScore};
pub use curriculum::{is_offered, validate_curriculum_alignment};
pub use detect::{detect, ARABIC_THRESHOLD, FRENCH_THRESHOLD};
pub use error::{LangError, Result};
pub use types::{DetailLevel, Difficulty, Language, Level, SolveMode, Subject, TutorMode};
