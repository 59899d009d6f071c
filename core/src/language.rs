//! Rough language identification for short mixed-script strings.
//!
//! The heuristics count letters only: punctuation, digits and whitespace
//! never tip the balance. Latin letters must outnumber ideographs three to
//! one before a string is called English.

use crate::script::{is_cjk_char, is_latin_c, letter_count};
use std::fmt;

/// Language group guessed for a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageGroup {
    Unknown,
    Chinese,
    English,
}

impl LanguageGroup {
    /// Two-letter code: `xx`, `zh` or `en`.
    pub fn code(self) -> &'static str {
        match self {
            LanguageGroup::Unknown => "xx",
            LanguageGroup::Chinese => "zh",
            LanguageGroup::English => "en",
        }
    }
}

impl fmt::Display for LanguageGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Guess whether `s` is Chinese or English.
///
/// # Example
/// ```
/// use libcantonese_core::language::{guess_language, LanguageGroup};
///
/// assert_eq!(guess_language("Hello world"), LanguageGroup::English);
/// assert_eq!(guess_language("你食咗飯未"), LanguageGroup::Chinese);
/// assert_eq!(guess_language("123"), LanguageGroup::Unknown);
/// ```
pub fn guess_language(s: &str) -> LanguageGroup {
    let k = letter_count(s);
    if k == 0 {
        return LanguageGroup::Unknown;
    }

    let cjk_count = s.chars().filter(|c| is_cjk_char(*c)).count();
    let latin_count = s.chars().filter(|c| is_latin_c(*c)).count();

    if latin_count > 2 && latin_count as f64 / k as f64 > 0.5 {
        if latin_count > cjk_count * 3 {
            return LanguageGroup::English;
        }
        return LanguageGroup::Chinese;
    }

    if cjk_count > 1 && cjk_count as f64 / k as f64 > 0.5 {
        return LanguageGroup::Chinese;
    }

    LanguageGroup::Unknown
}

/// Returns true if `s` looks like a Chinese sentence rather than a single
/// word: longer than eight characters, or containing full-width sentence
/// punctuation.
pub fn looks_like_a_sentence(s: &str) -> bool {
    s.chars().count() > 8 || s.chars().any(|c| "。，；？「」！".contains(c))
}
