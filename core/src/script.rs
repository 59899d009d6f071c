// libcantonese/core/src/script.rs
//
// Character script classification for mixed Cantonese/English text.
//
// The CJK ranges cover the Unified Ideographs block, Extension A, the
// Compatibility Ideographs and the supplementary ideographic plane. Kana,
// Hangul and CJK punctuation are outside the ranges.
//
// "Latin" here means any cased letter (Lu/Ll) that is not an ideograph, so
// full-width letters (Ａ-Ｚ, ａ-ｚ) and accented letters qualify.

use unicode_categories::UnicodeCategories;

/// Coarse class of a single character as seen by the ruby classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// A CJK ideograph.
    Cjk,
    /// A cased, non-CJK letter (ASCII, full-width or accented).
    Letter,
    /// An ASCII or full-width decimal digit.
    Digit,
    /// The literal `#` link marker.
    Hash,
    /// Whitespace, punctuation, symbols and everything else.
    Other,
}

impl CharClass {
    /// Letters and digits start and extend a buffered run.
    pub fn is_alphanumeric(self) -> bool {
        matches!(self, CharClass::Letter | CharClass::Digit)
    }
}

/// Classify a character.
///
/// # Example
/// ```
/// use libcantonese_core::script::{classify_char, CharClass};
///
/// assert_eq!(classify_char('食'), CharClass::Cjk);
/// assert_eq!(classify_char('Ｓ'), CharClass::Letter);
/// assert_eq!(classify_char('１'), CharClass::Digit);
/// assert_eq!(classify_char('#'), CharClass::Hash);
/// assert_eq!(classify_char('。'), CharClass::Other);
/// ```
pub fn classify_char(c: char) -> CharClass {
    if c == '#' {
        CharClass::Hash
    } else if is_cjk_cp(c as u32) {
        CharClass::Cjk
    } else if is_digit(c) {
        CharClass::Digit
    } else if is_latin_c(c) {
        CharClass::Letter
    } else {
        CharClass::Other
    }
}

/// Returns whether the code point is a CJK ideograph.
pub fn is_cjk_cp(cp: u32) -> bool {
    (0x3400..=0x4DBF).contains(&cp)
        || (0x4E00..=0x9FFF).contains(&cp)
        || (0xF900..=0xFAFF).contains(&cp)
        || (0x20000..=0x2FFFF).contains(&cp)
}

/// Returns whether the character is a CJK ideograph.
pub fn is_cjk_char(c: char) -> bool {
    is_cjk_cp(c as u32)
}

/// Returns whether every character of the string is a CJK ideograph.
///
/// The empty string qualifies.
pub fn is_cjk(s: &str) -> bool {
    s.chars().all(is_cjk_char)
}

/// Returns whether the string contains at least one CJK ideograph.
pub fn has_cjk(s: &str) -> bool {
    s.chars().any(is_cjk_char)
}

/// Returns whether the character is a cased letter outside the CJK ranges.
pub fn is_latin_c(c: char) -> bool {
    !is_cjk_char(c) && (c.is_letter_lowercase() || c.is_letter_uppercase())
}

/// Returns whether every character of the string is a cased non-CJK letter.
pub fn is_latin(s: &str) -> bool {
    s.chars().all(is_latin_c)
}

/// ASCII digits and full-width digits (０-９).
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || ('\u{FF10}'..='\u{FF19}').contains(&c)
}

/// Number of characters in the Unicode "Letter" categories.
///
/// Ideographs are category Lo, so they count as letters.
pub fn letter_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_letter()).count()
}

/// Drop characters in the Unicode "Other" categories (controls, format,
/// private use, unassigned), keeping `\n` and `\r`.
pub fn remove_unicode_other(s: &str) -> String {
    s.chars()
        .filter(|c| *c == '\n' || *c == '\r' || !c.is_other())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cjk_ranges() {
        assert!(is_cjk_char('一'));
        assert!(is_cjk_char('㐀'));
        assert!(is_cjk_char('\u{20000}'));
        assert!(is_cjk_char('\u{F900}'));
        assert!(!is_cjk_char('。'), "CJK punctuation is not an ideograph");
        assert!(!is_cjk_char('あ'));
        assert!(!is_cjk_char('\u{3000}'));
    }

    #[test]
    fn test_string_predicates() {
        assert!(is_cjk("中國人"));
        assert!(!is_cjk("中國人!"));
        assert!(is_cjk(""));
        assert!(has_cjk("hi 你"));
        assert!(!has_cjk("hello"));
        assert!(is_latin("Straße"));
        assert!(is_latin("ＳＥＲＶＥＲ"));
        assert!(!is_latin("abc1"));
    }

    #[test]
    fn test_classify_char() {
        assert_eq!(classify_char('a'), CharClass::Letter);
        assert_eq!(classify_char('é'), CharClass::Letter);
        assert_eq!(classify_char('0'), CharClass::Digit);
        assert_eq!(classify_char('９'), CharClass::Digit);
        assert_eq!(classify_char(':'), CharClass::Other);
        assert_eq!(classify_char('：'), CharClass::Other);
        assert_eq!(classify_char(' '), CharClass::Other);
        assert_eq!(classify_char('「'), CharClass::Other);
        assert!(CharClass::Digit.is_alphanumeric());
        assert!(!CharClass::Cjk.is_alphanumeric());
        assert!(!CharClass::Hash.is_alphanumeric());
    }

    #[test]
    fn test_letter_count_and_other_removal() {
        assert_eq!(letter_count("hi 你好!"), 4);
        assert_eq!(letter_count("123 !?"), 0);
        assert_eq!(remove_unicode_other("a\u{200B}b\u{0007}c\n\r"), "abc\n\r");
        assert_eq!(remove_unicode_other("\u{E000}私"), "私");
    }
}
