// libcantonese/libjyutping/src/jyutping.rs
//
// Jyutping syllable validation and canonicalization.
//
// A syllable is an optional initial, a final (or a syllabic nasal m / ng)
// and a tone digit 1-6. Canonical form is lowercase syllables separated by
// single spaces. Dictionary editors may mark a reading that has no Jyutping
// spelling with a `!` exception marker (`!T` for an English letter, say);
// those pass through only when the caller allows them.

use once_cell::sync::Lazy;
use regex::Regex;

/// Regular expression matching exactly one toned Jyutping syllable.
pub const JYUTPING_VALIDATOR: &str = concat!(
    r"^(?:",
    r"(?:b|p|m|f|d|t|n|l|g|k|ng|h|gw|kw|w|z|c|s|j)?",
    r"(?:aa|aai|aau|aam|aan|aang|aap|aat|aak",
    r"|a|ai|au|am|an|ang|ap|at|ak",
    r"|e|ei|eu|em|eng|ep|ek",
    r"|i|iu|im|in|ing|ip|it|ik",
    r"|o|oi|ou|on|ong|ot|ok",
    r"|u|ui|un|ung|ut|uk",
    r"|oe|oeng|oek|eo|eoi|eon|eot",
    r"|yu|yun|yut)",
    r"|m|ng",
    r")[1-6]$"
);

static VALIDATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(JYUTPING_VALIDATOR).unwrap_or_else(|e| panic!("invalid Jyutping pattern: {e}"))
});

/// Returns whether `syllable` is a single valid toned Jyutping syllable.
///
/// # Example
/// ```
/// use libjyutping::jyutping::is_jyutping_valid;
///
/// assert!(is_jyutping_valid("seot1"));
/// assert!(is_jyutping_valid("ng5"));
/// assert!(!is_jyutping_valid("gaa"));
/// assert!(!is_jyutping_valid("foo1"));
/// ```
pub fn is_jyutping_valid(syllable: &str) -> bool {
    VALIDATOR.is_match(syllable)
}

/// Strip the trailing tone digits from a syllable (`sik6` → `sik`).
pub fn strip_tone(syllable: &str) -> &str {
    syllable.trim_end_matches(|c: char| ('1'..='6').contains(&c))
}

/// Canonicalize a Jyutping string.
///
/// Whitespace runs collapse to single spaces and glued syllables are split
/// after their tone digit (`gaa1ze1` → `gaa1 ze1`). With `allow_exceptions`,
/// words of the form `!Xyz` (a `!` followed by a letter) are kept verbatim.
/// Returns `None` if any syllable is invalid.
///
/// # Example
/// ```
/// use libjyutping::jyutping::canonicalize_jyutping;
///
/// assert_eq!(canonicalize_jyutping(" gaa1ze1 ", false).as_deref(), Some("gaa1 ze1"));
/// assert_eq!(canonicalize_jyutping("!T seot1", true).as_deref(), Some("!T seot1"));
/// assert_eq!(canonicalize_jyutping("gaa ze1", false), None);
/// ```
pub fn canonicalize_jyutping(s: &str, allow_exceptions: bool) -> Option<String> {
    let mut out: Vec<&str> = Vec::new();
    for word in s.split_whitespace() {
        if let Some(rest) = word.strip_prefix('!') {
            let starts_with_letter = rest.chars().next().is_some_and(char::is_alphabetic);
            if !(allow_exceptions && starts_with_letter) {
                return None;
            }
            out.push(word);
            continue;
        }

        let mut start = 0;
        for (i, c) in word.char_indices() {
            if ('1'..='6').contains(&c) {
                let syllable = &word[start..=i];
                if !is_jyutping_valid(syllable) {
                    return None;
                }
                out.push(syllable);
                start = i + 1;
            }
        }
        if start != word.len() {
            return None;
        }
    }
    Some(out.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_accepts_common_syllables() {
        for s in [
            "gaa1", "ze1", "seot1", "sik6", "m4", "ng5", "gwong2", "kwaang1", "jyut6", "zoeng1",
            "deoi3", "aa3", "oi3", "hai6", "jat1",
        ] {
            assert!(is_jyutping_valid(s), "{s} should be valid");
        }
    }

    #[test]
    fn test_validator_rejects_malformed_syllables() {
        for s in ["", "1", "gaa", "gaa7", "foo1", "bar1", "Gaa1", "gaa1ze1", "ze 1"] {
            assert!(!is_jyutping_valid(s), "{s:?} should be invalid");
        }
    }

    #[test]
    fn test_strip_tone() {
        assert_eq!(strip_tone("sik6"), "sik");
        assert_eq!(strip_tone("m4"), "m");
        assert_eq!(strip_tone("sik"), "sik");
        assert_eq!(strip_tone("soe1faa2"), "soe1faa");
    }

    #[test]
    fn test_canonicalize_whitespace_and_glued_syllables() {
        for s in ["gaa1ze1", "gaa1 ze1", "gaa1  ze1", " gaa1  ze1", " gaa1  ze1 "] {
            assert_eq!(canonicalize_jyutping(s, false).as_deref(), Some("gaa1 ze1"), "{s:?}");
        }
        assert_eq!(canonicalize_jyutping("", false).as_deref(), Some(""));
    }

    #[test]
    fn test_canonicalize_exceptions() {
        let cases = [
            ("!T seot1", "!T seot1"),
            (" !T seot1", "!T seot1"),
            ("  !T   seot1  ", "!T seot1"),
            ("!T", "!T"),
            ("!foobar", "!foobar"),
            (" seot1  !T ", "seot1 !T"),
            (" seot1  !foobar  ", "seot1 !foobar"),
            ("seot1  !foobar", "seot1 !foobar"),
            (" !foobar seot1  !foobar", "!foobar seot1 !foobar"),
        ];
        for (input, expected) in cases {
            assert_eq!(canonicalize_jyutping(input, true).as_deref(), Some(expected), "{input:?}");
        }
        assert_eq!(canonicalize_jyutping("!T seot1", false), None, "exceptions need opt-in");
    }

    #[test]
    fn test_canonicalize_rejects_invalid() {
        for s in ["gaa ze1", "gaa1 ze", "foo1 bar1", "1 ga1 ze1"] {
            assert_eq!(canonicalize_jyutping(s, false), None, "{s:?}");
        }
        assert_eq!(canonicalize_jyutping("!1ga1 ze", true), None);
        assert_eq!(canonicalize_jyutping("!", true), None);
    }
}
