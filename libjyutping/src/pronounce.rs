//! Best-effort Jyutping for a Cantonese string.
use crate::lexicon::{CharLexicon, WordLexicon};
use libcantonese_core::end_user_friendly_segment;

/// Romanize `s`, one reading per segmented word.
///
/// Dictionary words use their first listed reading. Anything else falls
/// back to the most common reading of each character, or an empty string
/// for characters the lexicon does not know.
pub fn get_ping3jam1(s: &str, words: &WordLexicon, chars: &CharLexicon) -> String {
    let segmentation = end_user_friendly_segment(s, words.word_list());
    let mut out: Vec<&str> = Vec::new();
    for word in &segmentation.words {
        match words.first_reading(word) {
            Some(reading) => out.push(reading),
            None => out.extend(word.chars().map(|c| chars.most_common(c).unwrap_or(""))),
        }
    }
    out.join(" ")
}

/// Every listed reading of each character, most common first.
pub fn pronunciations_by_char(chars: &[char], lexicon: &CharLexicon) -> Vec<Vec<String>> {
    chars
        .iter()
        .map(|&c| {
            lexicon
                .readings(c)
                .iter()
                .map(|r| r.jyutping.clone())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicons() -> (WordLexicon, CharLexicon) {
        let words = WordLexicon::from_json_str(r#"{"朝早": ["ziu1 zou2"], "食飯": ["sik6 faan6"]}"#)
            .unwrap();
        let chars = CharLexicon::from_json_str(
            r#"{"我": {"ngo5": 100}, "食": {"sik6": 900, "zi6": 12}, "朝": {"ciu4": 50, "ziu1": 40}}"#,
        )
        .unwrap();
        (words, chars)
    }

    #[test]
    fn test_words_then_characters() {
        let (words, chars) = lexicons();
        assert_eq!(get_ping3jam1("我朝早食飯", &words, &chars), "ngo5 ziu1 zou2 sik6 faan6");
        assert_eq!(get_ping3jam1("朝食", &words, &chars), "ciu4 sik6");
    }

    #[test]
    fn test_unknown_characters_are_empty() {
        let (words, chars) = lexicons();
        assert_eq!(get_ping3jam1("我X", &words, &chars), "ngo5 ");
        assert_eq!(get_ping3jam1("", &words, &chars), "");
    }

    #[test]
    fn test_pronunciations_by_char() {
        let (_, chars) = lexicons();
        assert_eq!(
            pronunciations_by_char(&['食', '?'], &chars),
            vec![vec!["sik6".to_string(), "zi6".to_string()], vec![]]
        );
    }
}
