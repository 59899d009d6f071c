//! libcantonese-core
//!
//! Language-agnostic building blocks shared by the Cantonese (`libjyutping`)
//! and English (`libenglish`) crates.
//!
//! Public API:
//! - `script` - CJK / Latin / digit character classification
//! - `language` - `guess_language` and `looks_like_a_sentence`
//! - `variants` - Hong Kong standard variant normalization (`hk_variant`)
//! - `WordList` - in-memory or fst-backed word dictionary
//! - `Segmenter` - dictionary word segmentation
//! - `RadicalSorter` - radical/stroke ordering from Unihan data
//! - `SortedFile` - binary search in sorted record files
//! - `Config` - scoring weights and costs, loadable from TOML
//! - `Error` - error type for the data loaders
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod script;
pub use script::{classify_char, is_cjk_char, CharClass};

pub mod language;
pub use language::{guess_language, looks_like_a_sentence, LanguageGroup};

pub mod variants;
pub use variants::{hk_variant, VariantMap};

pub mod wordlist;
pub use wordlist::WordList;

pub mod segmentation;
pub use segmentation::{end_user_friendly_segment, Segmentation, SegmentIndices, Segmenter};

pub mod radical;
pub use radical::{RadicalSorter, RadicalTable, UnihanRadicals};

pub mod sorted_file;
pub use sorted_file::{KeyOrder, SortedFile};

/// Scoring weights and costs shared by the segmenter and the ruby matcher.
///
/// Language crates flatten this into their own configuration
/// (`JyutpingConfig` in libjyutping) and add their specific options.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Segmentation cost of a single character missing from the dictionary.
    /// Default: 10.0. Must stay well above the cost of a one-char word (1.0).
    pub unknown_char_cost: f32,

    // Ruby alignment scores
    /// Score for a token that is a listed pronunciation of the character.
    /// Default: 1000
    pub full_match_score: i32,
    /// Score for a token that matches a listed pronunciation up to tone.
    /// Default: 300
    pub half_match_score: i32,
    /// Score for pairing any token with any alignable slot.
    /// Default: 1
    pub epsilon_score: i32,
    /// Bonus for hash groups and non-CJK runs that absorb extra tokens.
    /// Default: 1
    pub link_score: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unknown_char_cost: 10.0,
            full_match_score: 1000,
            half_match_score: 300,
            epsilon_score: 1,
            link_score: 1,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::io("reading config", e))?;
        Self::from_toml_str(&content).map_err(Error::toml)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml_string().map_err(Error::toml)?;
        std::fs::write(path, content).map_err(|e| Error::io("writing config", e))?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

    /// Trim surrounding whitespace and compose to NFC.
    ///
    /// Command-line text goes through this before lookup, so decomposed
    /// input finds the same dictionary entries.
    ///
    /// # Example
    /// ```
    /// use libcantonese_core::utils::normalize;
    ///
    /// assert_eq!(normalize(" cafe\u{301} "), "caf\u{e9}");
    /// ```
    pub fn normalize(s: &str) -> String {
        let s = s.trim();
        match is_nfc_quick(s.chars()) {
            IsNormalized::Yes => s.to_string(),
            _ => s.nfc().collect(),
        }
    }

    /// Convert full-width ASCII variants (Ｆ, ０, ！) and the ideographic
    /// space to their half-width forms.
    ///
    /// # Example
    /// ```
    /// use libcantonese_core::utils::to_halfwidth;
    ///
    /// assert_eq!(to_halfwidth("ＳＥＲＶＥＲ　１０"), "SERVER 10");
    /// ```
    pub fn to_halfwidth(s: &str) -> String {
        s.chars().map(halfwidth_char).collect()
    }

    /// Half-width form of a single character.
    pub fn halfwidth_char(ch: char) -> char {
        match ch {
            '\u{3000}' => ' ',
            '\u{FF01}'..='\u{FF5E}' => char::from_u32(ch as u32 - 0xFF01 + 0x21).unwrap_or(ch),
            _ => ch,
        }
    }
}
