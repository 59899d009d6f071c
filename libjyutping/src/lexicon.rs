//! Character and word pronunciation lexicons.
//!
//! `CharLexicon` maps each character to its Jyutping readings with usage
//! counts (the `{"字": {"zi6": 123}}` charlist format). `WordLexicon` maps
//! words to their readings (`{"朝早": ["ziu1 zou2"]}`) and carries the word
//! list used for segmentation.
//!
//! The ruby matcher only needs the `PronunciationLexicon` trait: whether a
//! token is a listed reading of a character, with or without its tone.
//!
//! A seed charlist of common characters ships with the crate
//! (`CharLexicon::builtin`); the default ruby matcher consults it.
use crate::jyutping::strip_tone;
use ahash::{AHashMap, AHashSet};
use libcantonese_core::{Error, Result, WordList};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

static BUILTIN_CHARLIST: &str = include_str!("../data/charlist.json");

static BUILTIN: Lazy<CharLexicon> = Lazy::new(|| {
    CharLexicon::from_json_str(BUILTIN_CHARLIST).unwrap_or_else(|e| {
        warn!(error = %e, "built-in charlist is unreadable, using an empty lexicon");
        CharLexicon::new()
    })
});

/// Pronunciation evidence consulted by the ruby matcher.
pub trait PronunciationLexicon {
    /// True if `jyutping` is a listed reading of `ch`.
    fn has_pronunciation(&self, ch: char, jyutping: &str) -> bool;

    /// True if `toneless` equals a listed reading of `ch` with its tone
    /// removed.
    fn has_toneless_pronunciation(&self, ch: char, toneless: &str) -> bool;
}

impl<T: PronunciationLexicon + ?Sized> PronunciationLexicon for &T {
    fn has_pronunciation(&self, ch: char, jyutping: &str) -> bool {
        (**self).has_pronunciation(ch, jyutping)
    }

    fn has_toneless_pronunciation(&self, ch: char, toneless: &str) -> bool {
        (**self).has_toneless_pronunciation(ch, toneless)
    }
}

impl<T: PronunciationLexicon + ?Sized> PronunciationLexicon for Arc<T> {
    fn has_pronunciation(&self, ch: char, jyutping: &str) -> bool {
        (**self).has_pronunciation(ch, jyutping)
    }

    fn has_toneless_pronunciation(&self, ch: char, toneless: &str) -> bool {
        (**self).has_toneless_pronunciation(ch, toneless)
    }
}

/// A lexicon with no entries. Alignment falls back to position alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyLexicon;

impl PronunciationLexicon for EmptyLexicon {
    fn has_pronunciation(&self, _ch: char, _jyutping: &str) -> bool {
        false
    }

    fn has_toneless_pronunciation(&self, _ch: char, _toneless: &str) -> bool {
        false
    }
}

/// One reading of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub jyutping: String,
    pub count: u64,
}

/// Serialized charlist: character → reading → count.
pub type CharList = BTreeMap<char, BTreeMap<String, u64>>;

/// Character → Jyutping readings, most common first.
#[derive(Debug, Clone, Default)]
pub struct CharLexicon {
    readings: AHashMap<char, Vec<Reading>>,
    toneless: AHashMap<char, AHashSet<String>>,
}

impl CharLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// The seed charlist compiled into the crate.
    pub fn builtin() -> &'static CharLexicon {
        &BUILTIN
    }

    /// Add `count` uses of `jyutping` for `ch`.
    pub fn insert(&mut self, ch: char, jyutping: &str, count: u64) {
        self.add(ch, jyutping, count);
        if let Some(readings) = self.readings.get_mut(&ch) {
            sort_readings(readings);
        }
    }

    /// Merge every reading of `list`, adding counts for readings already
    /// present.
    pub fn extend_from_charlist(&mut self, list: &CharList) {
        for (ch, readings) in list {
            for (jyutping, count) in readings {
                self.add(*ch, jyutping, *count);
            }
            if let Some(rs) = self.readings.get_mut(ch) {
                sort_readings(rs);
            }
        }
    }

    // Leaves the reading list of `ch` unsorted.
    fn add(&mut self, ch: char, jyutping: &str, count: u64) {
        let readings = self.readings.entry(ch).or_default();
        match readings.iter_mut().find(|r| r.jyutping == jyutping) {
            Some(r) => r.count += count,
            None => readings.push(Reading {
                jyutping: jyutping.to_string(),
                count,
            }),
        }
        self.toneless
            .entry(ch)
            .or_default()
            .insert(strip_tone(jyutping).to_string());
    }

    pub fn from_charlist(list: &CharList) -> Self {
        let mut lex = Self::new();
        lex.extend_from_charlist(list);
        lex
    }

    pub fn to_charlist(&self) -> CharList {
        self.readings
            .iter()
            .map(|(ch, rs)| {
                let m = rs.iter().map(|r| (r.jyutping.clone(), r.count)).collect();
                (*ch, m)
            })
            .collect()
    }

    /// Number of characters with at least one reading.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Readings of `ch`, most common first.
    pub fn readings(&self, ch: char) -> &[Reading] {
        self.readings.get(&ch).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The most common reading of `ch`.
    pub fn most_common(&self, ch: char) -> Option<&str> {
        self.readings(ch).first().map(|r| r.jyutping.as_str())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let list: CharList =
            serde_json::from_str(json).map_err(|e| Error::json("parsing charlist", e))?;
        Ok(Self::from_charlist(&list))
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json =
            std::fs::read_to_string(path).map_err(|e| Error::io("reading charlist", e))?;
        let lex = Self::from_json_str(&json)?;
        debug!(path = %path.display(), chars = lex.len(), "loaded JSON charlist");
        Ok(lex)
    }

    pub fn to_bincode(&self) -> Result<Vec<u8>> {
        bincode::serialize(&self.to_charlist()).map_err(|e| Error::bincode("encoding charlist", e))
    }

    pub fn from_bincode(bytes: &[u8]) -> Result<Self> {
        let list: CharList =
            bincode::deserialize(bytes).map_err(|e| Error::bincode("decoding charlist", e))?;
        Ok(Self::from_charlist(&list))
    }

    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bincode()?;
        std::fs::write(path, bytes).map_err(|e| Error::io("writing charlist", e))
    }

    pub fn load_bincode<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| Error::io("reading charlist", e))?;
        let lex = Self::from_bincode(&bytes)?;
        debug!(path = %path.display(), chars = lex.len(), "loaded bincode charlist");
        Ok(lex)
    }

    /// Load a charlist, choosing the format by extension (`.json` or
    /// bincode otherwise).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            Self::load_json(path)
        } else {
            Self::load_bincode(path)
        }
    }
}

/// Most common first; ties in alphabetical order.
fn sort_readings(readings: &mut [Reading]) {
    readings.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.jyutping.cmp(&b.jyutping)));
}

impl PronunciationLexicon for CharLexicon {
    fn has_pronunciation(&self, ch: char, jyutping: &str) -> bool {
        self.readings(ch).iter().any(|r| r.jyutping == jyutping)
    }

    fn has_toneless_pronunciation(&self, ch: char, toneless: &str) -> bool {
        self.toneless
            .get(&ch)
            .is_some_and(|set| set.contains(toneless))
    }
}

/// Word → Jyutping readings, plus the word list used for segmentation.
#[derive(Debug, Clone, Default)]
pub struct WordLexicon {
    readings: AHashMap<String, Vec<String>>,
    words: WordList,
}

impl WordLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: &str, jyutping: &str) {
        self.words.insert(word);
        self.readings
            .entry(word.to_string())
            .or_default()
            .push(jyutping.to_string());
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Readings of `word` in listed order.
    pub fn readings(&self, word: &str) -> &[String] {
        self.readings.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first listed reading of `word`.
    pub fn first_reading(&self, word: &str) -> Option<&str> {
        self.readings(word).first().map(String::as_str)
    }

    /// Dictionary for the segmenter.
    pub fn word_list(&self) -> &WordList {
        &self.words
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let map: BTreeMap<String, Vec<String>> =
            serde_json::from_str(json).map_err(|e| Error::json("parsing word list", e))?;
        let mut lex = Self::new();
        for (word, readings) in &map {
            for r in readings {
                lex.insert(word, r);
            }
        }
        Ok(lex)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json =
            std::fs::read_to_string(path).map_err(|e| Error::io("reading word list", e))?;
        let lex = Self::from_json_str(&json)?;
        debug!(path = %path.display(), words = lex.len(), "loaded JSON word list");
        Ok(lex)
    }
}
