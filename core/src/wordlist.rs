/// Word dictionary used by the segmenter.
///
/// Two backends are supported: an in-memory hash set for small or dynamic
/// dictionaries, and an `fst::Set` for compiled dictionaries produced by the
/// `build_wordlist` tool.
use crate::error::{Error, Result};
use ahash::AHashSet;
use fst::{IntoStreamer, Set, SetBuilder, Streamer};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
enum Backend {
    Memory(AHashSet<String>),
    Fst(Set<Vec<u8>>),
}

/// A set of dictionary words.
///
/// # Example
/// ```
/// use libcantonese_core::WordList;
///
/// let words = WordList::from_words(["中國", "人"]);
/// assert!(words.contains("中國"));
/// assert!(!words.contains("中"));
/// assert_eq!(words.max_word_chars(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct WordList {
    backend: Backend,
    // Longest word length in chars; spans longer than this are never looked up.
    max_chars: usize,
}

impl Default for WordList {
    fn default() -> Self {
        Self::new()
    }
}

impl WordList {
    pub fn new() -> Self {
        Self {
            backend: Backend::Memory(AHashSet::new()),
            max_chars: 0,
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut wl = Self::new();
        for w in words {
            wl.insert(w);
        }
        wl
    }

    /// Insert a word. A compiled (fst) word list is first copied into memory.
    pub fn insert<S: Into<String>>(&mut self, word: S) {
        let word = word.into();
        if word.is_empty() {
            return;
        }
        if let Backend::Fst(set) = &self.backend {
            let mut mem = AHashSet::with_capacity(set.len() + 1);
            let mut stream = set.stream();
            while let Some(key) = stream.next() {
                if let Ok(s) = std::str::from_utf8(key) {
                    mem.insert(s.to_string());
                }
            }
            self.backend = Backend::Memory(mem);
        }
        self.max_chars = self.max_chars.max(word.chars().count());
        if let Backend::Memory(set) = &mut self.backend {
            set.insert(word);
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        match &self.backend {
            Backend::Memory(set) => set.contains(word),
            Backend::Fst(set) => set.contains(word),
        }
    }

    pub fn len(&self) -> usize {
        match &self.backend {
            Backend::Memory(set) => set.len(),
            Backend::Fst(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length in characters of the longest word.
    pub fn max_word_chars(&self) -> usize {
        self.max_chars
    }

    /// All words in sorted order.
    pub fn sorted_words(&self) -> Vec<String> {
        match &self.backend {
            Backend::Memory(set) => {
                let mut v: Vec<String> = set.iter().cloned().collect();
                v.sort();
                v
            }
            Backend::Fst(set) => {
                let mut v = Vec::with_capacity(set.len());
                let mut stream = set.into_stream();
                while let Some(key) = stream.next() {
                    if let Ok(s) = std::str::from_utf8(key) {
                        v.push(s.to_string());
                    }
                }
                v
            }
        }
    }

    /// Read one word per line. Only the first whitespace-separated column is
    /// used, so frequency or pronunciation columns are ignored.
    pub fn from_text_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut wl = Self::new();
        for line in reader.lines() {
            let line = line.map_err(|e| Error::io("reading word list", e))?;
            if let Some(word) = line.split_whitespace().next() {
                if !word.starts_with('#') {
                    wl.insert(word);
                }
            }
        }
        Ok(wl)
    }

    pub fn load_text<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::io("opening word list", e))?;
        let wl = Self::from_text_reader(std::io::BufReader::new(file))?;
        debug!(path = %path.display(), words = wl.len(), "loaded text word list");
        Ok(wl)
    }

    /// Build an fst set from raw bytes.
    pub fn from_fst_bytes(bytes: Vec<u8>) -> Result<Self> {
        let set = Set::new(bytes).map_err(|e| Error::fst("decoding word list", e))?;
        let mut max_chars = 0usize;
        let mut stream = set.stream();
        while let Some(key) = stream.next() {
            if let Ok(s) = std::str::from_utf8(key) {
                max_chars = max_chars.max(s.chars().count());
            }
        }
        Ok(Self {
            backend: Backend::Fst(set),
            max_chars,
        })
    }

    pub fn load_fst<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| Error::io("reading word list fst", e))?;
        let wl = Self::from_fst_bytes(bytes)?;
        debug!(path = %path.display(), words = wl.len(), "loaded fst word list");
        Ok(wl)
    }

    /// Compile the word list into fst bytes.
    pub fn to_fst_bytes(&self) -> Result<Vec<u8>> {
        let mut builder = SetBuilder::memory();
        for w in self.sorted_words() {
            builder
                .insert(&w)
                .map_err(|e| Error::fst("building word list", e))?;
        }
        builder
            .into_inner()
            .map_err(|e| Error::fst("finishing word list", e))
    }

    pub fn save_fst<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_fst_bytes()?;
        let mut f =
            std::fs::File::create(path).map_err(|e| Error::io("creating word list fst", e))?;
        f.write_all(&bytes)
            .map_err(|e| Error::io("writing word list fst", e))?;
        Ok(())
    }
}
