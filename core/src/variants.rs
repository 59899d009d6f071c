// libcantonese/core/src/variants.rs
//
// Character variant normalization towards the Hong Kong standard forms.
//
// Only "safe" variants are mapped: pairs where the two characters are
// interchangeable in every context. Lossy pairs (著/着, 才/纔 in OpenCC's
// direction, 既/嘅) stay untouched, and simplified characters are never
// converted.
//
// A `VariantMap` can also be loaded from a two-column TSV file
// (`variant<TAB>canonical`) to extend or replace the built-in table.

use crate::error::{Error, Result};
use ahash::AHashMap;
use phf::phf_map;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// Built-in variant → Hong Kong standard character table.
static HK_STANDARD: phf::Map<char, char> = phf_map! {
    '溫' => '温',
    '麵' => '麪',
    '衆' => '眾',
    '糉' => '粽',
    '纔' => '才',
    '爲' => '為',
    '僞' => '偽',
    '眞' => '真',
    '羣' => '群',
    '峯' => '峰',
    '衞' => '衛',
    '啓' => '啟',
    '敎' => '教',
    '說' => '説',
    '悅' => '悦',
    '稅' => '税',
    '脫' => '脱',
    '閱' => '閲',
    '銳' => '鋭',
    '鷄' => '雞',
    '綫' => '線',
    '奬' => '獎',
    '鉤' => '鈎',
};

/// Map of variant characters to their canonical forms.
#[derive(Debug, Clone, Default)]
pub struct VariantMap {
    map: AHashMap<char, char>,
}

impl VariantMap {
    /// An empty map (every character maps to itself).
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Hong Kong standard table.
    pub fn hong_kong() -> Self {
        let mut m = Self::new();
        for (variant, canonical) in HK_STANDARD.entries() {
            m.insert(*variant, *canonical);
        }
        m
    }

    pub fn insert(&mut self, variant: char, canonical: char) {
        self.map.insert(variant, canonical);
    }

    /// Add the mappings of `other`, overriding existing ones.
    pub fn extend(&mut self, other: VariantMap) {
        self.map.extend(other.map);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Canonical form of `c`, or `c` itself when it has no mapping.
    pub fn canonical(&self, c: char) -> char {
        self.map.get(&c).copied().unwrap_or(c)
    }

    /// NFC-normalize `s`, then map every character to its canonical form.
    pub fn normalize(&self, s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().map(|c| self.canonical(c)).collect()
    }

    /// Read additional mappings from a TSV reader.
    ///
    /// Blank lines and lines starting with `#` are skipped. Each remaining
    /// line must hold exactly one character in each of its first two
    /// columns.
    pub fn extend_from_tsv<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut added = 0usize;
        for (lineno, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::io("reading variant table", e))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut cols = line.split('\t');
            let variant = single_char(cols.next(), lineno + 1)?;
            let canonical = single_char(cols.next(), lineno + 1)?;
            self.insert(variant, canonical);
            added += 1;
        }
        Ok(added)
    }

    /// Load a TSV variant table from disk on top of an empty map.
    pub fn load_tsv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            std::fs::File::open(path).map_err(|e| Error::io("opening variant table", e))?;
        let mut m = Self::new();
        let added = m.extend_from_tsv(std::io::BufReader::new(file))?;
        debug!(path = %path.display(), entries = added, "loaded variant table");
        Ok(m)
    }
}

fn single_char(col: Option<&str>, line: usize) -> Result<char> {
    let col = col.map(str::trim).unwrap_or("");
    let mut chars = col.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::parse(line, format!("expected a single character, got {:?}", col))),
    }
}

/// Normalize `s` to Hong Kong standard character forms.
///
/// # Example
/// ```
/// use libcantonese_core::variants::hk_variant;
///
/// assert_eq!(hk_variant("幫你淥個麵"), "幫你淥個麪");
/// assert_eq!(hk_variant("著作"), "著作");
/// ```
pub fn hk_variant(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc()
        .map(|c| HK_STANDARD.get(&c).copied().unwrap_or(c))
        .collect()
}
