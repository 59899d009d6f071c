// libcantonese/core/src/radical.rs
//
// Radical/stroke ordering of CJK strings.
//
// Data comes from two Unicode files:
//   - Unihan_IRGSources.txt: `U+4E00<TAB>kRSUnicode<TAB>1.0` lines. The
//     first `radical.strokes` pair of kRSUnicode is used; radical labels
//     may carry apostrophes (`120'`) for simplified forms.
//   - CJKRadicals.txt: `9; 2F08; 4EBA` lines mapping a radical label to its
//     radical character (possibly empty) and the unified ideograph.
//
// Characters compare as follows:
//   1. neither has a radical: by code point
//   2. a character without a radical sorts first
//   3. same radical: by residual strokes, then code point
//   4. different radicals: by the strokes of each radical character, then
//      by the radical character's code point
// Strings compare character by character, then by length.

use crate::error::{Error, Result};
use ahash::AHashMap;
use std::cmp::Ordering;
use std::io::BufRead;
use std::path::Path;
use tracing::debug;

/// Radical label and residual stroke count of a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadicalStrokes {
    pub radical: String,
    pub strokes: i32,
}

/// Radical/stroke data per character from the Unihan database.
#[derive(Debug, Clone, Default)]
pub struct UnihanRadicals {
    radical_strokes: AHashMap<char, RadicalStrokes>,
    total_strokes: AHashMap<char, u32>,
}

impl UnihanRadicals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `Unihan_IRGSources.txt` lines. Fields other than kRSUnicode and
    /// kTotalStrokes are ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut data = Self::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::io("reading unihan data", e))?;
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut cols = line.split('\t');
            let (Some(cp), Some(field), Some(value)) = (cols.next(), cols.next(), cols.next())
            else {
                return Err(Error::parse(lineno + 1, "expected three tab-separated fields"));
            };
            match field.trim() {
                "kRSUnicode" => {
                    let ch = parse_code_point(cp, lineno + 1)?;
                    if let Some(rs) = parse_radical_strokes(value) {
                        data.radical_strokes.insert(ch, rs);
                    }
                }
                "kTotalStrokes" => {
                    let ch = parse_code_point(cp, lineno + 1)?;
                    let first = value.split_whitespace().next().unwrap_or("");
                    if let Ok(n) = first.parse() {
                        data.total_strokes.insert(ch, n);
                    }
                }
                _ => {}
            }
        }
        Ok(data)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::io("opening unihan data", e))?;
        let data = Self::from_reader(std::io::BufReader::new(file))?;
        debug!(path = %path.display(), chars = data.len(), "loaded unihan radicals");
        Ok(data)
    }

    pub fn insert(&mut self, ch: char, radical: &str, strokes: i32) {
        self.radical_strokes.insert(
            ch,
            RadicalStrokes {
                radical: radical.to_string(),
                strokes,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.radical_strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radical_strokes.is_empty()
    }

    pub fn radical_strokes(&self, ch: char) -> Option<&RadicalStrokes> {
        self.radical_strokes.get(&ch)
    }

    pub fn total_strokes(&self, ch: char) -> Option<u32> {
        self.total_strokes.get(&ch).copied()
    }
}

/// `radical.strokes`, keeping only the first of several space-separated
/// pairs.
fn parse_radical_strokes(value: &str) -> Option<RadicalStrokes> {
    let first = value.split(' ').next()?;
    let (radical, strokes) = first.trim().split_once('.')?;
    Some(RadicalStrokes {
        radical: radical.to_string(),
        strokes: strokes.parse().ok()?,
    })
}

fn parse_code_point(s: &str, line: usize) -> Result<char> {
    let s = s.trim();
    let hex = s.strip_prefix("U+").unwrap_or(s);
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| Error::parse(line, format!("bad code point {:?}", s)))
}

/// Radical label → (radical character, unified ideograph).
#[derive(Debug, Clone, Default)]
pub struct RadicalTable {
    by_label: AHashMap<String, (Option<char>, char)>,
}

impl RadicalTable {
    /// Read `CJKRadicals.txt`.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut by_label = AHashMap::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::io("reading radical table", e))?;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            let mut cols = line.split(';');
            let (Some(label), Some(radical), Some(ideograph)) = (cols.next(), cols.next(), cols.next())
            else {
                return Err(Error::parse(lineno + 1, "expected three ';'-separated fields"));
            };
            let radical = match radical.trim() {
                "" => None,
                hex => Some(parse_code_point(hex, lineno + 1)?),
            };
            let ideograph = parse_code_point(ideograph, lineno + 1)?;
            by_label.insert(label.trim().to_string(), (radical, ideograph));
        }
        Ok(Self { by_label })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            std::fs::File::open(path).map_err(|e| Error::io("opening radical table", e))?;
        let table = Self::from_reader(std::io::BufReader::new(file))?;
        debug!(path = %path.display(), radicals = table.len(), "loaded radical table");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }

    /// The radical character for `label`, if the table lists one.
    pub fn radical_char(&self, label: &str) -> Option<char> {
        self.by_label.get(label).and_then(|(radical, _)| *radical)
    }

    pub fn ideograph(&self, label: &str) -> Option<char> {
        self.by_label.get(label).map(|(_, ideograph)| *ideograph)
    }
}

/// Orders characters and strings by radical, then strokes.
#[derive(Debug, Clone, Default)]
pub struct RadicalSorter {
    unihan: UnihanRadicals,
    radicals: RadicalTable,
}

impl RadicalSorter {
    pub fn new(unihan: UnihanRadicals, radicals: RadicalTable) -> Self {
        Self { unihan, radicals }
    }

    pub fn unihan(&self) -> &UnihanRadicals {
        &self.unihan
    }

    /// Radical character of `label`, `'\0'` when unknown.
    fn radical_char_or_nul(&self, label: &str) -> char {
        self.radicals.radical_char(label).unwrap_or('\0')
    }

    pub fn char_cmp(&self, a: char, b: char) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        let (ra, rb) = match (self.unihan.radical_strokes(a), self.unihan.radical_strokes(b)) {
            (None, None) => return a.cmp(&b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ra), Some(rb)) => (ra, rb),
        };

        if ra.radical == rb.radical {
            return ra.strokes.cmp(&rb.strokes).then(a.cmp(&b));
        }

        let ca = self.radical_char_or_nul(&ra.radical);
        let cb = self.radical_char_or_nul(&rb.radical);
        let strokes_of = |c: char| self.unihan.radical_strokes(c).map(|rs| rs.strokes);
        // Distinct labels that share a radical character fall back to the label.
        strokes_of(ca)
            .cmp(&strokes_of(cb))
            .then(ca.cmp(&cb))
            .then_with(|| ra.radical.cmp(&rb.radical))
    }

    pub fn cmp(&self, a: &str, b: &str) -> Ordering {
        let mut ai = a.chars();
        let mut bi = b.chars();
        loop {
            match (ai.next(), bi.next()) {
                (Some(x), Some(y)) => match self.char_cmp(x, y) {
                    Ordering::Equal => continue,
                    other => return other,
                },
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
            }
        }
    }

    /// Stable sort of `items` by radical order.
    pub fn sort<S: AsRef<str>>(&self, items: &mut [S]) {
        items.sort_by(|a, b| self.cmp(a.as_ref(), b.as_ref()));
    }
}
