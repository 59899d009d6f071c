// libcantonese/libjyutping/src/ruby/slot.rs
//
// Text and pronunciation tokenization for ruby alignment.
//
// The text is cut into slots in a single left-to-right scan:
//   - `#` opens a hash group that swallows following ideographs, letters and
//     digits; anything else closes it.
//   - every CJK ideograph outside a hash group is its own slot.
//   - a letter or digit opens a buffered run. While the run is open every
//     non-CJK, non-`#` character joins it, so "hi five" and "10:30" stay one
//     unit. On close the run is cut after its last letter or digit and the
//     trailing characters become one-character pass-through slots.
//   - anything else outside a run is a one-character pass-through slot.
//
// Slots borrow from the input and their concatenation is the input.

use libcantonese_core::script::{classify_char, CharClass};
use phf::phf_set;
use std::ops::Range;

/// Kind of a text slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// A single CJK ideograph.
    CjkChar,
    /// A `#`-marked span.
    HashGroup,
    /// A run containing at least one letter.
    LatinRun,
    /// A run of digits (and embedded separators) without letters.
    DigitRun,
    /// Whitespace or punctuation; never receives tokens.
    PassThrough,
}

impl SlotKind {
    pub fn is_alignable(self) -> bool {
        self != SlotKind::PassThrough
    }
}

/// One contiguous unit of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a> {
    pub kind: SlotKind,
    pub text: &'a str,
    /// Byte offsets of `text` in the source string.
    pub start: usize,
    pub end: usize,
}

impl<'a> Slot<'a> {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_alignable(&self) -> bool {
        self.kind.is_alignable()
    }

    /// Character used for lexicon lookups: the character after `#` for a
    /// two-character hash group, the first character otherwise.
    pub fn head_char(&self) -> char {
        let mut chars = self.text.chars();
        let first = chars.next().unwrap_or('#');
        if self.kind == SlotKind::HashGroup {
            if let (Some(second), None) = (chars.next(), chars.next()) {
                return second;
            }
        }
        first
    }
}

/// Cut `text` into slots.
///
/// # Example
/// ```
/// use libjyutping::ruby::{classify, SlotKind};
///
/// let slots = classify("個 server！");
/// let kinds: Vec<SlotKind> = slots.iter().map(|s| s.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![SlotKind::CjkChar, SlotKind::PassThrough, SlotKind::LatinRun, SlotKind::PassThrough]
/// );
/// assert_eq!(slots[2].text, "server");
/// ```
pub fn classify(text: &str) -> Vec<Slot<'_>> {
    let mut out = Vec::new();
    // Start of the open run or hash group.
    let mut buf: Option<usize> = None;
    let mut in_hash = false;

    for (i, c) in text.char_indices() {
        let class = classify_char(c);
        let next = i + c.len_utf8();

        if class == CharClass::Hash {
            flush(text, buf.take(), i, &mut out);
            buf = Some(i);
            in_hash = true;
            continue;
        }
        if in_hash && (class == CharClass::Cjk || class.is_alphanumeric()) {
            continue;
        }
        if in_hash {
            flush(text, buf.take(), i, &mut out);
            in_hash = false;
        }

        match class {
            CharClass::Cjk => {
                flush(text, buf.take(), i, &mut out);
                out.push(slot(text, SlotKind::CjkChar, i, next));
            }
            CharClass::Letter | CharClass::Digit => {
                buf.get_or_insert(i);
            }
            _ => {
                if buf.is_none() {
                    out.push(slot(text, SlotKind::PassThrough, i, next));
                }
            }
        }
    }
    flush(text, buf, text.len(), &mut out);
    out
}

fn slot(text: &str, kind: SlotKind, start: usize, end: usize) -> Slot<'_> {
    Slot {
        kind,
        text: &text[start..end],
        start,
        end,
    }
}

/// Close the buffer `[start, end)`.
fn flush<'a>(text: &'a str, start: Option<usize>, end: usize, out: &mut Vec<Slot<'a>>) {
    let Some(start) = start else {
        return;
    };
    let buf = &text[start..end];
    if buf.starts_with('#') {
        out.push(slot(text, SlotKind::HashGroup, start, end));
        return;
    }

    // A run always opens on a letter or digit, so the cut point exists.
    let cut = buf
        .char_indices()
        .filter(|(_, c)| classify_char(*c).is_alphanumeric())
        .map(|(i, c)| start + i + c.len_utf8())
        .last()
        .unwrap_or(end);

    let run = &text[start..cut];
    let kind = if run.chars().any(|c| classify_char(c) == CharClass::Letter) {
        SlotKind::LatinRun
    } else {
        SlotKind::DigitRun
    };
    out.push(slot(text, kind, start, cut));
    for (i, c) in text[cut..end].char_indices() {
        out.push(slot(text, SlotKind::PassThrough, cut + i, cut + i + c.len_utf8()));
    }
}

/// Full-width and CJK punctuation trimmed from pronunciation tokens.
static TOKEN_PUNCTUATION: phf::Set<char> = phf_set! {
    '、', '。', '，', '；', '．', '：', '？', '！', '…', '‥', '﹐', '﹔', '﹕', '﹖', '﹗',
    '—', '「', '」', '〈', '〉', '︿', '﹀', '《', '》', '【', '】', '『', '』', '（', '）',
};

fn is_token_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || TOKEN_PUNCTUATION.contains(&c)
}

/// Split a pronunciation string into tokens.
///
/// Tokens are whitespace-separated and leading and trailing punctuation is
/// trimmed (`mai5.` → `mai5`). A token made only of punctuation stays in
/// the list as an empty token, so the count always equals the number of
/// whitespace-separated words.
///
/// # Example
/// ```
/// use libjyutping::ruby::tokenize_pronunciation;
///
/// assert_eq!(tokenize_pronunciation(" jat1  mai5. 。"), vec!["jat1", "mai5", ""]);
/// ```
pub fn tokenize_pronunciation(pronunciation: &str) -> Vec<&str> {
    pronunciation
        .split_whitespace()
        .map(|t| t.trim_matches(is_token_punctuation))
        .collect()
}
