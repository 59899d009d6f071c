// libcantonese/core/src/segmentation.rs
//
// Dictionary-driven word segmentation.
//
// The cost of a character span [a, b) is:
//   - 1 / (b - a)                 if the span is a dictionary word
//   - `unknown_cost` (10.0)       if the span is a single unknown character
//   - min over a < i < b of cost(a, i) + cost(i, b)   otherwise
//
// Longer words are cheaper per character, so the segmenter prefers them.
// When two split points tie, the later one wins, which keeps earlier words
// together ("唔知死" + "未" rather than "唔知" + "死未").
//
// The table is filled bottom-up by span length; each cell records how it was
// reached so the segmentation can be reconstructed without recursion.
//
// The table is quadratic in the phrase length, so phrases longer than
// `MAX_PHRASE_CHARS` are segmented piece by piece. Pieces end after a
// whitespace or punctuation character when one is close enough to the limit.

use crate::wordlist::WordList;
use crate::Config;
use tracing::trace;

/// Longest run of characters segmented as a single table.
pub const MAX_PHRASE_CHARS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Word,
    Odd,
    Split(usize),
}

/// Segment boundaries of a string, by character index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentIndices {
    /// Indices of single characters not found in the dictionary.
    pub odd: Vec<usize>,
    /// Start index of every segment, in order.
    pub starts: Vec<usize>,
}

/// User-facing segmentation result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Unknown characters that sit in runs of two or more unknowns.
    pub bad_chars: Vec<char>,
    /// Every unknown single character.
    pub odd_chars: Vec<char>,
    /// The segmented words.
    pub words: Vec<String>,
}

/// Dictionary segmenter.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'a> {
    words: &'a WordList,
    unknown_cost: f32,
}

impl<'a> Segmenter<'a> {
    pub fn new(words: &'a WordList) -> Self {
        Self {
            words,
            unknown_cost: Config::default().unknown_char_cost,
        }
    }

    /// Use the costs from `config`.
    pub fn with_config(words: &'a WordList, config: &Config) -> Self {
        Self {
            words,
            unknown_cost: config.unknown_char_cost,
        }
    }

    /// Segment `phrase`, returning unknown-character and segment-start
    /// indices.
    pub fn segment_indices(&self, phrase: &str) -> SegmentIndices {
        let chars: Vec<char> = phrase.chars().collect();
        let mut out = SegmentIndices::default();
        let mut start = 0;
        while start < chars.len() {
            let end = piece_end(&chars, start);
            self.segment_piece(&chars[start..end], start, &mut out);
            start = end;
        }
        out
    }

    /// Segment one piece, appending indices shifted by `offset`.
    fn segment_piece(&self, chars: &[char], offset: usize, out: &mut SegmentIndices) {
        let n = chars.len();
        let width = n + 1;
        let idx = |a: usize, b: usize| a * width + b;
        let mut cost = vec![f32::INFINITY; width * width];
        let mut step = vec![Step::Odd; width * width];
        let max_word = self.words.max_word_chars();
        let mut span = String::new();

        for len in 1..=n {
            for a in 0..=(n - len) {
                let b = a + len;

                let is_word = len <= max_word && {
                    span.clear();
                    span.extend(&chars[a..b]);
                    self.words.contains(&span)
                };

                if is_word {
                    cost[idx(a, b)] = 1.0 / len as f32;
                    step[idx(a, b)] = Step::Word;
                } else if len == 1 {
                    cost[idx(a, b)] = self.unknown_cost;
                    step[idx(a, b)] = Step::Odd;
                } else {
                    let mut best = f32::INFINITY;
                    let mut best_split = a + 1;
                    for i in (a + 1)..b {
                        let v = cost[idx(a, i)] + cost[idx(i, b)];
                        // `<=` moves ties to the later split point.
                        if v <= best {
                            best = v;
                            best_split = i;
                        }
                    }
                    cost[idx(a, b)] = best;
                    step[idx(a, b)] = Step::Split(best_split);
                }
            }
        }

        let segments_before = out.starts.len();
        let mut stack = vec![(0usize, n)];
        while let Some((a, b)) = stack.pop() {
            match step[idx(a, b)] {
                Step::Word => out.starts.push(offset + a),
                Step::Odd => {
                    out.odd.push(offset + a);
                    out.starts.push(offset + a);
                }
                Step::Split(mid) => {
                    stack.push((mid, b));
                    stack.push((a, mid));
                }
            }
        }

        trace!(
            offset,
            chars = n,
            segments = out.starts.len() - segments_before,
            cost = cost[idx(0, n)],
            "segmented piece"
        );
    }

    /// Segment `s` into words and report unknown characters.
    pub fn segment(&self, s: &str) -> Segmentation {
        let indices = self.segment_indices(s);
        let chars: Vec<char> = s.chars().collect();

        let bad_chars = consecutive_runs(&indices.odd)
            .into_iter()
            .map(|i| chars[i])
            .collect();
        let odd_chars = indices.odd.iter().map(|&i| chars[i]).collect();

        let mut words = Vec::with_capacity(indices.starts.len());
        for w in indices.starts.windows(2) {
            words.push(chars[w[0]..w[1]].iter().collect());
        }
        if let Some(&last) = indices.starts.last() {
            words.push(chars[last..].iter().collect());
        }

        Segmentation {
            bad_chars,
            odd_chars,
            words,
        }
    }
}

/// End of the piece starting at `start`.
fn piece_end(chars: &[char], start: usize) -> usize {
    let limit = start + MAX_PHRASE_CHARS;
    if chars.len() <= limit {
        return chars.len();
    }
    let floor = start + MAX_PHRASE_CHARS / 2;
    (floor + 1..=limit)
        .rev()
        .find(|&end| !chars[end - 1].is_alphanumeric())
        .unwrap_or(limit)
}

/// Keep only the indices that belong to a run of consecutive indices.
fn consecutive_runs(sorted: &[usize]) -> Vec<usize> {
    let mut ret: Vec<usize> = Vec::new();
    for w in sorted.windows(2) {
        if w[0] + 1 == w[1] {
            if ret.last() != Some(&w[0]) {
                ret.push(w[0]);
            }
            ret.push(w[1]);
        }
    }
    ret
}

/// Segment `s` with `words` and the default costs.
///
/// # Example
/// ```
/// use libcantonese_core::{end_user_friendly_segment, WordList};
///
/// let words = WordList::from_words(["中國", "國人", "人"]);
/// let seg = end_user_friendly_segment("中國人", &words);
/// assert_eq!(seg.words, vec!["中國", "人"]);
/// ```
pub fn end_user_friendly_segment(s: &str, words: &WordList) -> Segmentation {
    Segmenter::new(words).segment(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consecutive_runs() {
        assert_eq!(consecutive_runs(&[]), Vec::<usize>::new());
        assert_eq!(consecutive_runs(&[3]), Vec::<usize>::new());
        assert_eq!(consecutive_runs(&[0, 1, 2, 5, 7, 8]), vec![0, 1, 2, 7, 8]);
        assert_eq!(consecutive_runs(&[1, 3, 5]), Vec::<usize>::new());
    }

    #[test]
    fn test_empty_input() {
        let words = WordList::from_words(["一"]);
        assert_eq!(Segmenter::new(&words).segment_indices(""), SegmentIndices::default());
        assert_eq!(end_user_friendly_segment("", &words), Segmentation::default());
    }

    #[test]
    fn test_indices_for_unknown_run() {
        let words = WordList::new();
        let idx = Segmenter::new(&words).segment_indices("好好好");
        assert_eq!(idx.odd, vec![0, 1, 2]);
        assert_eq!(idx.starts, vec![0, 1, 2]);
    }

    #[test]
    fn test_long_phrase_is_cut_after_punctuation() {
        let words = WordList::from_words(["中國", "國人", "人", "中"]);
        let text = "中國人。".repeat(300);
        let seg = end_user_friendly_segment(&text, &words);
        assert_eq!(seg.words.len(), 900);
        for w in seg.words.chunks(3) {
            assert_eq!(w, ["中國", "人", "。"]);
        }
        assert_eq!(seg.odd_chars, vec!['。'; 300]);
        assert!(seg.bad_chars.is_empty());
    }

    #[test]
    fn test_long_unknown_run() {
        let words = WordList::new();
        let text = "x".repeat(MAX_PHRASE_CHARS * 3 + 7);
        let idx = Segmenter::new(&words).segment_indices(&text);
        let all: Vec<usize> = (0..text.len()).collect();
        assert_eq!(idx.starts, all);
        assert_eq!(idx.odd, all);
    }

    #[test]
    fn test_piece_end() {
        let chars: Vec<char> = "ab".chars().collect();
        assert_eq!(piece_end(&chars, 0), 2);
        let mut chars = vec!['字'; MAX_PHRASE_CHARS * 2];
        assert_eq!(piece_end(&chars, 0), MAX_PHRASE_CHARS);
        chars[200] = ' ';
        assert_eq!(piece_end(&chars, 0), 201);
        chars[10] = '，';
        assert_eq!(piece_end(&chars, 0), 201, "too far from the limit");
    }

    #[test]
    fn test_later_split_wins_ties() {
        // 中國|人 and 中|國人 both cost 1.5.
        let words = WordList::from_words(["中國", "國人", "人", "中"]);
        let seg = end_user_friendly_segment("中國人", &words);
        assert_eq!(seg.words, vec!["中國", "人"]);
    }

    #[test]
    fn test_unknown_cost_from_config() {
        let words = WordList::from_words(["ab"]);
        let seg = Segmenter::new(&words).segment("abc");
        assert_eq!(seg.words, vec!["ab", "c"]);
        assert_eq!(seg.odd_chars, vec!['c']);

        let mut config = Config::default();
        config.unknown_char_cost = 0.1;
        // Two cheap unknowns now beat one dictionary word.
        let seg = Segmenter::with_config(&words, &config).segment("abc");
        assert_eq!(seg.words, vec!["a", "b", "c"]);
        assert_eq!(seg.bad_chars, vec!['a', 'b', 'c']);
    }
}
