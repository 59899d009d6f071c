//! Ruby alignment: attach a romanized pronunciation to mixed-script text.
//!
//! The text is cut into slots (`classify`), the pronunciation into tokens
//! (`tokenize_pronunciation`), an `AllocationPolicy` decides which tokens
//! belong to which slot and the result renders as plain text, zipped pairs
//! or HTML `<ruby>` markup.
//!
//! The free functions `align` and `align_plain` use the scored policy with
//! the built-in charlist (`CharLexicon::builtin`).
//!
//! ```
//! use libjyutping::ruby::align_plain;
//!
//! let out = align_plain("九唔搭八。", "jat1 ji6 saam1 sei3").unwrap();
//! assert_eq!(out, "九jat1 唔ji6 搭saam1 八sei3 。");
//! ```

pub mod policy;
pub mod render;
pub mod slot;

pub use policy::{AllocationPolicy, Assignment, EdgePolicy, PolicyKind, ScoredPolicy, Scores};
pub use slot::{classify, tokenize_pronunciation, Slot, SlotKind};

use crate::error::RubyError;
use crate::lexicon::{CharLexicon, EmptyLexicon, PronunciationLexicon};
use once_cell::sync::Lazy;
use tracing::debug;

/// Largest number of slots or tokens accepted by the default matcher.
pub const MAX_ALIGN_LENGTH: usize = 300;

/// Matcher behind `align` and `align_plain`.
pub type BuiltinMatcher = RubyMatcher<ScoredPolicy<&'static CharLexicon>>;

static DEFAULT_MATCHER: Lazy<BuiltinMatcher> =
    Lazy::new(|| RubyMatcher::with_lexicon(CharLexicon::builtin()));

/// A slot together with the tokens it received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated<'a> {
    pub slot: Slot<'a>,
    pub tokens: Vec<&'a str>,
}

/// Owned summary of an alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Plain-text rendering.
    pub annotated: String,
    /// Tokens no slot received.
    pub unmatched_tokens: usize,
    /// Alignable slots that received no token.
    pub unmatched_slots: usize,
}

/// Aligns pronunciations to text with a configurable policy.
#[derive(Debug, Clone)]
pub struct RubyMatcher<P = ScoredPolicy<EmptyLexicon>> {
    policy: P,
    max_len: usize,
}

impl Default for RubyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl RubyMatcher {
    /// Scored policy without pronunciation evidence.
    pub fn new() -> Self {
        Self {
            policy: ScoredPolicy::new(),
            max_len: MAX_ALIGN_LENGTH,
        }
    }

    /// Scored policy consulting `lexicon`.
    pub fn with_lexicon<L: PronunciationLexicon>(lexicon: L) -> RubyMatcher<ScoredPolicy<L>> {
        RubyMatcher {
            policy: ScoredPolicy::with_lexicon(lexicon),
            max_len: MAX_ALIGN_LENGTH,
        }
    }
}

impl<P: AllocationPolicy> RubyMatcher<P> {
    pub fn with_policy<Q: AllocationPolicy>(self, policy: Q) -> RubyMatcher<Q> {
        RubyMatcher {
            policy,
            max_len: self.max_len,
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Align `pronunciation` to `text`.
    pub fn run<'a>(&self, text: &'a str, pronunciation: &'a str) -> Result<RubyMatch<'a>, RubyError> {
        let slots = classify(text);
        let tokens = tokenize_pronunciation(pronunciation);

        if slots.is_empty() && tokens.iter().any(|t| !t.is_empty()) {
            return Err(RubyError::invalid_argument(
                "pronunciation given for empty text",
            ));
        }
        if slots.len() > self.max_len || tokens.len() > self.max_len {
            return Err(RubyError::LengthExceeded {
                slots: slots.len(),
                tokens: tokens.len(),
                limit: self.max_len,
            });
        }

        let Assignment { per_slot, unmatched } = self.policy.allocate(&slots, &tokens);
        let annotated: Vec<Annotated<'a>> = slots
            .into_iter()
            .zip(per_slot)
            .map(|(slot, idx)| Annotated {
                slot,
                tokens: idx.into_iter().map(|i| tokens[i]).collect(),
            })
            .collect();

        let m = RubyMatch {
            annotated,
            tokens,
            unmatched,
        };
        debug!(
            policy = self.policy.name(),
            slots = m.annotated.len(),
            tokens = m.tokens.len(),
            unmatched_tokens = m.unmatched_tokens(),
            unmatched_slots = m.unmatched_slots(),
            "ruby alignment"
        );
        Ok(m)
    }

    /// Align and keep only the owned summary.
    pub fn align(&self, text: &str, pronunciation: &str) -> Result<Alignment, RubyError> {
        self.run(text, pronunciation).map(|m| m.into_alignment())
    }
}

/// Result of one alignment, borrowing from its inputs.
#[derive(Debug, Clone)]
pub struct RubyMatch<'a> {
    annotated: Vec<Annotated<'a>>,
    tokens: Vec<&'a str>,
    unmatched: Vec<usize>,
}

impl<'a> RubyMatch<'a> {
    pub fn annotated(&self) -> &[Annotated<'a>] {
        &self.annotated
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot<'a>> {
        self.annotated.iter().map(|a| &a.slot)
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    /// Tokens no slot received, in order.
    pub fn unmatched_token_list(&self) -> Vec<&'a str> {
        self.unmatched.iter().map(|&i| self.tokens[i]).collect()
    }

    pub fn unmatched_tokens(&self) -> usize {
        self.unmatched.len()
    }

    pub fn unmatched_slots(&self) -> usize {
        self.annotated
            .iter()
            .filter(|a| a.slot.is_alignable() && a.tokens.is_empty())
            .count()
    }

    pub fn plain_text(&self) -> String {
        render::plain_text(&self.annotated)
    }

    pub fn zipped(&self) -> Vec<(String, String)> {
        render::zipped(&self.annotated)
    }

    pub fn html(&self) -> String {
        render::html(&self.annotated)
    }

    pub fn into_alignment(self) -> Alignment {
        Alignment {
            annotated: self.plain_text(),
            unmatched_tokens: self.unmatched_tokens(),
            unmatched_slots: self.unmatched_slots(),
        }
    }
}

/// The shared matcher used by `align` and `align_plain`.
pub fn default_matcher() -> &'static BuiltinMatcher {
    &DEFAULT_MATCHER
}

/// Align with the default matcher (scored policy, built-in charlist).
pub fn align(text: &str, pronunciation: &str) -> Result<Alignment, RubyError> {
    DEFAULT_MATCHER.align(text, pronunciation)
}

/// Align with the default matcher and return only the annotated string.
pub fn align_plain(text: &str, pronunciation: &str) -> Result<String, RubyError> {
    align(text, pronunciation).map(|a| a.annotated)
}

/// Input length limit of the default matcher.
pub fn max_align_length() -> usize {
    DEFAULT_MATCHER.max_len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_inputs() {
        let a = align("", "").unwrap();
        assert_eq!(a.annotated, "");
        assert_eq!((a.unmatched_tokens, a.unmatched_slots), (0, 0));

        let a = align("一二三", "").unwrap();
        assert_eq!(a.annotated, "一 二 三");
        assert_eq!(a.unmatched_slots, 3);

        assert!(matches!(
            align("", "jat1"),
            Err(RubyError::InvalidArgument { .. })
        ));
        // Pronunciation that trims to nothing counts as empty.
        assert_eq!(align_plain("", " 。 ").unwrap(), "");
    }

    #[test]
    fn test_text_without_alignable_slots_is_unchanged() {
        for (text, pron) in [("。！", "jat1"), ("「」", ""), ("……？", "jat1 ji6"), (" ，", "a - b")] {
            let a = align(text, pron).unwrap();
            assert_eq!(a.annotated, text);
            assert_eq!(a.unmatched_slots, 0);
            assert_eq!(a.unmatched_tokens, pron.split_whitespace().count(), "{:?}", text);
        }
    }

    #[test]
    fn test_punctuation_only_tokens_are_kept() {
        let m = DEFAULT_MATCHER.run("一二", "jat1 - ji6").unwrap();
        assert_eq!(m.tokens(), &["jat1", "", "ji6"]);
        assert_eq!(m.plain_text(), "一jat1 二ji6");
        assert_eq!(m.unmatched_tokens(), 0);
        let placed: usize = m.annotated().iter().map(|a| a.tokens.len()).sum();
        assert_eq!(placed, 3);
    }

    #[test]
    fn test_tokens_without_alignable_slots() {
        let m = DEFAULT_MATCHER.run("。", "jat1").unwrap();
        assert_eq!(m.plain_text(), "。");
        assert_eq!(m.unmatched_tokens(), 1);
        assert_eq!(m.unmatched_token_list(), vec!["jat1"]);
        assert_eq!(m.unmatched_slots(), 0);
    }

    #[test]
    fn test_length_limit() {
        assert_eq!(max_align_length(), 300);
        let matcher = RubyMatcher::new().with_max_len(3);
        assert!(matcher.align("一二三", "a b c").is_ok());
        assert_eq!(
            matcher.align("一二三四", "a"),
            Err(RubyError::LengthExceeded {
                slots: 4,
                tokens: 1,
                limit: 3
            })
        );
        assert!(matches!(
            matcher.align("一", "a b c d"),
            Err(RubyError::LengthExceeded { tokens: 4, .. })
        ));
    }

    #[test]
    fn test_swapped_policy() {
        let matcher = RubyMatcher::new().with_policy(EdgePolicy);
        assert_eq!(matcher.policy().name(), "edge");
        let a = matcher.align("一二。", "a b c").unwrap();
        assert_eq!(a.annotated, "一ab 二c 。");
    }

    #[test]
    fn test_match_accessors() {
        let m = DEFAULT_MATCHER.run("個 server", "go3 soe1 faa2").unwrap();
        assert_eq!(m.tokens(), &["go3", "soe1", "faa2"]);
        let kinds: Vec<SlotKind> = m.slots().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SlotKind::CjkChar, SlotKind::PassThrough, SlotKind::LatinRun]);
        assert_eq!(m.annotated()[2].tokens, vec!["soe1", "faa2"]);
        assert_eq!(
            m.html(),
            "<ruby><rb>個</rb><rt>go3</rt><rb>server</rb><rt>soe1 faa2</rt></ruby>"
        );
    }
}
