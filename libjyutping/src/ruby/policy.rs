// libcantonese/libjyutping/src/ruby/policy.rs
//
// Token allocation policies.
//
// A policy decides which pronunciation tokens go to which alignable slot.
// Every policy must keep tokens in order, give each token to at most one
// slot and never give tokens to pass-through slots. Tokens a policy cannot
// place are reported as unmatched.
//
// `ScoredPolicy` is a longest-common-subsequence style dynamic program over
// (slot, token) pairs. For slot t and token p the best score f(t, p) over
// the prefixes slots[..=t] and tokens[..=p] is:
//
//   f(t, p) = f(t-1, p)                        if slot t is pass-through
//           = f(t-1, p-1) + FULL               if token p is a reading of t
//           = max of                           otherwise
//               f(t, p-1) + LINK?   (token p joins slot t, which keeps
//                                    absorbing; LINK for hash groups and
//                                    non-CJK runs)
//               f(t-1, p)           (slot t gets nothing)
//               f(t-1, p-1) + EPS + LINK?   (one token, one slot; LINK for
//                                            bare hash groups)
//               f(t-1, p-1) + HALF  (token matches a reading up to tone)
//   f(-1, _) = f(_, -1) = 0
//
// Ties between the first three choices go to the later one; the half match
// must be strictly better. Tokens left over when the backtrack runs out of
// slots are prepended to the first alignable slot.

use super::slot::Slot;
use crate::jyutping::strip_tone;
use crate::lexicon::{EmptyLexicon, PronunciationLexicon};
use libcantonese_core::{script::is_cjk_char, Config};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Which tokens each slot received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    /// Token indices per slot, in token order.
    pub per_slot: Vec<Vec<usize>>,
    /// Tokens no slot received.
    pub unmatched: Vec<usize>,
}

impl Assignment {
    fn empty(slots: usize) -> Self {
        Self {
            per_slot: vec![Vec::new(); slots],
            unmatched: Vec::new(),
        }
    }

    /// Give `tokens` (which precede everything assigned so far) to the first
    /// alignable slot, or report them unmatched when there is none.
    fn place_leading(&mut self, slots: &[Slot<'_>], tokens: std::ops::Range<usize>) {
        if tokens.is_empty() {
            return;
        }
        match slots.iter().position(Slot::is_alignable) {
            Some(first) => {
                let mut v: Vec<usize> = tokens.collect();
                v.append(&mut self.per_slot[first]);
                self.per_slot[first] = v;
            }
            None => self.unmatched.extend(tokens),
        }
    }
}

/// Strategy for distributing tokens over slots.
pub trait AllocationPolicy {
    fn allocate(&self, slots: &[Slot<'_>], tokens: &[&str]) -> Assignment;

    /// Short name for logs and configuration.
    fn name(&self) -> &'static str;
}

impl<T: AllocationPolicy + ?Sized> AllocationPolicy for Box<T> {
    fn allocate(&self, slots: &[Slot<'_>], tokens: &[&str]) -> Assignment {
        (**self).allocate(slots, tokens)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Policy selector used in configuration files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Scored,
    Edge,
}

impl std::str::FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scored" => Ok(PolicyKind::Scored),
            "edge" => Ok(PolicyKind::Edge),
            other => Err(format!("unknown policy '{other}' (expected 'scored' or 'edge')")),
        }
    }
}

/// Weights of the scored alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub full_match: i32,
    pub half_match: i32,
    pub epsilon: i32,
    pub link: i32,
}

impl Default for Scores {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Scores {
    pub fn from_config(config: &Config) -> Self {
        Self {
            full_match: config.full_match_score,
            half_match: config.half_match_score,
            epsilon: config.epsilon_score,
            link: config.link_score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    /// Slot t takes no token here: go to (t-1, p).
    SkipSlot,
    /// Token p joins slot t, which may take more: go to (t, p-1).
    Absorb,
    /// Token p is the last token for slot t: go to (t-1, p-1).
    Pair,
}

/// Lexicon-scored dynamic-programming alignment.
#[derive(Debug, Clone, Default)]
pub struct ScoredPolicy<L = EmptyLexicon> {
    lexicon: L,
    scores: Scores,
}

impl ScoredPolicy<EmptyLexicon> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: PronunciationLexicon> ScoredPolicy<L> {
    pub fn with_lexicon(lexicon: L) -> Self {
        Self {
            lexicon,
            scores: Scores::default(),
        }
    }

    pub fn with_scores(mut self, scores: Scores) -> Self {
        self.scores = scores;
        self
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Best move and score for cell (t, p) given the filled table.
    fn best_move(
        &self,
        slot: &Slot<'_>,
        token: &str,
        at: impl Fn(usize, usize) -> i32,
        t: usize,
        p: usize,
    ) -> (Move, i32) {
        // Table coordinates are shifted by one: row/column 0 is the empty
        // prefix.
        if !slot.is_alignable() {
            return (Move::SkipSlot, at(t - 1, p));
        }

        let head = slot.head_char();
        if self.lexicon.has_pronunciation(head, token) {
            return (Move::Pair, at(t - 1, p - 1) + self.scores.full_match);
        }

        let is_link = head == '#';
        let mut best = Move::Absorb;
        let mut v = at(t, p - 1);
        if is_link || !is_cjk_char(head) {
            v += self.scores.link;
        }

        let skip = at(t - 1, p);
        if skip > v {
            best = Move::SkipSlot;
            v = skip;
        }

        let pair = at(t - 1, p - 1) + self.scores.epsilon + if is_link { self.scores.link } else { 0 };
        if pair >= v {
            best = Move::Pair;
            v = pair;
        }

        if self
            .lexicon
            .has_toneless_pronunciation(head, strip_tone(token))
        {
            let half = at(t - 1, p - 1) + self.scores.half_match;
            if half > v {
                best = Move::Pair;
                v = half;
            }
        }

        (best, v)
    }
}

impl<L: PronunciationLexicon> AllocationPolicy for ScoredPolicy<L> {
    fn allocate(&self, slots: &[Slot<'_>], tokens: &[&str]) -> Assignment {
        let nt = slots.len();
        let np = tokens.len();
        let mut assignment = Assignment::empty(nt);

        let width = np + 1;
        let mut score = vec![0i32; (nt + 1) * width];
        let mut back: Vec<Option<Move>> = vec![None; (nt + 1) * width];

        for t in 1..=nt {
            for p in 1..=np {
                let (mv, v) = self.best_move(
                    &slots[t - 1],
                    tokens[p - 1],
                    |a, b| score[a * width + b],
                    t,
                    p,
                );
                score[t * width + p] = v;
                back[t * width + p] = Some(mv);
            }
        }

        let (mut t, mut p) = (nt, np);
        while let Some(mv) = back[t * width + p] {
            match mv {
                Move::SkipSlot => t -= 1,
                Move::Absorb => {
                    assignment.per_slot[t - 1].push(p - 1);
                    p -= 1;
                }
                Move::Pair => {
                    assignment.per_slot[t - 1].push(p - 1);
                    t -= 1;
                    p -= 1;
                }
            }
        }
        for v in &mut assignment.per_slot {
            v.reverse();
        }
        assignment.place_leading(slots, 0..p);

        trace!(
            slots = nt,
            tokens = np,
            score = score[nt * width + np],
            "scored alignment"
        );
        assignment
    }

    fn name(&self) -> &'static str {
        "scored"
    }
}

/// Closed-form alignment by position only.
///
/// With as many tokens as alignable slots each slot takes one token. Extra
/// tokens all go to the first alignable slot (front surplus); when tokens
/// run short the first slots stay bare and the tail aligns one to one
/// (front deficit).
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgePolicy;

impl AllocationPolicy for EdgePolicy {
    fn allocate(&self, slots: &[Slot<'_>], tokens: &[&str]) -> Assignment {
        let mut assignment = Assignment::empty(slots.len());
        let alignable: Vec<usize> = slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_alignable())
            .map(|(i, _)| i)
            .collect();

        if alignable.is_empty() {
            assignment.unmatched.extend(0..tokens.len());
            return assignment;
        }

        let surplus = tokens.len().saturating_sub(alignable.len());
        let deficit = alignable.len().saturating_sub(tokens.len());
        let mut next = 0usize;
        for (k, &slot) in alignable.iter().enumerate() {
            if k < deficit {
                continue;
            }
            let take = if k == deficit { surplus + 1 } else { 1 };
            assignment.per_slot[slot].extend(next..next + take);
            next += take;
        }
        assignment
    }

    fn name(&self) -> &'static str {
        "edge"
    }
}
