//! libjyutping crate root
//!
//! Cantonese pronunciation tools built on `libcantonese-core`.
//!
//! Public API exported here:
//! - `ruby` - align a Jyutping transcript to mixed-script text
//!   (`align`, `align_plain`, `RubyMatcher`)
//! - `lexicon` - character and word pronunciation lexicons, with a built-in
//!   seed charlist
//! - `jyutping` - syllable validation and canonicalization
//! - `pronounce` - best-effort romanization of a string
//! - `JyutpingConfig` - matcher and lexicon configuration

pub mod config;
pub mod error;
pub mod jyutping;
pub mod lexicon;
pub mod pronounce;
pub mod ruby;

pub use config::{DynMatcher, JyutpingConfig};
pub use error::RubyError;
pub use jyutping::{canonicalize_jyutping, is_jyutping_valid, strip_tone, JYUTPING_VALIDATOR};
pub use lexicon::{CharLexicon, EmptyLexicon, PronunciationLexicon, Reading, WordLexicon};
pub use pronounce::{get_ping3jam1, pronunciations_by_char};
pub use ruby::{
    align, align_plain, default_matcher, max_align_length, Alignment, BuiltinMatcher, RubyMatch,
    RubyMatcher, MAX_ALIGN_LENGTH,
};
