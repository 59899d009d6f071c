//! Jyutping-specific configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `libcantonese_core::Config` (flattened via serde)
//! - Ruby matcher options (length limit and allocation policy)
//! - Paths to the character and word lexicons and the English variant table
//!
//! # Example
//!
//! ```rust
//! use libjyutping::JyutpingConfig;
//!
//! let config = JyutpingConfig::from_toml_str("policy = \"edge\"\nmax_align_length = 50").unwrap();
//! let matcher = config.build_matcher(libjyutping::EmptyLexicon);
//! assert_eq!(matcher.max_len(), 50);
//! assert_eq!(config.base().full_match_score, 1000);
//! ```
use crate::lexicon::{CharLexicon, PronunciationLexicon, WordLexicon};
use crate::ruby::{
    AllocationPolicy, EdgePolicy, PolicyKind, RubyMatcher, ScoredPolicy, Scores, MAX_ALIGN_LENGTH,
};
use libcantonese_core::{Error, Result};
use libenglish::EnglishVariants;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Matcher with the policy chosen at runtime.
pub type DynMatcher = RubyMatcher<Box<dyn AllocationPolicy + Send + Sync>>;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct JyutpingConfig {
    /// Base configuration fields (segmentation cost, alignment scores)
    #[serde(flatten)]
    pub base: libcantonese_core::Config,

    /// Largest number of slots or tokens the matcher accepts.
    pub max_align_length: usize,
    pub policy: PolicyKind,

    /// Character lexicon, JSON charlist or compiled `.bin`. The built-in
    /// charlist is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charlist_path: Option<PathBuf>,
    /// Word lexicon in JSON (`{"朝早": ["ziu1 zou2"]}`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordlist_path: Option<PathBuf>,
    /// English variant table in JSON, merged over the built-in one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english_variants_path: Option<PathBuf>,

    /// Accept `!xxx` exception markers when validating Jyutping.
    pub allow_exceptions: bool,
}

impl Default for JyutpingConfig {
    fn default() -> Self {
        Self {
            base: libcantonese_core::Config::default(),
            max_align_length: MAX_ALIGN_LENGTH,
            policy: PolicyKind::Scored,
            charlist_path: None,
            wordlist_path: None,
            english_variants_path: None,
            allow_exceptions: false,
        }
    }
}

impl JyutpingConfig {
    /// Convert this config into the base config.
    pub fn into_base(self) -> libcantonese_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libcantonese_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libcantonese_core::Config {
        &mut self.base
    }

    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::io("reading config", e))?;
        Self::from_toml_str(&content).map_err(Error::toml)
    }

    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml_string().map_err(Error::toml)?;
        std::fs::write(path, content).map_err(|e| Error::io("writing config", e))
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load the configured character lexicon, or a copy of the built-in one.
    pub fn char_lexicon(&self) -> Result<CharLexicon> {
        match &self.charlist_path {
            Some(path) => CharLexicon::load(path),
            None => Ok(CharLexicon::builtin().clone()),
        }
    }

    /// Load the configured word lexicon, or an empty one.
    pub fn word_lexicon(&self) -> Result<WordLexicon> {
        match &self.wordlist_path {
            Some(path) => WordLexicon::load_json(path),
            None => Ok(WordLexicon::new()),
        }
    }

    /// The built-in English variants plus the configured table, if any.
    pub fn english_variants(&self) -> Result<EnglishVariants> {
        let mut variants = EnglishVariants::builtin();
        if let Some(path) = &self.english_variants_path {
            variants.extend(EnglishVariants::load_json(path)?);
        }
        Ok(variants)
    }

    /// Build a matcher with the configured policy, scores and limit.
    ///
    /// The edge policy ignores `lexicon`.
    pub fn build_matcher<L>(&self, lexicon: L) -> DynMatcher
    where
        L: PronunciationLexicon + Send + Sync + 'static,
    {
        let policy: Box<dyn AllocationPolicy + Send + Sync> = match self.policy {
            PolicyKind::Scored => Box::new(
                ScoredPolicy::with_lexicon(lexicon).with_scores(Scores::from_config(&self.base)),
            ),
            PolicyKind::Edge => Box::new(EdgePolicy),
        };
        RubyMatcher::new()
            .with_policy(policy)
            .with_max_len(self.max_align_length)
    }
}
