//! libenglish crate root
//!
//! English-side helpers for mixed Cantonese/English text:
//! - `american_english_stem` / `porter_stem` from `stemmer`
//! - `usa_english` and `EnglishVariants` from `variants`
//! - `parse_varcon` from `varcon`, which builds full variant tables

pub mod stemmer;
pub mod variants;
pub mod varcon;

pub use stemmer::{american_english_stem, porter_stem};
pub use varcon::parse_varcon;
pub use variants::{usa_english, EnglishVariants};

/// Normalize spelling to American English, then stem.
///
/// # Example
/// ```
/// assert_eq!(libenglish::normalize_and_stem("Colours"), "color");
/// ```
pub fn normalize_and_stem(word: &str) -> String {
    let lower = word.to_lowercase();
    american_english_stem(&usa_english(&lower))
}
