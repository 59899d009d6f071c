/// British → American spelling normalization.
///
/// A small built-in table covers the common spelling families (-our, -re,
/// -ise, -ogue, doubled l). Larger tables can be loaded from a JSON object
/// mapping each British spelling to its American form, e.g.
/// `{"colour": "color", "colours": "colors"}`.
use ahash::AHashMap;
use libcantonese_core::{Error, Result};
use phf::phf_map;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

static BRITISH_TO_AMERICAN: phf::Map<&'static str, &'static str> = phf_map! {
    "colour" => "color",
    "colours" => "colors",
    "favour" => "favor",
    "favourite" => "favorite",
    "honour" => "honor",
    "labour" => "labor",
    "neighbour" => "neighbor",
    "behaviour" => "behavior",
    "humour" => "humor",
    "centre" => "center",
    "theatre" => "theater",
    "metre" => "meter",
    "litre" => "liter",
    "fibre" => "fiber",
    "analyse" => "analyze",
    "organise" => "organize",
    "organisation" => "organization",
    "realise" => "realize",
    "recognise" => "recognize",
    "apologise" => "apologize",
    "latinise" => "latinize",
    "catalogue" => "catalog",
    "dialogue" => "dialog",
    "travelled" => "traveled",
    "travelling" => "traveling",
    "cancelled" => "canceled",
    "defence" => "defense",
    "offence" => "offense",
    "licence" => "license",
    "grey" => "gray",
    "programme" => "program",
    "aluminium" => "aluminum",
    "cheque" => "check",
    "tyre" => "tire",
    "plough" => "plow",
    "mould" => "mold",
    "jewellery" => "jewelry",
    "pyjamas" => "pajamas",
};

/// Spelling variant table.
#[derive(Debug, Clone, Default)]
pub struct EnglishVariants {
    map: AHashMap<String, String>,
}

impl EnglishVariants {
    /// The built-in table.
    pub fn builtin() -> Self {
        let map = BRITISH_TO_AMERICAN
            .entries()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { map }
    }

    /// Parse a JSON object of British → American spellings.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let map: AHashMap<String, String> =
            serde_json::from_str(json).map_err(|e| Error::json("parsing english variants", e))?;
        Ok(Self { map })
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::io("reading english variants", e))?;
        let v = Self::from_json_str(&json)?;
        debug!(path = %path.display(), entries = v.len(), "loaded english variants");
        Ok(v)
    }

    /// Serialize as a JSON object sorted by variant.
    pub fn to_json_string(&self) -> Result<String> {
        let sorted: BTreeMap<&str, &str> =
            self.map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        serde_json::to_string_pretty(&sorted).map_err(|e| Error::json("writing english variants", e))
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json_string()?;
        std::fs::write(path.as_ref(), json).map_err(|e| Error::io("writing english variants", e))
    }

    pub fn insert(&mut self, variant: String, american: String) {
        self.map.insert(variant, american);
    }

    /// Add the entries of `other`, overriding existing ones.
    pub fn extend(&mut self, other: EnglishVariants) {
        self.map.extend(other.map);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// American spelling of `word`, or `word` itself when unknown.
    pub fn usa_english<'a>(&'a self, word: &'a str) -> &'a str {
        self.map.get(word).map(String::as_str).unwrap_or(word)
    }

    /// Lowercase, map to American spelling with this table, then stem.
    pub fn normalize_and_stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        crate::american_english_stem(self.usa_english(&lower))
    }
}

/// American spelling of `word` from the built-in table.
///
/// Lookups are exact and case-sensitive; unknown words are returned as is.
///
/// # Example
/// ```
/// use libenglish::usa_english;
///
/// assert_eq!(usa_english("colour"), "color");
/// assert_eq!(usa_english("color"), "color");
/// ```
pub fn usa_english(word: &str) -> String {
    BRITISH_TO_AMERICAN
        .get(word)
        .copied()
        .unwrap_or(word)
        .to_string()
}
