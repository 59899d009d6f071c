//! Spelling variant tables from VarCon (`varcon.txt` of the SCOWL project).
//!
//! VarCon groups spellings into clusters. Each cluster starts with a header
//! such as `# acknowledgment <verified> (level 35)` and lists its spellings
//! on lines like `A Cv: acknowledgment / B: acknowledgement`. Every spelling
//! other than the header word maps to the header word, which is the
//! American form.
//!
//! Clusters above `MAX_LEVEL` hold rare words and are skipped. Inflections
//! (`'s`, `ed`, `s`, `d`) of a spelling already in the cluster are dropped
//! since the stemmer removes them anyway.
use crate::variants::EnglishVariants;
use ahash::AHashSet;
use libcantonese_core::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::BufRead;
use tracing::debug;

/// Highest SCOWL level kept.
pub const MAX_LEVEL: u32 = 50;

static CLUSTER_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^# ([^ ]+) .*\(level ([0-9]+)\)")
        .unwrap_or_else(|e| panic!("invalid cluster header pattern: {e}"))
});

struct Cluster {
    head: String,
    spellings: AHashSet<String>,
    order: Vec<String>,
}

impl Cluster {
    fn new(head: &str) -> Self {
        let mut spellings = AHashSet::new();
        spellings.insert(head.to_string());
        Self {
            head: head.to_string(),
            spellings,
            order: Vec::new(),
        }
    }

    fn add(&mut self, spelling: &str) {
        if is_inflection(spelling, &self.spellings) || !self.spellings.insert(spelling.to_string())
        {
            return;
        }
        self.order.push(spelling.to_string());
    }
}

/// Whether `s` is `'s`, `ed`, `s` or `d` added to a member of `known`.
fn is_inflection(s: &str, known: &AHashSet<String>) -> bool {
    let stem_known = |stem: Option<&str>| stem.map_or(false, |t| known.contains(t));
    stem_known(s.strip_suffix("'s"))
        || stem_known(s.strip_suffix("ed"))
        || stem_known(s.strip_suffix('s'))
        || stem_known(s.strip_suffix('d'))
}

/// Parse VarCon text into a variant → American spelling table.
///
/// Lines are lowercased and trimmed. Anything after `#` or `|` on a
/// spelling line is a comment. Later clusters override earlier ones when a
/// spelling appears twice.
///
/// # Example
/// ```
/// use libenglish::varcon::parse_varcon;
///
/// let text = "# color <verified> (level 10)\nA: color / B: colour | note\n";
/// let v = parse_varcon(text.as_bytes()).unwrap();
/// assert_eq!(v.usa_english("colour"), "color");
/// ```
pub fn parse_varcon<R: BufRead>(reader: R) -> Result<EnglishVariants> {
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut current: Option<Cluster> = None;

    for (lineno, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::io("reading varcon", e))?;
        let line = line.to_lowercase();
        let line = line.trim();

        if let Some(caps) = CLUSTER_HEADER.captures(line) {
            clusters.extend(current.take());
            let level: Option<u32> = caps[2].parse().ok();
            if level.map_or(false, |l| l <= MAX_LEVEL) {
                current = Some(Cluster::new(&caps[1]));
            }
            continue;
        }
        let Some(cluster) = current.as_mut() else {
            continue;
        };

        let body = line.split(['#', '|']).next().unwrap_or("").trim();
        if body.is_empty() {
            continue;
        }
        for entry in body.split('/') {
            let Some((_, spelling)) = entry.split_once(':') else {
                return Err(Error::parse(lineno + 1, format!("no ':' in entry {:?}", entry)));
            };
            let spelling = spelling.trim();
            if !spelling.is_empty() {
                cluster.add(spelling);
            }
        }
    }
    clusters.extend(current);

    let mut variants = EnglishVariants::default();
    for cluster in &clusters {
        for spelling in &cluster.order {
            variants.insert(spelling.clone(), cluster.head.clone());
        }
    }
    debug!(clusters = clusters.len(), entries = variants.len(), "parsed varcon");
    Ok(variants)
}
