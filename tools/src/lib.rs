//! Shared helpers for the data tools.
use anyhow::{Context, Result};
use bzip2::read::BzDecoder;
use encoding_rs::WINDOWS_1252;
use encoding_rs_io::DecodeReaderBytesBuilder;
use libcantonese_core::{script::is_cjk_char, WordList};
use libjyutping::WordLexicon;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `RUST_LOG`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// What `zicount` counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    /// CJK ideographs only.
    Cjk,
    /// Every Unicode scalar value, line breaks included.
    Unicode,
}

impl Counter {
    pub fn count(self, s: &str) -> usize {
        match self {
            Counter::Cjk => s.chars().filter(|c| is_cjk_char(*c)).count(),
            Counter::Unicode => s.chars().count(),
        }
    }
}

/// Count over every line of `reader`.
pub fn count_reader<R: BufRead>(mut reader: R, counter: Counter) -> Result<usize> {
    let mut total = 0;
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).context("reading input")? == 0 {
            break;
        }
        total += counter.count(&line);
    }
    Ok(total)
}

/// Read words from a JSON word lexicon (`.json`) or a text list (first
/// column of each line).
pub fn read_word_source(path: &Path) -> Result<WordList> {
    let words = if path.extension().and_then(|e| e.to_str()) == Some("json") {
        WordLexicon::load_json(path)?.word_list().clone()
    } else {
        WordList::load_text(path)?
    };
    Ok(words)
}

/// Open a VarCon file as text. SCOWL ships it bzip2-compressed
/// (`varcon.txt.bz2`) and encoded as Windows-1252.
pub fn open_varcon(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let raw: Box<dyn Read> = if path.extension().and_then(|e| e.to_str()) == Some("bz2") {
        Box::new(BzDecoder::new(file))
    } else {
        Box::new(file)
    };
    let decoded = DecodeReaderBytesBuilder::new()
        .encoding(Some(WINDOWS_1252))
        .build(raw);
    Ok(Box::new(BufReader::new(decoded)))
}
