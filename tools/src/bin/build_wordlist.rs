use anyhow::{Context, Result};
use cantonese_tools::{init_logging, read_word_source};
use clap::Parser;
use libcantonese_core::WordList;
use std::path::PathBuf;

/// Build the fst word set used by the segmenter from text lists (one word
/// per line) or JSON word lexicons.
#[derive(Parser)]
struct Args {
    #[arg(long, num_args = 1.., required = true)]
    inputs: Vec<PathBuf>,

    #[arg(long, default_value = "data/wordlist.fst")]
    out: PathBuf,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut words = WordList::new();
    for p in &args.inputs {
        let part = read_word_source(p).with_context(|| format!("loading {}", p.display()))?;
        println!("Ingesting {} ({} words)", p.display(), part.len());
        for w in part.sorted_words() {
            words.insert(w);
        }
    }

    if let Some(dir) = args.out.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    words.save_fst(&args.out)?;

    let check = WordList::load_fst(&args.out)?;
    println!(
        "Wrote {} ({} words, longest {} chars)",
        args.out.display(),
        check.len(),
        check.max_word_chars()
    );
    Ok(())
}
