use anyhow::{Context, Result};
use cantonese_tools::init_logging;
use clap::Parser;
use libcantonese_core::{RadicalSorter, RadicalTable, UnihanRadicals};
use std::io::BufRead;
use std::path::PathBuf;

/// Sort stdin lines by CJK radical, then stroke count.
#[derive(Parser)]
struct Args {
    /// Unihan_IRGSources.txt
    #[arg(long)]
    unihan: PathBuf,

    /// CJKRadicals.txt
    #[arg(long)]
    radicals: PathBuf,

    /// Print the radical and strokes of each line's first character
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let unihan = UnihanRadicals::load(&args.unihan)
        .with_context(|| format!("loading {}", args.unihan.display()))?;
    let radicals = RadicalTable::load(&args.radicals)
        .with_context(|| format!("loading {}", args.radicals.display()))?;
    let sorter = RadicalSorter::new(unihan, radicals);

    let mut lines = Vec::new();
    for line in std::io::stdin().lock().lines() {
        lines.push(line.context("reading stdin")?.trim().to_string());
    }
    sorter.sort(&mut lines);

    for line in &lines {
        if args.debug {
            let first = line.chars().next();
            let rs = first.and_then(|c| sorter.unihan().radical_strokes(c));
            match (first, rs) {
                (Some(c), Some(rs)) => {
                    println!("{}\t{:?}\t{}\t{}", line, c, rs.radical, rs.strokes)
                }
                _ => println!("{}\t-\t-\t-", line),
            }
        } else {
            println!("{}", line);
        }
    }
    Ok(())
}
