use anyhow::Result;
use cantonese_tools::{count_reader, init_logging, Counter};
use clap::Parser;
use std::io::BufReader;
use std::path::PathBuf;

/// Count characters in the input (stdin by default).
#[derive(Parser)]
struct Args {
    /// Count CJK ideographs
    #[arg(long, conflicts_with = "unicode", required_unless_present = "unicode")]
    cjk: bool,

    /// Count every Unicode character
    #[arg(long)]
    unicode: bool,

    /// Input files; stdin when empty
    inputs: Vec<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let counter = if args.cjk { Counter::Cjk } else { Counter::Unicode };

    let mut total = 0;
    if args.inputs.is_empty() {
        total += count_reader(std::io::stdin().lock(), counter)?;
    } else {
        for p in &args.inputs {
            let f = std::fs::File::open(p)?;
            let n = count_reader(BufReader::new(f), counter)?;
            tracing::debug!(path = %p.display(), count = n, "counted");
            total += n;
        }
    }
    println!("{}", total);
    Ok(())
}
