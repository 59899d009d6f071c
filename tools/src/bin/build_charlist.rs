use anyhow::{Context, Result};
use cantonese_tools::init_logging;
use clap::Parser;
use libjyutping::CharLexicon;
use std::path::PathBuf;

/// Compile a JSON charlist (`{"字": {"zi6": 123}}`) into the bincode format
/// loaded by `CharLexicon::load`.
#[derive(Parser)]
struct Args {
    /// Input charlist JSON files; later files add to earlier counts
    #[arg(long, num_args = 1.., required = true)]
    inputs: Vec<PathBuf>,

    #[arg(long, default_value = "data/charlist.bin")]
    out: PathBuf,

    /// Also write the merged JSON for inspection
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut lex = CharLexicon::new();
    for p in &args.inputs {
        println!("Ingesting {}", p.display());
        let part = CharLexicon::load_json(p).with_context(|| format!("loading {}", p.display()))?;
        lex.extend_from_charlist(&part.to_charlist());
    }

    if let Some(dir) = args.out.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    lex.save_bincode(&args.out)?;
    println!("Wrote {} ({} characters)", args.out.display(), lex.len());

    if args.json {
        let j = serde_json::to_string_pretty(&lex.to_charlist())?;
        let mut outj = args.out.clone();
        outj.set_extension("json");
        std::fs::write(&outj, j)?;
        println!("Wrote {}", outj.display());
    }
    Ok(())
}
