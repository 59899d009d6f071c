use anyhow::{Context, Result};
use cantonese_tools::{init_logging, open_varcon};
use clap::Parser;
use libenglish::{parse_varcon, EnglishVariants};
use std::path::PathBuf;

/// Build the British → American spelling table from VarCon
/// (`varcon.txt` or `varcon.txt.bz2` from SCOWL, http://wordlist.aspell.net/).
///
/// The output is the JSON loaded by `EnglishVariants::load_json` and the
/// `english_variants_path` option of the jyutping config. VarCon data is
/// copyright Kevin Atkinson and contributors; keep its license notice next
/// to the generated file.
#[derive(Parser)]
struct Args {
    varcon: PathBuf,

    #[arg(long, default_value = "data/english_variants.json")]
    out: PathBuf,

    /// Also keep the built-in entries missing from VarCon
    #[arg(long)]
    with_builtin: bool,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    println!("Reading {}", args.varcon.display());
    let parsed = parse_varcon(open_varcon(&args.varcon)?)
        .with_context(|| format!("parsing {}", args.varcon.display()))?;

    let variants = if args.with_builtin {
        let mut merged = EnglishVariants::builtin();
        merged.extend(parsed);
        merged
    } else {
        parsed
    };

    if let Some(dir) = args.out.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    variants.save_json(&args.out)?;
    println!("Wrote {} ({} variants)", args.out.display(), variants.len());
    Ok(())
}
