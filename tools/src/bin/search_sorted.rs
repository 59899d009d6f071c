use anyhow::{Context, Result};
use cantonese_tools::init_logging;
use clap::{Parser, ValueEnum};
use libcantonese_core::{KeyOrder, SortedFile};
use std::io::Write;
use std::path::PathBuf;

/// Print every record of a sorted file whose first field equals `key`,
/// without reading the whole file.
#[derive(Parser)]
struct Args {
    file: PathBuf,
    key: String,

    /// Field separator (a single byte)
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// How the file is sorted
    #[arg(long, value_enum, default_value_t = Order::Lex)]
    order: Order,
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    /// Byte order
    Lex,
    /// Shorter keys first
    Length,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let delimiter = u8::try_from(args.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .context("the delimiter must be an ASCII character")?;
    let order = match args.order {
        Order::Lex => KeyOrder::Lexicographic,
        Order::Length => KeyOrder::LengthFirst,
    };

    let mut file = SortedFile::open(&args.file)
        .with_context(|| format!("opening {}", args.file.display()))?
        .with_delimiters(b'\n', delimiter)
        .with_order(order);
    let records = file.records(args.key.as_bytes())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for record in records {
        out.write_all(&record)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
