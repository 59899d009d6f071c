use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use libcantonese_core::{
    guess_language, looks_like_a_sentence,
    utils::{normalize, to_halfwidth},
    Segmenter, VariantMap, WordList,
};
use libenglish::american_english_stem;
use libjyutping::{canonicalize_jyutping, get_ping3jam1, JyutpingConfig, RubyMatch};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jyutping")]
#[command(about = "Cantonese text tools: ruby alignment, segmentation and romanization")]
#[command(version)]
struct Cli {
    /// TOML configuration (scores, policy, lexicon paths)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Align a Jyutping transcript to text
    Ruby {
        text: String,
        pronunciation: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = RubyFormat::Plain)]
        format: RubyFormat,
        /// Character lexicon (JSON charlist or compiled bincode)
        #[arg(long)]
        charlist: Option<PathBuf>,
    },
    /// Segment Chinese text into words
    Segment {
        text: String,
        /// Word list: plain text (one word per line), `.fst` or a JSON word lexicon
        #[arg(long)]
        wordlist: Option<PathBuf>,
    },
    /// Guess whether text is Chinese or English
    Guess { text: String },
    /// Stem English words (American spelling)
    Stem {
        #[arg(required = true)]
        words: Vec<String>,
        /// Map British spellings to American before stemming
        #[arg(long)]
        usa: bool,
    },
    /// Best-effort Jyutping for Cantonese text
    Pronounce {
        text: String,
        #[arg(long)]
        charlist: Option<PathBuf>,
        /// JSON word lexicon
        #[arg(long)]
        wordlist: Option<PathBuf>,
    },
    /// Normalize character variants to Hong Kong standard forms
    Variant {
        text: String,
        /// Extra variant table (TSV: variant, canonical)
        #[arg(long)]
        table: Option<PathBuf>,
        /// Also convert full-width ASCII to half-width
        #[arg(long)]
        halfwidth: bool,
    },
    /// Validate and canonicalize a Jyutping string
    Validate {
        jyutping: String,
        /// Accept `!xxx` exception markers
        #[arg(long)]
        allow_exceptions: bool,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum RubyFormat {
    Plain,
    Zipped,
    Html,
}

fn load_config(path: Option<&Path>) -> Result<JyutpingConfig> {
    match path {
        Some(p) => JyutpingConfig::load_toml(p)
            .with_context(|| format!("loading config {}", p.display())),
        None => Ok(JyutpingConfig::default()),
    }
}

fn load_word_list(path: &Path) -> Result<WordList> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let words = match ext {
        "fst" => WordList::load_fst(path)?,
        "json" => libjyutping::WordLexicon::load_json(path)?.word_list().clone(),
        _ => WordList::load_text(path)?,
    };
    Ok(words)
}

fn print_match(m: &RubyMatch<'_>, format: RubyFormat) {
    match format {
        RubyFormat::Plain => println!("{}", m.plain_text()),
        RubyFormat::Zipped => {
            for (text, pron) in m.zipped() {
                println!("{}\t{}", text, pron);
            }
        }
        RubyFormat::Html => println!("{}", m.html()),
    }
    if m.unmatched_tokens() > 0 || m.unmatched_slots() > 0 {
        eprintln!(
            "unmatched: {} tokens {:?}, {} slots",
            m.unmatched_tokens(),
            m.unmatched_token_list(),
            m.unmatched_slots()
        );
    }
}

fn handle_ruby(
    config: &mut JyutpingConfig,
    text: &str,
    pronunciation: &str,
    format: RubyFormat,
    charlist: Option<PathBuf>,
) -> Result<()> {
    if charlist.is_some() {
        config.charlist_path = charlist;
    }
    let lexicon = config.char_lexicon().context("loading character lexicon")?;
    info!(chars = lexicon.len(), policy = ?config.policy, "ruby matcher ready");
    let matcher = config.build_matcher(lexicon);
    let m = matcher.run(text, pronunciation)?;
    print_match(&m, format);
    Ok(())
}

fn handle_segment(config: &JyutpingConfig, text: &str, wordlist: Option<PathBuf>) -> Result<()> {
    let words = match wordlist.or_else(|| config.wordlist_path.clone()) {
        Some(p) => load_word_list(&p).with_context(|| format!("loading {}", p.display()))?,
        None => WordList::new(),
    };
    debug!(words = words.len(), "segmenting");
    let seg = Segmenter::with_config(&words, &config.base).segment(text);
    println!("{}", seg.words.join(" "));
    if !seg.bad_chars.is_empty() {
        let bad: String = seg.bad_chars.iter().collect();
        eprintln!("unknown runs: {}", bad);
    }
    Ok(())
}

fn handle_pronounce(
    config: &mut JyutpingConfig,
    text: &str,
    charlist: Option<PathBuf>,
    wordlist: Option<PathBuf>,
) -> Result<()> {
    if charlist.is_some() {
        config.charlist_path = charlist;
    }
    if wordlist.is_some() {
        config.wordlist_path = wordlist;
    }
    let chars = config.char_lexicon().context("loading character lexicon")?;
    let words = config.word_lexicon().context("loading word lexicon")?;
    println!("{}", get_ping3jam1(text, &words, &chars));
    Ok(())
}

fn handle_variant(text: &str, table: Option<PathBuf>, halfwidth: bool) -> Result<()> {
    let mut map = VariantMap::hong_kong();
    if let Some(p) = table {
        let extra = VariantMap::load_tsv(&p).with_context(|| format!("loading {}", p.display()))?;
        debug!(entries = extra.len(), "loaded extra variants");
        map.extend(extra);
    }
    let mut out = map.normalize(text);
    if halfwidth {
        out = to_halfwidth(&out);
    }
    println!("{}", out);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Ruby {
            text,
            pronunciation,
            format,
            charlist,
        } => handle_ruby(&mut config, &text, &pronunciation, format, charlist)?,
        Commands::Segment { text, wordlist } => {
            handle_segment(&config, &normalize(&text), wordlist)?
        }
        Commands::Guess { text } => {
            let text = normalize(&text);
            let sentence = if looks_like_a_sentence(&text) { "sentence" } else { "phrase" };
            println!("{}\t{}", guess_language(&text), sentence);
        }
        Commands::Stem { words, usa } => {
            let variants = if usa {
                Some(config.english_variants().context("loading english variants")?)
            } else {
                None
            };
            let stems: Vec<String> = words
                .iter()
                .map(|w| {
                    let w = normalize(w);
                    match &variants {
                        Some(v) => v.normalize_and_stem(&w),
                        None => american_english_stem(&w),
                    }
                })
                .collect();
            println!("{}", stems.join(" "));
        }
        Commands::Pronounce {
            text,
            charlist,
            wordlist,
        } => handle_pronounce(&mut config, &normalize(&text), charlist, wordlist)?,
        Commands::Variant {
            text,
            table,
            halfwidth,
        } => handle_variant(&normalize(&text), table, halfwidth)?,
        Commands::Validate {
            jyutping,
            allow_exceptions,
        } => {
            let allow = allow_exceptions || config.allow_exceptions;
            match canonicalize_jyutping(&jyutping, allow) {
                Some(canonical) => println!("{}", canonical),
                None => bail!("invalid Jyutping: {:?}", jyutping),
            }
        }
    }
    Ok(())
}
